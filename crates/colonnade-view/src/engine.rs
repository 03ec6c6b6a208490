// ABOUTME: The column container engine: layout, mutation protocol, and scrolling.
// ABOUTME: Positions columns left-to-right and drives insert/remove/snap animations.

use colonnade_core::{Config, Point, Rect, Size};

use crate::animation::{
    lerp, AnimKey, Animation, Completion, Easing, FollowUp, LifecycleEvent, Track,
};
use crate::column::{
    effective_size_class, Column, ColumnId, Pane, RenderHost, SizeClass, WidthRatio,
};
use crate::snap::{snap_target, SnapController};
use crate::store::{ColumnRecord, ColumnStore, VisualState};
use crate::transition::{ColumnViewDelegate, Direction, TransitionAnimation, TransitionContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertOptions {
    /// Position in visual order; appended when `None`
    pub index: Option<usize>,
    pub animated: bool,
    /// Scroll the new column into view once its insertion settles
    pub focus: bool,
}

/// What the host should draw for one column: the laid-out frame combined
/// with the animated visual overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub frame: Rect,
    pub alpha: f32,
}

/// A removed column that is still fading out. It has already left the
/// store (no layout links remain) and is detached from the render tree
/// once its animation completes.
struct DepartingColumn {
    id: ColumnId,
    frame: Rect,
    visual: VisualState,
    pane: Box<dyn Pane>,
}

/// Maintains columns of panes. The engine is the sole writer of column
/// frames; all structural state is updated synchronously inside
/// insert/remove, while animations only interpolate visual state between
/// `tick` calls on the render thread.
pub struct ColumnView<H: RenderHost> {
    store: ColumnStore,
    departing: Vec<DepartingColumn>,
    animations: Vec<Animation>,
    viewport: Size,
    content_offset: f32,
    content_width: f32,
    size_class: SizeClass,
    config: Config,
    snap: SnapController,
    delegate: Option<Box<dyn ColumnViewDelegate>>,
    host: H,
}

impl<H: RenderHost> ColumnView<H> {
    pub fn new(host: H, viewport: Size) -> Self {
        Self::with_config(host, viewport, Config::default())
    }

    pub fn with_config(host: H, viewport: Size, config: Config) -> Self {
        Self {
            store: ColumnStore::new(),
            departing: Vec::new(),
            animations: Vec::new(),
            viewport,
            content_offset: 0.0,
            content_width: 0.0,
            size_class: SizeClass::Regular,
            config,
            snap: SnapController::default(),
            delegate: None,
            host,
        }
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn ColumnViewDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn allocate_column_id(&mut self) -> ColumnId {
        self.store.allocate_id()
    }

    /// Adds a column. The pane spans the full viewport height; its width
    /// is quantized from its preferred size. A duplicate id is ignored
    /// (the completion still fires once, with `finished = false`).
    pub fn insert_column(
        &mut self,
        id: ColumnId,
        mut pane: Box<dyn Pane>,
        options: InsertOptions,
        mut completion: Completion,
    ) {
        if self.store.contains(id) {
            tracing::debug!(id = id.0, "ignoring insert of duplicate column");
            completion.fire(false);
            return;
        }
        pane.will_become_visible();

        let preferred = pane.preferred_size();
        let size_class = pane.preferred_size_class();
        let ratio = WidthRatio::from_preferred_width(preferred.width, self.viewport.width);
        let index = options.index.unwrap_or(self.store.len());
        self.store.insert_at(
            index,
            ColumnRecord {
                column: Column::new(id, preferred, size_class, ratio),
                pane,
                visual: VisualState::resting(),
            },
        );
        self.host.attach_column(id);
        self.relayout();

        let Some(frame) = self.store.column(id).map(Column::frame) else {
            completion.fire(false);
            return;
        };

        match self.fly_in_plan(id, frame, options.animated) {
            Some((from, spec)) => {
                if let Some(record) = self.store.get_mut(id) {
                    record.visual.translation = from;
                }
                self.push_animation(Animation {
                    key: AnimKey::Column(id),
                    track: Track::Translate {
                        from,
                        to: Point::ZERO,
                    },
                    delay: spec.delay,
                    duration: spec.duration,
                    elapsed: 0.0,
                    easing: spec.easing,
                    completion,
                    lifecycle: Some(LifecycleEvent::DidBecomeVisible(id)),
                    follow_up: options.focus.then_some(FollowUp::Focus { id, animated: true }),
                });
            }
            None => {
                // The column lands inside the already-visible region (or
                // the insert is not animated): apply instantly
                self.deliver_lifecycle(LifecycleEvent::DidBecomeVisible(id));
                if options.focus {
                    self.focus_column(id, options.animated);
                }
                completion.fire(true);
            }
        }
    }

    /// Removes a column. The record leaves the store synchronously; the
    /// pane stays in the render tree until its shrink/fade animation
    /// completes. Columns to its right collapse left by the removed
    /// width. An unknown id is ignored (completion fires `false`).
    pub fn remove_column(&mut self, id: ColumnId, animated: bool, mut completion: Completion) {
        if !self.store.contains(id) {
            tracing::debug!(id = id.0, "ignoring removal of unknown column");
            completion.fire(false);
            return;
        }
        // Settle any in-flight animation on this column first so its
        // pending lifecycle lands before the removal hooks
        self.cancel_animations(AnimKey::Column(id));

        let Some((index, mut record)) = self.store.remove(id) else {
            completion.fire(false);
            return;
        };
        record.pane.will_be_removed();
        let removed_frame = record.column.frame();
        let removed_width = removed_frame.width;
        self.relayout();

        if animated && removed_width > 0.0 {
            self.collapse_right_neighbors(index, removed_width);
        }

        let visual = record.visual;
        self.departing.push(DepartingColumn {
            id,
            frame: removed_frame,
            visual,
            pane: record.pane,
        });

        if animated && self.config.animation.dismiss_duration > 0.0 {
            self.push_animation(Animation {
                key: AnimKey::Departing(id),
                track: Track::FadeOut {
                    from_scale: visual.scale,
                    from_alpha: visual.alpha,
                },
                delay: 0.0,
                duration: self.config.animation.dismiss_duration,
                elapsed: 0.0,
                easing: Easing::EaseInOut,
                completion,
                lifecycle: None,
                follow_up: Some(FollowUp::Detach(id)),
            });
        } else {
            self.detach_departing(id);
            completion.fire(true);
        }
    }

    /// One collapse shift per remaining right neighbor, delayed so it
    /// starts after the fade has begun
    fn collapse_right_neighbors(&mut self, index: usize, removed_width: f32) {
        let delay =
            self.config.animation.collapse_delay_factor * self.config.animation.dismiss_duration;
        let duration = self.config.animation.collapse_duration;
        let neighbors: Vec<ColumnId> = self.store.records()[index..]
            .iter()
            .map(|r| r.column.id)
            .collect();
        for neighbor in neighbors {
            // The frame already moved left; offset the visual so the
            // rendered position stays continuous, then ease it home
            let from = match self.store.get_mut(neighbor) {
                Some(record) => {
                    record.visual.translation.x += removed_width;
                    record.visual.translation
                }
                None => continue,
            };
            self.push_animation(Animation {
                key: AnimKey::Column(neighbor),
                track: Track::Translate {
                    from,
                    to: Point::ZERO,
                },
                delay,
                duration,
                elapsed: 0.0,
                easing: Easing::EaseOut,
                completion: Completion::none(),
                lifecycle: None,
                follow_up: None,
            });
        }
    }

    /// Recompute every column's frame and the total content width.
    /// Columns are processed in store order: each left edge is the
    /// previous right edge, width is the viewport width times the
    /// column's ratio, height spans the viewport.
    fn relayout(&mut self) {
        let viewport = self.viewport;
        let mut x = 0.0;
        for record in self.store.records_mut() {
            let column = &mut record.column;
            if column.ratio.is_none() {
                // Deferred from an unmeasured viewport; frozen once resolved
                column.ratio =
                    WidthRatio::from_preferred_width(column.preferred_size.width, viewport.width);
            }
            let width = column
                .ratio
                .map(|r| viewport.width * r.fraction())
                .unwrap_or(0.0);
            column.frame = Rect::new(x, 0.0, width, viewport.height);
            x += width;
        }
        self.content_width = x;
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.relayout();
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn content_offset(&self) -> f32 {
        self.content_offset
    }

    /// Host feedback while the user drags; interrupts any snap in flight
    pub fn set_scroll_offset(&mut self, x: f32) {
        self.cancel_animations(AnimKey::Scroll);
        self.content_offset = x;
    }

    pub fn drag_will_end(&mut self, velocity_x: f32) {
        self.snap.drag_will_end(velocity_x);
    }

    pub fn drag_did_end(&mut self, will_decelerate: bool) {
        if !will_decelerate {
            self.scroll_to_column_edge();
        }
    }

    pub fn deceleration_did_end(&mut self) {
        self.scroll_to_column_edge();
    }

    fn scroll_to_column_edge(&mut self) {
        let Some(direction) = self.snap.take_direction() else {
            return;
        };
        if self.content_width <= self.viewport.width {
            return;
        }
        let Some(target) = snap_target(
            &self.store,
            self.viewport.width,
            self.content_offset,
            self.config.snap_threshold,
            direction,
        ) else {
            return;
        };
        self.scroll_to(target, true);
    }

    fn focus_column(&mut self, id: ColumnId, animated: bool) {
        if self.content_width <= self.viewport.width {
            return;
        }
        let Some(frame) = self.store.column(id).map(Column::frame) else {
            return;
        };
        let target = frame.min_x() - (self.viewport.width - frame.width);
        let max_offset = (self.content_width - self.viewport.width).max(0.0);
        self.scroll_to(target.clamp(0.0, max_offset), animated);
    }

    fn scroll_to(&mut self, x: f32, animated: bool) {
        if animated && self.config.animation.scroll_duration > 0.0 {
            let from = self.content_offset;
            self.push_animation(Animation {
                key: AnimKey::Scroll,
                track: Track::Scroll { from, to: x },
                delay: 0.0,
                duration: self.config.animation.scroll_duration,
                elapsed: 0.0,
                easing: Easing::EaseOut,
                completion: Completion::none(),
                lifecycle: None,
                follow_up: None,
            });
        } else {
            self.cancel_animations(AnimKey::Scroll);
            self.content_offset = x;
        }
    }

    /// Advance all animations by `dt` seconds on the render thread
    pub fn tick(&mut self, dt: f32) {
        if self.animations.is_empty() {
            return;
        }
        let animations = std::mem::take(&mut self.animations);
        let mut running = Vec::with_capacity(animations.len());
        let mut done = Vec::new();
        for mut animation in animations {
            animation.elapsed += dt;
            if animation.elapsed >= animation.delay {
                let eased = animation.easing.apply(animation.progress());
                self.apply_track(animation.key, animation.track, eased);
            }
            if animation.finished() {
                done.push(animation);
            } else {
                running.push(animation);
            }
        }
        // Restore the running set before firing completions; completions
        // may schedule follow-up animations that must coexist with it
        self.animations = running;
        for animation in done {
            self.finish_animation(animation, true);
        }
    }

    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }

    fn apply_track(&mut self, key: AnimKey, track: Track, eased: f32) {
        match track {
            Track::Translate { from, to } => {
                if let AnimKey::Column(id) = key {
                    if let Some(record) = self.store.get_mut(id) {
                        record.visual.translation =
                            Point::new(lerp(from.x, to.x, eased), lerp(from.y, to.y, eased));
                    }
                }
            }
            Track::FadeOut {
                from_scale,
                from_alpha,
            } => {
                if let AnimKey::Departing(id) = key {
                    if let Some(departing) = self.departing.iter_mut().find(|d| d.id == id) {
                        departing.visual.scale = lerp(from_scale, 0.01, eased);
                        departing.visual.alpha = lerp(from_alpha, 0.0, eased);
                    }
                }
            }
            Track::Scroll { from, to } => {
                self.content_offset = lerp(from, to, eased);
            }
        }
    }

    /// Supersede an animation channel: the cancelled animation's pending
    /// lifecycle and completion fire immediately with `finished = false`
    fn cancel_animations(&mut self, key: AnimKey) {
        let mut cancelled = Vec::new();
        let mut index = 0;
        while index < self.animations.len() {
            if self.animations[index].key == key {
                cancelled.push(self.animations.remove(index));
            } else {
                index += 1;
            }
        }
        for animation in cancelled {
            self.finish_animation(animation, false);
        }
    }

    fn push_animation(&mut self, animation: Animation) {
        self.cancel_animations(animation.key);
        self.animations.push(animation);
    }

    fn finish_animation(&mut self, mut animation: Animation, finished: bool) {
        if let Some(event) = animation.lifecycle.take() {
            self.deliver_lifecycle(event);
        }
        if let Some(follow_up) = animation.follow_up.take() {
            match follow_up {
                FollowUp::Focus { id, animated } => self.focus_column(id, animated),
                FollowUp::Detach(id) => self.detach_departing(id),
            }
        }
        animation.completion.fire(finished);
    }

    fn deliver_lifecycle(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::DidBecomeVisible(id) => {
                if let Some(record) = self.store.get_mut(id) {
                    record.pane.did_become_visible();
                } else if let Some(departing) = self.departing.iter_mut().find(|d| d.id == id) {
                    departing.pane.did_become_visible();
                }
            }
        }
    }

    fn detach_departing(&mut self, id: ColumnId) {
        if let Some(position) = self.departing.iter().position(|d| d.id == id) {
            let mut departing = self.departing.remove(position);
            self.host.detach_column(id);
            departing.pane.was_removed();
        }
    }

    /// Fly-in for a freshly inserted column: the delegate's animator when
    /// one is supplied, otherwise entry from the right edge of the
    /// visible viewport. `None` means apply instantly.
    fn fly_in_plan(
        &self,
        id: ColumnId,
        frame: Rect,
        animated: bool,
    ) -> Option<(Point, TransitionAnimation)> {
        let direction = self
            .delegate
            .as_ref()
            .and_then(|d| d.direction_for_transition(None, Some(id)))
            .unwrap_or(Direction::Left);
        let animator = self
            .delegate
            .as_ref()
            .and_then(|d| d.animator_for_transition(None, Some(id)));

        if let Some(animator) = animator {
            let container = Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height);
            let context =
                TransitionContext::new(container, Some(frame), direction, true, animated).ok()?;
            let spec = animator.animate(&context);
            if spec.duration <= 0.0 {
                return None;
            }
            let initial = context.initial_frame();
            return Some((Point::new(initial.x - frame.x, initial.y - frame.y), spec));
        }

        let initial_offset = self.content_offset + self.viewport.width - frame.min_x();
        if !animated || initial_offset <= 0.0 {
            return None;
        }
        Some((
            Point::new(initial_offset, 0.0),
            TransitionAnimation {
                delay: 0.0,
                duration: self.config.animation.insert_duration,
                easing: Easing::EaseOut,
            },
        ))
    }

    pub fn store(&self) -> &ColumnStore {
        &self.store
    }

    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.store.ids()
    }

    pub fn column_count(&self) -> usize {
        self.store.len()
    }

    /// The laid-out frame, ignoring any in-flight animation
    pub fn column_frame(&self, id: ColumnId) -> Option<Rect> {
        self.store.column(id).map(Column::frame)
    }

    /// What the host should draw for a column, including columns that
    /// have been removed but are still fading out
    pub fn presentation(&self, id: ColumnId) -> Option<Presentation> {
        if let Some(record) = self.store.get(id) {
            return Some(present(record.column.frame(), record.visual));
        }
        self.departing
            .iter()
            .find(|d| d.id == id)
            .map(|d| present(d.frame, d.visual))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn set_size_class(&mut self, size_class: SizeClass) {
        self.size_class = size_class;
    }

    /// The size class a pane should see, combining the container's class
    /// with the pane's preference
    pub fn effective_size_class(&self, id: ColumnId) -> Option<SizeClass> {
        self.store
            .column(id)
            .map(|c| effective_size_class(self.size_class, c.size_class))
    }

    /// Callers are the sole writers of the preferred size; the width
    /// ratio stays frozen at its insertion-time value
    pub fn set_preferred_size(&mut self, id: ColumnId, size: Size) {
        if let Some(record) = self.store.get_mut(id) {
            record.column.preferred_size = size;
        }
    }

    pub fn set_preferred_size_class(&mut self, id: ColumnId, size_class: SizeClass) {
        if let Some(record) = self.store.get_mut(id) {
            record.column.size_class = size_class;
        }
    }
}

fn present(frame: Rect, visual: VisualState) -> Presentation {
    // Scale about the frame center, like a transform would
    let width = frame.width * visual.scale;
    let height = frame.height * visual.scale;
    let center_x = frame.x + frame.width / 2.0 + visual.translation.x;
    let center_y = frame.y + frame.height / 2.0 + visual.translation.y;
    Presentation {
        frame: Rect::new(center_x - width / 2.0, center_y - height / 2.0, width, height),
        alpha: visual.alpha,
    }
}
