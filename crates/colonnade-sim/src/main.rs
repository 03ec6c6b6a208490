// ABOUTME: Headless demo driver for the column engine.
// ABOUTME: Scripts inserts, removals, and snaps against a simulated clock.

use anyhow::Result;
use colonnade_core::{AnimationSettings, Config, Size};
use colonnade_view::{
    ColumnId, ColumnView, ColumnViewDelegate, Completion, Direction, FlyInOutAnimator,
    InsertOptions, RenderHost, SizableContent, SizableLifecycle, SizeClass, TransitionAnimator,
};

const FRAME_DT: f32 = 1.0 / 60.0;

/// Render host that logs attach/detach instead of drawing
struct LoggingHost;

impl RenderHost for LoggingHost {
    fn attach_column(&mut self, id: ColumnId) {
        tracing::info!(id = id.0, "attached column");
    }

    fn detach_column(&mut self, id: ColumnId) {
        tracing::info!(id = id.0, "detached column");
    }
}

struct TextPane {
    title: &'static str,
    preferred: Size,
}

impl TextPane {
    fn boxed(title: &'static str, preferred_width: f32) -> Box<TextPane> {
        Box::new(TextPane {
            title,
            preferred: Size::new(preferred_width, 0.0),
        })
    }
}

impl SizableContent for TextPane {
    fn preferred_size(&self) -> Size {
        self.preferred
    }

    fn preferred_size_class(&self) -> SizeClass {
        SizeClass::Regular
    }
}

impl SizableLifecycle for TextPane {
    fn did_become_visible(&mut self) {
        tracing::info!(title = self.title, "pane became visible");
    }

    fn was_removed(&mut self) {
        tracing::info!(title = self.title, "pane removed");
    }
}

/// Delegate that springs new columns in from below
struct SpringDelegate {
    animation: AnimationSettings,
}

impl ColumnViewDelegate for SpringDelegate {
    fn direction_for_transition(
        &self,
        _from: Option<ColumnId>,
        _to: Option<ColumnId>,
    ) -> Option<Direction> {
        Some(Direction::Down)
    }

    fn animator_for_transition(
        &self,
        _from: Option<ColumnId>,
        _to: Option<ColumnId>,
    ) -> Option<Box<dyn TransitionAnimator>> {
        Some(Box::new(FlyInOutAnimator::from_settings(&self.animation)))
    }
}

/// Run all pending animations to completion, one simulated frame at a time
fn run_until_settled(view: &mut ColumnView<LoggingHost>) {
    let mut frames = 0;
    while view.is_animating() {
        view.tick(FRAME_DT);
        frames += 1;
    }
    if frames > 0 {
        tracing::debug!(frames, "animations settled");
    }
}

fn dump_layout(view: &ColumnView<LoggingHost>) {
    for id in view.column_ids() {
        if let Some(frame) = view.column_frame(id) {
            tracing::info!(
                id = id.0,
                x = frame.x,
                width = frame.width,
                "column frame"
            );
        }
    }
    tracing::info!(
        content_width = view.content_width(),
        offset = view.content_offset(),
        "layout"
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load_or_default();
    tracing::info!(
        snap_threshold = config.snap_threshold,
        "starting colonnade-sim"
    );

    let mut view = ColumnView::with_config(LoggingHost, Size::new(400.0, 700.0), config);

    // A narrow sidebar plus a wide reading pane
    let sidebar = view.allocate_column_id();
    view.insert_column(
        sidebar,
        TextPane::boxed("sidebar", 50.0),
        InsertOptions::default(),
        Completion::none(),
    );
    let reader = view.allocate_column_id();
    view.insert_column(
        reader,
        TextPane::boxed("reader", 300.0),
        InsertOptions {
            animated: true,
            ..InsertOptions::default()
        },
        Completion::new(|finished| tracing::info!(finished, "reader insert completed")),
    );
    run_until_settled(&mut view);
    dump_layout(&view);

    // A full-width detail pane, focused so it scrolls into view. From
    // here on the delegate springs new columns in from below.
    let animation = view.config().animation.clone();
    view.set_delegate(Box::new(SpringDelegate { animation }));
    let detail = view.allocate_column_id();
    view.insert_column(
        detail,
        TextPane::boxed("detail", 400.0),
        InsertOptions {
            animated: true,
            focus: true,
            ..InsertOptions::default()
        },
        Completion::new(|finished| tracing::info!(finished, "detail insert completed")),
    );
    run_until_settled(&mut view);
    dump_layout(&view);

    // Simulate a leftward drag release that snaps back to a column edge
    view.set_scroll_offset(view.content_offset() - 130.0);
    view.drag_will_end(-2.0);
    view.drag_did_end(false);
    run_until_settled(&mut view);
    tracing::info!(offset = view.content_offset(), "snapped after drag");

    // Dismiss the reader; the detail pane collapses left behind the fade
    view.remove_column(
        reader,
        true,
        Completion::new(|finished| tracing::info!(finished, "reader removal completed")),
    );
    run_until_settled(&mut view);
    dump_layout(&view);

    tracing::info!(columns = view.column_count(), "done");
    Ok(())
}
