// ABOUTME: Transition context for animated column insertion and removal.
// ABOUTME: Computes before/after frames for directional fly-in/out animations.

use colonnade_core::config::AnimationSettings;
use colonnade_core::Rect;

use crate::animation::Easing;
use crate::column::ColumnId;

/// Direction a transition animates along, in the container's coordinate
/// space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("Transition target frame is not realized")]
    TargetMissing,
}

/// Before/after frames for one animated transition. Construction fails
/// when the target pane has no laid-out frame yet; callers must not
/// proceed without one.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext {
    pub container: Rect,
    pub direction: Direction,
    pub appearing: bool,
    pub animated: bool,
    target: Rect,
}

impl TransitionContext {
    pub fn new(
        container: Rect,
        target: Option<Rect>,
        direction: Direction,
        appearing: bool,
        animated: bool,
    ) -> Result<Self, TransitionError> {
        let target = target.ok_or(TransitionError::TargetMissing)?;
        Ok(Self {
            container,
            direction,
            appearing,
            animated,
            target,
        })
    }

    /// The resting frame of the transitioning pane
    pub fn target_frame(&self) -> Rect {
        self.target
    }

    /// Where the pane starts. For a disappearing pane this is its current
    /// frame; for an appearing pane the frame translated off along the
    /// direction axis.
    pub fn initial_frame(&self) -> Rect {
        if !self.appearing {
            return self.target;
        }
        match self.direction {
            Direction::Right => self.target.offset_by(-self.target.width, 0.0),
            Direction::Left => self.target.with_origin(self.container.top_right()),
            Direction::Down => self.target.offset_by(0.0, -self.container.height),
            Direction::Up => self.target.offset_by(0.0, self.container.height),
        }
    }

    /// Where the pane ends up. For an appearing pane this is its resting
    /// frame; for a disappearing pane the frame translated off.
    pub fn final_frame(&self) -> Rect {
        if self.appearing {
            return self.target;
        }
        match self.direction {
            Direction::Right => self.target.with_origin(self.container.top_right()),
            Direction::Left => self.target.offset_by(-self.target.width, 0.0),
            Direction::Down => self.target.offset_by(0.0, self.container.height),
            Direction::Up => self.target.offset_by(0.0, -self.container.height),
        }
    }
}

/// Timing a pluggable animator chooses for a transition
#[derive(Debug, Clone, Copy)]
pub struct TransitionAnimation {
    pub delay: f32,
    pub duration: f32,
    pub easing: Easing,
}

pub trait TransitionAnimator {
    fn animate(&self, context: &TransitionContext) -> TransitionAnimation;
}

/// Default transition: a damped spring fly-in/out
#[derive(Debug, Clone, Copy)]
pub struct FlyInOutAnimator {
    pub duration: f32,
    pub damping: f32,
}

impl Default for FlyInOutAnimator {
    fn default() -> Self {
        Self {
            duration: 0.35,
            damping: 0.8,
        }
    }
}

impl FlyInOutAnimator {
    pub fn from_settings(settings: &AnimationSettings) -> Self {
        Self {
            duration: settings.fly_in_duration,
            damping: settings.spring_damping,
        }
    }
}

impl TransitionAnimator for FlyInOutAnimator {
    fn animate(&self, context: &TransitionContext) -> TransitionAnimation {
        TransitionAnimation {
            delay: 0.0,
            duration: if context.animated { self.duration } else { 0.0 },
            easing: Easing::Spring {
                damping: self.damping,
            },
        }
    }
}

/// Optional delegate a host supplies to steer transitions
pub trait ColumnViewDelegate {
    /// Direction to animate the addition or removal of a column
    fn direction_for_transition(
        &self,
        from: Option<ColumnId>,
        to: Option<ColumnId>,
    ) -> Option<Direction> {
        let _ = (from, to);
        None
    }

    /// A custom animator for the transition, or `None` for the default
    /// fly-in/out
    fn animator_for_transition(
        &self,
        from: Option<ColumnId>,
        to: Option<ColumnId>,
    ) -> Option<Box<dyn TransitionAnimator>> {
        let _ = (from, to);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 700.0)
    }

    fn target() -> Rect {
        Rect::new(80.0, 0.0, 320.0, 700.0)
    }

    #[test]
    fn missing_target_fails_construction() {
        let result = TransitionContext::new(container(), None, Direction::Left, true, true);
        assert!(matches!(result, Err(TransitionError::TargetMissing)));
    }

    #[test]
    fn appearing_from_left_starts_at_container_right_edge() {
        let context =
            TransitionContext::new(container(), Some(target()), Direction::Left, true, true)
                .unwrap();
        let initial = context.initial_frame();
        assert_eq!(initial.x, 400.0);
        assert_eq!(initial.y, 0.0);
        assert_eq!(initial.size(), target().size());
        assert_eq!(context.final_frame(), target());
    }

    #[test]
    fn appearing_from_right_starts_one_width_back() {
        let context =
            TransitionContext::new(container(), Some(target()), Direction::Right, true, true)
                .unwrap();
        assert_eq!(context.initial_frame(), target().offset_by(-320.0, 0.0));
    }

    #[test]
    fn vertical_directions_translate_by_container_height() {
        let down = TransitionContext::new(container(), Some(target()), Direction::Down, true, true)
            .unwrap();
        assert_eq!(down.initial_frame(), target().offset_by(0.0, -700.0));

        let up =
            TransitionContext::new(container(), Some(target()), Direction::Up, true, true).unwrap();
        assert_eq!(up.initial_frame(), target().offset_by(0.0, 700.0));
    }

    #[test]
    fn disappearing_final_frames_leave_along_direction() {
        let context =
            TransitionContext::new(container(), Some(target()), Direction::Left, false, true)
                .unwrap();
        assert_eq!(context.initial_frame(), target());
        assert_eq!(context.final_frame(), target().offset_by(-320.0, 0.0));

        let right =
            TransitionContext::new(container(), Some(target()), Direction::Right, false, true)
                .unwrap();
        assert_eq!(right.final_frame().origin(), container().top_right());
    }

    #[test]
    fn default_animator_skips_duration_when_not_animated() {
        let context =
            TransitionContext::new(container(), Some(target()), Direction::Left, true, false)
                .unwrap();
        let spec = FlyInOutAnimator::default().animate(&context);
        assert_eq!(spec.duration, 0.0);
    }
}
