// ABOUTME: Animation timeline primitives for the column engine.
// ABOUTME: Easing curves, exactly-once completions, and keyed animation records.

use colonnade_core::Point;

use crate::column::ColumnId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    Spring { damping: f32 },
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Spring { damping } => {
                if t >= 1.0 {
                    return 1.0;
                }
                // Underdamped oscillator; lower damping swings wider
                let omega = 8.0 + 12.0 * (1.0 - damping.clamp(0.0, 1.0));
                1.0 - (-6.0 * t).exp() * (omega * t).cos()
            }
        }
    }
}

/// Wraps an operation's completion callback so it fires exactly once. If
/// the animation is dropped without finishing (engine teardown), the
/// callback still fires with `finished = false`.
pub struct Completion(Option<Box<dyn FnOnce(bool)>>);

impl Completion {
    pub fn new(callback: impl FnOnce(bool) + 'static) -> Self {
        Self(Some(Box::new(callback)))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn fire(&mut self, finished: bool) {
        if let Some(callback) = self.0.take() {
            callback(finished);
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if let Some(callback) = self.0.take() {
            callback(false);
        }
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Completion")
            .field(&self.0.as_ref().map(|_| "..."))
            .finish()
    }
}

/// Superseding key: a new animation on the same key cancels the old one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnimKey {
    /// Visual translation of a stored column
    Column(ColumnId),
    /// Fade-out of a removed column awaiting detach
    Departing(ColumnId),
    /// The single scroll-offset channel
    Scroll,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Track {
    Translate { from: Point, to: Point },
    FadeOut { from_scale: f32, from_alpha: f32 },
    Scroll { from: f32, to: f32 },
}

/// Lifecycle notification owed to a pane when its animation settles or is
/// cancelled; delivered exactly once either way.
#[derive(Debug, Clone, Copy)]
pub(crate) enum LifecycleEvent {
    DidBecomeVisible(ColumnId),
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum FollowUp {
    Focus { id: ColumnId, animated: bool },
    Detach(ColumnId),
}

#[derive(Debug)]
pub(crate) struct Animation {
    pub key: AnimKey,
    pub track: Track,
    pub delay: f32,
    pub duration: f32,
    pub elapsed: f32,
    pub easing: Easing,
    pub completion: Completion,
    pub lifecycle: Option<LifecycleEvent>,
    pub follow_up: Option<FollowUp>,
}

impl Animation {
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            if self.elapsed >= self.delay {
                1.0
            } else {
                0.0
            }
        } else {
            ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }
}

pub(crate) fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::Spring { damping: 0.8 },
        ] {
            assert!(easing.apply(0.0).abs() < 0.05, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn ease_out_decelerates() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn completion_fires_exactly_once() {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let mut completion = Completion::new(move |finished| {
            assert!(finished);
            seen.set(seen.get() + 1);
        });
        completion.fire(true);
        completion.fire(true);
        drop(completion);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn completion_fires_cancelled_on_drop() {
        let result = Rc::new(Cell::new(None));
        let seen = Rc::clone(&result);
        let completion = Completion::new(move |finished| seen.set(Some(finished)));
        drop(completion);
        assert_eq!(result.get(), Some(false));
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let animation = Animation {
            key: AnimKey::Scroll,
            track: Track::Scroll { from: 0.0, to: 1.0 },
            delay: 0.0,
            duration: 0.0,
            elapsed: 0.0,
            easing: Easing::Linear,
            completion: Completion::none(),
            lifecycle: None,
            follow_up: None,
        };
        assert_eq!(animation.progress(), 1.0);
        assert!(animation.finished());
    }

    #[test]
    fn delay_holds_progress_at_zero() {
        let mut animation = Animation {
            key: AnimKey::Scroll,
            track: Track::Scroll { from: 0.0, to: 1.0 },
            delay: 0.4,
            duration: 0.2,
            elapsed: 0.3,
            easing: Easing::Linear,
            completion: Completion::none(),
            lifecycle: None,
            follow_up: None,
        };
        assert_eq!(animation.progress(), 0.0);
        assert!(!animation.finished());
        animation.elapsed = 0.5;
        assert!((animation.progress() - 0.5).abs() < 1e-6);
        animation.elapsed = 0.6;
        assert!(animation.finished());
    }
}
