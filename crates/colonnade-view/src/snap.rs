// ABOUTME: Scroll snapping: drag-direction tracking and snap-target computation.
// ABOUTME: Aligns a column edge with the viewport edge after a drag gesture.

use colonnade_core::Point;

use crate::store::ColumnStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDirection {
    Left,
    Right,
}

/// Remembers the direction of the most recent drag until the gesture's
/// snap has been handled.
#[derive(Debug, Default)]
pub(crate) struct SnapController {
    last_direction: Option<DragDirection>,
}

impl SnapController {
    /// Record the drag direction from the release velocity. Non-negative
    /// velocity counts as rightward.
    pub fn drag_will_end(&mut self, velocity_x: f32) {
        self.last_direction = Some(if velocity_x >= 0.0 {
            DragDirection::Right
        } else {
            DragDirection::Left
        });
    }

    /// Consume the pending direction; resets to none exactly once per
    /// gesture.
    pub fn take_direction(&mut self) -> Option<DragDirection> {
        self.last_direction.take()
    }
}

/// Compute the offset that aligns a column edge with the viewport edge,
/// or `None` when no column sits at the probed edge (extreme scroll
/// bounds). `threshold` is the fraction of a column that must be scrolled
/// past before the snap advances to the next edge.
pub(crate) fn snap_target(
    store: &ColumnStore,
    viewport_width: f32,
    offset_x: f32,
    threshold: f32,
    direction: DragDirection,
) -> Option<f32> {
    match direction {
        DragDirection::Left => {
            let column = store.column_at(Point::new(offset_x, 0.0))?;
            let frame = column.frame();
            if frame.min_x() + frame.width * (1.0 - threshold) >= offset_x {
                Some(frame.min_x())
            } else {
                Some(frame.max_x())
            }
        }
        DragDirection::Right => {
            let column = store.column_at(Point::new(offset_x + viewport_width, 0.0))?;
            let frame = column.frame();
            if offset_x + (viewport_width - threshold * frame.width) > frame.min_x() {
                // Bring the column's right edge flush with the viewport's
                Some(frame.min_x() - (viewport_width - frame.width))
            } else {
                // Scroll exactly one further column
                Some(frame.min_x() - viewport_width)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::store_with_frames;
    use colonnade_core::Rect;

    fn two_full_columns() -> ColumnStore {
        store_with_frames(&[
            Rect::new(0.0, 0.0, 400.0, 700.0),
            Rect::new(400.0, 0.0, 400.0, 700.0),
        ])
    }

    #[test]
    fn direction_from_velocity_sign() {
        let mut snap = SnapController::default();
        snap.drag_will_end(3.0);
        assert_eq!(snap.take_direction(), Some(DragDirection::Right));
        snap.drag_will_end(0.0);
        assert_eq!(snap.take_direction(), Some(DragDirection::Right));
        snap.drag_will_end(-1.5);
        assert_eq!(snap.take_direction(), Some(DragDirection::Left));
    }

    #[test]
    fn direction_resets_once_per_gesture() {
        let mut snap = SnapController::default();
        snap.drag_will_end(1.0);
        assert!(snap.take_direction().is_some());
        assert!(snap.take_direction().is_none());
    }

    #[test]
    fn leftward_release_inside_threshold_snaps_back() {
        let store = two_full_columns();
        // Most of the first column is still ahead of the offset
        let target = snap_target(&store, 400.0, 150.0, 0.2, DragDirection::Left);
        assert_eq!(target, Some(0.0));
    }

    #[test]
    fn leftward_release_past_threshold_snaps_forward() {
        let store = two_full_columns();
        // 0 + 400 * 0.8 = 320 < 350: scrolled past most of the column
        let target = snap_target(&store, 400.0, 350.0, 0.2, DragDirection::Left);
        assert_eq!(target, Some(400.0));
    }

    #[test]
    fn rightward_release_aligns_right_edges() {
        let store = two_full_columns();
        // Probe at 550 hits the second column; 150 + 320 > 400
        let target = snap_target(&store, 400.0, 150.0, 0.2, DragDirection::Right);
        assert_eq!(target, Some(400.0));
    }

    #[test]
    fn rightward_release_short_of_threshold_scrolls_one_column() {
        let store = store_with_frames(&[
            Rect::new(0.0, 0.0, 400.0, 700.0),
            Rect::new(400.0, 0.0, 400.0, 700.0),
            Rect::new(800.0, 0.0, 400.0, 700.0),
        ]);
        // Probe at 410 hits the second column; 10 + 320 = 330 <= 400
        let target = snap_target(&store, 400.0, 10.0, 0.2, DragDirection::Right);
        assert_eq!(target, Some(0.0));
    }

    #[test]
    fn no_column_at_probed_edge_yields_none() {
        let store = two_full_columns();
        // Fully scrolled: the right probe lands past the last column
        assert_eq!(
            snap_target(&store, 400.0, 400.0, 0.2, DragDirection::Right),
            None
        );
        // Negative offset: the left probe lands before the first column
        assert_eq!(
            snap_target(&store, 400.0, -10.0, 0.2, DragDirection::Left),
            None
        );
    }

    #[test]
    fn narrow_columns_use_their_own_width_for_threshold() {
        let store = store_with_frames(&[
            Rect::new(0.0, 0.0, 80.0, 700.0),
            Rect::new(80.0, 0.0, 320.0, 700.0),
            Rect::new(400.0, 0.0, 80.0, 700.0),
        ]);
        // Left probe at 50 hits the 80-wide column; 0 + 64 >= 50
        assert_eq!(
            snap_target(&store, 400.0, 50.0, 0.2, DragDirection::Left),
            Some(0.0)
        );
        // At 70 the threshold is crossed: 64 < 70
        assert_eq!(
            snap_target(&store, 400.0, 70.0, 0.2, DragDirection::Left),
            Some(80.0)
        );
    }
}
