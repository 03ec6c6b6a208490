// ABOUTME: Column records and the capability traits hosted panes implement.
// ABOUTME: Includes the discrete width-ratio ladder used to quantize column widths.

use colonnade_core::{Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnId(pub u64);

/// Horizontal size-class hint a pane may give its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeClass {
    Compact,
    Regular,
    #[default]
    Unspecified,
}

/// The discrete ladder a column's width is quantized to, as a fraction of
/// the viewport width. Derived once per column, never caller-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthRatio {
    Fifth,
    Third,
    Half,
    TwoThirds,
    FourFifths,
    Full,
}

impl WidthRatio {
    /// Quantize a preferred width against the viewport width. Returns `None`
    /// while the viewport is unmeasured (width 0) so the ratio can be
    /// resolved by a later layout pass instead of dividing by zero.
    pub fn from_preferred_width(preferred: f32, viewport: f32) -> Option<WidthRatio> {
        if viewport <= 0.0 {
            return None;
        }
        let r = (preferred / viewport).max(0.0);
        Some(if r < 1.0 / 5.0 {
            WidthRatio::Fifth
        } else if r < 1.0 / 3.0 {
            WidthRatio::Third
        } else if r < 1.0 / 2.0 {
            WidthRatio::Half
        } else if r < 2.0 / 3.0 {
            WidthRatio::TwoThirds
        } else if r < 4.0 / 5.0 {
            WidthRatio::FourFifths
        } else {
            WidthRatio::Full
        })
    }

    pub fn fraction(self) -> f32 {
        match self {
            WidthRatio::Fifth => 1.0 / 5.0,
            WidthRatio::Third => 1.0 / 3.0,
            WidthRatio::Half => 1.0 / 2.0,
            WidthRatio::TwoThirds => 2.0 / 3.0,
            WidthRatio::FourFifths => 4.0 / 5.0,
            WidthRatio::Full => 1.0,
        }
    }
}

/// One column record. The layout engine is the sole writer of `frame`;
/// callers write the preferred size and size class through the container.
#[derive(Debug, Clone)]
pub struct Column {
    pub id: ColumnId,
    pub(crate) frame: Rect,
    pub(crate) ratio: Option<WidthRatio>,
    pub(crate) preferred_size: Size,
    pub(crate) size_class: SizeClass,
}

impl Column {
    pub(crate) fn new(
        id: ColumnId,
        preferred_size: Size,
        size_class: SizeClass,
        ratio: Option<WidthRatio>,
    ) -> Self {
        Self {
            id,
            frame: Rect::ZERO,
            ratio,
            preferred_size,
            size_class,
        }
    }

    /// Current laid-out position
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The resolved ratio; `None` until a layout pass with a nonzero
    /// viewport has run
    pub fn width_ratio(&self) -> Option<WidthRatio> {
        self.ratio
    }

    pub fn preferred_size(&self) -> Size {
        self.preferred_size
    }

    pub fn preferred_size_class(&self) -> SizeClass {
        self.size_class
    }
}

/// Size preferences a hosted pane exposes to the container
pub trait SizableContent {
    /// The pane content's natural size; may be zero when unknown
    fn preferred_size(&self) -> Size;

    fn preferred_size_class(&self) -> SizeClass {
        SizeClass::Unspecified
    }
}

/// Persist/desist lifecycle hooks. Each hook is called exactly once per
/// transition, in declaration order, even when an animation is cancelled.
pub trait SizableLifecycle {
    fn will_become_visible(&mut self) {}
    fn did_become_visible(&mut self) {}
    fn will_be_removed(&mut self) {}
    fn was_removed(&mut self) {}
}

/// A hosted pane: an opaque rectangle with size hints and lifecycle hooks
pub trait Pane: SizableContent + SizableLifecycle {}

impl<T: SizableContent + SizableLifecycle> Pane for T {}

/// Render-tree primitives the host container supplies
pub trait RenderHost {
    fn attach_column(&mut self, id: ColumnId);
    fn detach_column(&mut self, id: ColumnId);
}

/// Resolve the size class a pane should see given the container's own
/// class. A Compact container never grants Regular.
pub fn effective_size_class(container: SizeClass, preferred: SizeClass) -> SizeClass {
    match (container, preferred) {
        (SizeClass::Compact, SizeClass::Regular) => SizeClass::Compact,
        (_, SizeClass::Unspecified) => container,
        (_, preferred) => preferred,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_bands() {
        let cases = [
            (0.0, WidthRatio::Fifth),
            (50.0, WidthRatio::Fifth),
            (79.9, WidthRatio::Fifth),
            (80.0, WidthRatio::Third),
            (134.0, WidthRatio::Half),
            (200.0, WidthRatio::TwoThirds),
            (267.0, WidthRatio::FourFifths),
            (300.0, WidthRatio::FourFifths),
            (320.0, WidthRatio::Full),
            (1000.0, WidthRatio::Full),
        ];
        for (preferred, expected) in cases {
            assert_eq!(
                WidthRatio::from_preferred_width(preferred, 400.0),
                Some(expected),
                "preferred width {preferred}"
            );
        }
    }

    #[test]
    fn ladder_defers_on_zero_viewport() {
        assert_eq!(WidthRatio::from_preferred_width(300.0, 0.0), None);
    }

    #[test]
    fn negative_preferred_width_clamps_to_smallest_rung() {
        assert_eq!(
            WidthRatio::from_preferred_width(-10.0, 400.0),
            Some(WidthRatio::Fifth)
        );
    }

    #[test]
    fn fractions_match_rungs() {
        assert_eq!(WidthRatio::Fifth.fraction(), 0.2);
        assert_eq!(WidthRatio::Full.fraction(), 1.0);
        assert!((WidthRatio::TwoThirds.fraction() - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn compact_container_never_grants_regular() {
        assert_eq!(
            effective_size_class(SizeClass::Compact, SizeClass::Regular),
            SizeClass::Compact
        );
        assert_eq!(
            effective_size_class(SizeClass::Regular, SizeClass::Compact),
            SizeClass::Compact
        );
        assert_eq!(
            effective_size_class(SizeClass::Regular, SizeClass::Unspecified),
            SizeClass::Regular
        );
        assert_eq!(
            effective_size_class(SizeClass::Compact, SizeClass::Unspecified),
            SizeClass::Compact
        );
    }
}
