// ABOUTME: Column layout, mutation, and snapping engine.
// ABOUTME: Lays out panes side by side, animates insert/remove, snaps scrolling.

pub mod animation;
pub mod column;
pub mod engine;
pub mod snap;
pub mod store;
pub mod transition;

pub use animation::{Completion, Easing};
pub use column::{
    Column, ColumnId, Pane, RenderHost, SizableContent, SizableLifecycle, SizeClass, WidthRatio,
};
pub use engine::{ColumnView, InsertOptions, Presentation};
pub use snap::DragDirection;
pub use store::ColumnStore;
pub use transition::{
    ColumnViewDelegate, Direction, FlyInOutAnimator, TransitionAnimation, TransitionAnimator,
    TransitionContext, TransitionError,
};
