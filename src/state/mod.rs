pub mod drag;
pub mod rect;
pub mod transform;

pub use drag::DragSession;
pub use rect::{Rect, RectCachePolicy, RectSnapshot, Size};
pub use transform::TransformState;
