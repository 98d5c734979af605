//! Pan, zoom and rotate a child element inside a container with mouse drag
//! and wheel gestures.
//!
//! [`TransformController`] holds the gesture math and state machine and is
//! independent of the DOM. [`GestureListeners`] binds it to a pair of
//! elements, and [`use_transform`] wires that into a Yew component.

pub mod config;
pub mod controller;
pub mod correction;
pub mod dom;
pub mod hook;
pub mod state;
pub mod util;

pub use config::{ConfigError, TransformConfig};
pub use controller::{Geometry, TransformController, WheelInput};
pub use correction::{ActionKind, Correction};
pub use dom::{DomGeometry, GestureListeners};
pub use hook::{TransformOptions, UseTransformHandle, use_transform};
pub use state::{Rect, RectCachePolicy, RectSnapshot, Size, TransformState};
