pub mod direction;
pub mod geometry;
pub mod window;

pub use direction::Direction;
pub use geometry::{Rectangle, ScreenBounds};
pub use window::{ScreenSnapshot, WindowFlags, WindowHandle, WindowId};
