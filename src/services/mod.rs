pub mod focus_navigator;
pub mod window_source;

pub use focus_navigator::{FocusNavigator, NavigationOutcome};
pub use window_source::create_window_source;
