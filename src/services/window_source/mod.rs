//! WindowSource service: responsibility and boundaries
//!
//! This module and its submodules are responsible ONLY for talking to the
//! window manager: producing a read-only `ScreenSnapshot` of the focused
//! screen and moving input focus to a chosen window. It MUST NOT contain any
//! navigation logic; choosing the target window belongs to
//! `navigation::DirectionalFocusResolver`.

mod dry_run;
mod snapshot_file;
mod sway;
mod wmctrl;
mod x11;
mod xdotool;
mod xprop;
mod r#trait;

pub use self::dry_run::DryRunSource;
pub use self::r#trait::{create_window_source, WindowSourceTrait};
