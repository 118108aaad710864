//! Навигация фокуса: поиск ближайшего окна в направлении
//!
//! This module is the pure core. It MUST NOT talk to the window manager,
//! read configuration or keep state between calls. It receives a snapshot
//! and returns at most one window; transferring focus is the caller's job
//! (see `services::focus_navigator`).

mod alignment;
mod distance;
mod eligibility;
mod resolver;
mod selection;

pub use resolver::DirectionalFocusResolver;
