use super::geometry::{Rectangle, ScreenBounds};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Идентификатор окна в рамках оконного менеджера (X11 XID, sway con_id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl WindowId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// Атрибуты окна, влияющие на то, можно ли передать ему фокус
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowFlags {
    pub override_redirect: bool,
    pub is_dock: bool,
    pub is_desktop: bool,
    pub skip_taskbar_or_pager: bool,
    pub shaded: bool,
    pub minimized: bool,
    pub mapped: bool,
    pub viewable: bool,
    pub on_current_desktop: bool,
}

impl Default for WindowFlags {
    /// Обычное видимое окно на текущем рабочем столе
    fn default() -> Self {
        Self {
            override_redirect: false,
            is_dock: false,
            is_desktop: false,
            skip_taskbar_or_pager: false,
            shaded: false,
            minimized: false,
            mapped: true,
            viewable: true,
            on_current_desktop: true,
        }
    }
}

/// Снимок окна на момент одного поиска
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowHandle {
    pub id: WindowId,
    #[serde(default)]
    pub title: String,
    pub rect: Rectangle,
    #[serde(default)]
    pub flags: WindowFlags,
}

impl WindowHandle {
    pub fn new(id: u64, rect: Rectangle) -> Self {
        Self {
            id: WindowId(id),
            title: String::new(),
            rect,
            flags: WindowFlags::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_flags(mut self, flags: WindowFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Может ли окно быть источником поиска: override-redirect, панели и
    /// рабочий стол фокус никуда не передают
    pub fn can_originate_search(&self) -> bool {
        !(self.flags.override_redirect || self.flags.is_dock || self.flags.is_desktop)
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "{} [{}]", self.id, self.rect)
        } else {
            write!(f, "{} \"{}\" [{}]", self.id, self.title, self.rect)
        }
    }
}

/// Неизменяемый снимок одного экрана: размеры, активное окно и все окна
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSnapshot {
    pub screen: ScreenBounds,
    #[serde(default)]
    pub active: Option<WindowId>,
    #[serde(default)]
    pub windows: Vec<WindowHandle>,
}

impl ScreenSnapshot {
    pub fn new(screen: ScreenBounds) -> Self {
        Self {
            screen,
            active: None,
            windows: Vec::new(),
        }
    }

    pub fn with_active(mut self, id: WindowId) -> Self {
        self.active = Some(id);
        self
    }

    pub fn with_window(mut self, window: WindowHandle) -> Self {
        self.windows.push(window);
        self
    }

    /// Активное окно, если оно есть и присутствует в списке окон
    pub fn active_window(&self) -> Option<&WindowHandle> {
        let active = self.active?;
        self.windows.iter().find(|window| window.id == active)
    }
}
