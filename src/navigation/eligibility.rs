use crate::model::{ScreenBounds, WindowHandle, WindowId};
use std::fmt;

/// Причина, по которой окно не может получить фокус
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ineligibility {
    IsSource,
    OverrideRedirect,
    DockOrDesktop,
    SkipTaskbarOrPager,
    ShadedOrMinimized,
    NotViewable,
    OffScreen,
    OtherDesktop,
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Ineligibility::IsSource => "исходное окно",
            Ineligibility::OverrideRedirect => "override-redirect",
            Ineligibility::DockOrDesktop => "панель или рабочий стол",
            Ineligibility::SkipTaskbarOrPager => "skip-taskbar/skip-pager",
            Ineligibility::ShadedOrMinimized => "свёрнуто",
            Ineligibility::NotViewable => "не отображается",
            Ineligibility::OffScreen => "за пределами экрана",
            Ineligibility::OtherDesktop => "на другом рабочем столе",
        };
        f.write_str(reason)
    }
}

/// Проверить окно-кандидат. `None` - окно подходит.
pub fn ineligibility(
    window: &WindowHandle,
    source: WindowId,
    screen: &ScreenBounds,
) -> Option<Ineligibility> {
    let flags = &window.flags;

    if window.id == source {
        Some(Ineligibility::IsSource)
    } else if flags.override_redirect {
        Some(Ineligibility::OverrideRedirect)
    } else if flags.is_dock || flags.is_desktop {
        Some(Ineligibility::DockOrDesktop)
    } else if flags.skip_taskbar_or_pager {
        Some(Ineligibility::SkipTaskbarOrPager)
    } else if flags.shaded || flags.minimized {
        Some(Ineligibility::ShadedOrMinimized)
    } else if !flags.mapped || !flags.viewable {
        Some(Ineligibility::NotViewable)
    } else if window.rect.is_outside(screen) {
        Some(Ineligibility::OffScreen)
    } else if !flags.on_current_desktop {
        Some(Ineligibility::OtherDesktop)
    } else {
        None
    }
}

#[allow(dead_code)]
pub fn is_eligible(window: &WindowHandle, source: WindowId, screen: &ScreenBounds) -> bool {
    ineligibility(window, source, screen).is_none()
}
