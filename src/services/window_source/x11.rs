use crate::error::Result;
use crate::model::{ScreenSnapshot, WindowHandle, WindowId};
use std::time::Duration;
use tracing::{debug, warn};

use super::r#trait::WindowSourceTrait;
use super::wmctrl::{WmctrlClient, WmctrlDesktop, WmctrlWindow};
use super::xdotool::XdotoolClient;
use super::xprop::{XpropClient, XpropInfo};

/// Окна X11: список и рабочие столы через wmctrl, атрибуты через xprop,
/// активное окно и передача фокуса через xdotool
pub struct X11Source {
    wmctrl: WmctrlClient,
    xprop: XpropClient,
    xdotool: XdotoolClient,
}

impl X11Source {
    pub fn new(timeout: Duration) -> Self {
        Self {
            wmctrl: WmctrlClient::new(timeout),
            xprop: XpropClient::new(timeout),
            xdotool: XdotoolClient::new(timeout),
        }
    }
}

/// Собрать снимок из уже полученных данных
pub(crate) fn build_snapshot(
    desktop: WmctrlDesktop,
    windows: Vec<(WmctrlWindow, XpropInfo)>,
    active: Option<u64>,
) -> ScreenSnapshot {
    let mut snapshot = ScreenSnapshot::new(desktop.geometry);
    snapshot.active = active.map(WindowId);

    for (window, info) in windows {
        let on_current_desktop = window.desktop == -1 || window.desktop == desktop.index;
        snapshot.windows.push(
            WindowHandle::new(window.id, window.rect)
                .with_title(window.title)
                .with_flags(info.to_flags(on_current_desktop)),
        );
    }

    snapshot
}

#[async_trait::async_trait]
impl WindowSourceTrait for X11Source {
    fn name(&self) -> &'static str {
        "x11"
    }

    async fn snapshot(&self) -> Result<ScreenSnapshot> {
        let desktop = self.wmctrl.current_desktop().await?;
        let active = self.xdotool.active_window().await?;

        let mut windows = Vec::new();
        for window in self.wmctrl.windows().await? {
            // Окно могло закрыться между wmctrl и xprop
            match self.xprop.window_info(window.id).await {
                Ok(info) => windows.push((window, info)),
                Err(e) => warn!("Пропускаем окно 0x{:08x}: {}", window.id, e),
            }
        }

        let snapshot = build_snapshot(desktop, windows, active);
        debug!(
            "x11: рабочий стол {}, экран {}, окон {}",
            desktop.index,
            snapshot.screen,
            snapshot.windows.len()
        );
        Ok(snapshot)
    }

    async fn focus(&self, window: &WindowHandle, raise: bool) -> Result<()> {
        let id = window.id.value();
        if raise {
            self.xdotool.raise(id).await?;
        }
        self.xdotool.activate(id).await
    }
}
