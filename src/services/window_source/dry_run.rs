use crate::error::Result;
use crate::model::{Rectangle, ScreenBounds, ScreenSnapshot, WindowFlags, WindowHandle, WindowId};
use parking_lot::Mutex;
use tracing::info;

use super::r#trait::WindowSourceTrait;

/// Эмуляция экрана 1920x1080: сетка 2x2, панель снизу и окно на другом
/// рабочем столе. Фокус не передаётся, только запоминается.
pub struct DryRunSource {
    snapshot: Mutex<ScreenSnapshot>,
    last_focused: Mutex<Option<WindowId>>,
}

impl DryRunSource {
    pub fn new() -> Self {
        Self {
            snapshot: Mutex::new(Self::fake_layout()),
            last_focused: Mutex::new(None),
        }
    }

    fn fake_layout() -> ScreenSnapshot {
        ScreenSnapshot::new(ScreenBounds::new(1920, 1080))
            .with_window(WindowHandle::new(0x100, Rectangle::new(0, 0, 960, 520)).with_title("Terminal - dry_run"))
            .with_window(WindowHandle::new(0x200, Rectangle::new(960, 0, 960, 520)).with_title("Browser - dry_run"))
            .with_window(WindowHandle::new(0x300, Rectangle::new(0, 520, 960, 520)).with_title("Editor - dry_run"))
            .with_window(WindowHandle::new(0x400, Rectangle::new(960, 520, 960, 520)).with_title("Player - dry_run"))
            .with_window(
                WindowHandle::new(0x500, Rectangle::new(0, 1040, 1920, 40))
                    .with_title("Panel - dry_run")
                    .with_flags(WindowFlags {
                        is_dock: true,
                        ..WindowFlags::default()
                    }),
            )
            .with_window(
                WindowHandle::new(0x600, Rectangle::new(0, 0, 1920, 1040))
                    .with_title("Game - dry_run")
                    .with_flags(WindowFlags {
                        on_current_desktop: false,
                        ..WindowFlags::default()
                    }),
            )
            .with_active(WindowId(0x100))
    }

    #[allow(dead_code)]
    pub fn last_focused(&self) -> Option<WindowId> {
        *self.last_focused.lock()
    }
}

impl Default for DryRunSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl WindowSourceTrait for DryRunSource {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    async fn snapshot(&self) -> Result<ScreenSnapshot> {
        Ok(self.snapshot.lock().clone())
    }

    async fn focus(&self, window: &WindowHandle, raise: bool) -> Result<()> {
        info!("Dry-run: фокус на {} (raise: {})", window, raise);
        *self.last_focused.lock() = Some(window.id);
        // Следующий снимок видит новое активное окно, как настоящий WM
        self.snapshot.lock().active = Some(window.id);
        Ok(())
    }
}
