use crate::config::Config;
use crate::error::Result;
use crate::keynav_error;
use crate::model::{ScreenSnapshot, WindowHandle};
use crate::utils::{detect_session, SessionKind};
use tracing::info;

/// Trait for window sources: read-only snapshot of the screen plus the one
/// side effect the navigator needs, moving input focus to a window
#[async_trait::async_trait]
pub trait WindowSourceTrait: Send + Sync {
    /// Short backend name for logs
    fn name(&self) -> &'static str;

    /// Снимок текущего экрана: его размеры, активное окно и все окна
    async fn snapshot(&self) -> Result<ScreenSnapshot>;

    /// Поднять окно (если `raise`) и передать ему фокус ввода
    async fn focus(&self, window: &WindowHandle, raise: bool) -> Result<()>;
}

/// Factory function to create a window source from `source.backend`
pub fn create_window_source(config: &Config) -> Result<Box<dyn WindowSourceTrait>> {
    let timeout = config.command_timeout();

    let source: Box<dyn WindowSourceTrait> = match config.source.backend.as_str() {
        "dry-run" => Box::new(super::dry_run::DryRunSource::new()),
        "snapshot" => Box::new(super::snapshot_file::SnapshotFileSource::new(
            config.source.snapshot_path.clone(),
        )),
        "sway" => Box::new(super::sway::SwaySource::new(timeout)),
        "x11" => Box::new(super::x11::X11Source::new(timeout)),
        "auto" => match detect_session() {
            SessionKind::Sway => Box::new(super::sway::SwaySource::new(timeout)),
            SessionKind::X11 => Box::new(super::x11::X11Source::new(timeout)),
            SessionKind::Unknown => {
                return Err(keynav_error!(
                    service_unavailable,
                    "Не удалось определить оконный менеджер: нет ни SWAYSOCK, ни DISPLAY"
                ));
            }
        },
        other => {
            return Err(keynav_error!(internal, "Неизвестный источник окон: {}", other));
        }
    };

    info!("Источник окон: {}", source.name());
    Ok(source)
}
