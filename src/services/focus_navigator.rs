use crate::config::Config;
use crate::debug_if_enabled;
use crate::error::Result;
use crate::model::{Direction, WindowId};
use crate::navigation::DirectionalFocusResolver;
use crate::services::window_source::WindowSourceTrait;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Чем закончился запрос навигации. Ни один из исходов не является ошибкой.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Фокус передан окну
    Focused(WindowId),
    /// Нет активного окна, поиск не запускался
    NoActiveWindow,
    /// Активное окно - панель, рабочий стол или override-redirect
    ActiveWindowIneligible(WindowId),
    /// В этом направлении подходящих окон нет
    NoCandidate,
}

impl fmt::Display for NavigationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationOutcome::Focused(id) => write!(f, "фокус передан окну {}", id),
            NavigationOutcome::NoActiveWindow => write!(f, "нет активного окна"),
            NavigationOutcome::ActiveWindowIneligible(id) => {
                write!(f, "активное окно {} не может быть источником", id)
            }
            NavigationOutcome::NoCandidate => write!(f, "подходящих окон нет"),
        }
    }
}

/// Один запрос навигации: снимок экрана -> поиск -> передача фокуса
pub struct FocusNavigator {
    config: Arc<Config>,
    source: Box<dyn WindowSourceTrait>,
}

impl FocusNavigator {
    pub fn new(config: Arc<Config>, source: Box<dyn WindowSourceTrait>) -> Self {
        info!("Инициализация FocusNavigator (источник: {})", source.name());
        Self { config, source }
    }

    pub async fn navigate(&self, direction: Direction) -> Result<NavigationOutcome> {
        let snapshot = self.source.snapshot().await?;
        debug_if_enabled!(
            "Снимок экрана {}: {} окон, активное {:?}",
            snapshot.screen,
            snapshot.windows.len(),
            snapshot.active
        );

        let Some(active) = snapshot.active_window() else {
            debug!("Активное окно не найдено в снимке");
            return Ok(NavigationOutcome::NoActiveWindow);
        };

        if !active.can_originate_search() {
            debug!("Активное окно {} - служебное, поиск не запускаем", active);
            return Ok(NavigationOutcome::ActiveWindowIneligible(active.id));
        }

        info!("Поиск ближайшего окна: {} от {}", direction, active);

        let resolver = DirectionalFocusResolver::new(snapshot.screen);
        let Some(target) = resolver.resolve(Some(active), direction, &snapshot.windows) else {
            info!("В направлении {} подходящих окон нет", direction);
            return Ok(NavigationOutcome::NoCandidate);
        };

        info!("Найдено окно: {}", target);
        self.source.focus(target, self.config.focus.raise).await?;

        Ok(NavigationOutcome::Focused(target.id))
    }
}
