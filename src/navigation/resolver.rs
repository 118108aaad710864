use super::alignment::is_aligned;
use super::distance::signed_distance;
use super::eligibility::ineligibility;
use super::selection::SearchState;
use crate::model::{Direction, ScreenBounds, WindowHandle};
use crate::trace_if_enabled;

/// Поиск ближайшего окна в заданном направлении.
///
/// Чистая функция над снимком: не хранит состояния между вызовами и ничего
/// не меняет. Передачу фокуса выполняет вызывающая сторона.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalFocusResolver {
    screen: ScreenBounds,
}

impl DirectionalFocusResolver {
    pub fn new(screen: ScreenBounds) -> Self {
        Self { screen }
    }

    /// Найти окно для фокуса. Без исходного окна кандидаты не просматриваются.
    pub fn resolve<'a>(
        &self,
        source: Option<&'a WindowHandle>,
        direction: Direction,
        candidates: &'a [WindowHandle],
    ) -> Option<&'a WindowHandle> {
        let source = source?;
        let mut state = SearchState::new(source, direction);

        for candidate in candidates {
            self.inspect(&mut state, candidate);
        }

        state.into_best()
    }

    fn inspect<'a>(&self, state: &mut SearchState<'a>, candidate: &'a WindowHandle) {
        let source = state.source();
        let direction = state.direction();

        if let Some(reason) = ineligibility(candidate, source.id, &self.screen) {
            trace_if_enabled!("Пропускаем окно {}: {}", candidate.id, reason);
            return;
        }

        if !is_aligned(direction, &source.rect, &candidate.rect) {
            trace_if_enabled!("Окно {} вне коридора для направления {}", candidate.id, direction);
            return;
        }

        let distance = signed_distance(direction, &source.rect, &candidate.rect);
        if state.consider(candidate, distance) {
            trace_if_enabled!("Новый лучший кандидат {} (дистанция {})", candidate, distance);
        } else {
            trace_if_enabled!("Окно {} не лучше текущего (дистанция {})", candidate.id, distance);
        }
    }
}
