use crate::model::{Direction, WindowHandle};

/// Состояние одного поиска: текущий лучший кандидат и его дистанция.
///
/// Живёт ровно один вызов резолвера. Кандидат с нулевой дистанцией
/// (совпадает с исходным окном по оси движения) принимается только пока
/// лучшего ещё нет и вытесняется любым кандидатом, который впереди.
#[derive(Debug)]
pub struct SearchState<'a> {
    source: &'a WindowHandle,
    direction: Direction,
    best: Option<&'a WindowHandle>,
    best_distance: i64,
}

impl<'a> SearchState<'a> {
    pub fn new(source: &'a WindowHandle, direction: Direction) -> Self {
        Self {
            source,
            direction,
            best: None,
            best_distance: 0,
        }
    }

    pub fn source(&self) -> &'a WindowHandle {
        self.source
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[allow(dead_code)]
    pub fn best_distance(&self) -> Option<i64> {
        self.best.map(|_| self.best_distance)
    }

    /// Учесть кандидата. Возвращает `true`, если он стал лучшим.
    pub fn consider(&mut self, candidate: &'a WindowHandle, distance: i64) -> bool {
        if distance < 0 {
            return false;
        }

        let Some(best) = self.best else {
            self.promote(candidate, distance);
            return true;
        };

        // Первый совпадающий кандидат уже записан либо есть кто-то впереди
        if distance == 0 {
            return false;
        }

        let improves = if self.best_distance == 0 || distance < self.best_distance {
            true
        } else if distance == self.best_distance {
            self.wins_tie(candidate, best)
        } else {
            false
        };

        if improves {
            self.promote(candidate, distance);
        }
        improves
    }

    /// При равной дистанции решает размер вдоль оси движения, а при равных
    /// размерах - меньший идентификатор, чтобы порядок обхода не влиял на итог
    fn wins_tie(&self, candidate: &WindowHandle, best: &WindowHandle) -> bool {
        self.direction
            .strategy()
            .prefers_extent(&candidate.rect, &best.rect)
            .unwrap_or(candidate.id < best.id)
    }

    fn promote(&mut self, candidate: &'a WindowHandle, distance: i64) {
        self.best = Some(candidate);
        self.best_distance = distance;
    }

    pub fn into_best(self) -> Option<&'a WindowHandle> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rectangle;

    fn window(id: u64, x: i32, y: i32, width: u32, height: u32) -> WindowHandle {
        WindowHandle::new(id, Rectangle::new(x, y, width, height))
    }

    #[test]
    fn test_negative_distance_rejected() {
        let source = window(1, 0, 0, 10, 10);
        let behind = window(2, 0, 0, 10, 10);
        let mut state = SearchState::new(&source, Direction::Down);

        assert!(!state.consider(&behind, -5));
        assert!(state.into_best().is_none());
    }

    #[test]
    fn test_smaller_positive_distance_wins() {
        let source = window(1, 0, 0, 10, 10);
        let far = window(2, 0, 0, 10, 10);
        let near = window(3, 0, 0, 10, 10);
        let mut state = SearchState::new(&source, Direction::Down);

        assert!(state.consider(&far, 100));
        assert!(state.consider(&near, 50));
        assert!(!state.consider(&far, 100));
        assert_eq!(state.best_distance(), Some(50));
        assert_eq!(state.into_best().map(|w| w.id.value()), Some(3));
    }

    #[test]
    fn test_first_zero_distance_wins_until_positive_arrives() {
        let source = window(1, 0, 0, 10, 10);
        let first = window(2, 0, 0, 10, 10);
        let second = window(3, 0, 0, 10, 10);
        let ahead = window(4, 0, 0, 10, 10);
        let mut state = SearchState::new(&source, Direction::Right);

        assert!(state.consider(&first, 0));
        assert!(!state.consider(&second, 0));
        assert_eq!(state.best_distance(), Some(0));

        assert!(state.consider(&ahead, 300));
        assert!(!state.consider(&first, 0));
        assert_eq!(state.into_best().map(|w| w.id.value()), Some(4));
    }

    #[test]
    fn test_tie_break_by_extent() {
        let source = window(1, 0, 0, 10, 10);
        let narrow = window(2, 0, 0, 100, 10);
        let wide = window(3, 0, 0, 300, 10);

        let mut left = SearchState::new(&source, Direction::Left);
        left.consider(&narrow, 40);
        left.consider(&wide, 40);
        assert_eq!(left.into_best().map(|w| w.id.value()), Some(3));

        let mut right = SearchState::new(&source, Direction::Right);
        right.consider(&wide, 40);
        right.consider(&narrow, 40);
        assert_eq!(right.into_best().map(|w| w.id.value()), Some(2));
    }

    #[test]
    fn test_vertical_tie_break_by_height() {
        let source = window(1, 0, 0, 10, 10);
        let short = window(2, 0, 0, 10, 100);
        let tall = window(3, 0, 0, 10, 300);

        for (first, second) in [(&short, &tall), (&tall, &short)] {
            let mut up = SearchState::new(&source, Direction::Up);
            up.consider(first, 40);
            up.consider(second, 40);
            assert_eq!(up.into_best().map(|w| w.id.value()), Some(3));

            let mut down = SearchState::new(&source, Direction::Down);
            down.consider(first, 40);
            down.consider(second, 40);
            assert_eq!(down.into_best().map(|w| w.id.value()), Some(2));
        }
    }

    #[test]
    fn test_full_tie_prefers_lower_id() {
        let source = window(1, 0, 0, 10, 10);
        let a = window(7, 0, 0, 10, 10);
        let b = window(5, 0, 0, 10, 10);

        let mut forward = SearchState::new(&source, Direction::Down);
        forward.consider(&a, 20);
        forward.consider(&b, 20);

        let mut backward = SearchState::new(&source, Direction::Down);
        backward.consider(&b, 20);
        backward.consider(&a, 20);

        assert_eq!(forward.into_best().map(|w| w.id.value()), Some(5));
        assert_eq!(backward.into_best().map(|w| w.id.value()), Some(5));
    }
}
