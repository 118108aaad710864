use crate::model::{Direction, Rectangle};

/// Лежит ли центр кандидата в поперечном "коридоре" исходного окна.
///
/// Для вертикального движения сравнивается горизонтальный центр кандидата с
/// `[source.x, source.x + source.width]`, для горизонтального - вертикальный
/// центр с `[source.y, source.y + source.height]`. Границы включительно.
pub fn is_aligned(direction: Direction, source: &Rectangle, candidate: &Rectangle) -> bool {
    let cross = direction.strategy().cross();

    let corridor_start = source.start(cross);
    let corridor_end = corridor_start + source.extent(cross);
    let center = candidate.center(cross);

    (corridor_start..=corridor_end).contains(&center)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: Rectangle = Rectangle::new(100, 100, 50, 50);

    #[test]
    fn test_directly_below_is_aligned() {
        let below = Rectangle::new(100, 200, 50, 50);
        assert!(is_aligned(Direction::Down, &SOURCE, &below));
        assert!(is_aligned(Direction::Up, &SOURCE, &below));
    }

    #[test]
    fn test_side_window_is_not_in_vertical_corridor() {
        // Центр X = 325, вне [100, 150]
        let aside = Rectangle::new(300, 200, 50, 50);
        assert!(!is_aligned(Direction::Down, &SOURCE, &aside));
        // Зато по вертикали центр 225 тоже вне [100, 150]
        assert!(!is_aligned(Direction::Right, &SOURCE, &aside));
    }

    #[test]
    fn test_corridor_bounds_are_inclusive() {
        // Центр X = 150 ровно на правой границе
        let on_edge = Rectangle::new(140, 300, 20, 20);
        assert!(is_aligned(Direction::Down, &SOURCE, &on_edge));

        // Центр X = 151
        let past_edge = Rectangle::new(141, 300, 20, 20);
        assert!(!is_aligned(Direction::Down, &SOURCE, &past_edge));
    }

    #[test]
    fn test_wide_candidate_uses_center_not_span() {
        // Кандидат перекрывает коридор, но центр далеко справа
        let wide = Rectangle::new(120, 300, 800, 50);
        assert!(!is_aligned(Direction::Down, &SOURCE, &wide));
    }
}
