use crate::model::{Direction, Rectangle};

/// Знаковая дистанция от центра исходного окна до центра кандидата вдоль
/// направления движения. Положительная - кандидат впереди.
pub fn signed_distance(direction: Direction, source: &Rectangle, candidate: &Rectangle) -> i64 {
    direction.strategy().distance(source, candidate)
}
