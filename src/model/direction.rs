use super::geometry::{Axis, Rectangle};
use crate::error::KeynavError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Направление перехода фокуса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Какой размер окна выигрывает при равной дистанции
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtentPreference {
    Larger,
    Smaller,
}

/// Всё, чем направления отличаются друг от друга
///
/// `sign` переводит разность центров в дистанцию "вперёд": +1 для движения
/// в сторону роста координаты (вниз/вправо), -1 для обратного.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionStrategy {
    pub travel: Axis,
    pub sign: i64,
    pub extent_preference: ExtentPreference,
}

impl DirectionStrategy {
    /// Поперечная ось, по которой проверяется выравнивание
    pub fn cross(&self) -> Axis {
        self.travel.perpendicular()
    }

    /// Знаковая дистанция между центрами вдоль оси движения
    pub fn distance(&self, source: &Rectangle, candidate: &Rectangle) -> i64 {
        self.sign * (candidate.center(self.travel) - source.center(self.travel))
    }

    /// Предпочтительнее ли `challenger` чем `incumbent` по размеру вдоль оси движения.
    /// `None` - размеры равны.
    pub fn prefers_extent(&self, challenger: &Rectangle, incumbent: &Rectangle) -> Option<bool> {
        let challenger = challenger.extent(self.travel);
        let incumbent = incumbent.extent(self.travel);
        if challenger == incumbent {
            return None;
        }
        Some(match self.extent_preference {
            ExtentPreference::Larger => challenger > incumbent,
            ExtentPreference::Smaller => challenger < incumbent,
        })
    }
}

const UP: DirectionStrategy = DirectionStrategy {
    travel: Axis::Vertical,
    sign: -1,
    extent_preference: ExtentPreference::Larger,
};

const DOWN: DirectionStrategy = DirectionStrategy {
    travel: Axis::Vertical,
    sign: 1,
    extent_preference: ExtentPreference::Smaller,
};

const LEFT: DirectionStrategy = DirectionStrategy {
    travel: Axis::Horizontal,
    sign: -1,
    extent_preference: ExtentPreference::Larger,
};

const RIGHT: DirectionStrategy = DirectionStrategy {
    travel: Axis::Horizontal,
    sign: 1,
    extent_preference: ExtentPreference::Smaller,
};

impl Direction {
    #[allow(dead_code)]
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn strategy(self) -> &'static DirectionStrategy {
        match self {
            Direction::Up => &UP,
            Direction::Down => &DOWN,
            Direction::Left => &LEFT,
            Direction::Right => &RIGHT,
        }
    }

    #[allow(dead_code)]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = KeynavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(KeynavError::Parse(format!(
                "Неизвестное направление '{}', ожидается up|down|left|right",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("DOWN".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!(" Left ".parse::<Direction>().unwrap(), Direction::Left);
        assert!("diagonal".parse::<Direction>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
        }
    }

    #[test]
    fn test_distance_sign_convention() {
        let source = Rectangle::new(100, 100, 50, 50);
        let below = Rectangle::new(100, 200, 50, 50);
        let right = Rectangle::new(300, 100, 50, 50);

        assert_eq!(Direction::Down.strategy().distance(&source, &below), 100);
        assert_eq!(Direction::Up.strategy().distance(&source, &below), -100);
        assert_eq!(Direction::Right.strategy().distance(&source, &right), 200);
        assert_eq!(Direction::Left.strategy().distance(&source, &right), -200);
    }

    #[test]
    fn test_opposite_directions_share_axis() {
        for direction in Direction::ALL {
            let forward = direction.strategy();
            let backward = direction.opposite().strategy();
            assert_eq!(forward.travel, backward.travel);
            assert_eq!(forward.sign, -backward.sign);
            assert_ne!(forward.extent_preference, backward.extent_preference);
        }
    }

    #[test]
    fn test_extent_preference() {
        let wide = Rectangle::new(0, 0, 200, 50);
        let narrow = Rectangle::new(0, 0, 100, 50);

        assert_eq!(Direction::Left.strategy().prefers_extent(&wide, &narrow), Some(true));
        assert_eq!(Direction::Right.strategy().prefers_extent(&wide, &narrow), Some(false));
        // Для вертикали сравнивается высота, а она одинаковая
        assert_eq!(Direction::Up.strategy().prefers_extent(&wide, &narrow), None);

        let tall = Rectangle::new(0, 0, 50, 200);
        let short = Rectangle::new(0, 0, 50, 100);
        assert_eq!(Direction::Up.strategy().prefers_extent(&tall, &short), Some(true));
        assert_eq!(Direction::Down.strategy().prefers_extent(&tall, &short), Some(false));
    }
}
