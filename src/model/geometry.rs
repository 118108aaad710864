use serde::{Deserialize, Serialize};
use std::fmt;

/// Геометрия окна в экранных координатах
///
/// `x`/`y` - левый верхний угол, размеры неотрицательные. Все производные
/// величины считаются в `i64`, поэтому переполнения не бывает даже на
/// краевых значениях `i32`/`u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    pub fn center_x(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width / 2)
    }

    pub fn center_y(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height / 2)
    }

    /// Начало прямоугольника вдоль оси
    pub fn start(&self, axis: Axis) -> i64 {
        match axis {
            Axis::Horizontal => i64::from(self.x),
            Axis::Vertical => i64::from(self.y),
        }
    }

    /// Размер прямоугольника вдоль оси
    pub fn extent(&self, axis: Axis) -> i64 {
        match axis {
            Axis::Horizontal => i64::from(self.width),
            Axis::Vertical => i64::from(self.height),
        }
    }

    pub fn center(&self, axis: Axis) -> i64 {
        match axis {
            Axis::Horizontal => self.center_x(),
            Axis::Vertical => self.center_y(),
        }
    }

    /// Полностью ли прямоугольник за пределами экрана
    pub fn is_outside(&self, screen: &ScreenBounds) -> bool {
        self.right() <= 0
            || self.bottom() <= 0
            || i64::from(self.x) >= i64::from(screen.width)
            || i64::from(self.y) >= i64::from(screen.height)
    }

    /// Сдвиг в систему координат с началом в `(origin_x, origin_y)`
    pub fn translated(&self, origin_x: i32, origin_y: i32) -> Self {
        Self {
            x: self.x.saturating_sub(origin_x),
            y: self.y.saturating_sub(origin_y),
            ..*self
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Ось экрана
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Размеры экрана, на котором находится активное окно
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: u32,
    pub height: u32,
}

impl ScreenBounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ScreenBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
