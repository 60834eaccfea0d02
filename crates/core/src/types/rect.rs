use serde::{Deserialize, Serialize};
use std::fmt;

/// Screen rectangle in desktop coordinates (origin + extent).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X={},Y={},Width={},Height={}", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_lists_all_components() {
        let rect = Rect::new(10.0, 20.0, 300.0, 40.5);
        assert_eq!(rect.to_string(), "X=10,Y=20,Width=300,Height=40.5");
    }

    #[rstest]
    #[case(Rect::new(0.0, 0.0, 0.0, 10.0), true)]
    #[case(Rect::new(0.0, 0.0, 10.0, -1.0), true)]
    #[case(Rect::new(5.0, 5.0, 1.0, 1.0), false)]
    fn emptiness(#[case] rect: Rect, #[case] expected: bool) {
        assert_eq!(rect.is_empty(), expected);
    }

    #[rstest]
    fn edges_are_derived_from_extent() {
        let rect = Rect::new(10.0, 20.0, 5.0, 7.0);
        assert_eq!(rect.right(), 15.0);
        assert_eq!(rect.bottom(), 27.0);
    }
}
