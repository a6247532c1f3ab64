#![forbid(unsafe_code)]

//! Pointer-space geometry.
//!
//! Coordinates are viewport pixels with the origin at the top-left corner and
//! `y` growing downward, so upward motion shows up as a negative `dy`.

/// A pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The viewport origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to `self`.
    #[inline]
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Delta {
        Delta::new(self.x - origin.x, self.y - origin.y)
    }

    /// Translate this point by `delta`.
    #[inline]
    #[must_use]
    pub fn offset(self, delta: Delta) -> Point {
        Point::new(self.x + delta.dx, self.y + delta.dy)
    }
}

/// Displacement between two pointer positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    /// No displacement.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new displacement.
    #[inline]
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// The horizontal component only; `dy` is dropped.
    #[inline]
    #[must_use]
    pub const fn horizontal(self) -> Self {
        Self::new(self.dx, 0.0)
    }

    /// True when both components are exactly zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_from_is_target_minus_origin() {
        let start = Point::new(10.0, 40.0);
        let end = Point::new(25.5, -61.0);
        assert_eq!(end.delta_from(start), Delta::new(15.5, -101.0));
    }

    #[test]
    fn offset_inverts_delta_from() {
        let start = Point::new(-3.0, 7.0);
        let end = Point::new(12.0, 2.0);
        assert_eq!(start.offset(end.delta_from(start)), end);
    }

    #[test]
    fn horizontal_drops_vertical_component() {
        assert_eq!(Delta::new(4.0, -300.0).horizontal(), Delta::new(4.0, 0.0));
        assert!(Delta::ZERO.is_zero());
        assert!(!Delta::new(0.0, 1.0).is_zero());
    }
}
