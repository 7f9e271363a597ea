use std::ops::{Add, Mul, Neg, Sub};

/// Holds a point (x1, x2) of the plane
///
/// Points are treated as values: every update produces a new point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x1: f64,
    pub x2: f64,
}

impl Point {
    /// Allocates a new instance
    pub fn new(x1: f64, x2: f64) -> Self {
        Point { x1, x2 }
    }

    /// Returns the Euclidean norm √(x1² + x2²)
    pub fn norm(&self) -> f64 {
        f64::sqrt(self.x1 * self.x1 + self.x2 * self.x2)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point::new(self.x1 + other.x1, self.x2 + other.x2)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point::new(self.x1 - other.x1, self.x2 - other.x2)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x1, -self.x2)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, alpha: f64) -> Point {
        Point::new(alpha * self.x1, alpha * self.x2)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;
    fn mul(self, v: Point) -> Point {
        v * self
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
