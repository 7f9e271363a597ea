use crate::Point;

/// Holds the sequence of iterates produced by the descent
///
/// The first point is the initial guess; points are only ever appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    points: Vec<Point>,
}

impl Trajectory {
    /// Allocates a new instance starting at the initial guess
    pub fn new(x_ini: Point) -> Self {
        Trajectory { points: vec![x_ini] }
    }

    /// Appends the next iterate
    pub fn push(&mut self, x: Point) {
        self.points.push(x);
    }

    /// Returns the initial guess
    pub fn initial(&self) -> Point {
        self.points[0]
    }

    /// Returns the most recent point
    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Returns all points, including the initial guess
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the iterates x_1, x_2, ... (without the initial guess)
    pub fn iterates(&self) -> &[Point] {
        &self.points[1..]
    }

    /// Returns the number of points, including the initial guess
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns the first components of all points
    pub fn x1_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x1).collect()
    }

    /// Returns the second components of all points
    pub fn x2_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x2).collect()
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
