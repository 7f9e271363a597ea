use crate::{ObjectiveTrait, Point, StrError};
use std::collections::HashMap;

/// Quadratic model for testing purposes
///
/// ```text
/// f(x) = a (x1² + x2²) / 2
/// ∇f(x) = a x
/// ```
pub struct Quadratic {
    a: f64,
}

impl Quadratic {
    /// Allocates a new instance
    ///
    /// # Parameters
    ///
    /// * `a` - curvature (a > 0 gives a minimum at the origin)
    pub fn new(params: HashMap<&str, f64>) -> Result<Self, StrError> {
        let a = *params.get("a").ok_or("Parameter 'a' not found")?;
        Ok(Quadratic { a })
    }

    /// Calculates the k-th iterate of the fixed-step update
    ///
    /// ```text
    /// x_k = (1 - τ a)ᵏ x_0
    /// ```
    pub fn analytical_iterate(a: f64, tau: f64, x_ini: Point, k: usize) -> Point {
        f64::powi(1.0 - tau * a, k as i32) * x_ini
    }
}

impl ObjectiveTrait for Quadratic {
    fn calc_f(&self, x: Point) -> f64 {
        0.5 * self.a * (x.x1 * x.x1 + x.x2 * x.x2)
    }

    fn calc_grad(&self, x: Point) -> Point {
        self.a * x
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
