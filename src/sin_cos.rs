use crate::{ObjectiveTrait, Point};

/// Implements the trigonometric objective
///
/// The gradient is given by
///
/// ```text
///  ∂f
/// ─── = cos(x1) cos(x2)
/// ∂x1
///
///  ∂f
/// ─── = -sin(x1) sin(x2)
/// ∂x2
/// ```
///
/// The gradient is the defining quantity. The primitive below is only the simplest
/// function consistent with it and serves to verify the gradient numerically:
///
/// ```text
/// f(x1, x2) = sin(x1) cos(x2)
/// ```
#[derive(Default)]
pub struct SinCos;

impl SinCos {
    /// Allocates a new instance
    pub fn new() -> Self {
        SinCos
    }
}

impl ObjectiveTrait for SinCos {
    /// Calculates f = sin(x1) cos(x2)
    fn calc_f(&self, x: Point) -> f64 {
        f64::sin(x.x1) * f64::cos(x.x2)
    }

    /// Calculates ∇f
    ///
    /// Non-finite input yields non-finite output.
    fn calc_grad(&self, x: Point) -> Point {
        let (s1, c1) = f64::sin_cos(x.x1);
        let (s2, c2) = f64::sin_cos(x.x2);
        Point::new(c1 * c2, -s1 * s2)
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
