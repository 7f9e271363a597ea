use crate::Point;

pub trait ObjectiveTrait {
    /// Calculates f(x1, x2)
    fn calc_f(&self, x: Point) -> f64;

    /// Calculates ∇f = (∂f/∂x1, ∂f/∂x2)
    fn calc_grad(&self, x: Point) -> Point;
}
