use crate::StrError;
use crate::{ObjectiveTrait, ObjectiveType, Point, Quadratic, SinCos, Trajectory};
use russell_lab::deriv1_forward7;
use std::collections::HashMap;

/// Performs fixed-step gradient descent on a two-variable objective
///
/// ```text
/// x_{k+1} = x_k - τ ∇f(x_k)
/// ```
pub struct Descent {
    actual: Box<dyn ObjectiveTrait>,
    tau: f64,
    verbose: bool,
}

impl Descent {
    /// Allocates a new instance
    ///
    /// # Parameters
    ///
    /// * `objective_type` - selects the objective function
    /// * `params` - parameters of the objective (ignored by [ObjectiveType::SinCos])
    /// * `tau` - step size (τ)
    pub fn new(objective_type: ObjectiveType, params: HashMap<&str, f64>, tau: f64) -> Result<Self, StrError> {
        let actual: Box<dyn ObjectiveTrait> = match objective_type {
            ObjectiveType::Quadratic => Box::new(Quadratic::new(params)?),
            ObjectiveType::SinCos => Box::new(SinCos::new()),
        };
        Ok(Descent {
            actual,
            tau,
            verbose: false,
        })
    }

    /// Enables the printing of one line per iteration
    pub fn set_verbose(&mut self, flag: bool) -> &mut Self {
        self.verbose = flag;
        self
    }

    /// Returns the step size (τ)
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Returns the objective value f(x)
    pub fn value(&self, x: Point) -> f64 {
        self.actual.calc_f(x)
    }

    /// Returns the analytical gradient ∇f(x)
    pub fn gradient(&self, x: Point) -> Point {
        self.actual.calc_grad(x)
    }

    /// Approximates the gradient ∇f(x) by differentiating f numerically
    pub fn numerical_gradient(&self, x: Point) -> Result<Point, StrError> {
        let args = &mut 0;
        let d1 = deriv1_forward7(x.x1, args, |x1, _| Ok(self.actual.calc_f(Point::new(x1, x.x2))))?;
        let d2 = deriv1_forward7(x.x2, args, |x2, _| Ok(self.actual.calc_f(Point::new(x.x1, x2))))?;
        Ok(Point::new(d1, d2))
    }

    /// Performs one update
    ///
    /// Calculates x_new = x - τ ∇f(x)
    pub fn update(&self, x: Point) -> Point {
        x - self.tau * self.gradient(x)
    }

    /// Runs the descent for a fixed number of iterations
    ///
    /// The returned trajectory has `n_iterations + 1` points, the first one being `x_ini`.
    pub fn simulate(&self, x_ini: Point, n_iterations: usize) -> Trajectory {
        let mut trajectory = Trajectory::new(x_ini);
        let mut x = x_ini;
        for k in 1..=n_iterations {
            let grad = self.gradient(x);
            x = x - self.tau * grad;
            if self.verbose {
                println!(
                    "k = {}: x = ({}, {}), |∇f(x_{})| = {}",
                    k,
                    x.x1,
                    x.x2,
                    k - 1,
                    grad.norm()
                );
            }
            trajectory.push(x);
        }
        trajectory
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
