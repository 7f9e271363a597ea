/// Selects the objective function
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectiveType {
    /// Quadratic bowl for testing purposes
    Quadratic,

    /// Trigonometric surface with ∇f = (cos x1 cos x2, -sin x1 sin x2)
    SinCos,
}
