use grad_descent_demo::{Descent, ObjectiveType, Point, StrError, render_table};
use std::collections::HashMap;

fn main() -> Result<(), StrError> {
    run()
}

/// Runs four fixed-step iterations from (1, 1) and prints the iterates
fn run() -> Result<(), StrError> {
    let tau = 1.0;
    let x_ini = Point::new(1.0, 1.0);
    let n_iterations = 4;

    let descent = Descent::new(ObjectiveType::SinCos, HashMap::new(), tau)?;
    let trajectory = descent.simulate(x_ini, n_iterations);
    print!("{}", render_table(&trajectory));
    Ok(())
}
