use grad_descent_demo::{Descent, ObjectiveType, Point, render_table};
use plotpy::{Curve, Plot};
use russell_lab::approx_eq;
use std::collections::HashMap;

const SAVE_FIGURE: bool = false;

#[test]
fn test_sin_cos() {
    // Allocate the descent
    let tau = 1.0;
    let descent = Descent::new(ObjectiveType::SinCos, HashMap::new(), tau).unwrap();

    // Run four iterations from (1, 1)
    let x_ini = Point::new(1.0, 1.0);
    let nk = 4;
    let trajectory = descent.simulate(x_ini, nk);

    // Generate the plot
    if SAVE_FIGURE {
        let mut curve = Curve::new();
        curve
            .set_label("Gradient descent")
            .set_marker_style("o")
            .draw(&trajectory.x1_values(), &trajectory.x2_values());
        let mut plot = Plot::new();
        plot.add(&curve)
            .grid_labels_legend("x1", "x2")
            .set_figure_size_points(400.0, 400.0)
            .save("/tmp/grad_descent/test_sin_cos.svg")
            .unwrap();
    }

    // Check the first iterate against the closed form
    let c = f64::cos(1.0);
    let s = f64::sin(1.0);
    let x1 = trajectory.iterates()[0];
    approx_eq(x1.x1, 1.0 - c * c, 1e-15);
    approx_eq(x1.x2, 1.0 + s * s, 1e-15);

    // Check all points against reference results
    let xx_ref = [
        [1.0, 1.0],
        [0.7080734182735711, 1.708073418273571],
        [0.8120241205949227, 2.3523264264630623],
        [1.296649998176382, 2.8674415992006432],
        [1.5572651099332109, 3.1280614367281077],
    ];
    assert_eq!(trajectory.len(), nk + 1);
    for k in 0..nk + 1 {
        let x = trajectory.points()[k];
        approx_eq(x.x1, xx_ref[k][0], 1e-14);
        approx_eq(x.x2, xx_ref[k][1], 1e-14);
    }

    // Check the update rule
    let points = trajectory.points();
    for k in 1..nk + 1 {
        let grad = descent.gradient(points[k - 1]);
        assert_eq!(points[k], points[k - 1] - tau * grad);
    }

    // Check the table
    let table = render_table(&trajectory);
    println!("{}", table);
    assert_eq!(
        table,
        concat!(
            "           x1        x2\n",
            "k=1  0.708073  1.708073\n",
            "k=2  0.812024  2.352326\n",
            "k=3  1.296650  2.867442\n",
            "k=4  1.557265  3.128061\n",
        )
    );
    let lines: Vec<_> = table.lines().collect();
    assert_eq!(lines.len(), nk + 1);
    for k in 1..nk + 1 {
        let fields: Vec<_> = lines[k].split_whitespace().collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], format!("k={}", k));
    }

    // Run again and compare
    let again = descent.simulate(x_ini, nk);
    assert_eq!(again, trajectory);
    assert_eq!(render_table(&again), table);
}

#[test]
fn test_sin_cos_gradient_matches_primitive() {
    let descent = Descent::new(ObjectiveType::SinCos, HashMap::new(), 1.0).unwrap();
    let trajectory = descent.simulate(Point::new(1.0, 1.0), 4);
    for x in trajectory.points() {
        let ana = descent.gradient(*x);
        let num = descent.numerical_gradient(*x).unwrap();
        approx_eq(ana.x1, num.x1, 1e-8);
        approx_eq(ana.x2, num.x2, 1e-8);
    }
}
