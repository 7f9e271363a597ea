use crate::Trajectory;

const COLUMN_LABELS: [&str; 2] = ["x1", "x2"];
const N_DECIMALS: usize = 6;

/// Renders the iterates of a trajectory as a labeled table
///
/// The initial guess is omitted; rows are labeled `k=1`, `k=2`, ... in ascending order.
///
/// ```text
///            x1        x2
/// k=1  0.708073  1.708073
/// k=2  0.812024  2.352326
/// ```
pub fn render_table(trajectory: &Trajectory) -> String {
    let row_labels: Vec<String> = (1..=trajectory.iterates().len()).map(|k| format!("k={}", k)).collect();
    let cells: Vec<[String; 2]> = trajectory
        .iterates()
        .iter()
        .map(|p| [format!("{:.*}", N_DECIMALS, p.x1), format!("{:.*}", N_DECIMALS, p.x2)])
        .collect();

    let label_width = row_labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let mut widths = COLUMN_LABELS.map(|l| l.len());
    for row in &cells {
        for j in 0..2 {
            widths[j] = usize::max(widths[j], row[j].len());
        }
    }

    let mut buffer = format!("{:w$}", "", w = label_width);
    for j in 0..2 {
        buffer.push_str(&format!("  {:>w$}", COLUMN_LABELS[j], w = widths[j]));
    }
    buffer.push('\n');
    for (label, row) in row_labels.iter().zip(&cells) {
        buffer.push_str(&format!("{:<w$}", label, w = label_width));
        for j in 0..2 {
            buffer.push_str(&format!("  {:>w$}", row[j], w = widths[j]));
        }
        buffer.push('\n');
    }
    buffer
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
