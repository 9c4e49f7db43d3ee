//! Text rendering of a solution, in the format users see on stdout.

use std::fmt::Write;

use crate::runner::Solution;

/// Render a solution as printed output.
///
/// Solved:
///
/// ```text
/// Number of operations: 2
/// Operations:
/// 1. Fill small jug
/// 2. Transfer from small jug to large jug
/// ```
///
/// Unreachable: `No solution.`
#[must_use]
pub fn render(solution: &Solution) -> String {
    match solution {
        Solution::Solved {
            operation_count,
            operations,
            ..
        } => {
            let mut out = format!("Number of operations: {operation_count}\nOperations:\n");
            for (i, op) in operations.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", i + 1, op.label());
            }
            out
        }
        Solution::NoSolution => "No solution.\n".to_string(),
    }
}
