//! Minimum-cost perfect matching on a square cost matrix.
//!
//! Primal-dual Kuhn-Munkres in its shortest-augmenting-path form, O(n^3).
//! Row potentials `u` and column potentials `v` keep every reduced cost
//! `cost[i][j] - u[i] - v[j]` non-negative and every matched cell tight, so
//! the matching is globally optimal when the last row is inserted.
//!
//! Rows are inserted in ascending order and each label scan walks columns in
//! ascending order, replacing the running minimum only on a strictly smaller
//! slack. Equal choices therefore resolve to the lowest column index, and the
//! result depends on nothing but the matrix.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{MatchError, Result};

/// A one-to-one mapping of rows onto columns and its cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    row_to_col: Vec<usize>,
    total_cost: f64,
}

impl Assignment {
    pub fn len(&self) -> usize {
        self.row_to_col.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_to_col.is_empty()
    }

    /// Sum of the matrix entries at the matched cells.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn col_for_row(&self, row: usize) -> Option<usize> {
        self.row_to_col.get(row).copied()
    }

    /// Row indices, `0..n` in order.
    pub fn row_indices(&self) -> Vec<usize> {
        (0..self.row_to_col.len()).collect()
    }

    /// Column matched to each row, aligned with [`Self::row_indices`].
    pub fn col_indices(&self) -> &[usize] {
        &self.row_to_col
    }

    /// `(row, col)` pairs in row order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_to_col.iter().copied().enumerate()
    }
}

/// Solve the assignment problem over a square, non-negative cost matrix.
///
/// Fails with [`MatchError::ShapeError`] when a row length differs from the
/// row count, and with [`MatchError::InvalidCost`] on a negative or
/// non-finite entry. Negative costs are rejected rather than clamped.
pub fn solve_assignment(costs: &[Vec<f64>]) -> Result<Assignment> {
    validate(costs)?;

    let solution = kuhn_munkres(costs);
    let total_cost: f64 = solution
        .row_to_col
        .iter()
        .enumerate()
        .map(|(row, &col)| costs[row][col])
        .sum();

    debug!(
        size = costs.len(),
        total_cost,
        dual_objective = solution.dual_objective(),
        "solved assignment"
    );

    Ok(Assignment {
        row_to_col: solution.row_to_col,
        total_cost,
    })
}

fn validate(costs: &[Vec<f64>]) -> Result<()> {
    let n = costs.len();
    for (row, entries) in costs.iter().enumerate() {
        if entries.len() != n {
            warn!(row, expected = n, found = entries.len(), "cost matrix is not square");
            return Err(MatchError::ShapeError {
                row,
                expected: n,
                found: entries.len(),
            });
        }
        if let Some((col, &value)) = entries
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite() || **value < 0.0)
        {
            warn!(row, col, value, "invalid cost entry");
            return Err(MatchError::InvalidCost { row, col, value });
        }
    }
    Ok(())
}

/// Optimal matching plus the final dual potentials.
#[derive(Debug)]
struct Solution {
    row_to_col: Vec<usize>,
    row_potential: Vec<f64>,
    col_potential: Vec<f64>,
}

impl Solution {
    /// `sum(u) + sum(v)`; equals the optimal cost by LP duality.
    fn dual_objective(&self) -> f64 {
        self.row_potential.iter().sum::<f64>() + self.col_potential.iter().sum::<f64>()
    }
}

/// Working arrays use 1-based rows and columns. Column 0 is a virtual root
/// holding the row being inserted in the current phase.
fn kuhn_munkres(costs: &[Vec<f64>]) -> Solution {
    let n = costs.len();

    let mut u = vec![0.0; n + 1];
    let mut v = vec![0.0; n + 1];
    // Row currently matched to each column (0 = free).
    let mut owner = vec![0usize; n + 1];
    // Predecessor column on the shortest path tree.
    let mut way = vec![0usize; n + 1];
    let mut min_slack = vec![f64::INFINITY; n + 1];
    let mut used = vec![false; n + 1];

    for row in 1..=n {
        owner[0] = row;
        let mut j0 = 0;
        min_slack.fill(f64::INFINITY);
        used.fill(false);

        // Grow the Dijkstra tree until it reaches a free column.
        loop {
            used[j0] = true;
            let i0 = owner[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0;

            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let reduced = costs[i0 - 1][j - 1] - u[i0] - v[j];
                if reduced < min_slack[j] {
                    min_slack[j] = reduced;
                    way[j] = j0;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    j1 = j;
                }
            }

            for j in 0..=n {
                if used[j] {
                    u[owner[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_slack[j] -= delta;
                }
            }

            j0 = j1;
            if owner[j0] == 0 {
                break;
            }
        }

        // Flip the matching along the path back to the root.
        loop {
            let j1 = way[j0];
            owner[j0] = owner[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }

        trace!(row = row - 1, "augmented");
    }

    let mut row_to_col = vec![0usize; n];
    for col in 1..=n {
        row_to_col[owner[col] - 1] = col - 1;
    }

    Solution {
        row_to_col,
        row_potential: u[1..].to_vec(),
        col_potential: v[1..].to_vec(),
    }
}
