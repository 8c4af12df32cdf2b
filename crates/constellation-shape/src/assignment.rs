//! Minimum-cost perfect matching on square cost matrices.
//!
//! The Hungarian method with row and column potentials, O(n³). Rows are
//! added one at a time; each addition grows a shortest augmenting path
//! through the reduced costs `cost - u[row] - v[col]`, which stay
//! non-negative throughout.

use std::ops::Index;

/// Square matrix of non-negative assignment costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    size: usize,
    costs: Vec<i64>,
}

impl CostMatrix {
    /// Build an `size` x `size` matrix from a cost function of (row, column).
    pub fn from_fn(size: usize, mut cost: impl FnMut(usize, usize) -> i64) -> Self {
        let mut costs = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                costs.push(cost(row, col));
            }
        }
        Self { size, costs }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = i64;

    fn index(&self, (row, col): (usize, usize)) -> &i64 {
        &self.costs[row * self.size + col]
    }
}

/// An optimal one-to-one pairing of rows with columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Sum of the paired costs
    pub cost: i64,
    /// `columns[row]` is the column paired with `row`
    pub columns: Vec<usize>,
}

/// Solve the linear assignment problem for `matrix`.
pub fn min_cost_assignment(matrix: &CostMatrix) -> Assignment {
    const INF: i64 = i64::MAX / 4;
    let n = matrix.size();

    // 1-based so that index 0 can stand for "no row / virtual column"
    let mut u = vec![0i64; n + 1];
    let mut v = vec![0i64; n + 1];
    // row_of[col] is the row currently matched to col
    let mut row_of = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for row in 1..=n {
        row_of[0] = row;
        let mut col0 = 0;
        let mut min_v = vec![INF; n + 1];
        let mut used = vec![false; n + 1];

        loop {
            used[col0] = true;
            let row0 = row_of[col0];
            let mut delta = INF;
            let mut col1 = 0;
            for col in 1..=n {
                if used[col] {
                    continue;
                }
                let reduced = matrix[(row0 - 1, col - 1)] - u[row0] - v[col];
                if reduced < min_v[col] {
                    min_v[col] = reduced;
                    way[col] = col0;
                }
                if min_v[col] < delta {
                    delta = min_v[col];
                    col1 = col;
                }
            }
            for col in 0..=n {
                if used[col] {
                    u[row_of[col]] += delta;
                    v[col] -= delta;
                } else {
                    min_v[col] -= delta;
                }
            }
            col0 = col1;
            if row_of[col0] == 0 {
                break;
            }
        }

        // Flip the augmenting path back to the virtual column
        loop {
            let col1 = way[col0];
            row_of[col0] = row_of[col1];
            col0 = col1;
            if col0 == 0 {
                break;
            }
        }
    }

    let mut columns = vec![0usize; n];
    for col in 1..=n {
        columns[row_of[col] - 1] = col - 1;
    }
    let cost = columns
        .iter()
        .enumerate()
        .map(|(row, &col)| matrix[(row, col)])
        .sum();

    Assignment { cost, columns }
}
