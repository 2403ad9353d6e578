//! Full-matrix (Wagner–Fischer) aligner.
//!
//! Fills an `(m+1) x (n+1)` cost matrix together with a parallel trace of
//! the choice that produced each cell, then backtracks from `(m, n)`.

use std::fmt;
use std::ops::Index;

use super::Alignment;
use crate::script::{EditOperation, EditScript};

/// Which predecessor produced a cell's minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    /// Origin cell.
    Start,
    /// Diagonal step over equal symbols.
    Match,
    /// Diagonal step over different symbols.
    Substitute,
    /// Step down: consume a source symbol.
    Delete,
    /// Step right: consume a target symbol.
    Insert,
}

impl Choice {
    /// Single-letter tag used when printing the trace matrix.
    pub fn tag(self) -> char {
        match self {
            Choice::Start => '*',
            Choice::Match => 'M',
            Choice::Substitute => 'S',
            Choice::Delete => 'D',
            Choice::Insert => 'I',
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tag(), f)
    }
}

/// Predecessor directions in tie-break order: the first one reaching the
/// minimum wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Diagonal,
    Up,
    Left,
}

const PREFERENCE: [Step; 3] = [Step::Diagonal, Step::Up, Step::Left];

/// Dense row-major grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<V> {
    rows: usize,
    cols: usize,
    cells: Vec<V>,
}

impl<V: Clone> Grid<V> {
    fn filled(rows: usize, cols: usize, value: V) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<V> Grid<V> {
    /// Number of rows (`m + 1`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`n + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(i, j)`, if in range.
    pub fn get(&self, i: usize, j: usize) -> Option<&V> {
        if i < self.rows && j < self.cols {
            self.cells.get(i * self.cols + j)
        } else {
            None
        }
    }

    /// Row `i` as a slice, if in range.
    pub fn row(&self, i: usize) -> Option<&[V]> {
        (i < self.rows).then(|| &self.cells[i * self.cols..(i + 1) * self.cols])
    }

    /// Rows from top to bottom.
    pub fn iter_rows(&self) -> std::slice::Chunks<'_, V> {
        self.cells.chunks(self.cols)
    }

    fn set(&mut self, i: usize, j: usize, value: V) {
        self.cells[i * self.cols + j] = value;
    }
}

impl<V> Index<(usize, usize)> for Grid<V> {
    type Output = V;

    fn index(&self, (i, j): (usize, usize)) -> &V {
        &self.cells[i * self.cols + j]
    }
}

/// Prefix distances: `cost[(i, j)]` is the distance of `S[..i]` to `T[..j]`.
pub type CostMatrix = Grid<usize>;

/// Backtracking choices, parallel to [`CostMatrix`].
pub type TraceMatrix = Grid<Choice>;

/// Both matrices of a full alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTables {
    /// Cost matrix.
    pub cost: CostMatrix,
    /// Trace matrix.
    pub trace: TraceMatrix,
}

impl DpTables {
    /// Distance stored in the bottom-right cell.
    pub fn distance(&self) -> usize {
        self.cost[(self.cost.rows() - 1, self.cost.cols() - 1)]
    }
}

/// Fill the cost and trace matrices for `source` against `target`.
pub fn fill_tables<T: PartialEq>(source: &[T], target: &[T]) -> DpTables {
    let m = source.len();
    let n = target.len();
    let mut cost = Grid::filled(m + 1, n + 1, 0usize);
    let mut trace = Grid::filled(m + 1, n + 1, Choice::Start);

    for i in 1..=m {
        cost.set(i, 0, i);
        trace.set(i, 0, Choice::Delete);
    }
    for j in 1..=n {
        cost.set(0, j, j);
        trace.set(0, j, Choice::Insert);
    }

    for i in 1..=m {
        for j in 1..=n {
            let same = source[i - 1] == target[j - 1];
            let candidates = [
                cost[(i - 1, j - 1)] + usize::from(!same),
                cost[(i - 1, j)] + 1,
                cost[(i, j - 1)] + 1,
            ];
            let best = candidates[0].min(candidates[1]).min(candidates[2]);
            let step = PREFERENCE
                .iter()
                .zip(candidates)
                .find(|&(_, value)| value == best)
                .map(|(&step, _)| step)
                .unwrap_or(Step::Diagonal);

            let choice = match step {
                Step::Diagonal if same => Choice::Match,
                Step::Diagonal => Choice::Substitute,
                Step::Up => Choice::Delete,
                Step::Left => Choice::Insert,
            };
            cost.set(i, j, best);
            trace.set(i, j, choice);
        }
    }

    DpTables { cost, trace }
}

/// Walk the trace from `(m, n)` back to the origin and return the
/// chronological script with raw positions.
pub fn backtrack<T: Clone>(source: &[T], target: &[T], trace: &TraceMatrix) -> EditScript<T> {
    let mut i = source.len();
    let mut j = target.len();
    let mut rev_ops = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        let op = match trace[(i, j)] {
            Choice::Match => {
                i -= 1;
                j -= 1;
                EditOperation::Match {
                    position: i,
                    symbol: source[i].clone(),
                }
            }
            Choice::Substitute => {
                i -= 1;
                j -= 1;
                EditOperation::Substitute {
                    position: i,
                    from: source[i].clone(),
                    to: target[j].clone(),
                }
            }
            Choice::Delete => {
                i -= 1;
                EditOperation::Delete {
                    position: i,
                    symbol: source[i].clone(),
                }
            }
            Choice::Insert => {
                j -= 1;
                EditOperation::Insert {
                    position: i,
                    symbol: target[j].clone(),
                }
            }
            Choice::Start => break,
        };
        rev_ops.push(op);
    }

    rev_ops.reverse();
    EditScript::from_operations(rev_ops)
}

/// Distance and a minimal chronological script via the full matrix.
pub fn align_quadratic<T: Clone + PartialEq>(source: &[T], target: &[T]) -> Alignment<T> {
    align_quadratic_with_tables(source, target).0
}

/// Like [`align_quadratic`], also returning the filled matrices.
pub fn align_quadratic_with_tables<T: Clone + PartialEq>(
    source: &[T],
    target: &[T],
) -> (Alignment<T>, DpTables) {
    let tables = fill_tables(source, target);
    let script = backtrack(source, target, &tables.trace);
    let distance = tables.distance();
    tracing::debug!(
        source_len = source.len(),
        target_len = target.len(),
        distance,
        "quadratic alignment complete"
    );
    (Alignment { distance, script }, tables)
}
