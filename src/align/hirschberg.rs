//! Linear-space divide-and-conquer (Hirschberg) aligner.
//!
//! The source is split at its midpoint; a forward score row over the left
//! half and a backward one over the right half locate the target column
//! where an optimal path crosses the split. Both halves are then solved
//! independently and the right half's positions are shifted by `mid`.

use super::quadratic::align_quadratic;
use super::score_row::{score_row, score_row_reversed};
use crate::script::{EditOperation, EditScript};

/// Minimal chronological script in `O(m + n)` auxiliary space.
///
/// Positions follow the same raw convention as the full-matrix aligner, so
/// the script can be handed to [`crate::script::replay`] unchanged.
pub fn align_divide_and_conquer<T>(source: &[T], target: &[T]) -> EditScript<T>
where
    T: Clone + PartialEq,
{
    let script = solve(source, target);
    tracing::debug!(
        source_len = source.len(),
        target_len = target.len(),
        distance = script.distance(),
        "divide-and-conquer alignment complete"
    );
    script
}

fn solve<T: Clone + PartialEq>(a: &[T], b: &[T]) -> EditScript<T> {
    if a.is_empty() {
        return b
            .iter()
            .map(|symbol| EditOperation::Insert {
                position: 0,
                symbol: symbol.clone(),
            })
            .collect();
    }
    if b.is_empty() {
        return a
            .iter()
            .enumerate()
            .map(|(position, symbol)| EditOperation::Delete {
                position,
                symbol: symbol.clone(),
            })
            .collect();
    }
    if a.len() == 1 || b.len() == 1 {
        return align_quadratic(a, b).script;
    }

    let mid = a.len() / 2;
    let k = split_column(&a[..mid], &a[mid..], b);

    let mut script = solve(&a[..mid], &b[..k]);
    script.append_shifted(solve(&a[mid..], &b[k..]), mid);
    script
}

/// Column `k` minimising `forward[k] + backward[len(b) - k]`, smallest on ties.
fn split_column<T: PartialEq>(left: &[T], right: &[T], b: &[T]) -> usize {
    let forward = {
        let span = tracing::trace_span!("score_forward", rows = left.len(), cols = b.len());
        let _entered = span.enter();
        score_row(left, b)
    };
    let backward = {
        let span = tracing::trace_span!("score_backward", rows = right.len(), cols = b.len());
        let _entered = span.enter();
        score_row_reversed(right, b)
    };

    let n = b.len();
    let mut best_k = 0usize;
    let mut best_val = usize::MAX;
    for k in 0..=n {
        let v = forward[k] + backward[n - k];
        if v < best_val {
            best_val = v;
            best_k = k;
        }
    }
    tracing::trace!(split = best_k, cost = best_val, "split column chosen");
    best_k
}
