//! The three aligners and the score-row engine they share.
//!
//! - [`quadratic`]: full cost and trace matrices, backtracked script.
//! - [`hirschberg`]: same contract in linear auxiliary space.
//! - [`banded`]: thresholded distance only, with early abandonment.

pub mod banded;
pub mod hirschberg;
pub mod quadratic;
pub mod score_row;

pub use banded::{distance_within_threshold, Threshold};
pub use hirschberg::align_divide_and_conquer;
pub use quadratic::{
    align_quadratic, align_quadratic_with_tables, Choice, CostMatrix, DpTables, TraceMatrix,
};
pub use score_row::{levenshtein_distance, normalized_distance, score_row, score_row_reversed};

use crate::script::EditScript;

/// Distance together with a script realising it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment<T> {
    /// Minimum number of unit-cost edits.
    pub distance: usize,
    /// Chronological script with raw positions.
    pub script: EditScript<T>,
}

/// Script-producing aligner selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Full matrix (Wagner–Fischer).
    #[default]
    Quadratic,
    /// Linear-space divide and conquer (Hirschberg).
    DivideAndConquer,
}

impl Strategy {
    /// Align `source` to `target` with this strategy.
    pub fn align<T: Clone + PartialEq>(self, source: &[T], target: &[T]) -> Alignment<T> {
        match self {
            Strategy::Quadratic => align_quadratic(source, target),
            Strategy::DivideAndConquer => {
                let script = align_divide_and_conquer(source, target);
                Alignment {
                    distance: script.distance(),
                    script,
                }
            }
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Quadratic => "Wagner–Fischer (full DP)",
            Strategy::DivideAndConquer => "Hirschberg (divide & conquer)",
        }
    }
}
