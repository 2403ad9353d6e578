//! Edit operations, edit scripts and their replay.
//!
//! Positions recorded by the aligners are *raw*: they are expressed in
//! coordinates of the original source sequence, exactly as produced while
//! backtracking. Only [`replay`] converts them to live-buffer indices.
//!
//! - `Match`, `Substitute` and `Delete` carry the source index they consume.
//! - `Insert` carries the number of source symbols consumed before it, i.e.
//!   "insert in front of source index `position`".

mod replay;

pub use replay::{replay, AppliedOperation, Replay};

use std::fmt;

/// Kind of a single edit step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditKind {
    /// Source and target symbols are equal.
    Match,
    /// Source symbol replaced by a different target symbol.
    Substitute,
    /// Source symbol removed.
    Delete,
    /// Target symbol inserted.
    Insert,
}

impl EditKind {
    /// Whether the operation changes the length of the evolving sequence.
    pub fn changes_length(self) -> bool {
        matches!(self, EditKind::Delete | EditKind::Insert)
    }

    /// Short lowercase name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            EditKind::Match => "match",
            EditKind::Substitute => "substitute",
            EditKind::Delete => "delete",
            EditKind::Insert => "insert",
        }
    }
}

/// A single edit step with its raw position and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditOperation<T> {
    /// Symbol kept unchanged.
    Match {
        /// Consumed source index.
        position: usize,
        /// The matched symbol.
        symbol: T,
    },
    /// Symbol replaced.
    Substitute {
        /// Consumed source index.
        position: usize,
        /// Source symbol.
        from: T,
        /// Target symbol.
        to: T,
    },
    /// Symbol removed from the source.
    Delete {
        /// Consumed source index.
        position: usize,
        /// Removed symbol.
        symbol: T,
    },
    /// Symbol inserted from the target.
    Insert {
        /// Number of source symbols consumed before this insertion.
        position: usize,
        /// Inserted symbol.
        symbol: T,
    },
}

impl<T> EditOperation<T> {
    /// Operation kind.
    pub fn kind(&self) -> EditKind {
        match self {
            EditOperation::Match { .. } => EditKind::Match,
            EditOperation::Substitute { .. } => EditKind::Substitute,
            EditOperation::Delete { .. } => EditKind::Delete,
            EditOperation::Insert { .. } => EditKind::Insert,
        }
    }

    /// Raw position recorded by the aligner.
    pub fn position(&self) -> usize {
        match self {
            EditOperation::Match { position, .. }
            | EditOperation::Substitute { position, .. }
            | EditOperation::Delete { position, .. }
            | EditOperation::Insert { position, .. } => *position,
        }
    }

    /// Unit cost of the operation (0 for matches, 1 otherwise).
    pub fn cost(&self) -> usize {
        usize::from(self.kind() != EditKind::Match)
    }

    /// Same operation with its position moved by `offset`.
    pub fn shifted(mut self, offset: usize) -> Self {
        match &mut self {
            EditOperation::Match { position, .. }
            | EditOperation::Substitute { position, .. }
            | EditOperation::Delete { position, .. }
            | EditOperation::Insert { position, .. } => *position += offset,
        }
        self
    }
}

impl<T: fmt::Display> fmt::Display for EditOperation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Match { position, symbol } => write!(f, "match@{position} '{symbol}'"),
            Self::Substitute { position, from, to } => {
                write!(f, "substitute@{position} '{from}'->'{to}'")
            }
            Self::Delete { position, symbol } => write!(f, "delete@{position} '{symbol}'"),
            Self::Insert { position, symbol } => write!(f, "insert@{position} '{symbol}'"),
        }
    }
}

/// Chronological list of edit operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditScript<T> {
    operations: Vec<EditOperation<T>>,
}

impl<T> Default for EditScript<T> {
    fn default() -> Self {
        Self {
            operations: Vec::new(),
        }
    }
}

impl<T> EditScript<T> {
    /// Empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap operations that are already in chronological order.
    pub fn from_operations(operations: Vec<EditOperation<T>>) -> Self {
        Self { operations }
    }

    /// Append an operation.
    pub fn push(&mut self, operation: EditOperation<T>) {
        self.operations.push(operation);
    }

    /// Append every operation of `other`, shifting their positions by `offset`.
    ///
    /// Used to splice the right half of a divide-and-conquer split, whose
    /// positions are relative to its own sub-source.
    pub fn append_shifted(&mut self, other: EditScript<T>, offset: usize) {
        self.operations
            .extend(other.operations.into_iter().map(|op| op.shifted(offset)));
    }

    /// Script with every position moved by `offset`.
    pub fn shifted(self, offset: usize) -> Self {
        let mut out = EditScript::new();
        out.append_shifted(self, offset);
        out
    }

    /// Edit distance realised by the script (number of non-match operations).
    pub fn distance(&self) -> usize {
        self.operations.iter().map(EditOperation::cost).sum()
    }

    /// Number of operations of the given kind.
    pub fn count(&self, kind: EditKind) -> usize {
        self.operations
            .iter()
            .filter(|op| op.kind() == kind)
            .count()
    }

    /// Operations in application order.
    pub fn operations(&self) -> &[EditOperation<T>] {
        &self.operations
    }

    /// Iterate over operations in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, EditOperation<T>> {
        self.operations.iter()
    }

    /// Number of operations (matches included).
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the script holds no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Consume the script, returning the operations.
    pub fn into_operations(self) -> Vec<EditOperation<T>> {
        self.operations
    }
}

impl<T> FromIterator<EditOperation<T>> for EditScript<T> {
    fn from_iter<I: IntoIterator<Item = EditOperation<T>>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for EditScript<T> {
    type Item = EditOperation<T>;
    type IntoIter = std::vec::IntoIter<EditOperation<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a EditScript<T> {
    type Item = &'a EditOperation<T>;
    type IntoIter = std::slice::Iter<'a, EditOperation<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_counts_non_matches() {
        let script = EditScript::from_operations(vec![
            EditOperation::Match {
                position: 0,
                symbol: 'a',
            },
            EditOperation::Substitute {
                position: 1,
                from: 'b',
                to: 'x',
            },
            EditOperation::Insert {
                position: 2,
                symbol: 'y',
            },
        ]);
        assert_eq!(script.distance(), 2);
        assert_eq!(script.count(EditKind::Match), 1);
        assert_eq!(script.len(), 3);
    }

    #[test]
    fn shift_applies_to_every_kind() {
        let script: EditScript<char> = vec![
            EditOperation::Match {
                position: 0,
                symbol: 'a',
            },
            EditOperation::Substitute {
                position: 1,
                from: 'b',
                to: 'c',
            },
            EditOperation::Delete {
                position: 2,
                symbol: 'd',
            },
            EditOperation::Insert {
                position: 3,
                symbol: 'e',
            },
        ]
        .into_iter()
        .collect();

        let shifted = script.shifted(4);
        let positions: Vec<usize> = shifted.iter().map(EditOperation::position).collect();
        assert_eq!(positions, vec![4, 5, 6, 7]);
    }

    #[test]
    fn display_is_compact() {
        let op = EditOperation::Substitute {
            position: 2,
            from: 'k',
            to: 's',
        };
        assert_eq!(op.to_string(), "substitute@2 'k'->'s'");
        assert!(EditKind::Insert.changes_length());
        assert!(!EditKind::Substitute.changes_length());
    }
}
