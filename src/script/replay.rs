use super::{EditKind, EditOperation, EditScript};

/// An operation as it was actually applied to the live buffer.
///
/// `position` is the drift-corrected index. Payloads read from the buffer
/// are `None` when the corrected index fell outside the buffer, in which
/// case the buffer was left untouched for that step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AppliedOperation<T> {
    /// Symbol observed at `position`.
    Match {
        /// Effective index.
        position: isize,
        /// Symbol found in the buffer.
        symbol: Option<T>,
    },
    /// Symbol at `position` overwritten with `to`.
    Substitute {
        /// Effective index.
        position: isize,
        /// Symbol found in the buffer before the write.
        from: Option<T>,
        /// Symbol written.
        to: T,
    },
    /// Symbol at `position` removed.
    Delete {
        /// Effective index.
        position: isize,
        /// Symbol removed from the buffer.
        symbol: Option<T>,
    },
    /// Symbol inserted in front of `position`.
    Insert {
        /// Effective index, clamped into `[0, len]`.
        position: isize,
        /// Inserted symbol.
        symbol: T,
    },
}

impl<T> AppliedOperation<T> {
    /// Operation kind.
    pub fn kind(&self) -> EditKind {
        match self {
            AppliedOperation::Match { .. } => EditKind::Match,
            AppliedOperation::Substitute { .. } => EditKind::Substitute,
            AppliedOperation::Delete { .. } => EditKind::Delete,
            AppliedOperation::Insert { .. } => EditKind::Insert,
        }
    }

    /// Effective (drift-corrected) position.
    pub fn position(&self) -> isize {
        match self {
            AppliedOperation::Match { position, .. }
            | AppliedOperation::Substitute { position, .. }
            | AppliedOperation::Delete { position, .. }
            | AppliedOperation::Insert { position, .. } => *position,
        }
    }
}

/// Outcome of replaying a script against its source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Replay<T> {
    /// Buffer after the last operation.
    pub final_sequence: Vec<T>,
    /// Buffer states; element 0 is the untouched source, then one per operation.
    pub snapshots: Vec<Vec<T>>,
    /// Operations with effective positions and observed payloads.
    pub applied: Vec<AppliedOperation<T>>,
    /// Steps whose effective position fell outside the buffer.
    pub anomalies: usize,
}

impl<T> Replay<T> {
    /// Whether every step landed inside the buffer.
    pub fn is_consistent(&self) -> bool {
        self.anomalies == 0
    }
}

/// Apply `script` to a copy of `source`, correcting raw positions for drift.
///
/// A prior insert at raw position `q` moves every later position `>= q` one
/// to the right; a prior delete at raw `q` moves every later position `> q`
/// one to the left. Matches and substitutions never shift anything.
pub fn replay<T: Clone>(source: &[T], script: &EditScript<T>) -> Replay<T> {
    let ops = script.operations();
    let mut buffer = source.to_vec();
    let mut snapshots = Vec::with_capacity(ops.len() + 1);
    let mut applied = Vec::with_capacity(ops.len());
    let mut anomalies = 0usize;

    snapshots.push(buffer.clone());

    for (step, op) in ops.iter().enumerate() {
        let position = effective_position(op.position(), &ops[..step]);
        let index = usize::try_from(position)
            .ok()
            .filter(|&idx| idx < buffer.len());

        let record = match (op, index) {
            (EditOperation::Match { .. }, Some(idx)) => AppliedOperation::Match {
                position,
                symbol: Some(buffer[idx].clone()),
            },
            (EditOperation::Substitute { to, .. }, Some(idx)) => {
                let from = std::mem::replace(&mut buffer[idx], to.clone());
                AppliedOperation::Substitute {
                    position,
                    from: Some(from),
                    to: to.clone(),
                }
            }
            (EditOperation::Delete { .. }, Some(idx)) => AppliedOperation::Delete {
                position,
                symbol: Some(buffer.remove(idx)),
            },
            (EditOperation::Insert { symbol, .. }, _) => {
                let clamped = position.clamp(0, buffer.len() as isize);
                if clamped != position {
                    anomalies += 1;
                    tracing::warn!(
                        step,
                        position,
                        clamped,
                        "insert position clamped into buffer"
                    );
                }
                buffer.insert(clamped as usize, symbol.clone());
                AppliedOperation::Insert {
                    position: clamped,
                    symbol: symbol.clone(),
                }
            }
            (other, None) => {
                anomalies += 1;
                tracing::warn!(
                    step,
                    position,
                    len = buffer.len(),
                    kind = other.kind().name(),
                    "effective position outside buffer; step skipped"
                );
                unapplied(other, position)
            }
        };

        applied.push(record);
        snapshots.push(buffer.clone());
    }

    Replay {
        final_sequence: buffer,
        snapshots,
        applied,
        anomalies,
    }
}

fn effective_position<T>(raw: usize, prior: &[EditOperation<T>]) -> isize {
    prior.iter().fold(raw as isize, |acc, op| match op {
        EditOperation::Insert { position, .. } if *position <= raw => acc + 1,
        EditOperation::Delete { position, .. } if *position < raw => acc - 1,
        _ => acc,
    })
}

fn unapplied<T: Clone>(op: &EditOperation<T>, position: isize) -> AppliedOperation<T> {
    match op {
        EditOperation::Match { .. } => AppliedOperation::Match {
            position,
            symbol: None,
        },
        EditOperation::Substitute { to, .. } => AppliedOperation::Substitute {
            position,
            from: None,
            to: to.clone(),
        },
        EditOperation::Delete { .. } => AppliedOperation::Delete {
            position,
            symbol: None,
        },
        EditOperation::Insert { symbol, .. } => AppliedOperation::Insert {
            position,
            symbol: symbol.clone(),
        },
    }
}
