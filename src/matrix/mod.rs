//! Pairwise distance matrix over labelled sequences.
//!
//! Only the upper triangle is computed; the lower triangle is mirrored from
//! it and the diagonal stays zero.

use std::collections::HashSet;
use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};

use crate::align::{levenshtein_distance, normalized_distance};
use crate::AlignError;

/// Matrix computation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Divide each distance by the combined length of the pair.
    pub normalize: bool,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self { normalize: true }
    }
}

impl MatrixConfig {
    /// Toggle normalisation.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

/// A named sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSequence {
    /// Row/column label.
    pub label: String,
    /// Sequence symbols.
    pub sequence: Vec<char>,
}

impl LabeledSequence {
    /// Construct from a label and the sequence text.
    pub fn new(label: impl Into<String>, sequence: &str) -> Self {
        Self {
            label: label.into(),
            sequence: sequence.chars().collect(),
        }
    }
}

/// Parse a `label,sequence` table; the first line is a header.
pub fn read_labeled_csv<R: BufRead>(reader: R) -> Result<Vec<LabeledSequence>> {
    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for (line_no, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (label, sequence) = line.split_once(',').ok_or(AlignError::MalformedRecord {
            line: line_no + 1,
            reason: "expected `label,sequence`".to_string(),
        })?;
        let label = label.trim();
        if label.is_empty() {
            return Err(AlignError::MalformedRecord {
                line: line_no + 1,
                reason: "empty label".to_string(),
            }
            .into());
        }
        if !seen.insert(label.to_string()) {
            return Err(AlignError::DuplicateLabel(label.to_string()).into());
        }
        records.push(LabeledSequence::new(label, sequence.trim()));
    }

    Ok(records)
}

/// Symmetric matrix of pairwise distances.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Compute every pairwise distance of `sequences`.
    pub fn compute(sequences: &[LabeledSequence], config: &MatrixConfig) -> Self {
        let n = sequences.len();
        let mut values = vec![0.0; n * n];

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&sequences[i].sequence, &sequences[j].sequence);
                let d = if config.normalize {
                    normalized_distance(a, b)
                } else {
                    levenshtein_distance(a, b) as f64
                };
                values[i * n + j] = d;
                values[j * n + i] = d;
            }
            tracing::info!(row = i, label = %sequences[i].label, "distance row complete");
        }

        Self {
            labels: sequences.iter().map(|s| s.label.clone()).collect(),
            values,
        }
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Row and column labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Entry `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        let n = self.len();
        (i < n && j < n).then(|| self.values[i * n + j])
    }

    /// Write as CSV: a header of labels, then one labelled row per sequence.
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> Result<()> {
        let n = self.len();
        writeln!(writer, ",{}", self.labels.join(","))?;
        for (i, label) in self.labels.iter().enumerate() {
            write!(writer, "{label}")?;
            for value in &self.values[i * n..(i + 1) * n] {
                write!(writer, ",{value}")?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Render the CSV form into a string.
    pub fn render_csv(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer).map_err(|_| anyhow!("rendered matrix is not valid UTF-8"))
    }
}
