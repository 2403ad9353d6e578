//! Plain-text rendering of alignment results.

use std::fmt::{Display, Write};

use crate::align::quadratic::Grid;
use crate::align::DpTables;
use crate::script::{AppliedOperation, Replay};

/// Summary block: distance, indexed snapshots, applied operations.
pub fn render_alignment<T: Display>(title: &str, distance: usize, replay: &Replay<T>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "==== {title} ====");
    let _ = writeln!(out, "Edit distance: {distance}");
    let _ = writeln!(out, "\nTransformations (step-by-step):");
    for (idx, state) in replay.snapshots.iter().enumerate() {
        let _ = writeln!(out, "  [{idx:2}] {}", join(state));
    }
    let _ = writeln!(out, "\nOperations (applied, in order):");
    for op in &replay.applied {
        let _ = writeln!(out, "  {}", render_applied(op));
    }
    if replay.anomalies > 0 {
        let _ = writeln!(
            out,
            "\nWarning: {} step(s) fell outside the buffer and were skipped",
            replay.anomalies
        );
    }
    out
}

/// Cost matrix followed by the trace matrix, each headed by the target.
pub fn render_tables<T: Display>(tables: &DpTables, source: &[T], target: &[T]) -> String {
    // No cell exceeds max(m, n).
    let width = source.len().max(target.len()).to_string().len();
    let header: String = target.iter().map(|t| format!(" {t:>width$}")).collect();
    let mut out = String::new();

    let _ = writeln!(out, "Cost matrix:");
    write_grid(&mut out, &tables.cost, source, &header, width);
    let _ = writeln!(out, "\nTrace matrix:");
    write_grid(&mut out, &tables.trace, source, &header, width);
    out
}

fn write_grid<V: Display, T: Display>(
    out: &mut String,
    grid: &Grid<V>,
    source: &[T],
    header: &str,
    width: usize,
) {
    let _ = writeln!(out, "   {:>width$}{header}", "");
    for (i, row) in grid.iter_rows().enumerate() {
        let label = i
            .checked_sub(1)
            .and_then(|s| source.get(s))
            .map_or_else(|| " ".to_string(), ToString::to_string);
        let cells: String = row.iter().map(|c| format!(" {c:>width$}")).collect();
        let _ = writeln!(out, "{label:>2}{cells}");
    }
}

/// One-line verdict for a thresholded query.
pub fn render_threshold(k: usize, result: Option<usize>) -> String {
    match result {
        Some(d) => format!("Levenshtein distance = {d}"),
        None => format!("No alignment within distance {k} (distance > {k})."),
    }
}

/// One applied operation; missing payloads print as `-`.
pub fn render_applied<T: Display>(op: &AppliedOperation<T>) -> String {
    match op {
        AppliedOperation::Match { position, symbol } => {
            format!("match      pos={position:<3} char={}", opt(symbol))
        }
        AppliedOperation::Substitute { position, from, to } => {
            format!("substitute pos={position:<3} from={} to={to}", opt(from))
        }
        AppliedOperation::Delete { position, symbol } => {
            format!("delete     pos={position:<3} char={}", opt(symbol))
        }
        AppliedOperation::Insert { position, symbol } => {
            format!("insert     pos={position:<3} char={symbol}")
        }
    }
}

fn opt<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string)
}

fn join<T: Display>(state: &[T]) -> String {
    state.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{align_quadratic, align_quadratic_with_tables};
    use crate::script::replay;

    #[test]
    fn renders_snapshots_and_operations() {
        let s: Vec<char> = "ab".chars().collect();
        let t: Vec<char> = "ac".chars().collect();
        let alignment = align_quadratic(&s, &t);
        let out = render_alignment("Demo", alignment.distance, &replay(&s, &alignment.script));
        assert!(out.contains("Edit distance: 1"));
        assert!(out.contains("[ 0] ab"));
        assert!(out.contains("[ 2] ac"));
        assert!(out.contains("substitute pos=1   from=b to=c"));
        assert!(!out.contains("Warning"));
    }

    #[test]
    fn missing_payload_prints_dash() {
        let op: AppliedOperation<char> = AppliedOperation::Delete {
            position: 4,
            symbol: None,
        };
        assert_eq!(render_applied(&op), "delete     pos=4   char=-");
    }

    #[test]
    fn tables_show_costs_and_tags() {
        let s: Vec<char> = "ab".chars().collect();
        let t: Vec<char> = "b".chars().collect();
        let (_, tables) = align_quadratic_with_tables(&s, &t);
        let out = render_tables(&tables, &s, &t);
        assert!(out.starts_with("Cost matrix:"));
        assert!(out.contains(" b 2 1"));
        assert!(out.contains(" b D M"));
    }

    #[test]
    fn threshold_verdicts() {
        assert_eq!(render_threshold(2, Some(2)), "Levenshtein distance = 2");
        assert!(render_threshold(1, None).contains("distance > 1"));
    }
}
