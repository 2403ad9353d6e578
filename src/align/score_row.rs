//! Linear-space prefix-distance rows.
//!
//! Only the previous and the current row are kept alive, so a row over a
//! target of length `q` costs `O(q)` memory regardless of the source length.

/// Last row of the unit-cost Levenshtein matrix of `a` against `b`.
///
/// Entry `j` is the edit distance between the whole of `a` and `b[..j]`.
pub fn score_row<T: PartialEq>(a: &[T], b: &[T]) -> Vec<usize> {
    let columns: Vec<&T> = b.iter().collect();
    last_row(a.iter(), &columns)
}

/// Same as [`score_row`] on the reverses of `a` and `b`, without copying them.
///
/// Entry `j` is the distance between `a` and the suffix of `b` of length `j`.
pub fn score_row_reversed<T: PartialEq>(a: &[T], b: &[T]) -> Vec<usize> {
    let columns: Vec<&T> = b.iter().rev().collect();
    last_row(a.iter().rev(), &columns)
}

/// Edit distance using two rows sized by the shorter input.
pub fn levenshtein_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (rows, cols) = if b.len() > a.len() { (b, a) } else { (a, b) };
    score_row(rows, cols)[cols.len()]
}

/// Edit distance divided by the combined length; `0.0` for two empty inputs.
pub fn normalized_distance<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    levenshtein_distance(a, b) as f64 / total as f64
}

fn last_row<'a, T, I>(rows: I, columns: &[&'a T]) -> Vec<usize>
where
    T: PartialEq + 'a,
    I: Iterator<Item = &'a T>,
{
    let q = columns.len();
    let mut prev: Vec<usize> = (0..=q).collect();
    let mut curr = vec![0usize; q + 1];

    for (i, x) in rows.enumerate() {
        curr[0] = i + 1;
        for j in 1..=q {
            let cost = usize::from(x != columns[j - 1]);
            let diag = prev[j - 1] + cost;
            let up = prev[j] + 1;
            let left = curr[j - 1] + 1;
            curr[j] = diag.min(up).min(left);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_for_empty_inputs() {
        assert_eq!(score_row::<u8>(b"", b""), vec![0]);
        assert_eq!(score_row(b"AB", b""), vec![2]);
        assert_eq!(score_row(b"", b"ABC"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn row_holds_prefix_distances() {
        // kitten vs prefixes of sitting
        let row = score_row(b"kitten", b"sitting");
        assert_eq!(row.len(), 8);
        assert_eq!(row[0], 6);
        assert_eq!(row[7], 3);
    }

    #[test]
    fn reversed_row_matches_explicit_reverse() {
        let a = b"GATTACA";
        let b = b"GCATGCU";
        let ra: Vec<u8> = a.iter().rev().copied().collect();
        let rb: Vec<u8> = b.iter().rev().copied().collect();
        assert_eq!(score_row_reversed(a, b), score_row(&ra, &rb));
    }

    #[test]
    fn two_row_distance_is_symmetric() {
        assert_eq!(levenshtein_distance(b"flaw", b"lawn"), 2);
        assert_eq!(levenshtein_distance(b"lawn", b"flaw"), 2);
        assert_eq!(levenshtein_distance(b"", b"abc"), 3);
    }

    #[test]
    fn normalized_distance_bounds() {
        assert_eq!(normalized_distance::<u8>(b"", b""), 0.0);
        assert!((normalized_distance(b"abc", b"abd") - 1.0 / 6.0).abs() < 1e-12);
        assert_eq!(normalized_distance(b"abc", b""), 1.0);
    }
}
