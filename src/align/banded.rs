//! Banded thresholded distance (Ukkonen).
//!
//! Row `i` is only evaluated on columns `[max(1, i-k), min(n, i+k)]`; every
//! cell outside the band reads as the sentinel `k + 1`. Values are capped at
//! the sentinel, so nothing beyond `k + 1` is ever tracked.

use std::fmt;

use crate::AlignError;

/// Validated, non-negative distance bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(usize);

impl Threshold {
    /// Validate a signed bound coming from user input.
    pub fn new(k: i64) -> Result<Self, AlignError> {
        usize::try_from(k)
            .map(Threshold)
            .map_err(|_| AlignError::InvalidThreshold(k))
    }

    /// The bound as an unsigned value.
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for Threshold {
    fn from(k: usize) -> Self {
        Threshold(k)
    }
}

impl TryFrom<i64> for Threshold {
    type Error = AlignError;

    fn try_from(k: i64) -> Result<Self, Self::Error> {
        Threshold::new(k)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exact distance when it is at most `k`, `None` otherwise.
pub fn distance_within_threshold<T: PartialEq>(a: &[T], b: &[T], k: usize) -> Option<usize> {
    banded(a, b, k).distance
}

/// Outcome of one banded pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BandedRun {
    distance: Option<usize>,
    /// Rows filled before returning, the abandoning row included.
    rows: usize,
}

fn banded<T: PartialEq>(a: &[T], b: &[T], k: usize) -> BandedRun {
    let m = a.len();
    let n = b.len();

    if m.abs_diff(n) > k {
        tracing::trace!(m, n, k, "length difference exceeds threshold");
        return BandedRun {
            distance: None,
            rows: 0,
        };
    }

    let sentinel = k.saturating_add(1);
    let mut prev: Vec<usize> = (0..=n).map(|j| j.min(sentinel)).collect();
    let mut curr = vec![sentinel; n + 1];

    for i in 1..=m {
        let low = i.saturating_sub(k).max(1);
        let high = n.min(i.saturating_add(k));

        // The buffer still holds row i-2; only the cells flanking the band
        // are read by this row or the next one, so only those are reset.
        curr[0] = if i <= k { i } else { sentinel };
        if low > 1 {
            curr[low - 1] = sentinel;
        }
        if high < n {
            curr[high + 1] = sentinel;
        }
        let mut row_min = curr[0];

        for j in low..=high {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let value = (prev[j - 1] + cost)
                .min(prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(sentinel);
            curr[j] = value;
            row_min = row_min.min(value);
        }

        if row_min > k {
            tracing::trace!(row = i, k, "band exhausted; abandoning");
            return BandedRun {
                distance: None,
                rows: i,
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[n];
    BandedRun {
        distance: (distance <= k).then_some(distance),
        rows: m,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flaw_lawn() {
        assert_eq!(distance_within_threshold(b"flaw", b"lawn", 1), None);
        assert_eq!(distance_within_threshold(b"flaw", b"lawn", 2), Some(2));
        assert_eq!(distance_within_threshold(b"flaw", b"lawn", 10), Some(2));
    }

    #[test]
    fn length_gap_rejected_up_front() {
        assert_eq!(distance_within_threshold(b"a", b"abcd", 2), None);
        assert_eq!(distance_within_threshold(b"a", b"abcd", 3), Some(3));
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(distance_within_threshold::<u8>(b"", b"", 0), Some(0));
        assert_eq!(distance_within_threshold(b"ab", b"", 2), Some(2));
        assert_eq!(distance_within_threshold(b"", b"ab", 1), None);
    }

    #[test]
    fn zero_threshold_is_equality() {
        assert_eq!(distance_within_threshold(b"same", b"same", 0), Some(0));
        assert_eq!(distance_within_threshold(b"same", b"sane", 0), None);
    }

    #[test]
    fn early_abandonment_on_disjoint_alphabets() {
        let a = vec![b'a'; 200];
        let b = vec![b'b'; 200];
        assert_eq!(distance_within_threshold(&a, &b, 3), None);
        assert_eq!(distance_within_threshold(&a, &b, 200), Some(200));

        // Every cell of row i is at least i, so row k + 1 is the first whose
        // minimum exceeds k.
        let run = banded(&a, &b, 3);
        assert_eq!(run.distance, None);
        assert_eq!(run.rows, 4);
        assert_eq!(banded(&a, &b, 200).rows, 200);
    }

    #[test]
    fn abandons_at_first_row_over_threshold() {
        // The shared prefix keeps rows within k until the tails diverge.
        let a = b"abcdefghXXXXXXXXXXXX";
        let b = b"abcdefghYYYYYYYYYYYY";
        let run = banded(a, b, 2);
        assert_eq!(run.distance, None);
        assert_eq!(run.rows, 11);

        let run = banded(a, b, 12);
        assert_eq!(run.distance, Some(12));
        assert_eq!(run.rows, a.len());
    }

    #[test]
    fn length_gap_fills_no_rows() {
        let run = banded(b"a", b"abcd", 2);
        assert_eq!(
            run,
            BandedRun {
                distance: None,
                rows: 0,
            }
        );
    }

    #[test]
    fn threshold_validation() {
        assert_eq!(Threshold::new(3).map(Threshold::get).ok(), Some(3));
        assert!(matches!(
            Threshold::new(-1),
            Err(AlignError::InvalidThreshold(-1))
        ));
        assert_eq!(Threshold::from(4usize).to_string(), "4");
    }
}
