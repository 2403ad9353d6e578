use std::collections::HashSet;

use blake3::hash;
use levenshtein_trio::report::render_alignment;
use levenshtein_trio::{replay, symbols, Strategy};

fn fingerprint(strategy: Strategy, a: &str, b: &str) -> blake3::Hash {
    let (source, target) = (symbols(a), symbols(b));
    let alignment = strategy.align(&source, &target);
    let trace = replay(&source, &alignment.script);
    hash(render_alignment(strategy.name(), alignment.distance, &trace).as_bytes())
}

#[test]
fn scripts_are_reproducible_across_runs() {
    let pairs = [
        ("GATTACA", "GCATGCU"),
        ("intention", "execution"),
        ("aaaa", "bbbbbb"),
    ];
    for strategy in [Strategy::Quadratic, Strategy::DivideAndConquer] {
        for (a, b) in pairs {
            let fingerprints: HashSet<_> = (0..5).map(|_| fingerprint(strategy, a, b)).collect();
            assert_eq!(fingerprints.len(), 1, "outputs diverged for {a} -> {b}");
        }
    }
}
