//! Print the step-by-step transformation of one word into another.

use levenshtein_trio::report::render_alignment;
use levenshtein_trio::{replay, symbols, Strategy};

fn main() -> anyhow::Result<()> {
    let pairs = [
        ("kitten", "sitting"),
        ("intention", "execution"),
        ("", "abc"),
    ];

    for (a, b) in pairs {
        let (source, target) = (symbols(a), symbols(b));
        for strategy in [Strategy::Quadratic, Strategy::DivideAndConquer] {
            let alignment = strategy.align(&source, &target);
            let trace = replay(&source, &alignment.script);
            anyhow::ensure!(
                trace.final_sequence == target,
                "replay diverged for {a} -> {b}"
            );
            println!(
                "{}",
                render_alignment(strategy.name(), alignment.distance, &trace)
            );
        }
    }

    Ok(())
}
