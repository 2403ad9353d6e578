//! Round-trips through the optional serde derives.
#![cfg(feature = "serde")]

use levenshtein_trio::{align_quadratic, replay, symbols, Alignment, EditScript, Replay};

#[test]
fn exported_script_replays_after_reload() {
    let source = symbols("kitten");
    let alignment = align_quadratic(&source, &symbols("sitting"));

    let json = serde_json::to_string(&alignment.script).expect("script serializes");
    let reloaded: EditScript<char> = serde_json::from_str(&json).expect("script deserializes");
    assert_eq!(reloaded, alignment.script);
    assert_eq!(
        replay(&source, &reloaded).final_sequence,
        symbols("sitting")
    );
}

#[test]
fn alignment_and_replay_survive_export() {
    let source = symbols("abc");
    let alignment = align_quadratic(&source, &[]);
    let trace = replay(&source, &alignment.script);

    let json = serde_json::to_string(&alignment).expect("alignment serializes");
    let reloaded: Alignment<char> = serde_json::from_str(&json).expect("alignment deserializes");
    assert_eq!(reloaded.distance, 3);

    let json = serde_json::to_string(&trace).expect("replay serializes");
    let reloaded: Replay<char> = serde_json::from_str(&json).expect("replay deserializes");
    assert_eq!(reloaded, trace);
    assert!(reloaded.final_sequence.is_empty());
}
