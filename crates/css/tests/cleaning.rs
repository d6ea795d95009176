#![cfg(test)]

use atomic_css::{RejectionReason, clean};

#[test]
fn rejects_each_broken_rule_with_its_reason() {
    let cleaned = clean(["_bad", "2abc", "pad$ding-1", "padding-", "w-1_5-a_b", "bold"]);

    let expected = [
        ("_bad", RejectionReason::FirstCharacter),
        ("2abc", RejectionReason::FirstCharacter),
        ("pad$ding-1", RejectionReason::InvalidCharacter),
        ("padding-", RejectionReason::LastCharacter),
        ("w-1_5-a_b", RejectionReason::Underscore),
    ];
    for (token, reason) in expected.clone() {
        assert_eq!(cleaned.removed.reason_for(token), Some(&reason), "{token}");
        assert!(!cleaned.cleaned.contains(token), "{token}");
    }
    assert_eq!(cleaned.removed.len(), expected.len());
    assert!(cleaned.cleaned.contains("bold"));
}

#[test]
fn tokens_are_lowercased_and_deduplicated() {
    let cleaned = clean(["FW-Bold-I", "fw-bold-i", "Height-7_25REM"]);
    let tokens: Vec<&str> = cleaned.cleaned.iter().map(String::as_str).collect();
    assert_eq!(tokens, ["fw-bold-i", "height-7_25rem"]);
    assert!(cleaned.removed.is_empty());
}

#[test]
fn empty_token_fails_the_first_character_rule() {
    let cleaned = clean([""]);
    assert_eq!(
        cleaned.removed.reason_for(""),
        Some(&RejectionReason::FirstCharacter)
    );
}

#[test]
fn cleaning_is_idempotent() {
    let first = clean(["padding-1-10-10-5-i", "_bad", "Margin-N5cm-n6cm", "b_", "c-hfff"]);
    let second = clean(&first.cleaned);
    assert_eq!(second.cleaned, first.cleaned);
    assert!(second.removed.is_empty());
}

#[test]
fn removed_classes_render_with_their_reason() {
    let cleaned = clean(["b_"]);
    let rendered: Vec<String> = cleaned.removed.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        ["b_ (Only a-z and 0-9 allowed for last character of class.)"]
    );
}
