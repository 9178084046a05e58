//! End-to-end substitution tests over the public crate API

use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use powertools::{replace_values, ReplaceOptions, Scalar, Value, ValueSettings};

fn demo_settings() -> ValueSettings {
    ValueSettings::from_str(
        r#"
        [metadata]
        name = "demo workspace"

        [values]
        project = "powertools"
        version = "0.1.0"
        jobs = 4
        release = false
        "#,
    )
    .expect("Should parse")
}

#[test]
fn test_document_substitution() {
    let settings = demo_settings();

    let input = "\
Building ${project} ${version}
  jobs:    ${ JOBS }
  release: ${Release}
  target:  ${target}";

    let out = replace_values(Some(&settings), input, ReplaceOptions::new());

    insta::assert_snapshot!(out, @r#"
    Building powertools 0.1.0
      jobs:    4
      release: false
      target:  ${target}
    "#);
}

#[test]
fn test_unmatched_token_preserved() {
    let settings = ValueSettings::from_str("[values]\n").expect("Should parse");
    let out = replace_values(Some(&settings), "Hello, ${NAME}!", ReplaceOptions::new());
    assert_eq!(out, "Hello, ${NAME}!");
}

#[test]
fn test_settings_override_built_ins() {
    let settings = ValueSettings::from_str(
        r#"
        [values]
        X = "source"
        "#,
    )
    .expect("Should parse");

    let options = ReplaceOptions::new().with_built_in(Value::fixed("builtin").with_name("X"));
    assert_eq!(replace_values(Some(&settings), "${X}", options), "source");
}

#[test]
fn test_built_in_fills_gap_left_by_settings() {
    let settings = demo_settings();
    let options = ReplaceOptions::new().with_built_in(Value::fixed("x86_64").with_name("target"));
    let out = replace_values(Some(&settings), "${project} for ${target}", options);
    assert_eq!(out, "powertools for x86_64");
}

#[test]
fn test_computed_built_in_reflects_state_per_occurrence() {
    let counter = Rc::new(Cell::new(0));
    let ticks = Rc::clone(&counter);
    let options = ReplaceOptions::new().with_built_in(
        Value::computed(move || {
            ticks.set(ticks.get() + 1);
            Scalar::Integer(ticks.get())
        })
        .with_name("step"),
    );

    let out = replace_values(None, "step ${step}, step ${step}", options);
    assert_eq!(out, "step 1, step 2");
    assert_eq!(counter.get(), 2);
}

#[test]
fn test_settings_without_values_table() {
    let settings = ValueSettings::from_str("[metadata]\nname = \"bare\"\n").expect("Should parse");
    let out = replace_values(Some(&settings), "still ${here}", ReplaceOptions::new());
    assert_eq!(out, "still ${here}");
}

#[test]
fn test_text_without_tokens_is_untouched() {
    let settings = demo_settings();
    let input = "no placeholders here, just $dollars and {braces}";
    let out = replace_values(Some(&settings), input, ReplaceOptions::new());
    assert_eq!(out, input);
}
