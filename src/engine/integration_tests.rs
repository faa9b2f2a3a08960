// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! End-to-end pipeline runs with the local components.

use crate::backends::local::{LengthCounter, TextNormalizer, ThresholdComparator};
use crate::backends::stub::AbstractComponent;
use crate::engine::{Pipeline, Seed};
use crate::ports::Value;

fn text_seed(text: &str) -> Seed {
    Seed::from([("text".to_string(), Value::from(text))])
}

fn normalize_then_count() -> Pipeline {
    let mut pipeline = Pipeline::new();
    let normalizer = pipeline.add(TextNormalizer::default());
    let counter = pipeline.add(LengthCounter::default());
    pipeline
        .connect(normalizer, "normalized", counter, "text")
        .unwrap();
    pipeline
}

#[test]
fn test_normalize_then_count() {
    let mut pipeline = normalize_then_count();

    let outputs = pipeline.run(text_seed("HelLo WorLD")).unwrap();

    assert_eq!(
        outputs.value("Text Normalizer", "normalized"),
        Some(&Value::from("hello world"))
    );
    assert_eq!(
        outputs.value("Text Length Counter", "length"),
        Some(&Value::Integer(11))
    );
    assert_eq!(outputs.failed().count(), 0);
}

#[test]
fn test_whitespace_runs_collapse_before_counting() {
    let mut pipeline = normalize_then_count();

    let outputs = pipeline
        .run(text_seed("HelLo    WorLD   IS  a GREat   sonG..."))
        .unwrap();

    assert_eq!(
        outputs.value("Text Normalizer", "normalized"),
        Some(&Value::from("hello world is a great song..."))
    );
    assert_eq!(
        outputs.value("Text Length Counter", "length"),
        Some(&Value::Integer(30))
    );
}

#[test]
fn test_threshold_gate_in_front_of_counter() {
    let mut pipeline = Pipeline::new();
    let gate = pipeline.add(ThresholdComparator::default());
    let counter = pipeline.add(LengthCounter::default());
    pipeline.connect(gate, "text", counter, "text").unwrap();

    let short = Seed::from([
        ("text".to_string(), Value::from("hello")),
        ("threshold".to_string(), Value::Integer(10)),
    ]);
    let outputs = pipeline.run(short).unwrap();
    assert_eq!(outputs.value("Threshold Comparator", "text"), None);
    assert_eq!(outputs.value("Threshold Comparator", "threshold"), None);
    assert_eq!(outputs.value("Text Length Counter", "length"), None);

    let long = Seed::from([
        ("text".to_string(), Value::from("fifteen chars!!")),
        ("threshold".to_string(), Value::Integer(10)),
    ]);
    let outputs = pipeline.run(long).unwrap();
    assert_eq!(
        outputs.value("Threshold Comparator", "text"),
        Some(&Value::from("fifteen chars!!"))
    );
    assert_eq!(
        outputs.value("Threshold Comparator", "threshold"),
        Some(&Value::Integer(10))
    );
    assert_eq!(
        outputs.value("Text Length Counter", "length"),
        Some(&Value::Integer(15))
    );
}

#[test]
fn test_abstract_stage_between_concrete_stages() {
    let mut pipeline = Pipeline::new();
    let normalizer = pipeline.add(TextNormalizer::default());
    let placeholder = pipeline.add(AbstractComponent::new("Component"));
    let counter = pipeline.add(LengthCounter::default());
    pipeline
        .connect(normalizer, "normalized", counter, "text")
        .unwrap();
    pipeline
        .connect(placeholder, "text", counter, "text")
        .unwrap();

    let outputs = pipeline.run(text_seed("HelLo WorLD")).unwrap();

    let failed: Vec<&str> = outputs.failed().map(|stage| stage.component.as_str()).collect();
    assert_eq!(failed, vec!["Component"]);
    assert_eq!(outputs.value("Component", "text"), None);
    assert_eq!(
        outputs.value("Text Length Counter", "length"),
        Some(&Value::Integer(11))
    );
}

#[test]
fn test_values_from_an_earlier_run_stay_until_overwritten() {
    let mut pipeline = Pipeline::new();
    let gate = pipeline.add(ThresholdComparator::default());
    let normalizer = pipeline.add(TextNormalizer::default());
    let counter = pipeline.add(LengthCounter::default());
    pipeline.connect(gate, "text", normalizer, "text").unwrap();
    pipeline
        .connect(normalizer, "normalized", counter, "text")
        .unwrap();

    let first = Seed::from([
        ("text".to_string(), Value::from("A Long   Enough Sentence")),
        ("threshold".to_string(), Value::Integer(3)),
    ]);
    let outputs = pipeline.run(first).unwrap();
    assert_eq!(
        outputs.value("Text Length Counter", "length"),
        Some(&Value::Integer(22))
    );

    let second = Seed::from([
        ("text".to_string(), Value::from("no")),
        ("threshold".to_string(), Value::Integer(3)),
    ]);
    let outputs = pipeline.run(second).unwrap();

    assert_eq!(outputs.value("Threshold Comparator", "text"), None);
    assert_eq!(
        outputs.value("Text Normalizer", "normalized"),
        Some(&Value::from("a long enough sentence"))
    );
    assert_eq!(
        outputs.value("Text Length Counter", "length"),
        Some(&Value::Integer(22))
    );
}

#[test]
fn test_run_outputs_serialize_per_stage() {
    let mut pipeline = normalize_then_count();

    let outputs = pipeline.run(text_seed("Hi")).unwrap();
    let json = serde_json::to_value(&outputs).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "stages": [
                { "component": "Text Normalizer", "outputs": { "normalized": "hi" } },
                { "component": "Text Length Counter", "outputs": { "length": 2 } }
            ]
        })
    );
}
