use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CATALOG: &str = "resources/fragenkatalog/fragenkatalog.json";
const QUESTIONS: &str = "resources/ffh_questions.json";

fn write_catalog(root: &Path, json: &str) -> PathBuf {
    let path = root.join(CATALOG);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, json).unwrap();
    path
}

const SCENARIO_CATALOG: &str = r#"{
  "sections": [
    { "title": "Technik", "sections": [
      { "title": "Grundlagen", "questions": [
        { "number": "TA101", "question": "Q?", "answer_a": "A", "answer_b": null,
          "answer_c": "C", "answer_d": "D", "picture_a": "img1.png" }
      ]}
    ]}
  ]
}"#;

const SCENARIO_OUTPUT: &str = r#"[
    {
        "category": "T",
        "identifier": "TA101",
        "question": "Q?",
        "answer_a": "A",
        "answer_b": "",
        "answer_c": "C",
        "answer_d": "D",
        "picture_question": "",
        "picture_a": "img1.png",
        "picture_b": "",
        "picture_c": "",
        "picture_d": ""
    }
]"#;

#[test]
fn flatten_with_fixed_paths() {
    let temp = TempDir::new().unwrap();
    write_catalog(temp.path(), SCENARIO_CATALOG);

    cargo_bin_cmd!("question-flattener")
        .current_dir(temp.path())
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join(QUESTIONS)).unwrap();
    assert_eq!(written, SCENARIO_OUTPUT);
}

#[test]
fn rerun_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    write_catalog(temp.path(), SCENARIO_CATALOG);

    cargo_bin_cmd!("question-flattener")
        .current_dir(temp.path())
        .assert()
        .success();
    let first = fs::read(temp.path().join(QUESTIONS)).unwrap();

    cargo_bin_cmd!("question-flattener")
        .current_dir(temp.path())
        .assert()
        .success();
    let second = fs::read(temp.path().join(QUESTIONS)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn document_order_across_depths() {
    let temp = TempDir::new().unwrap();
    write_catalog(
        temp.path(),
        r#"{"sections": [
            {"sections": [
                {"sections": [
                    {"sections": [
                        {"questions": [{"number": "VD1", "question": "", "answer_a": "", "answer_b": "", "answer_c": "", "answer_d": ""}]}
                    ]}
                ]},
                {"questions": [{"number": "VB1", "question": "", "answer_a": "", "answer_b": "", "answer_c": "", "answer_d": ""}]}
            ]},
            {"sections": [
                {"questions": [{"number": "BA1", "question": "", "answer_a": "", "answer_b": "", "answer_c": "", "answer_d": ""}]}
            ]}
        ]}"#,
    );

    cargo_bin_cmd!("question-flattener")
        .current_dir(temp.path())
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join(QUESTIONS)).unwrap()).unwrap();
    let ids: Vec<&str> = written
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["identifier"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["VD1", "VB1", "BA1"]);
}

#[test]
fn missing_question_key_leaves_output_untouched() {
    let temp = TempDir::new().unwrap();
    write_catalog(
        temp.path(),
        r#"{"sections": [{"sections": [{"questions": [
            {"number": "VA101", "answer_a": "a", "answer_b": "b", "answer_c": "c", "answer_d": "d"}
        ]}]}]}"#,
    );
    let output = temp.path().join(QUESTIONS);
    fs::write(&output, "previous run").unwrap();

    cargo_bin_cmd!("question-flattener")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing key 'question'"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "previous run");
}

#[test]
fn missing_catalog_fails() {
    let temp = TempDir::new().unwrap();

    cargo_bin_cmd!("question-flattener")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("fragenkatalog.json"));

    assert!(!temp.path().join(QUESTIONS).exists());
}

#[test]
fn explicit_paths_and_depth_limit() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("catalog.json");
    let output = temp.path().join("flat.json");
    fs::write(
        &input,
        r#"{"sections": [{"sections": [{"sections": [{"sections": [{"sections": [{"sections": [
            {"questions": [{
                "number": "X1", "question": "",
                "answer_a": "", "answer_b": "", "answer_c": "", "answer_d": ""
            }]}
        ]}]}]}]}]}]}"#,
    )
    .unwrap();

    cargo_bin_cmd!("question-flattener")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();
    assert!(fs::read_to_string(&output).unwrap().contains("\"X1\""));

    cargo_bin_cmd!("question-flattener")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--max-depth")
        .arg("5")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
}

#[test]
fn umlauts_are_written_as_ascii_escapes() {
    let temp = TempDir::new().unwrap();
    write_catalog(
        temp.path(),
        r#"{"sections": [{"sections": [{"questions": [{
            "number": "NA101", "question": "Spannung über R?",
            "answer_a": "Maß", "answer_b": "", "answer_c": "", "answer_d": ""
        }]}]}]}"#,
    );

    cargo_bin_cmd!("question-flattener")
        .current_dir(temp.path())
        .assert()
        .success();

    let written = fs::read(temp.path().join(QUESTIONS)).unwrap();
    assert!(written.is_ascii());
    let text = String::from_utf8(written).unwrap();
    assert!(text.contains(r#""question": "Spannung \u00fcber R?""#));
    assert!(text.contains(r#""answer_a": "Ma\u00df""#));
}
