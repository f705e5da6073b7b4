//! Integration tests for the svgson binary
//!
//! Each test runs a real invocation against temp files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a CLI command
fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_svgson"))
}

#[test]
fn test_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert SVG markup into a JSON AST"));
}

#[test]
fn test_inline_svg_argument() {
    cli()
        .arg("<svg/>")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"svg""#))
        .stdout(predicate::str::contains(r#""type":"element""#));
}

#[test]
fn test_stdin_input() {
    cli()
        .write_stdin(r#"<svg width="10"><path d="M0 0"/></svg>"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""width":"10""#))
        .stdout(predicate::str::contains(r#""name":"path""#));
}

#[test]
fn test_file_input_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("icon.svg");
    fs::write(&input, "<svg><text>hi</text></svg>").unwrap();

    cli()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""value":"hi""#));
}

#[test]
fn test_output_flag_writes_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("icon.svg");
    let output = dir.path().join("icon.json");
    fs::write(&input, "<svg/>").unwrap();

    cli()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let json = fs::read_to_string(&output).unwrap();
    assert!(json.contains(r#""name":"svg""#));
}

#[test]
fn test_pretty_flag() {
    cli()
        .arg("<svg/>")
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::contains("\n    \"name\": \"svg\""));
}

#[test]
fn test_camelcase_flag() {
    cli()
        .arg(r#"<svg stroke-width="2"/>"#)
        .arg("--camelcase")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""strokeWidth":"2""#))
        .stdout(predicate::str::contains("stroke-width").not());
}

#[test]
fn test_directory_merged_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.svg"), "<svg id=\"a\"/>").unwrap();
    fs::write(dir.path().join("b.svg"), "<svg id=\"b\"/>").unwrap();

    cli()
        .arg(dir.path())
        .assert()
        .success()
        // Two concatenated roots land under the synthetic wrapper
        .stdout(predicate::str::contains(r#""name":"root""#))
        .stdout(predicate::str::contains(r#""id":"a""#))
        .stdout(predicate::str::contains(r#""id":"b""#));
}

#[test]
fn test_directory_merged_wire_shape() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.svg"), "<svg id=\"a\"/>").unwrap();
    fs::write(dir.path().join("b.svg"), "<svg id=\"b\"/>").unwrap();

    let output = cli().arg(dir.path()).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "root");
    assert_eq!(json["type"], "element");
    assert!(json.get("value").is_none());
    let children = json["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    // Files are read in name order, so document order is a then b
    assert_eq!(children[0]["attributes"]["id"], "a");
    assert_eq!(children[1]["attributes"]["id"], "b");
}

#[test]
fn test_directory_separated_writes_per_item_files() {
    let dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.svg"), "<svg id=\"a\"/>").unwrap();
    fs::write(dir.path().join("b.svg"), "<svg id=\"b\"/>").unwrap();
    let output = out_dir.path().join("out.json");

    cli()
        .arg(dir.path())
        .arg("--separated")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let a = fs::read_to_string(out_dir.path().join("out_a.json")).unwrap();
    let b = fs::read_to_string(out_dir.path().join("out_b.json")).unwrap();
    assert!(a.contains(r#""id":"a""#));
    assert!(b.contains(r#""id":"b""#));
    assert!(!output.exists(), "merged file must not be written in separated mode");
}

#[test]
fn test_directory_separated_partial_failure_keeps_going() {
    let dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.svg"), "<svg><path/></svg2>").unwrap();
    fs::write(dir.path().join("good.svg"), "<svg/>").unwrap();
    let output = out_dir.path().join("out.json");

    cli()
        .arg(dir.path())
        .arg("--separated")
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("bad"));

    assert!(out_dir.path().join("out_good.json").exists());
    assert!(!out_dir.path().join("out_bad.json").exists());
}

#[test]
fn test_directory_skips_non_svg_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("icon.svg"), "<svg id=\"a\"/>").unwrap();
    fs::write(dir.path().join("notes.txt"), "not markup").unwrap();

    cli()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id":"a""#))
        .stderr(predicate::str::contains("notes.txt"));
}

#[test]
fn test_empty_directory_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    cli()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_non_svg_file_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.html");
    fs::write(&input, "<html><body/></html>").unwrap();

    cli()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not SVG"));
}

#[test]
fn test_malformed_svg_fails() {
    cli()
        .write_stdin("<svg><path/></svg2>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed markup"));
}

#[test]
fn test_no_input_fails() {
    cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input provided"));
}
