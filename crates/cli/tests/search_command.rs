use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn toolscout() -> Command {
    Command::cargo_bin("toolscout").expect("binary")
}

fn search_json(args: &[&str]) -> Value {
    let output = toolscout()
        .arg("search")
        .args(args)
        .arg("--compact")
        .output()
        .expect("command run");
    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn search_returns_ranked_results() {
    let body = search_json(&["tasks", "--limit", "3"]);
    assert_eq!(body["query"], "tasks");
    assert!(body["total"].as_u64().unwrap() >= 1);
    assert_eq!(body["results"][0]["name"], "get_tasks");
    assert!(body["results"].as_array().unwrap().len() <= 3);
}

#[test]
fn name_only_detail_strips_descriptions() {
    let body = search_json(&["ping", "--detail", "name_only"]);
    let first = &body["results"][0];
    assert!(first.get("description").is_none());
    assert!(first.get("category").is_none());
}

#[test]
fn full_detail_includes_category_and_tags() {
    let body = search_json(&["ping", "--detail", "full"]);
    let first = &body["results"][0];
    assert_eq!(first["name"], "ping");
    assert_eq!(first["category"], "meta");
    assert!(first["tags"].is_array());
}

#[test]
fn category_filter_narrows_results() {
    let body = search_json(&["task", "--category", "worklog"]);
    for result in body["results"].as_array().unwrap() {
        let name = result["name"].as_str().unwrap();
        assert!(
            ["log_work", "get_worklog", "delete_worklog"].contains(&name),
            "unexpected result {name}"
        );
    }
}

#[test]
fn empty_query_is_a_structured_error() {
    toolscout()
        .args(["search", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty_query"));
}

#[test]
fn zero_limit_is_a_structured_error() {
    toolscout()
        .args(["search", "ping", "--limit", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid_limit"));
}

#[test]
fn unknown_category_is_rejected_by_the_parser() {
    toolscout()
        .args(["search", "x", "--category", "sprint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn unknown_detail_level_is_rejected() {
    toolscout()
        .args(["search", "x", "--detail", "everything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown detail level"));
}

#[test]
fn tools_lists_the_catalog_inventory() {
    let output = toolscout().arg("tools").output().expect("command run");
    assert!(output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert!(body["count"].as_u64().unwrap() >= 20);
    let names: Vec<&str> = body["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"search_tools"));
    assert!(names.contains(&"get_tasks"));
}

#[test]
fn config_file_overrides_weights() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "default_limit = 2\n\n[weights]\nname = 0.7\ndescription = 0.1\ncategory = 0.1\nfuzzy = 0.1"
    )
    .unwrap();

    let output = toolscout()
        .args(["search", "task", "--compact", "--config"])
        .arg(file.path())
        .output()
        .expect("command run");
    assert!(output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert!(body["results"].as_array().unwrap().len() <= 2);
}

#[test]
fn invalid_config_fails_fast() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[weights]\nname = 0.9\ndescription = 0.9\ncategory = 0.1\nfuzzy = 0.1"
    )
    .unwrap();

    toolscout()
        .args(["search", "task", "--config"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("weights"));
}
