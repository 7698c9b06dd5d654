//! Contract tests for history persistence and bounds.

mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn builds_are_recorded_newest_first() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");
    ctx.build_sample("製造");

    ctx.cli()
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. クラウド / 業界: 製造業界"))
        .stdout(predicate::str::contains("2. クラウド / 業界: 金融業界"));
}

#[test]
fn identical_prompts_are_deduplicated() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");
    ctx.build_sample("金融");

    ctx.cli()
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("2. ").not());
}

#[test]
fn history_is_bounded_to_five_entries() {
    let ctx = TestContext::new();

    for industry in ["a", "b", "c", "d", "e", "f"] {
        ctx.build_sample(industry);
    }

    ctx.cli()
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5. "))
        .stdout(predicate::str::contains("6. ").not())
        // The oldest entry was evicted.
        .stdout(predicate::str::contains("a業界").not())
        .stdout(predicate::str::contains("f業界"));
}

#[test]
fn show_prints_the_stored_role_prompt() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");

    ctx.cli()
        .args(["history", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# ロール定義"))
        .stdout(predicate::str::contains("金融業界"));
}

#[test]
fn show_rejects_out_of_range_indexes() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");

    ctx.cli()
        .args(["history", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("History entry 99 not found"));
}

#[test]
fn clear_removes_entries_but_keeps_favorites() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");
    ctx.cli().args(["favorite", "add", "定番"]).assert().success();

    ctx.cli().args(["history", "clear"]).assert().success();

    ctx.cli()
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No prompts generated yet."));
    ctx.cli()
        .args(["favorite", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("定番"));
}

#[test]
fn store_blob_is_versioned() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");

    let blob = ctx.read_store();
    let parsed: serde_json::Value = serde_json::from_str(&blob).expect("store blob is JSON");
    assert_eq!(parsed["version"].as_u64(), Some(1));
    assert_eq!(parsed["history"].as_array().map(Vec::len), Some(1));
}
