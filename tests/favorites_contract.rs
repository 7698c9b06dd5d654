//! Contract tests for named favorites.

mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn add_saves_the_newest_history_entry() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");
    ctx.build_sample("製造");

    ctx.cli().args(["favorite", "add", "定番"]).assert().success();

    ctx.cli()
        .args(["favorite", "show", "定番"])
        .assert()
        .success()
        .stdout(predicate::str::contains("製造業界"));
}

#[test]
fn add_accepts_an_explicit_history_index() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");
    ctx.build_sample("製造");

    ctx.cli().args(["favorite", "add", "古い方", "--history", "2"]).assert().success();

    ctx.cli()
        .args(["favorite", "show", "古い方"])
        .assert()
        .success()
        .stdout(predicate::str::contains("金融業界"));
}

#[test]
fn add_with_empty_history_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["favorite", "add", "定番"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("History entry 1 not found"));
}

#[test]
fn adding_the_same_name_replaces_the_entry() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");
    ctx.cli().args(["favorite", "add", "定番"]).assert().success();
    ctx.build_sample("製造");
    ctx.cli().args(["favorite", "add", "定番"]).assert().success();

    let output = ctx.cli().args(["favorite", "list"]).output().expect("list");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("定番").count(), 1);
    assert!(stdout.contains("製造業界"));
}

#[test]
fn rename_preserves_the_stored_result() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");
    ctx.cli().args(["favorite", "add", "定番"]).assert().success();

    ctx.cli().args(["favorite", "rename", "定番", "よく使う"]).assert().success();

    ctx.cli()
        .args(["favorite", "show", "よく使う"])
        .assert()
        .success()
        .stdout(predicate::str::contains("金融業界"));
    ctx.cli().args(["favorite", "show", "定番"]).assert().failure();
}

#[test]
fn edit_replaces_the_stored_role_prompt() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");
    ctx.cli().args(["favorite", "add", "定番"]).assert().success();

    ctx.cli()
        .args(["favorite", "edit", "定番", "--prompt", "手直ししたプロンプト"])
        .assert()
        .success();

    ctx.cli()
        .args(["favorite", "show", "定番"])
        .assert()
        .success()
        .stdout(predicate::str::contains("手直ししたプロンプト"))
        .stdout(predicate::str::contains("# ロール定義").not());
}

#[test]
fn remove_deletes_the_favorite() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");
    ctx.cli().args(["favorite", "add", "定番"]).assert().success();

    ctx.cli().args(["favorite", "remove", "定番"]).assert().success();

    ctx.cli()
        .args(["favorite", "remove", "定番"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Favorite '定番' not found"));
}
