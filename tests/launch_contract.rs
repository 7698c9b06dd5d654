//! Contract tests for the launch command (URL resolution only; no test
//! opens a real destination).

mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn launch_without_history_fails_cleanly() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["launch", "--print-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No prompt in history"));
}

#[test]
fn print_url_emits_the_web_destination() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");

    ctx.cli()
        .args(["launch", "--print-url"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("https://chat.openai.com/?q="))
        // Prompt text is percent-encoded into the query.
        .stdout(predicate::str::contains(" ").not());
}

#[test]
fn launch_resolves_a_named_favorite() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");
    ctx.cli().args(["favorite", "add", "定番"]).assert().success();
    ctx.cli().args(["history", "clear"]).assert().success();

    ctx.cli()
        .args(["launch", "--favorite", "定番", "--print-url"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("https://chat.openai.com/?q="));
}

#[test]
fn launch_rejects_unknown_favorites() {
    let ctx = TestContext::new();

    ctx.build_sample("金融");

    ctx.cli()
        .args(["launch", "--favorite", "存在しない", "--print-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Favorite '存在しない' not found"));
}
