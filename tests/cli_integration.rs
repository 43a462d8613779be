use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn textz(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("textz").unwrap();
    cmd.env("TEXTZ_HOME", home.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.arg("--json").assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_stats_from_arguments() {
    let home = tempfile::tempdir().unwrap();
    let json = json_output(textz(&home).args(["stats", "Hello world.\n\nSecond line!"]));

    assert_eq!(json["stats"]["words"], 4);
    assert_eq!(json["stats"]["sentences"], 2);
    assert_eq!(json["stats"]["paragraphs"], 2);
    assert_eq!(json["stats"]["chars_with_spaces"], 26);
    assert!(json["reading_time_secs"].is_number());
}

#[test]
fn test_stats_from_stdin() {
    let home = tempfile::tempdir().unwrap();
    let json = json_output(textz(&home).arg("stats").write_stdin("one two three"));
    assert_eq!(json["stats"]["words"], 3);
    assert_eq!(json["stats"]["sentences"], 1);
}

#[test]
fn test_stats_from_file() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("notes.txt");
    std::fs::write(&file, "First para.\r\n\r\nSecond para? Yes!\r\n").unwrap();

    let json = json_output(textz(&home).arg("stats").arg("-f").arg(&file));
    assert_eq!(json["stats"]["paragraphs"], 2);
    assert_eq!(json["stats"]["sentences"], 3);
}

#[test]
fn test_stats_human_output() {
    let home = tempfile::tempdir().unwrap();
    textz(&home)
        .args(["stats", "just", "three", "words"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words"))
        .stdout(predicate::str::contains("Reading time"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_empty_stdin_gives_zero_stats() {
    let home = tempfile::tempdir().unwrap();
    let json = json_output(textz(&home).arg("stats").write_stdin(""));
    for key in [
        "chars_with_spaces",
        "chars_without_spaces",
        "words",
        "sentences",
        "paragraphs",
        "lines",
        "graphemes",
    ] {
        assert_eq!(json["stats"][key], 0, "{}", key);
    }
}

#[test]
fn test_empty_stdin_formats_to_nothing() {
    let home = tempfile::tempdir().unwrap();
    textz(&home)
        .args(["social", "--bullets"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_corrupt_config_warns_and_uses_defaults() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("config.json"), "{not json").unwrap();

    textz(&home)
        .args(["stats", "hello", "world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words"))
        .stderr(predicate::str::contains("using defaults"));

    let json = json_output(textz(&home).args(["stats", "hello", "world"]));
    assert_eq!(json["stats"]["words"], 2);
    assert_eq!(json["messages"][0]["level"], "warning");

    textz(&home).arg("config").assert().failure();
}

#[test]
fn test_missing_file_is_an_error() {
    let home = tempfile::tempdir().unwrap();
    textz(&home)
        .args(["stats", "-f", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.txt"));
}

#[test]
fn test_emoji_lists_each_occurrence() {
    let home = tempfile::tempdir().unwrap();
    textz(&home)
        .args(["emoji", "Hello 😊🚀"])
        .assert()
        .success()
        .stdout("😊\n🚀\n");
}

#[test]
fn test_emoji_none_found() {
    let home = tempfile::tempdir().unwrap();
    textz(&home)
        .args(["emoji", "plain"])
        .assert()
        .success()
        .stdout("No emoji found.\n");
}

#[test]
fn test_emoji_tally_json() {
    let home = tempfile::tempdir().unwrap();
    let json = json_output(textz(&home).args(["emoji", "--tally", "🔥 ok 🔥 ✨"]));
    assert_eq!(json["tallies"][0]["emoji"], "🔥");
    assert_eq!(json["tallies"][0]["count"], 2);
    assert_eq!(json["tallies"][1]["emoji"], "✨");
}

#[test]
fn test_strip_removes_emoji() {
    let home = tempfile::tempdir().unwrap();
    textz(&home)
        .args(["strip", "Hello 😊🚀"])
        .assert()
        .success()
        .stdout("Hello \n");
}

#[test]
fn test_strip_cluster_mode_drops_joiners() {
    let home = tempfile::tempdir().unwrap();
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    textz(&home)
        .args(["strip", "--clusters"])
        .arg(format!("a{}b", family))
        .assert()
        .success()
        .stdout("ab\n");
}

#[test]
fn test_social_formats_stdin() {
    let home = tempfile::tempdir().unwrap();
    textz(&home)
        .args(["social", "--emoji", "✨", "--bullets", "--spacing"])
        .write_stdin("a\n\n   \nb\n")
        .assert()
        .success()
        .stdout("• ✨ a\n\n• ✨ b\n");
}

#[test]
fn test_social_with_stats_json() {
    let home = tempfile::tempdir().unwrap();
    let json = json_output(
        textz(&home)
            .args(["social", "--bullets", "--stats"])
            .write_stdin("one\r\ntwo\r\n"),
    );
    assert_eq!(json["text"], "• one\n• two");
    assert_eq!(json["stats"]["words"], 4);
    assert_eq!(json["stats"]["paragraphs"], 1);
}

#[test]
fn test_config_defaults_feed_social() {
    let home = tempfile::tempdir().unwrap();

    textz(&home)
        .args(["config", "emoji", "🚀"])
        .assert()
        .success()
        .stdout(predicate::str::contains("emoji set to 🚀"));
    textz(&home)
        .args(["config", "use-bullets", "true"])
        .assert()
        .success();

    textz(&home)
        .arg("social")
        .write_stdin("launch\nday")
        .assert()
        .success()
        .stdout("• 🚀 launch\n• 🚀 day\n");

    // Flags still override the saved defaults.
    textz(&home)
        .args(["social", "--no-bullets", "--emoji", ""])
        .write_stdin("launch\nday")
        .assert()
        .success()
        .stdout("launch\nday\n");
}

#[test]
fn test_config_show_all_and_key() {
    let home = tempfile::tempdir().unwrap();
    textz(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("words-per-minute = 200"))
        .stdout(predicate::str::contains("emoji-mode"));

    textz(&home)
        .args(["config", "emoji-mode"])
        .assert()
        .success()
        .stdout("codepoint\n");
}

#[test]
fn test_config_bad_value_fails() {
    let home = tempfile::tempdir().unwrap();
    textz(&home)
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));

    textz(&home)
        .args(["config", "words-per-minute", "zero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a positive number"));
}

#[test]
fn test_config_emoji_mode_applies_to_strip() {
    let home = tempfile::tempdir().unwrap();
    textz(&home)
        .args(["config", "emoji-mode", "cluster"])
        .assert()
        .success();

    textz(&home)
        .arg("strip")
        .arg("ok \u{2764}\u{FE0F}")
        .assert()
        .success()
        .stdout("ok \n");

    textz(&home)
        .args(["strip", "--mode", "codepoint"])
        .arg("ok \u{2764}\u{FE0F}")
        .assert()
        .success()
        .stdout("ok \u{FE0F}\n");
}
