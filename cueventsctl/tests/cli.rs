use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn list_help_mentions_sort_flag() {
    let mut cmd = cargo_bin_cmd!("cueventsctl");
    let output = cmd
        .arg("list")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("--sort"), "list help missing --sort");
    assert!(text.contains("--json"), "list help missing --json");
}

#[test]
fn on_campus_sorted_by_interest() {
    let mut cmd = cargo_bin_cmd!("cueventsctl");
    let output = cmd
        .args(["list", "on-campus", "--sort", "interested"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("On Campus (sorted by People Interested, Ascending)")
    );
    let first = lines.next().unwrap_or_default();
    assert!(first.contains("Music Festival"), "unexpected first row: {first}");
    assert!(first.contains("50 Interested"));
}

#[test]
fn repeated_sort_flag_flips_direction() {
    let mut cmd = cargo_bin_cmd!("cueventsctl");
    cmd.args(["list", "off-campus", "--sort", "name", "--sort", "name"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Off Campus (sorted by Alphabetically, Descending)",
        ));
}

#[test]
fn location_is_rejected_for_on_campus() {
    let mut cmd = cargo_bin_cmd!("cueventsctl");
    cmd.args(["list", "on-campus", "--sort", "location"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not enabled"));
}

#[test]
fn unknown_sort_key_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("cueventsctl");
    cmd.args(["list", "on-campus", "--sort", "rating"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort key"));
}

#[test]
fn json_output_is_parseable() {
    let mut cmd = cargo_bin_cmd!("cueventsctl");
    let output = cmd
        .args(["list", "off-campus", "--sort", "location", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["state"]["key"], "location");
    assert_eq!(value["records"][0]["location"], "City Brewery");
}

#[test]
fn keys_lists_enabled_sort_options() {
    let mut cmd = cargo_bin_cmd!("cueventsctl");
    cmd.args(["keys", "off-campus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date (Ascending)"))
        .stdout(predicate::str::contains("Location"));

    let mut cmd = cargo_bin_cmd!("cueventsctl");
    cmd.args(["keys", "on-campus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Location").not());
}

#[test]
fn config_switches_to_calendar_dates() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("events.toml");
    std::fs::write(&config, "date_ordering = \"calendar\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("cueventsctl");
    let output = cmd
        .args(["list", "on-campus", "--config"])
        .arg(&config)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    let first = text.lines().nth(1).unwrap_or_default();
    assert!(first.starts_with("Sept 15, 2024"), "unexpected first row: {first}");
}
