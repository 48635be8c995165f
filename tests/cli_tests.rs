use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{
    MALFORMED_DAYS_JSON, MISSING_RECAP_JSON, ONE_BAD_DAY_JSON, SAMPLE_JSON, eld, no_config,
    temp_out, write_input,
};

#[test]
fn test_render_pdf() {
    let input = write_input("cli_render_pdf", SAMPLE_JSON);
    let out = temp_out("cli_render_pdf", "pdf");

    eld()
        .args([
            "--config",
            &no_config("cli_render_pdf"),
            "render",
            &input,
            "--format",
            "pdf",
            "--out",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_render_svg_directory() {
    let input = write_input("cli_render_svg", SAMPLE_JSON);
    let out = temp_out("cli_render_svg", "d");

    eld()
        .args([
            "--config",
            &no_config("cli_render_svg"),
            "render",
            &input,
            "--format",
            "svg",
            "--out",
            &out,
        ])
        .assert()
        .success();

    let day1 = fs::read_to_string(Path::new(&out).join("day-01.svg")).expect("day 1 svg");
    let day2 = fs::read_to_string(Path::new(&out).join("day-02.svg")).expect("day 2 svg");
    assert!(day1.contains("Day 1"));
    assert!(day1.contains("Driving hours: 13.00"));
    assert!(day2.contains("Day 2"));
}

#[test]
fn test_render_json() {
    let input = write_input("cli_render_json", SAMPLE_JSON);
    let out = temp_out("cli_render_json", "json");

    eld()
        .args([
            "--config",
            &no_config("cli_render_json"),
            "render",
            &input,
            "--format",
            "json",
            "--out",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"day_number\": 2"));
    assert!(content.contains("activity_bar"));
}

#[test]
fn test_render_reports_failed_day_and_keeps_the_rest() {
    let input = write_input("cli_render_bad_day", ONE_BAD_DAY_JSON);
    let out = temp_out("cli_render_bad_day", "json");

    eld()
        .args([
            "--config",
            &no_config("cli_render_bad_day"),
            "render",
            &input,
            "--format",
            "json",
            "--out",
            &out,
        ])
        .assert()
        .failure()
        .stderr(contains("log for day 2 could not be rendered"))
        .stderr(contains("1 of 2 daily logs could not be rendered"));

    let content = fs::read_to_string(&out).expect("day 1 still exported");
    assert!(content.contains("\"day_number\": 1"));
    assert!(!content.contains("\"day_number\": 2"));
}

#[test]
fn test_render_refuses_to_overwrite_without_force() {
    let input = write_input("cli_render_overwrite", SAMPLE_JSON);
    let out = temp_out("cli_render_overwrite", "json");
    fs::write(&out, "keep me").unwrap();

    eld()
        .args([
            "--config",
            &no_config("cli_render_overwrite"),
            "render",
            &input,
            "--format",
            "json",
            "--out",
            &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    eld()
        .args([
            "--config",
            &no_config("cli_render_overwrite"),
            "render",
            &input,
            "--format",
            "json",
            "--out",
            &out,
            "--force",
        ])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_render_empty_trip() {
    let input = write_input("cli_render_empty", "[]");
    let out = temp_out("cli_render_empty", "pdf");

    eld()
        .args([
            "--config",
            &no_config("cli_render_empty"),
            "render",
            &input,
            "--out",
            &out,
        ])
        .assert()
        .success()
        .stderr(contains("No daily logs"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_summary_table_and_csv() {
    let input = write_input("cli_summary", SAMPLE_JSON);
    let csv = temp_out("cli_summary", "csv");

    eld()
        .args([
            "--config",
            &no_config("cli_summary"),
            "summary",
            &input,
            "--csv",
            &csv,
        ])
        .assert()
        .success()
        .stdout(contains("2024-03-01").and(contains("13.00")))
        .stdout(contains("1350.00"))
        .stdout(contains("2024-03-02"));

    let content = fs::read_to_string(&csv).expect("read summary csv");
    assert!(content.starts_with("day,date,driving_hours"));
    assert!(content.contains("2,2024-03-02,0.00,0.00,24.00,0.00"));
}

#[test]
fn test_init_and_check_config() {
    let cfg = temp_out("cli_init", "conf");

    eld()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));
    assert!(fs::read_to_string(&cfg).unwrap().contains("row_height"));

    eld()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("valid and complete"));

    eld()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("label_width: 170.0"));
}

#[test]
fn test_invalid_config_fails() {
    let cfg = temp_out("cli_bad_config", "conf");
    fs::write(&cfg, "layout:\n  label_width: 5000\n").unwrap();
    let input = write_input("cli_bad_config", SAMPLE_JSON);

    eld()
        .args(["--config", &cfg, "summary", &input])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_render_day_without_recap_fails_alone() {
    let input = write_input("cli_render_no_recap", MISSING_RECAP_JSON);
    let out = temp_out("cli_render_no_recap", "json");

    eld()
        .args([
            "--config",
            &no_config("cli_render_no_recap"),
            "render",
            &input,
            "--format",
            "json",
            "--out",
            &out,
        ])
        .assert()
        .failure()
        .stderr(contains(
            "log for day 2 could not be rendered: Missing recap field: driving_hours",
        ));

    let content = fs::read_to_string(&out).expect("day 1 still exported");
    assert!(content.contains("\"day_number\": 1"));
}

#[test]
fn test_summary_names_the_malformed_field() {
    let input = write_input("cli_summary_malformed", MALFORMED_DAYS_JSON);

    eld()
        .args([
            "--config",
            &no_config("cli_summary_malformed"),
            "summary",
            &input,
        ])
        .assert()
        .failure()
        .stdout(contains("2024-03-01"))
        .stderr(contains("log for day 2 could not be rendered: Malformed daily log"))
        .stderr(contains("missing field `total_miles_driving`"))
        .stderr(contains("2 of 3 daily logs could not be rendered"));
}

#[test]
fn test_svg_stale_sheets_are_reported_then_removed() {
    let input = write_input("cli_svg_stale", SAMPLE_JSON);
    let out = temp_out("cli_svg_stale", "d");
    fs::create_dir_all(&out).unwrap();
    let stale = Path::new(&out).join("day-03.svg");
    let unrelated = Path::new(&out).join("notes.svg");
    fs::write(&stale, "<svg/>").unwrap();
    fs::write(&unrelated, "<svg/>").unwrap();

    let args = [
        "--config",
        &no_config("cli_svg_stale"),
        "render",
        &input,
        "--format",
        "svg",
        "--out",
        &out,
    ];

    eld()
        .args(args)
        .assert()
        .success()
        .stderr(contains("Stale sheets").and(contains("day-03.svg")));
    assert!(stale.exists());

    eld().args(args).arg("--force").assert().success();
    assert!(!stale.exists());
    assert!(unrelated.exists());
    assert!(Path::new(&out).join("day-02.svg").exists());
}
