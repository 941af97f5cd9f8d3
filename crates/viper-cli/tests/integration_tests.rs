//! Integration tests for viper-cli.

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::viper;

const SAMPLE_OUTPUT: &str = "Hello, Taylor Swift, and welcome to your profile!\n\
                             I am the Router outreach and the name I got is Taylor Swift\n";

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_run_prints_greeting_then_navigation() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .arg("run")
        .assert()
        .success()
        .stdout(SAMPLE_OUTPUT);
}

#[test]
fn test_run_with_name() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .args(["run", "--name", "Ada Lovelace"])
        .assert()
        .success()
        .stdout(
            "Hello, Ada Lovelace, and welcome to your profile!\n\
             I am the Router outreach and the name I got is Ada Lovelace\n",
        );
}

#[test]
fn test_run_empty_name_is_passed_through() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .args(["run", "--name", ""])
        .assert()
        .success()
        .stdout(
            "Hello, , and welcome to your profile!\n\
             I am the Router outreach and the name I got is \n",
        );
}

#[test]
fn test_run_steps_in_given_order() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .args(["run", "-s", "continue", "-s", "arrive", "-s", "arrive"])
        .assert()
        .success()
        .stdout(
            "I am the Router outreach and the name I got is Taylor Swift\n\
             Hello, Taylor Swift, and welcome to your profile!\n\
             Hello, Taylor Swift, and welcome to your profile!\n",
        );
}

#[test]
fn test_run_json_lines() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .args(["--output-format", "json", "run"])
        .assert()
        .success()
        .stdout(
            "{\"kind\":\"display\",\"text\":\"Hello, Taylor Swift, and welcome to your profile!\"}\n\
             {\"kind\":\"navigation\",\"text\":\"Taylor Swift\"}\n",
        );
}

#[test]
fn test_run_strict_succeeds_on_assembled_module() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .args(["run", "--strict"])
        .assert()
        .success()
        .stdout(SAMPLE_OUTPUT);
}

#[test]
fn test_env_overrides_profile_name() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .env("VIPER_PROFILE__NAME", "Grace Hopper")
        .args(["run", "-s", "arrive"])
        .assert()
        .success()
        .stdout("Hello, Grace Hopper, and welcome to your profile!\n");
}

#[test]
fn test_name_flag_beats_env() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .env("VIPER_PROFILE__NAME", "Grace Hopper")
        .args(["run", "-s", "continue", "--name", "Ada"])
        .assert()
        .success()
        .stdout("I am the Router outreach and the name I got is Ada\n");
}

#[test]
fn test_init_then_run_with_config() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("viper.toml");

    viper(&home)
        .args(["--quiet", "init", "--path"])
        .arg(&path)
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Taylor Swift"));

    std::fs::write(&path, written.replace("Taylor Swift", "Ada Lovelace")).unwrap();

    viper(&home)
        .arg("--config")
        .arg(&path)
        .args(["run", "-s", "arrive"])
        .assert()
        .success()
        .stdout("Hello, Ada Lovelace, and welcome to your profile!\n");
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("viper.toml");
    std::fs::write(&path, "[profile]\nname = \"Keep Me\"\n").unwrap();

    viper(&home)
        .args(["--no-color", "init", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    assert!(std::fs::read_to_string(&path).unwrap().contains("Keep Me"));

    viper(&home)
        .args(["--quiet", "init", "--force", "--path"])
        .arg(&path)
        .assert()
        .success();

    assert!(
        std::fs::read_to_string(&path)
            .unwrap()
            .contains("Taylor Swift")
    );
}

#[test]
fn test_config_get_profile_name() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .args(["config", "get", "profile.name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("profile.name = \"Taylor Swift\""));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("viper"));
}

#[test]
fn test_no_color_env_accepts_conventional_value() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .env("NO_COLOR", "1")
        .arg("run")
        .assert()
        .success()
        .stdout(SAMPLE_OUTPUT);
}

#[test]
fn test_empty_no_color_env_is_ignored() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .env("NO_COLOR", "")
        .arg("run")
        .assert()
        .success()
        .stdout(SAMPLE_OUTPUT);
}

#[test]
fn test_configured_json_format_applies_to_logs() {
    let home = TempDir::new().unwrap();
    viper(&home)
        .env("VIPER_OUTPUT__FORMAT", "json")
        .args(["-v", "run", "-s", "continue"])
        .assert()
        .success()
        .stdout("{\"kind\":\"navigation\",\"text\":\"Taylor Swift\"}\n")
        .stderr(predicate::str::contains("\"level\":\"INFO\""));
}
