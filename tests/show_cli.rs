#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const METADATA: &str = "\
repositories:
  - name: rofi-web
    tags: SamWolfs/rofi-web
    url: https://github.com/SamWolfs/rofi-web
  - name: dotfiles
    tags: SamWolfs/dotfiles
    url: https://github.com/SamWolfs/dotfiles
";

fn rofi_web(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("rofi-web"));
    cmd.env("ROFI_WEB_CONFIG_DIR", config_dir.path())
        .env_remove("ROFI_INFO")
        .env_remove("ROFI_WEB_FG_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

fn with_metadata(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("metadata.yaml"), content).unwrap();
    temp
}

#[test]
fn test_render_list() {
    let temp = with_metadata(METADATA);

    let expected = concat!(
        "\0markup-rows\x1ftrue\n",
        "rofi-web <span color=\"#928374\" size=\"10pt\" style=\"italic\">(SamWolfs/rofi-web)</span>",
        "\0info\x1f",
        r#"{"name":"rofi-web","tags":"SamWolfs/rofi-web","url":"https://github.com/SamWolfs/rofi-web"}"#,
        "\n",
        "dotfiles <span color=\"#928374\" size=\"10pt\" style=\"italic\">(SamWolfs/dotfiles)</span>",
        "\0info\x1f",
        r#"{"name":"dotfiles","tags":"SamWolfs/dotfiles","url":"https://github.com/SamWolfs/dotfiles"}"#,
    );

    rofi_web(&temp)
        .args(["show", "-l", "repositories"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_unknown_list_renders_only_option_line() {
    let temp = with_metadata(METADATA);

    rofi_web(&temp)
        .args(["show", "-l", "bookmarks"])
        .assert()
        .success()
        .stdout("\0markup-rows\x1ftrue\n");
}

#[test]
fn test_first_run_creates_default_files() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("rofi-web");

    Command::new(cargo_bin("rofi-web"))
        .env("ROFI_WEB_CONFIG_DIR", &config_dir)
        .env_remove("ROFI_INFO")
        .args(["show", "-l", "repositories"])
        .assert()
        .success()
        .stdout("\0markup-rows\x1ftrue\n");

    assert!(config_dir.join("config.yaml").exists());
    assert!(config_dir.join("metadata.yaml").exists());
}

#[test]
fn test_existing_files_are_not_clobbered() {
    let temp = with_metadata(METADATA);

    rofi_web(&temp)
        .args(["show", "-l", "repositories"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("metadata.yaml")).unwrap(),
        METADATA
    );
}

#[test]
fn test_fg_color_from_config() {
    let temp = with_metadata(METADATA);
    fs::write(temp.path().join("config.yaml"), "fg_color: \"#fabd2f\"\n").unwrap();

    rofi_web(&temp)
        .args(["show", "-l", "repositories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color=\"#fabd2f\""))
        .stdout(predicate::str::contains("#928374").not());
}

#[test]
fn test_fg_color_env_override() {
    let temp = with_metadata(METADATA);
    fs::write(temp.path().join("config.yaml"), "fg_color: \"#fabd2f\"\n").unwrap();

    rofi_web(&temp)
        .env("ROFI_WEB_FG_COLOR", "#83a598")
        .args(["show", "-l", "repositories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color=\"#83a598\""));
}

#[test]
fn test_explicit_metadata_file() {
    let temp = TempDir::new().unwrap();
    let other = with_metadata(METADATA);

    rofi_web(&temp)
        .arg("--metadata")
        .arg(other.path().join("metadata.yaml"))
        .args(["show", "-l", "repositories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dotfiles <span "));
}

#[test]
fn test_selection_not_found_fails() {
    let temp = with_metadata(METADATA);

    rofi_web(&temp)
        .args([
            "show",
            "-l",
            "repositories",
            "missing <span color=\"#928374\" size=\"10pt\" style=\"italic\">()</span>",
        ])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Selection not found"))
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn test_malformed_payload_fails() {
    let temp = with_metadata(METADATA);

    rofi_web(&temp)
        .env("ROFI_INFO", "{\"name\": ")
        .args(["show", "-l", "repositories", "rofi-web"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Malformed selection payload"));
}

#[test]
fn test_missing_list_flag_fails_without_output() {
    let temp = with_metadata(METADATA);

    rofi_web(&temp)
        .arg("show")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn test_gh_import() {
    let temp = TempDir::new().unwrap();
    let gh_json = r#"[{"name":"rofi-web","nameWithOwner":"SamWolfs/rofi-web","url":"https://github.com/SamWolfs/rofi-web"}]"#;

    rofi_web(&temp)
        .arg("gh-import")
        .write_stdin(gh_json)
        .assert()
        .success()
        .stdout(predicate::str::contains("name: rofi-web"))
        .stdout(predicate::str::contains("tags: SamWolfs/rofi-web"))
        .stdout(predicate::str::contains(
            "https://github.com/SamWolfs/rofi-web",
        ));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_payload_fails_without_fallback() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let temp = with_metadata(METADATA);

    rofi_web(&temp)
        .env("ROFI_INFO", OsString::from_vec(vec![0xff, 0xfe]))
        .args(["show", "-l", "repositories", "rofi-web"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Malformed selection payload"))
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn test_gh_import_does_not_create_config_files() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("rofi-web");

    Command::new(cargo_bin("rofi-web"))
        .env("ROFI_WEB_CONFIG_DIR", &config_dir)
        .env_remove("RUST_LOG")
        .arg("gh-import")
        .write_stdin("[]")
        .assert()
        .success();

    assert!(!config_dir.join("config.yaml").exists());
    assert!(!config_dir.join("metadata.yaml").exists());
    assert!(!config_dir.exists());
}
