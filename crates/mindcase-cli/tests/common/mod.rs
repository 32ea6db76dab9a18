#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

pub const LOGIN_OUTLINE: &str = r#"{
  "rootTopic": {
    "title": "Shop",
    "children": {"attached": [
      {"title": "Login", "children": {"attached": [
        {"title": "P1-功能测试:tc:Valid login", "children": {"attached": [
          {"title": "Enter credentials", "children": {"attached": [{"title": "Success"}]}},
          {"title": "Click submit"}
        ]}}
      ]}}
    ]}
  }
}"#;

fn config_home() -> &'static Path {
    static CONFIG_HOME: OnceLock<TempDir> = OnceLock::new();
    CONFIG_HOME
        .get_or_init(|| tempfile::tempdir().expect("failed to create config dir for tests"))
        .path()
}

/// Create a configured `mindcase` command that never reads the user's config.
pub fn mindcase_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mindcase"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("XDG_CONFIG_HOME", config_home());
    cmd.env("HOME", config_home());
    cmd.env_remove("MINDCASE_CONFIG");
    cmd.env_remove("MINDCASE_PROJECT_ID");
    cmd.env_remove("MINDCASE_MAINTAINER");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// `mindcase import <file> --project-id shop --maintainer alice`
#[allow(dead_code)]
pub fn import_cmd(outline: &Path) -> Command {
    let mut cmd = mindcase_cmd();
    cmd.arg("import")
        .arg(outline)
        .args(["--project-id", "shop", "--maintainer", "alice"]);
    cmd
}

#[allow(dead_code)]
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}
