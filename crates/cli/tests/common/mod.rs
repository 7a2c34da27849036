#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// An isolated home directory plus a log location for one test.
pub struct TestEnv {
  root: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let root = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(root.path().join("home")).expect("mkdir home");
    Self { root }
  }

  pub fn path(&self) -> &Path {
    self.root.path()
  }

  pub fn home(&self) -> PathBuf {
    self.path().join("home")
  }

  pub fn config_path(&self) -> PathBuf {
    self.home().join(".fsoc")
  }

  pub fn log_path(&self) -> PathBuf {
    self.path().join("fsoc.log")
  }

  pub fn write_config(&self, yaml: &str) {
    std::fs::write(self.config_path(), yaml).expect("write config");
  }

  pub fn read_config(&self) -> String {
    std::fs::read_to_string(self.config_path()).expect("read config")
  }

  /// Two profiles `P1` and `P2`, with `P1` current.
  pub fn write_two_profiles(&self) {
    self.write_config(
      "contexts:\n\
       - name: P1\n  auth_method: oauth\n  url: https://p1.example.com\n  tenant: t1\n\
       - name: P2\n  auth_method: jwt\n  url: https://p2.example.com\n  tenant: t2\n\
       current_context: P1\n",
    );
  }

  /// `fsoc` with HOME and the temp dir pointed into this environment.
  pub fn fsoc(&self) -> Command {
    let mut cmd = Command::cargo_bin("fsoc").expect("fsoc binary");
    cmd
      .current_dir(self.path())
      .env("HOME", self.home())
      .env("TMPDIR", self.path())
      .env_remove("FSOC_PROFILE")
      .env_remove("FSOC_URL")
      .env_remove("FSOC_TENANT")
      .env_remove("FSOC_TOKEN")
      .env("NO_COLOR", "1");
    cmd
  }

  /// Parsed JSON records of the log file.
  pub fn log_records(&self) -> Vec<Value> {
    let text = std::fs::read_to_string(self.log_path()).expect("read log");
    text
      .lines()
      .filter(|line| !line.trim().is_empty())
      .map(|line| serde_json::from_str(line).expect("json log line"))
      .collect()
  }

  pub fn log_record(&self, message: &str) -> Option<Value> {
    self
      .log_records()
      .into_iter()
      .find(|record| record["fields"]["message"] == message)
  }
}
