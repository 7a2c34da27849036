use serde::Serialize;

/// Build identification emitted at the start of every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
  pub version: &'static str,
  pub commit: &'static str,
  pub os: &'static str,
  pub arch: &'static str,
  pub build: &'static str,
}

impl BuildInfo {
  /// Describe the running binary; `version` and `commit` come from the caller's crate.
  #[must_use]
  pub fn new(version: &'static str, commit: Option<&'static str>) -> Self {
    Self {
      version,
      commit: commit.unwrap_or("unknown"),
      os: std::env::consts::OS,
      arch: std::env::consts::ARCH,
      build: if cfg!(debug_assertions) { "debug" } else { "release" },
    }
  }
}
