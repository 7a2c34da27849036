use std::path::PathBuf;

use super::profile::ProfileFlag;

/// Identity of the command selected for this run, as registered by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
  /// Root-first command path, e.g. `["fsoc", "config", "set"]`.
  pub path: Vec<String>,
  /// Declared at registration: the command can run without a configured profile.
  pub bypass_config: bool,
}

impl CommandInfo {
  pub fn new<I, T>(path: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<String>,
  {
    Self {
      path: path.into_iter().map(Into::into).collect(),
      bypass_config: false,
    }
  }

  #[must_use]
  pub fn bypass_config(mut self, bypass: bool) -> Self {
    self.bypass_config = bypass;
    self
  }

  #[must_use]
  pub fn name(&self) -> &str {
    self.path.last().map_or("", String::as_str)
  }

  /// The immediate parent, if this is not the root command.
  #[must_use]
  pub fn parent(&self) -> Option<&str> {
    let len = self.path.len();
    (len >= 2).then(|| self.path[len - 2].as_str())
  }
}

/// Everything the gate needs to know about one run of the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub command: CommandInfo,
  /// Raw arguments after the program name.
  pub arguments: Vec<String>,
  /// Flags the caller actually supplied, as `(name, value)` sorted by name.
  pub explicit_flags: Vec<(String, String)>,
  pub config_path: Option<PathBuf>,
  pub profile: ProfileFlag,
  pub verbose: bool,
  pub log_path: PathBuf,
}

impl Invocation {
  /// Arguments individually quoted: `["config" "set" "a b"]`.
  #[must_use]
  pub fn quoted_arguments(&self) -> String {
    let quoted: Vec<String> = self.arguments.iter().map(|arg| format!("{arg:?}")).collect();
    format!("[{}]", quoted.join(" "))
  }

  /// Explicit flags as `[name="value" ...]`.
  #[must_use]
  pub fn formatted_flags(&self) -> String {
    let pairs: Vec<String> = self
      .explicit_flags
      .iter()
      .map(|(name, value)| format!("{name}={value:?}"))
      .collect();
    format!("[{}]", pairs.join(" "))
  }
}
