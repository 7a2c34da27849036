use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::types::{ProfileRegistry, Result};
use super::{load, save};

/// Persistence for the profile registry.
///
/// The gate only talks to this trait, so tests and alternative backends can
/// stand in for the YAML file.
pub trait ProfileStore {
  /// Where the registry lives, for diagnostics.
  fn location(&self) -> &Path;

  fn load(&self) -> Result<ProfileRegistry>;

  fn save(&mut self, registry: &ProfileRegistry) -> Result<()>;

  /// The persisted current profile, if the registry can be read and has one.
  fn current_profile(&self) -> Option<String> {
    self
      .load()
      .ok()
      .and_then(|registry| registry.current().map(str::to_string))
  }

  /// Rewrite the current marker of an existing registry.
  fn set_current_profile(&mut self, name: &str) -> Result<()> {
    let mut registry = self.load()?;
    registry.set_current(name);
    self.save(&registry)
  }
}

/// The YAML config file (`~/.fsoc` unless `--config` says otherwise).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlFileStore {
  path: PathBuf,
}

impl YamlFileStore {
  #[must_use]
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// Locate the store from an optional explicit path, falling back to the home directory.
  pub fn locate(explicit: Option<&Path>) -> Result<Self> {
    config_path(explicit).map(Self::new)
  }
}

impl ProfileStore for YamlFileStore {
  fn location(&self) -> &Path {
    &self.path
  }

  fn load(&self) -> Result<ProfileRegistry> {
    load(&self.path)
  }

  fn save(&mut self, registry: &ProfileRegistry) -> Result<()> {
    save(&self.path, registry)
  }
}
