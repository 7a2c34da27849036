use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::types::{ConfigError, ProfileRegistry, Result};
use super::validate::validate_registry;

/// Read and parse the profile registry at `path`.
///
/// A missing file is [`ConfigError::NotFound`]; an empty file is a valid,
/// empty registry.
pub fn load(path: &Path) -> Result<ProfileRegistry> {
  let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
    ErrorKind::NotFound => ConfigError::NotFound {
      path: path.to_path_buf(),
    },
    _ => ConfigError::Io {
      path: path.to_path_buf(),
      source,
    },
  })?;
  parse(path, &raw)
}

pub(crate) fn parse(path: &Path, raw: &str) -> Result<ProfileRegistry> {
  if raw.trim().is_empty() {
    return Ok(ProfileRegistry::default());
  }
  let registry: ProfileRegistry = serde_yaml::from_str(raw).map_err(|source| ConfigError::Yaml {
    path: path.to_path_buf(),
    source,
  })?;
  validate_registry(&registry)?;
  Ok(registry)
}
