use std::fs;
use std::path::Path;

use super::types::{ConfigError, ProfileRegistry, Result};

/// Write the registry to `path`, replacing the previous contents.
pub fn save(path: &Path, registry: &ProfileRegistry) -> Result<()> {
  let rendered = serde_yaml::to_string(registry).map_err(|source| ConfigError::Yaml {
    path: path.to_path_buf(),
    source,
  })?;
  fs::write(path, rendered).map_err(|source| ConfigError::Io {
    path: path.to_path_buf(),
    source,
  })
}
