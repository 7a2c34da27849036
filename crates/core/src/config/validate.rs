use std::collections::BTreeSet;

use super::types::{ConfigError, ProfileRegistry, Result};

pub(super) fn validate_registry(registry: &ProfileRegistry) -> Result<()> {
  let mut seen = BTreeSet::new();
  for name in registry.names() {
    if name.is_empty() {
      return Err(ConfigError::EmptyProfileName);
    }
    if !seen.insert(name) {
      return Err(ConfigError::DuplicateProfile {
        profile: name.to_string(),
      });
    }
  }
  Ok(())
}
