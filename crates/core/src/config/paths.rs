use std::path::{Path, PathBuf};

use super::defaults::{CONFIG_FILE_NAME, LOG_FILE_NAME};
use super::types::{ConfigError, Result};

/// Location of the config file: the explicit `--config` path, else `~/.fsoc`.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
  config_path_in(explicit, dirs::home_dir())
}

pub(crate) fn config_path_in(explicit: Option<&Path>, home: Option<PathBuf>) -> Result<PathBuf> {
  if let Some(path) = explicit {
    return Ok(path.to_path_buf());
  }
  home
    .map(|dir| dir.join(CONFIG_FILE_NAME))
    .ok_or(ConfigError::HomeDirUnavailable)
}

/// Default log file location (`<temp>/fsoc.log`)
#[must_use]
pub fn default_log_path() -> PathBuf {
  std::env::temp_dir().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn explicit_path_wins_even_without_home() {
    let got = config_path_in(Some(Path::new("/etc/fsoc.yaml")), None).unwrap();
    assert_eq!(got, PathBuf::from("/etc/fsoc.yaml"));
  }

  #[test]
  fn falls_back_to_dotfile_in_home() {
    let got = config_path_in(None, Some(PathBuf::from("/home/dev"))).unwrap();
    assert_eq!(got, PathBuf::from("/home/dev/.fsoc"));
  }

  #[test]
  fn missing_home_is_an_error() {
    let err = config_path_in(None, None).unwrap_err();
    assert!(matches!(err, ConfigError::HomeDirUnavailable));
  }

  #[test]
  fn log_defaults_to_temp_dir() {
    assert_eq!(default_log_path(), std::env::temp_dir().join("fsoc.log"));
  }
}
