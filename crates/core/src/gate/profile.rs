/// How the caller used `--profile`.
///
/// Not supplied and supplied-empty both keep the current profile, but they
/// are different inputs: an empty value is how scripts pin to "whatever is
/// current" explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileFlag {
  #[default]
  NotSupplied,
  SuppliedEmpty,
  SuppliedValue(String),
}

impl From<Option<String>> for ProfileFlag {
  fn from(value: Option<String>) -> Self {
    match value {
      None => ProfileFlag::NotSupplied,
      Some(v) if v.is_empty() => ProfileFlag::SuppliedEmpty,
      Some(v) => ProfileFlag::SuppliedValue(v),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileResolution {
  pub active: String,
  /// The flag replaced the current profile; the caller persists `active`.
  pub overridden: bool,
}

#[must_use]
pub fn resolve(flag: &ProfileFlag, current: &str) -> ProfileResolution {
  match flag {
    ProfileFlag::SuppliedValue(name) => ProfileResolution {
      active: name.clone(),
      overridden: true,
    },
    ProfileFlag::SuppliedEmpty | ProfileFlag::NotSupplied => ProfileResolution {
      active: current.to_string(),
      overridden: false,
    },
  }
}
