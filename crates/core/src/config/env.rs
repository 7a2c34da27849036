use super::types::Context;

pub const PROFILE_ENV: &str = "FSOC_PROFILE";
pub const URL_ENV: &str = "FSOC_URL";
pub const TENANT_ENV: &str = "FSOC_TENANT";
pub const TOKEN_ENV: &str = "FSOC_TOKEN";

/// Config values bound from the environment.
///
/// Sits between command-line flags and the file: a flag beats these, these
/// beat what the file says. Nothing here is ever written back to the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
  pub profile: Option<String>,
  pub url: Option<String>,
  pub tenant: Option<String>,
  pub token: Option<String>,
}

impl EnvOverrides {
  #[must_use]
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build from an arbitrary lookup; empty values count as unset.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
    Self {
      profile: get(PROFILE_ENV),
      url: get(URL_ENV),
      tenant: get(TENANT_ENV),
      token: get(TOKEN_ENV),
    }
  }

  /// Overlay the bound values on an existing context.
  pub fn apply(&self, context: &mut Context) {
    if let Some(url) = &self.url {
      context.url = Some(url.clone());
    }
    if let Some(tenant) = &self.tenant {
      context.tenant = Some(tenant.clone());
    }
    if let Some(token) = &self.token {
      context.token = Some(token.clone());
    }
  }
}
