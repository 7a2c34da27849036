use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a profile authenticates against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMethod {
  None,
  Oauth,
  ServicePrincipal,
  AgentPrincipal,
  Jwt,
  Local,
}

impl AuthMethod {
  /// Name as written in the config file.
  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      AuthMethod::None => "none",
      AuthMethod::Oauth => "oauth",
      AuthMethod::ServicePrincipal => "service-principal",
      AuthMethod::AgentPrincipal => "agent-principal",
      AuthMethod::Jwt => "jwt",
      AuthMethod::Local => "local",
    }
  }
}

/// Connection parameters of one named profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Context {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub auth_method: Option<AuthMethod>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tenant: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub token: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub secret_file: Option<String>,
  /// Keys this tool does not interpret; kept so rewrites do not drop them.
  #[serde(flatten)]
  pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Context {
  #[must_use]
  pub fn named(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Self::default()
    }
  }
}

/// The persisted set of profiles plus the "current" marker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileRegistry {
  #[serde(default)]
  pub contexts: Vec<Context>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub current_context: Option<String>,
  #[serde(flatten)]
  pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl ProfileRegistry {
  #[must_use]
  pub fn context(&self, name: &str) -> Option<&Context> {
    self.contexts.iter().find(|ctx| ctx.name == name)
  }

  pub fn context_mut(&mut self, name: &str) -> Option<&mut Context> {
    self.contexts.iter_mut().find(|ctx| ctx.name == name)
  }

  /// Name of the current profile; an empty marker counts as unset.
  #[must_use]
  pub fn current(&self) -> Option<&str> {
    self
      .current_context
      .as_deref()
      .filter(|name| !name.is_empty())
  }

  pub fn set_current(&mut self, name: &str) {
    self.current_context = Some(name.to_string());
  }

  /// Insert a context or replace the one with the same name, keeping its position.
  pub fn upsert(&mut self, context: Context) {
    match self.context_mut(&context.name) {
      Some(existing) => *existing = context,
      None => self.contexts.push(context),
    }
  }

  /// Remove a context; clears the current marker when it pointed at it.
  pub fn remove(&mut self, name: &str) -> Option<Context> {
    let idx = self.contexts.iter().position(|ctx| ctx.name == name)?;
    if self.current() == Some(name) {
      self.current_context = None;
    }
    Some(self.contexts.remove(idx))
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.contexts.iter().map(|ctx| ctx.name.as_str())
  }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("config file {} not found", path.display())]
  NotFound { path: PathBuf },
  #[error("failed to access config file {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("invalid YAML in config file {}: {source}", path.display())]
  Yaml {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },
  #[error("unable to determine the home directory; use --config to point at a config file")]
  HomeDirUnavailable,
  #[error("profile names must not be empty")]
  EmptyProfileName,
  #[error("profile `{profile}` is defined more than once")]
  DuplicateProfile { profile: String },
  #[error("profile `{profile}` does not exist")]
  UnknownProfile { profile: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
