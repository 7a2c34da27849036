//! Profile registry: types, the YAML file store and environment binding.

mod defaults;
mod env;
mod load;
mod paths;
mod store;
mod types;
mod validate;
mod write;

pub use defaults::{CONFIG_FILE_NAME, DEFAULT_PROFILE, LOG_FILE_NAME};
pub use env::{EnvOverrides, PROFILE_ENV, TENANT_ENV, TOKEN_ENV, URL_ENV};
pub use load::load;
pub use paths::{config_path, default_log_path};
pub use store::{ProfileStore, YamlFileStore};
pub use types::{AuthMethod, ConfigError, Context, ProfileRegistry, Result};
pub use write::save;

#[cfg(test)]
pub(crate) use store::memory::MemoryStore;
