//! The pre-execution gate: diagnostics, profile selection and the
//! go/no-go decision, run once per invocation before any command handler.
//!
//! Flow: diagnostics ready → profile resolved (and persisted on override) →
//! config loaded (`ok`, `absent` or `unreadable`) → admitted or rejected.
//! Commands without an [`bypass::Exemption`] are only admitted with a
//! usable context for the active profile.

pub mod bypass;
mod invocation;
pub mod profile;

use std::io::{self, IsTerminal as _};
use std::path::Path;

use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::fmt::MakeWriter;

use crate::config::{self, ConfigError, Context, DEFAULT_PROFILE, EnvOverrides, ProfileStore};
use crate::logging::{Diagnostics, DiagnosticsOptions};
use crate::version::BuildInfo;

pub use bypass::{Exemption, exemption, requires_profile};
pub use invocation::{CommandInfo, Invocation};
pub use profile::{ProfileFlag, ProfileResolution, resolve};

#[derive(Debug, Error)]
pub enum GateError {
  /// No config file location could be determined; fatal even for exempt commands.
  #[error(transparent)]
  Locate(ConfigError),
  #[error("fsoc is not configured, please use \"fsoc config set\" to configure an initial context")]
  NotConfigured {
    #[source]
    source: ConfigError,
  },
  #[error(
    "fsoc is not fully configured: missing profile {profile:?}; please use \"fsoc config set\" to configure it"
  )]
  MissingProfile { profile: String },
}

/// Outcome of loading configuration for the active profile.
#[derive(Debug)]
pub enum ConfigState {
  /// The file was read and has a context for the active profile.
  Ok(Context),
  /// The file was read but has no context for the active profile.
  Absent { profile: String },
  /// The file is missing, malformed or inaccessible.
  Unreadable(ConfigError),
}

impl ConfigState {
  #[must_use]
  pub fn context(&self) -> Option<&Context> {
    match self {
      ConfigState::Ok(ctx) => Some(ctx),
      ConfigState::Absent { .. } | ConfigState::Unreadable(_) => None,
    }
  }
}

/// A command that passed the gate, with everything its handler may need.
pub struct Admission<S> {
  pub diagnostics: Diagnostics,
  pub profile: String,
  pub config: ConfigState,
  pub exemption: Option<Exemption>,
  pub store: S,
}

/// The gate for one process invocation.
pub struct Gate<W> {
  build: BuildInfo,
  env: EnvOverrides,
  console: W,
  ansi: bool,
}

impl Gate<fn() -> io::Stderr> {
  /// Gate logging to stderr, colored when stderr is a terminal.
  #[must_use]
  pub fn new(build: BuildInfo, env: EnvOverrides) -> Self {
    Self {
      build,
      env,
      console: io::stderr,
      ansi: io::stderr().is_terminal(),
    }
  }
}

impl<W> Gate<W>
where
  W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
  /// Replace the console destination; output to it is never colored.
  pub fn with_console<C>(self, console: C) -> Gate<C>
  where
    C: for<'a> MakeWriter<'a> + Send + Sync + 'static,
  {
    Gate {
      build: self.build,
      env: self.env,
      console,
      ansi: false,
    }
  }

  /// Run the gate. `open_store` receives the `--config` path, if any.
  pub fn run<S, F>(self, invocation: &Invocation, open_store: F) -> Result<Admission<S>, GateError>
  where
    S: ProfileStore,
    F: FnOnce(Option<&Path>) -> config::Result<S>,
  {
    let Gate {
      build,
      env,
      console,
      ansi,
    } = self;
    let diagnostics = Diagnostics::new(
      &DiagnosticsOptions {
        verbose: invocation.verbose,
        log_path: invocation.log_path.clone(),
      },
      console,
      ansi,
    );

    let decided = diagnostics.in_scope(|| {
      diagnostics.report_file_sink();
      log_invocation(&build, invocation);
      let store = open_store(invocation.config_path.as_deref()).map_err(|err| {
        error!(error = %err, "unable to locate the fsoc config file");
        GateError::Locate(err)
      })?;
      decide(invocation, &env, store)
    })?;

    Ok(Admission {
      diagnostics,
      profile: decided.profile,
      config: decided.config,
      exemption: decided.exemption,
      store: decided.store,
    })
  }
}

struct Decision<S> {
  profile: String,
  config: ConfigState,
  exemption: Option<Exemption>,
  store: S,
}

fn log_invocation(build: &BuildInfo, invocation: &Invocation) {
  info!(
    version = build.version,
    commit = build.commit,
    os = build.os,
    arch = build.arch,
    build = build.build,
    "fsoc version"
  );
  info!(
    command = invocation.command.name(),
    arguments = %invocation.quoted_arguments(),
    flags = %invocation.formatted_flags(),
    "fsoc command line"
  );
}

fn decide<S: ProfileStore>(
  invocation: &Invocation,
  env: &EnvOverrides,
  mut store: S,
) -> Result<Decision<S>, GateError> {
  let current = env
    .profile
    .clone()
    .or_else(|| store.current_profile())
    .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
  let ProfileResolution { active, overridden } = resolve(&invocation.profile, &current);
  let exemption = exemption(&invocation.command);
  if overridden && let Err(err) = store.set_current_profile(&active) {
    match &err {
      // An exempt command such as `config set` may be about to create the file.
      ConfigError::NotFound { .. } if exemption.is_some() => info!(
        profile = %active,
        error = %err,
        "no config file yet; the selected profile is not persisted"
      ),
      _ => warn!(
        profile = %active,
        error = %err,
        "unable to persist the selected profile; using it for this invocation only"
      ),
    }
  }

  let config = load_config(&store, &active, env);
  let config_file = store.location().display().to_string();

  let config = match config {
    ConfigState::Unreadable(err) if exemption.is_none() => {
      let detail = err.to_string();
      let rejection = GateError::NotConfigured { source: err };
      error!(config_file = %config_file, error = %detail, "{rejection}");
      return Err(rejection);
    }
    ConfigState::Absent { profile } if exemption.is_none() => {
      let rejection = GateError::MissingProfile { profile };
      error!(config_file = %config_file, "{rejection}");
      return Err(rejection);
    }
    admitted => admitted,
  };

  if let ConfigState::Unreadable(err) = &config {
    info!("Unable to read config file ({err}), proceeding without a config");
  }
  info!(
    config_file = %config_file,
    profile = %active,
    existing = config.context().is_some(),
    exemption = ?exemption,
    "fsoc context"
  );

  Ok(Decision {
    profile: active,
    config,
    exemption,
    store,
  })
}

fn load_config<S: ProfileStore>(store: &S, profile: &str, env: &EnvOverrides) -> ConfigState {
  match store.load() {
    Err(err) => ConfigState::Unreadable(err),
    Ok(registry) => match registry.context(profile) {
      Some(found) => {
        let mut ctx = found.clone();
        env.apply(&mut ctx);
        ConfigState::Ok(ctx)
      }
      None => ConfigState::Absent {
        profile: profile.to_string(),
      },
    },
  }
}
