pub mod args;
mod commands;
mod invocation;
mod output;

use std::ffi::OsString;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches};
use fsoc_core::config::{EnvOverrides, YamlFileStore};
use fsoc_core::gate::{ConfigState, Gate};
use fsoc_core::version::BuildInfo;

use crate::args::{Cli, Commands};
use crate::output::Output;

/// State handed to command handlers once the gate admitted the command.
pub(crate) struct AppContext {
  pub output: Output,
  pub profile: String,
  pub config: ConfigState,
  pub store: YamlFileStore,
  pub build: BuildInfo,
}

#[must_use]
pub fn build_info() -> BuildInfo {
  BuildInfo::new(env!("CARGO_PKG_VERSION"), option_env!("FSOC_GIT_COMMIT"))
}

pub fn run() -> Result<()> {
  run_from(std::env::args_os().collect())
}

fn run_from(raw_args: Vec<OsString>) -> Result<()> {
  let mut command = Cli::command();
  command.build();
  // Parse errors, --help and --version exit here, before the gate.
  let matches = command
    .clone()
    .try_get_matches_from(&raw_args)
    .unwrap_or_else(|err| err.exit());
  let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());

  let Some(selected) = &cli.command else {
    Cli::command().print_help()?;
    return Ok(());
  };

  let invocation = invocation::describe(&cli, selected, &command, &matches, &raw_args);
  let build = build_info();
  let admission = Gate::new(build, EnvOverrides::from_env()).run(&invocation, YamlFileStore::locate)?;

  // Handlers log through the same sinks the gate used.
  admission.diagnostics.install_global();

  let mut ctx = AppContext {
    output: Output::from_args(&cli.global),
    profile: admission.profile,
    config: admission.config,
    store: admission.store,
    build,
  };
  dispatch(&mut ctx, selected)
}

fn dispatch(ctx: &mut AppContext, command: &Commands) -> Result<()> {
  match command {
    Commands::Config(args) => commands::config::run(ctx, &args.command),
    Commands::Status => commands::status::run(ctx),
    Commands::Version => commands::version::run(ctx),
    Commands::Help { command } => commands::help::run(command),
    Commands::Completion(args) => commands::completion::run(args.shell),
  }
}
