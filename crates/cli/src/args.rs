use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use fsoc_core::config::{AuthMethod, default_log_path};

/// fsoc - Cisco FSO Platform Control Tool
///
/// Entry point for developers working against the Full Stack Observability
/// platform: one uniform way to reach developer, test and production
/// environments.
///
/// Examples:
///   fsoc config set --url https://mytenant.observe.example.com --auth oauth
///   fsoc status
///   fsoc config list -o json
#[derive(Debug, Parser)]
#[command(name = "fsoc", version, verbatim_doc_comment, disable_help_subcommand = true)]
pub struct Cli {
  #[command(flatten)]
  pub global: GlobalArgs,

  #[command(subcommand)]
  pub command: Option<Commands>,
}

#[derive(Debug, ClapArgs)]
pub struct GlobalArgs {
  /// Config file (default is ~/.fsoc)
  #[arg(long, global = true, value_name = "PATH")]
  pub config: Option<PathBuf>,

  /// Access profile (default is current or "default"); an empty value keeps the current one
  #[arg(long, global = true, value_name = "NAME")]
  pub profile: Option<String>,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
  pub output: OutputFormat,

  /// Extract a field from the output by dotted path, e.g. `.url`
  #[arg(long, global = true, value_name = "EXPR")]
  pub fields: Option<String>,

  /// Enable detailed output
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Location of the fsoc log file
  #[arg(long, global = true, value_name = "PATH", default_value_os_t = default_log_path())]
  pub log: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Auto,
  Table,
  Detail,
  Json,
  Yaml,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Configure access profiles
  Config(ConfigArgs),
  /// Show the active profile and its target
  Status,
  /// Print version information
  Version,
  /// Help about any command
  Help {
    /// Command path, e.g. `config set`
    command: Vec<String>,
  },
  /// Generate shell completion scripts
  Completion(CompletionArgs),
}

impl Commands {
  /// Commands that must work before any profile is configured.
  #[must_use]
  pub fn bypass_config(&self) -> bool {
    matches!(self, Commands::Config(_) | Commands::Version)
  }
}

#[derive(Debug, ClapArgs)]
pub struct ConfigArgs {
  #[command(subcommand)]
  pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
  /// Create or update the active profile
  Set(SetArgs),
  /// Show the active profile
  Get,
  /// List all profiles
  List,
  /// Make a profile the current one
  Use {
    /// Profile name
    name: String,
  },
  /// Remove a profile
  Delete {
    /// Profile name
    name: String,
  },
}

#[derive(Debug, Default, ClapArgs)]
pub struct SetArgs {
  /// Platform URL of the target tenant
  #[arg(long)]
  pub url: Option<String>,
  /// Tenant id
  #[arg(long)]
  pub tenant: Option<String>,
  /// User name for local auth
  #[arg(long)]
  pub user: Option<String>,
  /// Access token
  #[arg(long)]
  pub token: Option<String>,
  /// Credentials file for principal-based auth
  #[arg(long, value_name = "PATH")]
  pub secret_file: Option<String>,
  /// Authentication method
  #[arg(long, value_enum)]
  pub auth: Option<AuthArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AuthArg {
  None,
  Oauth,
  ServicePrincipal,
  AgentPrincipal,
  Jwt,
  Local,
}

impl From<AuthArg> for AuthMethod {
  fn from(value: AuthArg) -> Self {
    match value {
      AuthArg::None => AuthMethod::None,
      AuthArg::Oauth => AuthMethod::Oauth,
      AuthArg::ServicePrincipal => AuthMethod::ServicePrincipal,
      AuthArg::AgentPrincipal => AuthMethod::AgentPrincipal,
      AuthArg::Jwt => AuthMethod::Jwt,
      AuthArg::Local => AuthMethod::Local,
    }
  }
}

#[derive(Debug, ClapArgs)]
pub struct CompletionArgs {
  #[command(subcommand)]
  pub shell: CompletionShell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum CompletionShell {
  /// Generate the completion script for bash
  Bash,
  /// Generate the completion script for zsh
  Zsh,
  /// Generate the completion script for fish
  Fish,
  /// Generate the completion script for PowerShell
  Powershell,
  /// Generate the completion script for elvish
  Elvish,
}
