use std::collections::BTreeMap;
use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{ArgMatches, Command};
use fsoc_core::gate::{CommandInfo, Invocation, ProfileFlag};

use crate::args::{Cli, Commands};

/// Describe this run for the gate.
///
/// `command` must be the built clap command (`Command::build`) that produced
/// `matches`, so global flags are visible at every level.
pub(crate) fn describe(
  cli: &Cli,
  selected: &Commands,
  command: &Command,
  matches: &ArgMatches,
  raw_args: &[OsString],
) -> Invocation {
  Invocation {
    command: CommandInfo::new(command_path(command, matches)).bypass_config(selected.bypass_config()),
    arguments: raw_args
      .iter()
      .skip(1)
      .map(|arg| arg.to_string_lossy().into_owned())
      .collect(),
    explicit_flags: explicit_flags(command, matches),
    config_path: cli.global.config.clone(),
    profile: ProfileFlag::from(cli.global.profile.clone()),
    verbose: cli.global.verbose,
    log_path: cli.global.log.clone(),
  }
}

/// Root-first names of the parsed command chain.
fn command_path(command: &Command, matches: &ArgMatches) -> Vec<String> {
  let mut path = vec![command.get_name().to_string()];
  let mut current = matches;
  while let Some((name, sub)) = current.subcommand() {
    path.push(name.to_string());
    current = sub;
  }
  path
}

/// Flags the caller typed, keyed by long name; defaults are left out.
fn explicit_flags(command: &Command, matches: &ArgMatches) -> Vec<(String, String)> {
  let mut flags = BTreeMap::new();
  collect_flags(command, matches, &mut flags);
  flags.into_iter().collect()
}

fn collect_flags(command: &Command, matches: &ArgMatches, out: &mut BTreeMap<String, String>) {
  for arg in command.get_arguments().filter(|arg| !arg.is_positional()) {
    let id = arg.get_id().as_str();
    if matches.value_source(id) != Some(ValueSource::CommandLine) {
      continue;
    }
    let value = matches
      .get_raw(id)
      .map(|values| {
        values
          .map(|v| v.to_string_lossy().into_owned())
          .collect::<Vec<_>>()
          .join(",")
      })
      .unwrap_or_default();
    let name = arg.get_long().map_or_else(|| id.to_string(), str::to_string);
    out.insert(name, value);
  }
  if let Some((name, sub_matches)) = matches.subcommand()
    && let Some(sub) = command.find_subcommand(name)
  {
    collect_flags(sub, sub_matches, out);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::{CommandFactory, FromArgMatches};
  use pretty_assertions::assert_eq;

  fn describe_args(args: &[&str]) -> Invocation {
    let raw: Vec<OsString> = args.iter().map(OsString::from).collect();
    let mut command = Cli::command();
    command.build();
    let matches = command.clone().try_get_matches_from(&raw).unwrap();
    let cli = Cli::from_arg_matches(&matches).unwrap();
    let selected = cli.command.as_ref().unwrap();
    describe(&cli, selected, &command, &matches, &raw)
  }

  #[test]
  fn only_typed_flags_are_reported() {
    let inv = describe_args(&["fsoc", "config", "list", "-o", "json", "--verbose"]);
    assert_eq!(
      inv.explicit_flags,
      vec![
        ("output".to_string(), "json".to_string()),
        ("verbose".to_string(), "true".to_string()),
      ]
    );
    assert!(inv.verbose);
  }

  #[test]
  fn defaults_are_not_reported() {
    let inv = describe_args(&["fsoc", "status"]);
    assert!(inv.explicit_flags.is_empty(), "{:?}", inv.explicit_flags);
    assert_eq!(inv.formatted_flags(), "[]");
  }

  #[test]
  fn profile_flag_keeps_its_three_states() {
    assert_eq!(describe_args(&["fsoc", "status"]).profile, ProfileFlag::NotSupplied);
    assert_eq!(
      describe_args(&["fsoc", "status", "--profile", ""]).profile,
      ProfileFlag::SuppliedEmpty
    );
    assert_eq!(
      describe_args(&["fsoc", "--profile", "P2", "status"]).profile,
      ProfileFlag::SuppliedValue("P2".to_string())
    );
  }

  #[test]
  fn empty_profile_is_still_reported_as_explicit() {
    let inv = describe_args(&["fsoc", "status", "--profile="]);
    assert_eq!(inv.formatted_flags(), r#"[profile=""]"#);
  }

  #[test]
  fn command_path_and_bypass_follow_registration() {
    let set = describe_args(&["fsoc", "config", "set", "--url", "https://x"]);
    assert_eq!(set.command.path, vec!["fsoc", "config", "set"]);
    assert!(set.command.bypass_config);

    let bash = describe_args(&["fsoc", "completion", "bash"]);
    assert_eq!(bash.command.parent(), Some("completion"));
    assert!(!bash.command.bypass_config);
  }

  #[test]
  fn raw_arguments_exclude_program_name() {
    let inv = describe_args(&["fsoc", "help", "config", "set"]);
    assert_eq!(inv.arguments, vec!["help", "config", "set"]);
    assert_eq!(inv.quoted_arguments(), r#"["help" "config" "set"]"#);
  }
}
