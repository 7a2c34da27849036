use anyhow::{Result, bail};
use clap::{Command, CommandFactory};

use crate::args::Cli;

/// Print help for the command at `path` (`fsoc help config set`).
pub(crate) fn run(path: &[String]) -> Result<()> {
  let mut root = Cli::command();
  root.build();
  let mut target = find(&root, path)?.clone();
  target.print_help()?;
  Ok(())
}

fn find<'a>(root: &'a Command, path: &[String]) -> Result<&'a Command> {
  let mut current = root;
  for name in path {
    let Some(next) = current.find_subcommand(name) else {
      bail!(
        "unknown help topic {name:?}; run \"{} --help\" for available commands",
        current.get_bin_name().unwrap_or("fsoc")
      );
    };
    current = next;
  }
  Ok(current)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn path(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
  }

  #[test]
  fn finds_nested_commands() {
    let mut root = Cli::command();
    root.build();
    let found = find(&root, &path(&["config", "set"])).unwrap();
    assert_eq!(found.get_name(), "set");
  }

  #[test]
  fn empty_path_is_the_root() {
    let root = Cli::command();
    let found = find(&root, &[]).unwrap();
    assert_eq!(found.get_name(), "fsoc");
  }

  #[test]
  fn unknown_topic_is_an_error() {
    let mut root = Cli::command();
    root.build();
    let err = find(&root, &path(&["nope"])).unwrap_err();
    assert!(err.to_string().contains("unknown help topic \"nope\""), "{err}");
  }
}
