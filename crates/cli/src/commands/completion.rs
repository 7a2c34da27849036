use std::io::{self, Write};

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::args::{Cli, CompletionShell};

impl From<CompletionShell> for Shell {
  fn from(value: CompletionShell) -> Self {
    match value {
      CompletionShell::Bash => Shell::Bash,
      CompletionShell::Zsh => Shell::Zsh,
      CompletionShell::Fish => Shell::Fish,
      CompletionShell::Powershell => Shell::PowerShell,
      CompletionShell::Elvish => Shell::Elvish,
    }
  }
}

pub(crate) fn run(shell: CompletionShell) -> Result<()> {
  let mut stdout = io::stdout().lock();
  write_script(shell, &mut stdout)?;
  stdout.flush()?;
  Ok(())
}

fn write_script(shell: CompletionShell, out: &mut dyn Write) -> Result<()> {
  let mut command = Cli::command();
  let name = command.get_name().to_string();
  generate(Shell::from(shell), &mut command, name, out);
  Ok(())
}
