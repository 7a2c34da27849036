use super::invocation::CommandInfo;

pub const HELP_COMMAND: &str = "help";
pub const COMPLETION_COMMAND: &str = "completion";

/// Why a command may run without a configured profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exemption {
  /// Declared on the command's registration.
  Declared,
  Help,
  /// Child of the shell completion command.
  Completion,
}

#[must_use]
pub fn exemption(command: &CommandInfo) -> Option<Exemption> {
  if command.bypass_config {
    Some(Exemption::Declared)
  } else if command.name() == HELP_COMMAND {
    Some(Exemption::Help)
  } else if command.parent() == Some(COMPLETION_COMMAND) {
    Some(Exemption::Completion)
  } else {
    None
  }
}

#[must_use]
pub fn requires_profile(command: &CommandInfo) -> bool {
  exemption(command).is_none()
}
