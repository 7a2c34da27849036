//! Core library for the fsoc control tool.
//!
//! Everything that runs before a command handler lives here: the profile
//! registry and its YAML store, the diagnostics sink (console + JSON log
//! file), and the invocation gate that picks the active profile and decides
//! whether the command may run.
//!
//! Quick start:
//! - Describe the run with a [`gate::Invocation`].
//! - Call [`gate::Gate::run`] with a store opener such as
//!   [`config::YamlFileStore::locate`].
//! - On admission, install `admission.diagnostics` globally and dispatch.

pub mod config;
pub mod gate;
pub mod logging;
pub mod version;
