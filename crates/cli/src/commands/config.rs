use anyhow::{Context as _, Result, bail};
use fsoc_core::config::{AuthMethod, ConfigError, Context, ProfileRegistry, ProfileStore};
use owo_colors::OwoColorize as _;
use serde::Serialize;
use tracing::info;

use crate::AppContext;
use crate::args::{ConfigCommand, SetArgs};
use crate::output::print;

const REDACTED: &str = "<redacted>";

pub(crate) fn run(ctx: &mut AppContext, command: &ConfigCommand) -> Result<()> {
  match command {
    ConfigCommand::Set(args) => set(ctx, args),
    ConfigCommand::Get => get(ctx),
    ConfigCommand::List => list(ctx),
    ConfigCommand::Use { name } => use_profile(ctx, name),
    ConfigCommand::Delete { name } => delete(ctx, name),
  }
}

/// Load the registry, treating a missing file as empty.
fn load_or_default(ctx: &AppContext) -> Result<ProfileRegistry> {
  match ctx.store.load() {
    Ok(registry) => Ok(registry),
    Err(ConfigError::NotFound { .. }) => Ok(ProfileRegistry::default()),
    Err(err) => Err(err).context("unable to read the fsoc config file"),
  }
}

fn set(ctx: &mut AppContext, args: &SetArgs) -> Result<()> {
  let mut registry = load_or_default(ctx)?;
  let mut context = registry
    .context(&ctx.profile)
    .cloned()
    .unwrap_or_else(|| Context::named(&ctx.profile));
  apply_set_args(&mut context, args);
  registry.upsert(context);
  if registry.current().is_none() {
    registry.set_current(&ctx.profile);
  }
  ctx
    .store
    .save(&registry)
    .context("unable to write the fsoc config file")?;

  info!(
    profile = %ctx.profile,
    config_file = %ctx.store.location().display(),
    "profile updated"
  );
  anstream::println!(
    "{}",
    format!("Profile {:?} saved to {}", ctx.profile, ctx.store.location().display()).green()
  );
  Ok(())
}

fn apply_set_args(context: &mut Context, args: &SetArgs) {
  if let Some(url) = &args.url {
    context.url = Some(url.clone());
  }
  if let Some(tenant) = &args.tenant {
    context.tenant = Some(tenant.clone());
  }
  if let Some(user) = &args.user {
    context.user = Some(user.clone());
  }
  if let Some(token) = &args.token {
    context.token = Some(token.clone());
  }
  if let Some(secret_file) = &args.secret_file {
    context.secret_file = Some(secret_file.clone());
  }
  if let Some(auth) = args.auth {
    context.auth_method = Some(auth.into());
  }
}

fn get(ctx: &AppContext) -> Result<()> {
  let Some(context) = ctx.config.context() else {
    bail!(
      "profile {:?} is not configured; use \"fsoc config set\" to configure it",
      ctx.profile
    );
  };
  print(&ctx.output.record(&redacted(context))?);
  Ok(())
}

fn redacted(context: &Context) -> Context {
  let mut shown = context.clone();
  if shown.token.is_some() {
    shown.token = Some(REDACTED.to_string());
  }
  shown
}

#[derive(Debug, Serialize)]
struct ProfileRow {
  current: &'static str,
  name: String,
  url: Option<String>,
  tenant: Option<String>,
  auth_method: Option<&'static str>,
}

fn rows(registry: &ProfileRegistry) -> Vec<ProfileRow> {
  registry
    .contexts
    .iter()
    .map(|context| ProfileRow {
      current: if registry.current() == Some(context.name.as_str()) { "*" } else { "" },
      name: context.name.clone(),
      url: context.url.clone(),
      tenant: context.tenant.clone(),
      auth_method: context.auth_method.map(AuthMethod::as_str),
    })
    .collect()
}

fn list(ctx: &AppContext) -> Result<()> {
  let registry = ctx
    .store
    .load()
    .context("unable to read the fsoc config file; use \"fsoc config set\" to create it")?;
  let rows = rows(&registry);
  print(&ctx.output.list(&["current", "name", "url", "tenant", "auth_method"], &rows)?);
  Ok(())
}

fn use_profile(ctx: &mut AppContext, name: &str) -> Result<()> {
  let mut registry = ctx.store.load().context("unable to read the fsoc config file")?;
  if registry.context(name).is_none() {
    return Err(ConfigError::UnknownProfile {
      profile: name.to_string(),
    })
    .context("use \"fsoc config set --profile <name>\" to create it");
  }
  registry.set_current(name);
  ctx
    .store
    .save(&registry)
    .context("unable to write the fsoc config file")?;
  info!(profile = %name, "current profile changed");
  anstream::println!("{}", format!("Current profile is now {name:?}").green());
  Ok(())
}

fn delete(ctx: &mut AppContext, name: &str) -> Result<()> {
  let mut registry = ctx.store.load().context("unable to read the fsoc config file")?;
  if registry.remove(name).is_none() {
    return Err(ConfigError::UnknownProfile {
      profile: name.to_string(),
    }
    .into());
  }
  ctx
    .store
    .save(&registry)
    .context("unable to write the fsoc config file")?;
  info!(profile = %name, "profile deleted");
  anstream::println!("{}", format!("Profile {name:?} deleted").green());
  Ok(())
}
