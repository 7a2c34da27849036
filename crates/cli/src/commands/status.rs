use anyhow::{Result, bail};
use fsoc_core::config::AuthMethod;
use serde::Serialize;

use crate::AppContext;
use crate::output::print;

#[derive(Debug, Serialize)]
struct Status<'a> {
  profile: &'a str,
  url: Option<&'a str>,
  tenant: Option<&'a str>,
  auth_method: Option<&'static str>,
}

pub(crate) fn run(ctx: &AppContext) -> Result<()> {
  // The gate only admits this command with a usable context.
  let Some(context) = ctx.config.context() else {
    bail!("no context for profile {:?}", ctx.profile);
  };
  let status = Status {
    profile: &ctx.profile,
    url: context.url.as_deref(),
    tenant: context.tenant.as_deref(),
    auth_method: context.auth_method.map(AuthMethod::as_str),
  };
  print(&ctx.output.record(&status)?);
  Ok(())
}
