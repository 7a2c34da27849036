use anyhow::Result;

use crate::AppContext;
use crate::output::print;

pub(crate) fn run(ctx: &AppContext) -> Result<()> {
  print(&ctx.output.record(&ctx.build)?);
  Ok(())
}
