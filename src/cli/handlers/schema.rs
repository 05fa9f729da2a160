use anyhow::Result;

use crate::config::Edition;

use super::CommandContext;
use super::utils::fresh_schema;

pub fn handle_schema(ctx: CommandContext, edition: Option<Edition>) -> Result<()> {
    let edition = edition.unwrap_or(ctx.config.schema.edition);
    print!("{}", fresh_schema(&ctx.config, edition).sdl());
    Ok(())
}
