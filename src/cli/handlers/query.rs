use anyhow::Result;

use super::CommandContext;
use super::utils::{execute_and_print, fresh_schema, parse_variables};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = fresh_schema(&ctx.config, ctx.config.schema.edition);
    let vars = parse_variables(variables)?;
    execute_and_print(&schema, &query, vars)
}
