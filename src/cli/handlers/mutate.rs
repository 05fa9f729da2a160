use anyhow::Result;

use super::CommandContext;
use super::utils::{execute_and_print, fresh_schema, parse_variables};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    let schema = fresh_schema(&ctx.config, ctx.config.schema.edition);
    let vars = parse_variables(variables)?;

    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    execute_and_print(&schema, &query, vars)
}
