use crate::config::{Edition, ShelfConfig};
use crate::graphql::AppSchema;
use crate::storage::BookRepository;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Build a schema over a brand-new repository configured from `config`.
pub fn fresh_schema(config: &ShelfConfig, edition: Edition) -> AppSchema {
    let repo = Arc::new(BookRepository::from_settings(&config.store));
    AppSchema::build(edition, repo)
}

pub fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Invalid JSON in --variables"),
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Run `query` on a fresh catalogue and print the JSON response.
pub fn execute_and_print(
    schema: &AppSchema,
    query: &str,
    variables: async_graphql::Variables,
) -> Result<()> {
    let request = async_graphql::Request::new(query).variables(variables);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if !response.errors.is_empty() {
        tracing::debug!(errors = response.errors.len(), "GraphQL request returned errors");
    }
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
