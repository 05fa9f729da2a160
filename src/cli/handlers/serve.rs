use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{Edition, IdPolicy, ShelfConfig};
use crate::graphql::{AppSchema, run_server};
use crate::storage::BookRepository;

use super::CommandContext;

/// Command-line values that take precedence over the config file.
#[derive(Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub edition: Option<Edition>,
    pub id_policy: Option<IdPolicy>,
    pub no_seed: bool,
}

impl ServeOverrides {
    pub fn apply(self, config: &mut ShelfConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = self.path {
            config.server.path = path;
        }
        if let Some(edition) = self.edition {
            config.schema.edition = edition;
        }
        if let Some(id_policy) = self.id_policy {
            config.store.id_policy = id_policy;
        }
        if self.no_seed {
            config.store.seed = false;
        }
    }
}

pub fn handle_serve(ctx: CommandContext, overrides: ServeOverrides) -> Result<()> {
    let mut config = ctx.config;
    overrides.apply(&mut config);
    config.validate().context("Invalid server settings")?;

    let repo = Arc::new(BookRepository::from_settings(&config.store));
    tracing::info!(
        books = repo.len(),
        id_policy = %repo.id_policy(),
        "Catalogue ready"
    );
    let schema = AppSchema::build(config.schema.edition, repo);

    let url = format!("http://{}{}", config.server.bind_address(), config.server.path);
    println!("Starting GraphQL server on {}", url.cyan());
    if config.server.graphiql {
        println!("GraphiQL: {}", url.cyan());
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &config.server))?;
    Ok(())
}
