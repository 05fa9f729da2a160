use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, ServeOverrides, handle_init, handle_mutate, handle_query, handle_schema,
    handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::ShelfConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = cli.log_file.as_deref().map(Path::new);
    let _log_guard = bookshelf::logging::init(cli.verbose, log_file)?;

    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { force } => {
            handle_init(CommandContext::new(ShelfConfig::default(), cwd), force)
        }
        Commands::Serve {
            host,
            port,
            path,
            edition,
            id_policy,
            no_seed,
        } => {
            let ctx = load_context(cli.config.as_deref(), cwd)?;
            let overrides = ServeOverrides {
                host,
                port,
                path,
                edition: edition.map(Into::into),
                id_policy: id_policy.map(Into::into),
                no_seed,
            };
            handle_serve(ctx, overrides)
        }
        Commands::Query { query, variables } => {
            let ctx = load_context(cli.config.as_deref(), cwd)?;
            handle_query(ctx, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let ctx = load_context(cli.config.as_deref(), cwd)?;
            handle_mutate(ctx, mutation, variables)
        }
        Commands::Schema { edition } => {
            let ctx = load_context(cli.config.as_deref(), cwd)?;
            handle_schema(ctx, edition.map(Into::into))
        }
    }
}

fn load_context(explicit: Option<&str>, cwd: PathBuf) -> Result<CommandContext> {
    let explicit = explicit.map(Path::new);
    let config = ShelfConfig::load(explicit, &cwd)
        .context("Failed to load bookshelf configuration")?;
    Ok(CommandContext::new(config, cwd))
}
