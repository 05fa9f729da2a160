use crate::config::{CONFIG_FILE_NAME, ShelfConfig};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_init(ctx: CommandContext, force: bool) -> Result<()> {
    let config_path = ctx.root.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    ShelfConfig::default().save(&config_path)?;

    println!(
        "{} bookshelf config in {}",
        "Initialized".green(),
        ctx.root.display()
    );
    println!("  Config: {}", config_path.display());

    Ok(())
}
