mod init;
mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::{ServeOverrides, handle_serve};

use crate::config::ShelfConfig;
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: ShelfConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: ShelfConfig, root: PathBuf) -> Self {
        Self { config, root }
    }
}
