use crate::config::{Edition, IdPolicy};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "A GraphQL API over an in-memory book catalogue"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .bookshelf.yml by default)
    #[arg(long, global = true, env = "BOOKSHELF_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "BOOKSHELF_LOG_FILE")]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .bookshelf.yml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// URL path of the GraphQL endpoint
        #[arg(long)]
        path: Option<String>,

        /// Schema edition to expose
        #[arg(short, long, value_enum)]
        edition: Option<EditionArg>,

        /// How new book ids are allocated
        #[arg(long, value_enum)]
        id_policy: Option<IdPolicyArg>,

        /// Start with an empty catalogue instead of the sample books
        #[arg(long)]
        no_seed: bool,
    },

    /// Execute a GraphQL query against a fresh catalogue
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation against a fresh catalogue
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL
    Schema {
        /// Schema edition to print
        #[arg(short, long, value_enum)]
        edition: Option<EditionArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EditionArg {
    Minimal,
    Extended,
}

impl From<EditionArg> for Edition {
    fn from(arg: EditionArg) -> Self {
        match arg {
            EditionArg::Minimal => Edition::Minimal,
            EditionArg::Extended => Edition::Extended,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum IdPolicyArg {
    MaxPlusOne,
    Monotonic,
}

impl From<IdPolicyArg> for IdPolicy {
    fn from(arg: IdPolicyArg) -> Self {
        match arg {
            IdPolicyArg::MaxPlusOne => IdPolicy::MaxPlusOne,
            IdPolicyArg::Monotonic => IdPolicy::Monotonic,
        }
    }
}
