//! # Bookshelf - a GraphQL API over an in-memory book catalogue
//!
//! Bookshelf keeps an ordered list of books in memory and exposes list, get,
//! create, update and delete through GraphQL, either over HTTP or straight
//! from the command line.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API (GraphiQL at http://127.0.0.1:8080/graphql)
//! bookshelf serve
//!
//! # One-off query against the sample catalogue
//! bookshelf query '{ books { id title author } }'
//!
//! # Print the schema
//! bookshelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Book, NewBook, BookPatch)
//! - [`storage`]: The in-memory book repository

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookshelf.yml` configuration files and their discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `ShelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server that hosts it.
pub mod graphql;

pub mod logging;

/// Data models for books.
pub mod model;

/// In-memory storage layer.
pub mod storage;
