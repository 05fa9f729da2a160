//! GraphQL schema, resolvers and HTTP server for the catalogue.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL at the same URL in a browser)
//! bookshelf serve --port 8080
//!
//! # Execute a query from CLI
//! bookshelf query '{ books { id title author } }'
//!
//! # Execute a mutation from CLI
//! bookshelf mutate 'createBook(title: "Dune", author: "Frank Herbert") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `books`, `book`
//! - **Mutations**: `createBook`, `updateBook`, `deleteBook` (extended edition only)
//!
//! A lookup that matches nothing resolves to `null`, never to an error.

mod schema;
mod server;
mod types;

pub use schema::{
    AppSchema, BookSchema, MinimalQueryRoot, MinimalSchema, MutationRoot, QueryRoot,
    build_minimal_schema, build_schema,
};
pub use server::{CorsPolicy, router, run_server};
pub use types::*;
