//! Data models for the catalogue.
//!
//! - [`Book`]: a catalogued record with a store-assigned id
//! - [`NewBook`]: the fields supplied when creating a book
//! - [`BookPatch`]: a partial update where every field is optional

mod book;

pub use book::{Book, BookPatch, NewBook, seed_books};
