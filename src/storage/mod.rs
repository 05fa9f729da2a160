//! In-memory storage for books.
//!
//! [`BookRepository`] owns the ordered collection and the id allocation
//! policy. Nothing is persisted; a repository lives exactly as long as the
//! process that created it.

mod repository;

pub use repository::BookRepository;
