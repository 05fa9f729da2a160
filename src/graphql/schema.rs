use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};

use crate::config::Edition;
use crate::model::{BookPatch, NewBook};
use crate::storage::BookRepository;

use super::types::*;

pub type BookSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;
pub type MinimalSchema = Schema<MinimalQueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(repo: Arc<BookRepository>) -> BookSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(repo)
        .finish()
}

pub fn build_minimal_schema(repo: Arc<BookRepository>) -> MinimalSchema {
    Schema::build(MinimalQueryRoot, EmptyMutation, EmptySubscription)
        .data(repo)
        .finish()
}

// Both schema builders register the repository, so the lookup cannot miss.
fn get_repo<'a>(ctx: &Context<'a>) -> &'a BookRepository {
    ctx.data_unchecked::<Arc<BookRepository>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List every book in storage order
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        get_repo(ctx).list().into_iter().map(Book::from).collect()
    }

    /// Get a single book by ID
    async fn book(&self, ctx: &Context<'_>, id: Option<i64>) -> Option<Book> {
        get_repo(ctx).get(id).map(Book::from)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new book
    async fn create_book(
        &self,
        ctx: &Context<'_>,
        title: String,
        author: String,
        summary: Option<String>,
    ) -> Book {
        let new_book = NewBook::new(title, author).with_summary(summary);
        get_repo(ctx).create(new_book).into()
    }

    /// Update the supplied fields of an existing book
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: i64,
        title: Option<String>,
        author: Option<String>,
        summary: Option<String>,
    ) -> Option<Book> {
        let patch = BookPatch {
            title,
            author,
            summary,
        };
        get_repo(ctx).update(id, patch).map(Book::from)
    }

    /// Delete a book, returning it as it was before removal
    async fn delete_book(&self, ctx: &Context<'_>, id: i64) -> Option<Book> {
        get_repo(ctx).delete(id).map(Book::from)
    }
}

pub struct MinimalQueryRoot;

#[Object(name = "Query")]
impl MinimalQueryRoot {
    /// List every book in storage order
    async fn books(&self, ctx: &Context<'_>) -> Vec<MinimalBook> {
        get_repo(ctx)
            .list()
            .into_iter()
            .map(MinimalBook::from)
            .collect()
    }

    /// Get a single book by ID
    async fn book(&self, ctx: &Context<'_>, id: Option<i64>) -> Option<MinimalBook> {
        get_repo(ctx).get(id).map(MinimalBook::from)
    }
}

/// A schema of either edition, sharing one repository type.
#[derive(Clone)]
pub enum AppSchema {
    Extended(BookSchema),
    Minimal(MinimalSchema),
}

impl AppSchema {
    pub fn build(edition: Edition, repo: Arc<BookRepository>) -> Self {
        match edition {
            Edition::Extended => AppSchema::Extended(build_schema(repo)),
            Edition::Minimal => AppSchema::Minimal(build_minimal_schema(repo)),
        }
    }

    pub fn edition(&self) -> Edition {
        match self {
            AppSchema::Extended(_) => Edition::Extended,
            AppSchema::Minimal(_) => Edition::Minimal,
        }
    }

    pub async fn execute(
        &self,
        request: impl Into<async_graphql::Request>,
    ) -> async_graphql::Response {
        match self {
            AppSchema::Extended(schema) => schema.execute(request).await,
            AppSchema::Minimal(schema) => schema.execute(request).await,
        }
    }

    pub fn sdl(&self) -> String {
        match self {
            AppSchema::Extended(schema) => schema.sdl(),
            AppSchema::Minimal(schema) => schema.sdl(),
        }
    }
}
