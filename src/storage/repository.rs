use crate::{
    config::{IdPolicy, StoreSettings},
    model::{Book, BookPatch, NewBook, seed_books},
};
use std::sync::{Mutex, MutexGuard};

/// Collection state guarded by the repository lock.
#[derive(Debug, Default)]
struct Shelf {
    books: Vec<Book>,
    /// Highest id ever issued. Only consulted under `IdPolicy::Monotonic`.
    high_water: i64,
}

impl Shelf {
    fn next_id(&mut self, policy: IdPolicy) -> i64 {
        let max_live = self.books.iter().map(|b| b.id).max().unwrap_or(0);
        let id = match policy {
            IdPolicy::MaxPlusOne => max_live + 1,
            IdPolicy::Monotonic => self.high_water.max(max_live) + 1,
        };
        self.high_water = self.high_water.max(id);
        id
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }
}

/// In-memory, ordered book collection.
///
/// Every operation takes the single lock for its whole duration, so reads
/// never observe a half-applied mutation and concurrent creates cannot
/// compute the same id.
pub struct BookRepository {
    shelf: Mutex<Shelf>,
    id_policy: IdPolicy,
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}

impl BookRepository {
    /// An empty repository.
    pub fn new(id_policy: IdPolicy) -> Self {
        Self::with_books(Vec::new(), id_policy)
    }

    /// A repository holding `books` in the given order.
    pub fn with_books(books: Vec<Book>, id_policy: IdPolicy) -> Self {
        let high_water = books.iter().map(|b| b.id).max().unwrap_or(0);
        Self {
            shelf: Mutex::new(Shelf { books, high_water }),
            id_policy,
        }
    }

    pub fn from_settings(settings: &StoreSettings) -> Self {
        let books = if settings.seed {
            seed_books()
        } else {
            Vec::new()
        };
        Self::with_books(books, settings.id_policy)
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    // No operation can panic half way through a mutation, so a poisoned
    // lock still guards a consistent collection.
    fn lock(&self) -> MutexGuard<'_, Shelf> {
        self.shelf.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.lock().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().books.is_empty()
    }

    /// All books in storage order.
    pub fn list(&self) -> Vec<Book> {
        self.lock().books.clone()
    }

    /// The book with `id`, or `None` when there is none or no id was given.
    pub fn get(&self, id: Option<i64>) -> Option<Book> {
        let id = id?;
        let shelf = self.lock();
        shelf.books.iter().find(|b| b.id == id).cloned()
    }

    pub fn create(&self, new_book: NewBook) -> Book {
        let mut shelf = self.lock();
        let id = shelf.next_id(self.id_policy);
        let book = new_book.into_book(id);
        shelf.books.push(book.clone());
        tracing::debug!(id, title = %book.title, "Created book");
        book
    }

    pub fn update(&self, id: i64, patch: BookPatch) -> Option<Book> {
        let mut shelf = self.lock();
        let pos = shelf.position(id)?;
        let book = &mut shelf.books[pos];
        if patch.is_empty() {
            tracing::debug!(id, "Update supplied no fields");
        } else {
            book.apply(patch);
            tracing::debug!(id, "Updated book");
        }
        Some(book.clone())
    }

    /// Remove the book with `id`, keeping the order of the rest.
    pub fn delete(&self, id: i64) -> Option<Book> {
        let mut shelf = self.lock();
        let pos = shelf.position(id)?;
        let removed = shelf.books.remove(pos);
        tracing::debug!(id, "Deleted book");
        Some(removed)
    }
}
