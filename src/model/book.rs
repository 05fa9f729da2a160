#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub summary: Option<String>,
}

impl Book {
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Overwrite every field the patch supplies, leaving the rest untouched.
    pub fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(summary) = patch.summary {
            self.summary = Some(summary);
        }
    }
}

/// Fields for a book that has not been assigned an id yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub summary: Option<String>,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    pub(crate) fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            summary: self.summary,
        }
    }
}

/// A partial update. `None` means "not supplied"; `Some(String::new())` is a
/// supplied empty value and is written through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub summary: Option<String>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.summary.is_none()
    }
}

/// The two records a fresh catalogue starts with.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new(1, "1984", "George Orwell").with_summary(
            "A dystopian novel set in a totalitarian regime where critical thought is suppressed.",
        ),
        Book::new(2, "Brave New World", "Aldous Huxley").with_summary(
            "A futuristic society where humans are genetically engineered and conditioned to serve societal stability.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_only_overwrites_supplied_fields() {
        let mut book = Book::new(1, "Dune", "Frank Herbert").with_summary("Spice.");
        book.apply(BookPatch {
            title: Some("Dune Messiah".to_string()),
            ..Default::default()
        });

        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.summary.as_deref(), Some("Spice."));
    }

    #[test]
    fn test_apply_writes_supplied_empty_string() {
        let mut book = Book::new(1, "Dune", "Frank Herbert").with_summary("Spice.");
        book.apply(BookPatch {
            summary: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(book.summary.as_deref(), Some(""));
    }

    #[test]
    fn test_empty_patch() {
        assert!(BookPatch::default().is_empty());
        assert!(
            !BookPatch {
                author: Some(String::new()),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_seed_books_order() {
        let seed = seed_books();
        let ids: Vec<_> = seed.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(seed[0].title, "1984");
        assert_eq!(seed[1].author, "Aldous Huxley");
    }
}
