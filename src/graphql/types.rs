use crate::model::Book as ModelBook;
use async_graphql::SimpleObject;

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub summary: Option<String>,
}

impl From<ModelBook> for Book {
    fn from(b: ModelBook) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author,
            summary: b.summary,
        }
    }
}

// Served as `Book` by the minimal edition.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "Book")]
pub struct MinimalBook {
    pub id: i64,
    pub title: String,
    pub author: String,
}

impl From<ModelBook> for MinimalBook {
    fn from(b: ModelBook) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author,
        }
    }
}
