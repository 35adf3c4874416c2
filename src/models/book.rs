//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Store-assigned identifier
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Publication year
    pub year: i32,
    pub isbn: String,
}

/// Create or update book request.
///
/// Omitted fields take their zero value, and any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub isbn: String,
}

impl Book {
    /// Overwrite every field with the incoming values, keeping the id
    pub fn overlay(&mut self, input: BookInput) {
        self.title = input.title;
        self.author = input.author;
        self.year = input.year;
        self.isbn = input.isbn;
    }
}

impl From<&Book> for BookInput {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year,
            isbn: book.isbn.clone(),
        }
    }
}
