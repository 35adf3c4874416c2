//! Repository layer for database operations

pub mod books;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, BookInput},
};

/// Persistence boundary for books
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books ordered by id
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>>;

    /// Insert when `id` is `None`, otherwise insert-or-update that row
    async fn save(&self, id: Option<i64>, data: &BookInput) -> AppResult<Book>;

    /// Succeeds whether or not the row existed
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;

    /// Connectivity check used by the readiness probe
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct, one member per table over a shared pool
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool),
        }
    }
}
