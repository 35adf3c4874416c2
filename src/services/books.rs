//! Book catalog service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Create a book; the store assigns the id
    pub async fn create(&self, data: &BookInput) -> AppResult<Book> {
        let book = self.store.save(None, data).await?;
        tracing::info!("Created book {}", book.id);
        Ok(book)
    }

    /// Replace every field of an existing book
    pub async fn update(&self, id: i64, data: BookInput) -> AppResult<Book> {
        let mut book = self.get_by_id(id).await?;
        book.overlay(data);
        self.store.save(Some(book.id), &BookInput::from(&book)).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.store.delete_by_id(id).await
    }

    /// Check that the backing store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
