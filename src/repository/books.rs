//! Books repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookStore;
use crate::{
    error::AppResult,
    models::book::{Book, BookInput},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, year, isbn FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, year, isbn FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn save(&self, id: Option<i64>, data: &BookInput) -> AppResult<Book> {
        let row = match id {
            None => {
                sqlx::query_as::<_, Book>(
                    r#"
                    INSERT INTO books (title, author, year, isbn)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, title, author, year, isbn
                    "#,
                )
                .bind(&data.title)
                .bind(&data.author)
                .bind(data.year)
                .bind(&data.isbn)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Book>(
                    r#"
                    INSERT INTO books (id, title, author, year, isbn)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (id) DO UPDATE SET
                        title = EXCLUDED.title,
                        author = EXCLUDED.author,
                        year = EXCLUDED.year,
                        isbn = EXCLUDED.isbn
                    RETURNING id, title, author, year, isbn
                    "#,
                )
                .bind(id)
                .bind(&data.title)
                .bind(&data.author)
                .bind(data.year)
                .bind(&data.isbn)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(row)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!("Book {} already absent", id);
        }
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
