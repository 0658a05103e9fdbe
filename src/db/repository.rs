//! Database repository for word count rows.

use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::WordCount;

/// Handle to the word count store, shared by the aggregator and the API.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a row or overwrite the count of an existing `(post_id, word)`.
    pub async fn upsert_word_count(
        &self,
        post_id: i64,
        word: &str,
        count: i64,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO comments_statistics (post_id, word, count) VALUES (?, ?, ?) \
             ON CONFLICT (post_id, word) DO UPDATE SET count = excluded.count",
        )
        .bind(post_id)
        .bind(word)
        .bind(count)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All rows for a post, highest count first.
    pub async fn list_word_counts(&self, post_id: i64) -> Result<Vec<WordCount>, AppError> {
        let rows = sqlx::query(
            "SELECT post_id, word, count FROM comments_statistics WHERE post_id = ? ORDER BY count DESC, word ASC",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| word_count_from_row(&row)).collect())
    }
}

fn word_count_from_row(row: &sqlx::sqlite::SqliteRow) -> WordCount {
    WordCount {
        post_id: row.get("post_id"),
        word: row.get("word"),
        count: row.get("count"),
    }
}
