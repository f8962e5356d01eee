use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_error::RepositoryError;

#[async_trait]
pub trait SearchHistoryRepository {
    async fn append(&self, user_id: i32, term: &str) -> Result<(), RepositoryError>;
    /// All recorded terms for a user, in insertion order.
    async fn list(&self, user_id: i32) -> Result<Vec<String>, RepositoryError>;
}

pub struct SearchHistoryRepositoryImpl {
    pool: PgPool,
}

impl SearchHistoryRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SearchHistoryRepository for SearchHistoryRepositoryImpl {
    async fn append(&self, user_id: i32, term: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO search_history (user_id, term)
            VALUES ($1, $2)
            "#,
        )
        .bind(user_id)
        .bind(term)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self, user_id: i32) -> Result<Vec<String>, RepositoryError> {
        let terms = sqlx::query_scalar::<_, String>(
            r#"
            SELECT term
            FROM search_history
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(terms)
    }
}
