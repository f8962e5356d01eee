use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::User;

use super::repo_error::RepositoryError;

#[async_trait]
pub trait UserRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User, RepositoryError>;
    async fn get_user(&self, id: i32) -> Result<User, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Record an issued token so it can be revoked later.
    async fn insert_token(&self, user_id: i32, token: &str) -> Result<(), RepositoryError>;
    /// Remove one issued token; returns whether it existed.
    async fn delete_token(&self, user_id: i32, token: &str) -> Result<bool, RepositoryError>;
    async fn token_exists(&self, user_id: i32, token: &str) -> Result<bool, RepositoryError>;
}

pub struct UserRepositoryImpl {
    pool: PgPool,
}

impl UserRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create_user(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::Conflict(format!("email already in use: {}", user.email))
            }
            _ => RepositoryError::DatabaseError(err),
        })?;

        Ok(user)
    }

    async fn get_user(&self, id: i32) -> Result<User, RepositoryError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::NotFound(format!("user {id}")))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_token(&self, user_id: i32, token: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO auth_tokens (user_id, token)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(token)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_token(&self, user_id: i32, token: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM auth_tokens
            WHERE user_id = $1 AND token = $2
            "#,
        )
        .bind(user_id)
        .bind(token)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn token_exists(&self, user_id: i32, token: &str) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM auth_tokens
                WHERE user_id = $1 AND token = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(token)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

pub struct NewUser {
    name: String,
    email: String,
    password_hash: String,
}

impl NewUser {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            name,
            email,
            password_hash,
        }
    }
}
