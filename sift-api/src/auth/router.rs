use axum::{http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(self::post::register))
        .route("/login", post(self::post::login))
        .route("/logout", post(self::post::logout))
}

#[derive(Debug, Deserialize)]
struct RegisterBody {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
struct TokenResponse {
    token: String,
}

mod post {
    use axum::extract::State;
    use password_auth::{generate_hash, verify_password};
    use tracing::instrument;

    use crate::{
        auth::AuthUser,
        repositories::{NewUser, RepositoryError, UserRepository, UserRepositoryImpl},
        routes::ApiError,
    };

    use super::*;

    /// Logins for unknown emails are verified against this hash so both
    /// rejection paths do the same amount of work.
    const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$VE0e3g7DalWHgDwou3nuRA$uC6TER156UQpk0lNQ5+jHM0l5poVjPA1he/Tyn9J4Zw";

    #[instrument(name = "POST /register", skip(app_state, body))]
    pub async fn register(
        State(app_state): State<AppState>,
        Json(body): Json<RegisterBody>,
    ) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
        if body.name.trim().is_empty() || body.email.trim().is_empty() || body.password.is_empty()
        {
            return Err(ApiError::bad_request("Name, email and password are required"));
        }

        let user_repo = UserRepositoryImpl::new(app_state.db_pool.as_ref().clone());
        if user_repo.find_by_email(&body.email).await?.is_some() {
            return Err(ApiError::bad_request("Email already in use"));
        }

        let password = body.password;
        let password_hash = tokio::task::spawn_blocking(move || generate_hash(&password))
            .await
            .map_err(|_| ApiError::internal("Error registering user"))?;

        let new_user = NewUser::new(body.name, body.email, password_hash);
        if let Err(err) = user_repo.create_user(&new_user).await {
            // The email check above races with concurrent registrations;
            // the unique constraint is the authority.
            return match err {
                RepositoryError::Conflict(_) => Err(ApiError::bad_request("Email already in use")),
                _ => Err(err.into()),
            };
        }

        Ok((
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "User registered successfully".to_string(),
            }),
        ))
    }

    #[instrument(name = "POST /login", skip(app_state, body))]
    pub async fn login(
        State(app_state): State<AppState>,
        Json(body): Json<LoginBody>,
    ) -> Result<Json<TokenResponse>, ApiError> {
        let user_repo = UserRepositoryImpl::new(app_state.db_pool.as_ref().clone());
        let user = user_repo.find_by_email(&body.email).await?;

        let hash = user
            .as_ref()
            .map(|u| u.password_hash.clone())
            .unwrap_or_else(|| DUMMY_HASH.to_string());
        let password = body.password;
        let verified = tokio::task::spawn_blocking(move || verify_password(password, &hash).is_ok())
            .await
            .map_err(|_| ApiError::internal("Error logging in"))?;

        let Some(user) = user.filter(|_| verified) else {
            return Err(ApiError::bad_request("Invalid credentials"));
        };

        let token = app_state
            .token_signer
            .sign(user.id)
            .map_err(|_| ApiError::internal("Error logging in"))?;
        user_repo.insert_token(user.id, &token).await?;

        Ok(Json(TokenResponse { token }))
    }

    #[instrument(name = "POST /logout", skip(app_state, user))]
    pub async fn logout(
        user: AuthUser,
        State(app_state): State<AppState>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        let user_repo = UserRepositoryImpl::new(app_state.db_pool.as_ref().clone());
        user_repo.delete_token(user.id, &user.token).await?;

        Ok(Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }))
    }
}
