use std::ops::Deref;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::{
    app_state::AppState,
    auth::token::TokenError,
    domain::User,
    repositories::{UserRepository, UserRepositoryImpl},
    routes::ApiError,
};

/// Extracts the authenticated [`User`] from the request's bearer token.
/// Rejects with 401 when the token is missing, malformed, expired, or
/// revoked. The presented token is kept so logout can revoke exactly it.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub token: String,
    user: User,
}

impl Deref for AuthUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.user
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::unauthorized("No token provided"))?;

        let app_state = AppState::from_ref(state);
        authenticate(&app_state, bearer.token()).await
    }
}

/// Like [`AuthUser`] but yields `None` when the request carries no
/// Authorization header at all. A header that is present but invalid
/// still rejects: silently downgrading an expired session to anonymous
/// would hide the expiry from the client.
pub struct OptionalAuthUser(pub Option<AuthUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(Self(None));
        }

        AuthUser::from_request_parts(parts, state)
            .await
            .map(|user| Self(Some(user)))
    }
}

async fn authenticate(app_state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    let claims = app_state.token_signer.verify(token).map_err(|err| match err {
        TokenError::Expired => ApiError::unauthorized("Token expired, please log in again"),
        TokenError::Invalid => ApiError::unauthorized("Invalid token"),
    })?;

    let user_repo = UserRepositoryImpl::new(app_state.db_pool.as_ref().clone());

    // A structurally valid token that was never issued (or was revoked by
    // logout) is as good as no token.
    if !user_repo.token_exists(claims.sub, token).await? {
        return Err(ApiError::unauthorized("Invalid token"));
    }

    let user = user_repo
        .get_user(claims.sub)
        .await
        .map_err(|_| ApiError::unauthorized("Invalid token"))?;

    Ok(AuthUser {
        token: token.to_string(),
        user,
    })
}
