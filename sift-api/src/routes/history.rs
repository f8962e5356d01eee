use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    auth::AuthUser,
    repositories::{SearchHistoryRepository, SearchHistoryRepositoryImpl},
    routes::ApiError,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(add_to_history).get(list_history))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddHistoryBody {
    search_term: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddHistoryResponse {
    message: String,
    search_term: String,
}

#[instrument(name = "POST /history", skip(app_state, user, body))]
async fn add_to_history(
    user: AuthUser,
    State(app_state): State<AppState>,
    Json(body): Json<AddHistoryBody>,
) -> Result<Json<AddHistoryResponse>, ApiError> {
    let term = body
        .search_term
        .map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty());
    let Some(term) = term else {
        return Err(ApiError::bad_request("Search term is required"));
    };

    let history_repo = SearchHistoryRepositoryImpl::new(app_state.db_pool.as_ref().clone());
    history_repo.append(user.id, &term).await?;

    Ok(Json(AddHistoryResponse {
        message: "Search added to history".to_string(),
        search_term: term,
    }))
}

#[instrument(name = "GET /history", skip(app_state, user))]
async fn list_history(
    user: AuthUser,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let history_repo = SearchHistoryRepositoryImpl::new(app_state.db_pool.as_ref().clone());
    let terms = history_repo.list(user.id).await?;

    Ok(Json(terms))
}
