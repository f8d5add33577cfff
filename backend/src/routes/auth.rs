//! Authentication routes
//!
//! Registration, login, and the authenticated-identity endpoint.
//! Password work happens on the blocking thread pool; token signing
//! uses the keys precomputed in AppState.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use papertrade_shared::types::{AuthResponse, LoginRequest, MeResponse, RegisterRequest};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
}

/// Register a new user and its default trading account
///
/// POST /auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let response = AuthService::register(&state.db, state.jwt(), state.passwords(), &req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
///
/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = AuthService::login(&state.db, state.jwt(), state.passwords(), &req).await?;
    Ok(Json(response))
}

/// Current identity and default account (requires authentication)
///
/// GET /auth/me
async fn me(State(state): State<AppState>, auth_user: AuthUser) -> ApiResult<Json<MeResponse>> {
    let response = AuthService::current_user(&state.db, auth_user.user_id).await?;
    Ok(Json(response))
}
