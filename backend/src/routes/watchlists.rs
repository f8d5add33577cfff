//! Watchlist routes
//!
//! Authenticated CRUD over a user's watchlists; pass-through
//! persistence with ownership checks. A watchlist owned by another
//! user is indistinguishable from a missing one (404).

use crate::auth::AuthUser;
use crate::error::{is_unique_violation, ApiError, ApiResult};
use crate::repositories::{InstrumentRepository, WatchlistRepository};
use crate::routes::instruments::to_instrument;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use papertrade_shared::types::{
    AddWatchlistInstrumentRequest, CreateWatchlistRequest, CreatedWatchlistItem, Watchlist,
    WatchlistDetail, WatchlistDetailResponse, WatchlistItem, WatchlistItemResponse,
    WatchlistResponse, WatchlistsResponse,
};
use uuid::Uuid;

/// Create watchlist routes
pub fn watchlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:watchlist_id", get(detail))
        .route("/:watchlist_id/instruments", post(add_instrument))
        .route(
            "/:watchlist_id/instruments/:instrument_id",
            delete(remove_instrument),
        )
}

/// List the caller's watchlists, oldest first
///
/// GET /watchlists
async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<WatchlistsResponse>> {
    let records = WatchlistRepository::list_for_user(&state.db, auth_user.user_id).await?;

    let watchlists = records
        .into_iter()
        .map(|record| Watchlist {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
        })
        .collect();

    Ok(Json(WatchlistsResponse { watchlists }))
}

/// Create a watchlist
///
/// POST /watchlists
async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(req): Json<CreateWatchlistRequest>,
) -> ApiResult<(StatusCode, Json<WatchlistResponse>)> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("name", "Name cannot be empty"));
    }

    let record = WatchlistRepository::create(&state.db, auth_user.user_id, name).await?;

    Ok((
        StatusCode::CREATED,
        Json(WatchlistResponse {
            watchlist: Watchlist {
                id: record.id,
                name: record.name,
                created_at: record.created_at,
            },
        }),
    ))
}

/// Fetch one watchlist with its items in display order
///
/// GET /watchlists/:watchlist_id
async fn detail(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(watchlist_id): Path<Uuid>,
) -> ApiResult<Json<WatchlistDetailResponse>> {
    let record = WatchlistRepository::find_for_user(&state.db, watchlist_id, auth_user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Watchlist not found".to_string()))?;

    let items = WatchlistRepository::list_items(&state.db, record.id)
        .await?
        .into_iter()
        .map(|item| {
            Ok(WatchlistItem {
                id: item.id,
                position_in_list: item.position_in_list,
                instrument: to_instrument(item.instrument)?,
            })
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    Ok(Json(WatchlistDetailResponse {
        watchlist: WatchlistDetail {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
            items,
        },
    }))
}

/// Append an instrument to a watchlist
///
/// POST /watchlists/:watchlist_id/instruments
async fn add_instrument(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(watchlist_id): Path<Uuid>,
    Json(req): Json<AddWatchlistInstrumentRequest>,
) -> ApiResult<(StatusCode, Json<WatchlistItemResponse>)> {
    let watchlist =
        WatchlistRepository::find_for_user(&state.db, watchlist_id, auth_user.user_id).await?;
    let instrument = InstrumentRepository::find_by_id(&state.db, req.instrument_id).await?;

    if watchlist.is_none() || instrument.is_none() {
        return Err(ApiError::NotFound(
            "Watchlist or instrument not found".to_string(),
        ));
    }

    let item = WatchlistRepository::add_item(&state.db, watchlist_id, req.instrument_id)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Conflict("Instrument is already in this watchlist".to_string())
            } else {
                ApiError::Database(e)
            }
        })?;

    Ok((
        StatusCode::CREATED,
        Json(WatchlistItemResponse {
            item: CreatedWatchlistItem {
                id: item.id,
                watchlist_id: item.watchlist_id,
                instrument_id: item.instrument_id,
                position_in_list: item.position_in_list,
            },
        }),
    ))
}

/// Remove an instrument from a watchlist; idempotent
///
/// DELETE /watchlists/:watchlist_id/instruments/:instrument_id
async fn remove_instrument(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((watchlist_id, instrument_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    WatchlistRepository::find_for_user(&state.db, watchlist_id, auth_user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Watchlist not found".to_string()))?;

    WatchlistRepository::remove_item(&state.db, watchlist_id, instrument_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
