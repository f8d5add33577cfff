//! API request and response types
//!
//! All wire JSON is camelCase, matching the platform's public API
//! (`displayName`, `defaultAccountId`, ...).

use crate::models::{InstrumentType, UserRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User as exposed over the API. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}

/// Response to successful registration or login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
    pub default_account_id: Option<Uuid>,
}

/// Response for the authenticated-identity endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user: PublicUser,
    pub default_account_id: Option<Uuid>,
}

/// API error response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Tradeable instrument
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub id: Uuid,
    pub symbol: String,
    pub name: String,
    pub instrument_type: InstrumentType,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// Instrument search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentsResponse {
    pub instruments: Vec<Instrument>,
}

/// Watchlist without its items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Watchlist {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Watchlist with ordered items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistDetail {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<WatchlistItem>,
}

/// Entry in a watchlist with its instrument embedded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub id: Uuid,
    pub position_in_list: i32,
    pub instrument: Instrument,
}

/// List-watchlists response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistsResponse {
    pub watchlists: Vec<Watchlist>,
}

/// Create-watchlist request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWatchlistRequest {
    pub name: String,
}

/// Single-watchlist response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistResponse {
    pub watchlist: Watchlist,
}

/// Watchlist-detail response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistDetailResponse {
    pub watchlist: WatchlistDetail,
}

/// Newly created watchlist entry (no instrument embedded)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedWatchlistItem {
    pub id: Uuid,
    pub watchlist_id: Uuid,
    pub instrument_id: Uuid,
    pub position_in_list: i32,
}

/// Add-instrument response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistItemResponse {
    pub item: CreatedWatchlistItem,
}

/// Add-instrument-to-watchlist request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWatchlistInstrumentRequest {
    pub instrument_id: Uuid,
}
