//! Instrument search routes
//!
//! Public read-only surface; plain pass-through persistence.

use crate::error::{ApiError, ApiResult};
use crate::repositories::{InstrumentRecord, InstrumentRepository};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use papertrade_shared::types::{Instrument, InstrumentsResponse};
use serde::Deserialize;

const DEFAULT_LIMIT: i64 = 50;
const MAXIMUM_LIMIT: i64 = 200;

/// Create instrument routes
pub fn instrument_routes() -> Router<AppState> {
    Router::new().route("/", get(search))
}

/// Search query parameters. `limit` is taken as a raw string so that
/// unparsable or out-of-range values fall back to the default instead
/// of failing the request.
#[derive(Debug, Deserialize)]
struct SearchQuery {
    search: Option<String>,
    limit: Option<String>,
}

/// Search instruments by symbol or name
///
/// GET /instruments?search=&limit=
async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<InstrumentsResponse>> {
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty());

    let limit = effective_limit(query.limit.as_deref());

    let records = InstrumentRepository::search(&state.db, search, limit).await?;
    let instruments = records
        .into_iter()
        .map(to_instrument)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(InstrumentsResponse { instruments }))
}

/// Resolve the result limit from the raw query value. Unparsable,
/// non-positive, or oversized values fall back to the default.
fn effective_limit(raw: Option<&str>) -> i64 {
    raw.and_then(|raw| raw.parse::<i64>().ok())
        .filter(|n| *n > 0 && *n <= MAXIMUM_LIMIT)
        .unwrap_or(DEFAULT_LIMIT)
}

/// Convert a database record into the wire type
pub(crate) fn to_instrument(record: InstrumentRecord) -> Result<Instrument, ApiError> {
    let instrument_type = record
        .instrument_type
        .parse()
        .map_err(|e: String| ApiError::Internal(anyhow::anyhow!(e)))?;

    Ok(Instrument {
        id: record.id,
        symbol: record.symbol,
        name: record.name,
        instrument_type,
        currency: record.currency,
        created_at: record.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use papertrade_shared::models::InstrumentType;
    use uuid::Uuid;

    fn record(instrument_type: &str) -> InstrumentRecord {
        InstrumentRecord {
            id: Uuid::new_v4(),
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            instrument_type: instrument_type.to_string(),
            currency: "USD".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_record_converts_to_wire_type() {
        let instrument = to_instrument(record("STOCK")).unwrap();
        assert_eq!(instrument.instrument_type, InstrumentType::Stock);
        assert_eq!(instrument.symbol, "AAPL");
    }

    #[test]
    fn test_unknown_instrument_type_is_internal_error() {
        assert!(to_instrument(record("BOND")).is_err());
    }

    #[test]
    fn test_limit_defaults_when_absent() {
        assert_eq!(effective_limit(None), DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_in_range_is_used() {
        assert_eq!(effective_limit(Some("25")), 25);
        assert_eq!(effective_limit(Some("200")), MAXIMUM_LIMIT);
    }

    #[test]
    fn test_limit_out_of_range_falls_back_to_default() {
        assert_eq!(effective_limit(Some("0")), DEFAULT_LIMIT);
        assert_eq!(effective_limit(Some("-5")), DEFAULT_LIMIT);
        assert_eq!(effective_limit(Some("201")), DEFAULT_LIMIT);
    }

    #[test]
    fn test_unparsable_limit_falls_back_to_default() {
        assert_eq!(effective_limit(Some("abc")), DEFAULT_LIMIT);
        assert_eq!(effective_limit(Some("")), DEFAULT_LIMIT);
        assert_eq!(effective_limit(Some("12.5")), DEFAULT_LIMIT);
    }
}
