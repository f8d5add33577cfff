//! Instrument repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Instrument record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InstrumentRecord {
    pub id: Uuid,
    pub symbol: String,
    pub name: String,
    pub instrument_type: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// Instrument repository for database operations
pub struct InstrumentRepository;

impl InstrumentRepository {
    /// Search instruments by symbol or name, case-insensitively.
    /// No search term lists everything up to the limit, ordered by symbol.
    pub async fn search(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
    ) -> Result<Vec<InstrumentRecord>, sqlx::Error> {
        sqlx::query_as::<_, InstrumentRecord>(
            r#"
            SELECT id, symbol, name, instrument_type, currency, created_at
            FROM instruments
            WHERE $1::text IS NULL
               OR symbol ILIKE '%' || $1 || '%'
               OR name ILIKE '%' || $1 || '%'
            ORDER BY symbol ASC
            LIMIT $2
            "#,
        )
        .bind(search)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Find instrument by ID
    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<InstrumentRecord>, sqlx::Error> {
        sqlx::query_as::<_, InstrumentRecord>(
            r#"
            SELECT id, symbol, name, instrument_type, currency, created_at
            FROM instruments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
