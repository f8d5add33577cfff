//! Watchlist repository
//!
//! All queries are scoped to the owning user; a watchlist belonging to
//! someone else behaves exactly like one that does not exist.

use crate::repositories::instrument::InstrumentRecord;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Watchlist record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WatchlistRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Watchlist item record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WatchlistItemRecord {
    pub id: Uuid,
    pub watchlist_id: Uuid,
    pub instrument_id: Uuid,
    pub position_in_list: i32,
    pub created_at: DateTime<Utc>,
}

/// Watchlist item joined with its instrument
#[derive(Debug, Clone)]
pub struct WatchlistItemWithInstrument {
    pub id: Uuid,
    pub position_in_list: i32,
    pub instrument: InstrumentRecord,
}

/// Flat join row, split into the nested shape after fetching
#[derive(Debug, sqlx::FromRow)]
struct ItemJoinRow {
    id: Uuid,
    position_in_list: i32,
    instrument_id: Uuid,
    symbol: String,
    instrument_name: String,
    instrument_type: String,
    currency: String,
    instrument_created_at: DateTime<Utc>,
}

/// Watchlist repository for database operations
pub struct WatchlistRepository;

impl WatchlistRepository {
    /// List a user's watchlists, oldest first
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<WatchlistRecord>, sqlx::Error> {
        sqlx::query_as::<_, WatchlistRecord>(
            r#"
            SELECT id, user_id, name, created_at
            FROM watchlists
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Create a watchlist for a user
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        name: &str,
    ) -> Result<WatchlistRecord, sqlx::Error> {
        sqlx::query_as::<_, WatchlistRecord>(
            r#"
            INSERT INTO watchlists (user_id, name)
            VALUES ($1, $2)
            RETURNING id, user_id, name, created_at
            "#,
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Find a watchlist owned by the given user
    pub async fn find_for_user(
        pool: &PgPool,
        watchlist_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<WatchlistRecord>, sqlx::Error> {
        sqlx::query_as::<_, WatchlistRecord>(
            r#"
            SELECT id, user_id, name, created_at
            FROM watchlists
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(watchlist_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Items of a watchlist in display order, instruments embedded
    pub async fn list_items(
        pool: &PgPool,
        watchlist_id: Uuid,
    ) -> Result<Vec<WatchlistItemWithInstrument>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ItemJoinRow>(
            r#"
            SELECT wi.id,
                   wi.position_in_list,
                   i.id AS instrument_id,
                   i.symbol,
                   i.name AS instrument_name,
                   i.instrument_type,
                   i.currency,
                   i.created_at AS instrument_created_at
            FROM watchlist_items wi
            JOIN instruments i ON i.id = wi.instrument_id
            WHERE wi.watchlist_id = $1
            ORDER BY wi.position_in_list ASC
            "#,
        )
        .bind(watchlist_id)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| WatchlistItemWithInstrument {
                id: row.id,
                position_in_list: row.position_in_list,
                instrument: InstrumentRecord {
                    id: row.instrument_id,
                    symbol: row.symbol,
                    name: row.instrument_name,
                    instrument_type: row.instrument_type,
                    currency: row.currency,
                    created_at: row.instrument_created_at,
                },
            })
            .collect())
    }

    /// Append an instrument at the end of a watchlist. The position is
    /// computed inside the insert so concurrent appends cannot pick the
    /// same slot from a stale read.
    pub async fn add_item(
        pool: &PgPool,
        watchlist_id: Uuid,
        instrument_id: Uuid,
    ) -> Result<WatchlistItemRecord, sqlx::Error> {
        sqlx::query_as::<_, WatchlistItemRecord>(
            r#"
            INSERT INTO watchlist_items (watchlist_id, instrument_id, position_in_list)
            VALUES (
                $1,
                $2,
                COALESCE(
                    (SELECT MAX(position_in_list) + 1 FROM watchlist_items WHERE watchlist_id = $1),
                    0
                )
            )
            RETURNING id, watchlist_id, instrument_id, position_in_list, created_at
            "#,
        )
        .bind(watchlist_id)
        .bind(instrument_id)
        .fetch_one(pool)
        .await
    }

    /// Remove an instrument from a watchlist; removing an absent one is
    /// a no-op
    pub async fn remove_item(
        pool: &PgPool,
        watchlist_id: Uuid,
        instrument_id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM watchlist_items
            WHERE watchlist_id = $1 AND instrument_id = $2
            "#,
        )
        .bind(watchlist_id)
        .bind(instrument_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
