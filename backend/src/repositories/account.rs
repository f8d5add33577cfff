//! Account repository
//!
//! Accounts are created only inside the user provisioning transaction
//! (see `UserRepository`); this module covers reads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Account record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub base_currency: String,
    pub starting_balance: Decimal,
    pub cash_balance: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Account repository for database operations
pub struct AccountRepository;

impl AccountRepository {
    /// The user's default account: the earliest-created one
    pub async fn find_default_for_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Option<AccountRecord>, sqlx::Error> {
        sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT id, user_id, name, base_currency, starting_balance, cash_balance, created_at
            FROM accounts
            WHERE user_id = $1
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}
