//! User repository
//!
//! Owns the registration write path: a user and its default trading
//! account are created inside one transaction, so no observer can see
//! one without the other. Email uniqueness is enforced by the store's
//! `LOWER(email)` unique index; a violation surfaces as a database
//! error the service maps to Conflict.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Name given to every automatically provisioned account
pub const DEFAULT_ACCOUNT_NAME: &str = "Paper Trading Account";
/// Currency of the default account
pub const DEFAULT_BASE_CURRENCY: &str = "USD";
/// Pre-funded balance of the default account
pub const DEFAULT_STARTING_BALANCE_UNITS: i64 = 100_000;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Result of atomically creating a user with its default account
#[derive(Debug, Clone)]
pub struct ProvisionedUser {
    pub user: UserRecord,
    pub default_account_id: Uuid,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user together with its default trading account
    ///
    /// Both inserts run in one transaction: any failure, including a
    /// duplicate email, rolls the whole registration back.
    pub async fn create_with_default_account(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
        display_name: &str,
    ) -> Result<ProvisionedUser, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, password_hash, display_name)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, display_name, role, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(display_name)
        .fetch_one(&mut *tx)
        .await?;

        let starting_balance = Decimal::from(DEFAULT_STARTING_BALANCE_UNITS);
        let default_account_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO accounts (user_id, name, base_currency, starting_balance, cash_balance)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id
            "#,
        )
        .bind(user.id)
        .bind(DEFAULT_ACCOUNT_NAME)
        .bind(DEFAULT_BASE_CURRENCY)
        .bind(starting_balance)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ProvisionedUser {
            user,
            default_account_id,
        })
    }

    /// Find user by email, case-insensitively
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, display_name, role, created_at
            FROM users
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, display_name, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
