//! Authentication service
//!
//! Owns the registration and login policy: input shape is validated
//! before any side effect, the duplicate-email decision is delegated to
//! the store's unique index, and credential failures collapse into one
//! generic error so the API cannot confirm which emails exist.

use crate::auth::{JwtService, PasswordService};
use crate::error::{is_unique_violation, ApiError};
use crate::repositories::{AccountRepository, UserRecord, UserRepository};
use papertrade_shared::models::UserRole;
use papertrade_shared::types::{AuthResponse, LoginRequest, MeResponse, PublicUser, RegisterRequest};
use papertrade_shared::validation::{validate_display_name, validate_password};
use sqlx::PgPool;
use uuid::Uuid;
use validator::ValidateEmail;

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user and provision its default trading account
    ///
    /// Password hashing runs on the blocking thread pool; the user and
    /// account inserts are one transaction.
    pub async fn register(
        pool: &PgPool,
        jwt: &JwtService,
        passwords: &PasswordService,
        req: &RegisterRequest,
    ) -> Result<AuthResponse, ApiError> {
        Self::validate_registration(req)?;

        let password_hash = passwords
            .hash_async(req.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        let provisioned = UserRepository::create_with_default_account(
            pool,
            &req.email,
            &password_hash,
            req.display_name.trim(),
        )
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Conflict("A user with this email already exists".to_string())
            } else {
                ApiError::Database(e)
            }
        })?;

        let token = jwt
            .sign(provisioned.user.id)
            .map_err(|e| ApiError::Internal(e.into()))?;

        Ok(AuthResponse {
            token,
            user: to_public_user(&provisioned.user),
            default_account_id: Some(provisioned.default_account_id),
        })
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password yield the identical error; a
    /// failed verification returns before any token is signed.
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtService,
        passwords: &PasswordService,
        req: &LoginRequest,
    ) -> Result<AuthResponse, ApiError> {
        Self::validate_login(req)?;

        let user = UserRepository::find_by_email(pool, &req.email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        let valid = passwords
            .verify_async(req.password.clone(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::InvalidCredentials);
        }

        let token = jwt.sign(user.id).map_err(|e| ApiError::Internal(e.into()))?;

        let default_account = AccountRepository::find_default_for_user(pool, user.id).await?;

        Ok(AuthResponse {
            token,
            user: to_public_user(&user),
            default_account_id: default_account.map(|account| account.id),
        })
    }

    /// Resolve the identity behind a verified token for `/auth/me`
    ///
    /// The token only proves the user existed at issuance; a user
    /// deleted since then gets a 401 here.
    pub async fn current_user(pool: &PgPool, user_id: Uuid) -> Result<MeResponse, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

        let default_account = AccountRepository::find_default_for_user(pool, user.id).await?;

        Ok(MeResponse {
            user: to_public_user(&user),
            default_account_id: default_account.map(|account| account.id),
        })
    }

    fn validate_registration(req: &RegisterRequest) -> Result<(), ApiError> {
        if !req.email.validate_email() {
            return Err(ApiError::validation("email", "Invalid email format"));
        }
        validate_password(&req.password).map_err(|msg| ApiError::validation("password", msg))?;
        validate_display_name(&req.display_name)
            .map_err(|msg| ApiError::validation("displayName", msg))?;
        Ok(())
    }

    fn validate_login(req: &LoginRequest) -> Result<(), ApiError> {
        if !req.email.validate_email() {
            return Err(ApiError::validation("email", "Invalid email format"));
        }
        if req.password.is_empty() {
            return Err(ApiError::validation("password", "Password cannot be empty"));
        }
        Ok(())
    }
}

fn to_public_user(user: &UserRecord) -> PublicUser {
    PublicUser {
        id: user.id,
        email: user.email.clone(),
        display_name: user.display_name.clone(),
        // Unknown roles in the store degrade to member rather than 500
        role: user.role.parse().unwrap_or(UserRole::Member),
    }
}
