//! Authentication module
//!
//! JWT-based session tokens and bcrypt password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService, TokenError};
pub use middleware::{auth_middleware, AuthUser};
pub use password::PasswordService;
