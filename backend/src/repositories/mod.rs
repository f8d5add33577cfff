//! Database repositories
//!
//! Data access layer. Repositories return raw `sqlx::Error` so the
//! service layer can recognize store-level signals (notably unique
//! violations) and map them to domain errors.

pub mod account;
pub mod instrument;
pub mod user;
pub mod watchlist;

pub use account::{AccountRecord, AccountRepository};
pub use instrument::{InstrumentRecord, InstrumentRepository};
pub use user::{ProvisionedUser, UserRecord, UserRepository};
pub use watchlist::{
    WatchlistItemRecord, WatchlistItemWithInstrument, WatchlistRecord, WatchlistRepository,
};
