//! Papertrade Backend Library
//!
//! Skeleton trading-platform backend. The engineering core is
//! authentication and account provisioning; instruments and watchlists
//! are pass-through persistence.
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and routing
//! - Services: business logic (registration/login policy)
//! - Repositories: data access, including the atomic user+account
//!   provisioning transaction
//! - Auth: JWT tokens, bcrypt hashing, bearer middleware

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
