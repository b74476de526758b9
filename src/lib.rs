//! Bearer-token gate for axum routers.
//!
//! Requests must carry `Authorization: <jwt>` or `Authorization: Bearer <jwt>`
//! signed with the shared secret. The gate either forwards the request with
//! the decoded claims attached as [`AuthUser`] or answers 401 with
//! `{"success": false, "message": ...}`.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

pub use api::v1::extractors::AuthUser;
pub use error::AppError;
pub use middleware::auth::{apply, authenticate};
pub use services::auth::{Claims, TokenVerifier, VerifyError};
pub use state::AppState;
