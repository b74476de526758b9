/*!
 * Authenticated user extractor
 *
 * Responsibility:
 * - Provide the decoded token claims (AuthUser) to handlers
 * - Keep the axum glue in core and the type in types
 *
 * Public API:
 * - AuthUser
 */

mod core;
mod types;

pub use types::AuthUser;
