/*
 * Responsibility
 * - v1 public surface (routes() and the extractors handlers rely on)
 */
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
