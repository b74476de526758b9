/*
 * Responsibility
 * - v1 URL layout
 * - Which routes sit behind the token gate is decided here
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, me::me};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new().route("/me", get(me));
    let protected = middleware::auth::apply(protected, state);

    Router::new().route("/health", get(health)).merge(protected)
}
