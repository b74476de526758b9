/*
 * Responsibility
 * - GET /me: echo the claims the token gate attached to the request
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::AuthUser;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub success: bool,
    pub user: AuthUser,
}

pub async fn me(user: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        success: true,
        user,
    })
}
