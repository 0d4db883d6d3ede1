/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /users/me (疎通確認の /health は app.rs 側でルート直下に置く)
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::users::me;

pub fn routes() -> Router<AppState> {
    Router::new().route("/users/me", get(me))
}
