/*
 * Responsibility
 * - /users 系 handler
 * - ログインユーザーは LoginUser extractor で受け取る (SecurityContext 直読みはしない)
 */
use axum::Json;

use crate::api::v1::{dto::users::UserResponse, extractors::LoginUser};

pub async fn me(LoginUser(user): LoginUser) -> Json<UserResponse> {
    tracing::debug!(user_id = %user.id, "resolved login user");
    Json(user.into())
}
