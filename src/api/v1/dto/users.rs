/*
 * Responsibility
 * - Users の response DTO
 */
use serde::Serialize;
use uuid::Uuid;

use crate::security::User;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub nickname: String,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname,
            email: user.email,
            image_url: user.image_url,
        }
    }
}
