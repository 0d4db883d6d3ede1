use serde::Serialize;
use uuid::Uuid;

/// 「誰が」リクエスト/メッセージを送っているか
///
/// User の上位型として扱う。引数の宣言型が `dyn Principal` でも LoginUser は注入できる。
pub trait Principal: Send + Sync {
    fn id(&self) -> Uuid;
    fn name(&self) -> &str;
}

/// ログインユーザー
///
/// - `id` は内部ユーザーID (UUID)
/// - `nickname` は表示名
/// - `email` / `image_url` は upstream が持っていれば付与される
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub nickname: String,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

impl User {
    pub fn new(id: Uuid, nickname: impl Into<String>) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            email: None,
            image_url: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

impl Principal for User {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.nickname
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_is_usable_through_principal() {
        let id = Uuid::new_v4();
        let user = User::new(id, "momo").with_email("momo@example.com");
        let principal: &dyn Principal = &user;

        assert_eq!(principal.id(), id);
        assert_eq!(principal.name(), "momo");
        assert_eq!(user.email.as_deref(), Some("momo@example.com"));
        assert_eq!(user.image_url, None);
    }
}
