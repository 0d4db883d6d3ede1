use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::resolver::{Annotation, MethodParameter, ParamType};
use crate::security::User;
use crate::state::AppState;

/// Handler で、ログインユーザーを受け取るための extractor
///
/// 「LoginUser マーカー付きで宣言型が User の引数」と同じ意味を持ち、
/// AppState に登録された resolver リストに解決を委ねる。
/// SecurityContext は middleware が request.extensions() に insert 済みである前提。
/// 見つからない場合は 401 を返す（認証がかかってない・ミドルウェア未設定）
#[derive(Debug, Clone)]
pub struct LoginUser(pub User);

impl LoginUser {
    pub fn parameter() -> MethodParameter {
        MethodParameter::new("login_user", ParamType::of::<User>()).annotated(Annotation::LoginUser)
    }

    pub fn into_inner(self) -> User {
        self.0
    }
}

impl FromRequestParts<AppState> for LoginUser
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = state
            .resolvers
            .resolve_argument(&Self::parameter(), parts)?;
        Ok(LoginUser(user))
    }
}
