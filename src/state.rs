/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: identity ヘッダ名、handler 引数の resolver リスト
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::config::IdentityHeaders;
use crate::resolver::{HttpArgumentResolvers, HttpLoginUserResolver};

#[derive(Clone, Debug)]
pub struct AppState {
    pub identity_headers: Arc<IdentityHeaders>,
    pub resolvers: Arc<HttpArgumentResolvers>,
}

impl AppState {
    pub fn new(identity_headers: IdentityHeaders, resolvers: HttpArgumentResolvers) -> Self {
        Self {
            identity_headers: Arc::new(identity_headers),
            resolvers: Arc::new(resolvers),
        }
    }

    /// LoginUser の resolver を登録済みの state
    pub fn with_default_resolvers(identity_headers: IdentityHeaders) -> Self {
        Self::new(
            identity_headers,
            HttpArgumentResolvers::new().with(HttpLoginUserResolver),
        )
    }
}
