use std::sync::Arc;

use super::User;

/// 認証レコード (principal + 付与された権限)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    principal: User,
    authorities: Vec<String>,
}

impl Authentication {
    pub fn new(principal: User) -> Self {
        Self {
            principal,
            authorities: Vec::new(),
        }
    }

    pub fn with_authorities(mut self, authorities: impl IntoIterator<Item = String>) -> Self {
        self.authorities = authorities.into_iter().collect();
        self
    }

    pub fn principal(&self) -> &User {
        &self.principal
    }

    pub fn authorities(&self) -> &[String] {
        &self.authorities
    }
}

/// リクエスト (またはメッセージ) 単位のセキュリティコンテキスト
///
/// thread-local には置かず、request extensions に明示的に載せて受け渡す。
/// 未認証のリクエストでも空のコンテキストが入る。
#[derive(Debug, Clone, Default)]
pub struct SecurityContext {
    authentication: Option<Arc<Authentication>>,
}

impl SecurityContext {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_authentication(authentication: Authentication) -> Self {
        Self {
            authentication: Some(Arc::new(authentication)),
        }
    }

    pub fn authentication(&self) -> Option<&Authentication> {
        self.authentication.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authentication.is_some()
    }
}
