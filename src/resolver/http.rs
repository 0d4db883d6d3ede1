use axum::http::request::Parts;

use super::{ArgumentResolver, Channel, MethodParameter, ResolveError, supports_login_user};
use crate::security::{SecurityContext, User};

/// HTTP リクエストの SecurityContext から LoginUser を取り出す
///
/// SecurityContext は middleware が request extensions に insert 済みである前提。
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpLoginUserResolver;

impl HttpLoginUserResolver {
    pub fn resolve(parts: &Parts) -> Result<User, ResolveError> {
        parts
            .extensions
            .get::<SecurityContext>()
            .and_then(SecurityContext::authentication)
            .map(|auth| auth.principal().clone())
            .ok_or(ResolveError::unauthenticated(Channel::Http))
    }
}

impl ArgumentResolver<Parts> for HttpLoginUserResolver {
    type Output = User;

    fn supports_parameter(&self, param: &MethodParameter) -> bool {
        supports_login_user(param)
    }

    fn resolve_argument(
        &self,
        _param: &MethodParameter,
        parts: &Parts,
    ) -> Result<User, ResolveError> {
        Self::resolve(parts)
    }
}
