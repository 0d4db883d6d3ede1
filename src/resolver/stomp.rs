use super::{ArgumentResolver, Channel, MethodParameter, ResolveError, supports_login_user};
use crate::messaging::stomp::{Message, StompHeaderAccessor};
use crate::security::{Authentication, User};

/// STOMP メッセージに付与されたユーザーから LoginUser を取り出す
///
/// ユーザーは接続ハンドシェイク (CONNECT) で確定している前提。
/// 付与されていない場合は panic せず Unauthenticated を返す。
#[derive(Debug, Clone, Copy, Default)]
pub struct StompLoginUserResolver;

impl StompLoginUserResolver {
    pub fn resolve<P>(message: &Message<P>) -> Result<User, ResolveError> {
        StompHeaderAccessor::wrap(message)
            .user()
            .map(Authentication::principal)
            .cloned()
            .ok_or(ResolveError::unauthenticated(Channel::Stomp))
    }
}

impl<P> ArgumentResolver<Message<P>> for StompLoginUserResolver {
    type Output = User;

    fn supports_parameter(&self, param: &MethodParameter) -> bool {
        supports_login_user(param)
    }

    fn resolve_argument(
        &self,
        _param: &MethodParameter,
        message: &Message<P>,
    ) -> Result<User, ResolveError> {
        Self::resolve(message)
    }
}
