/*!
 * Login user argument resolution
 *
 * Responsibility:
 * - 引数メタデータから「LoginUser を注入すべきか」を判定する
 * - HTTP (SecurityContext) / STOMP (メッセージのユーザー) から principal を取り出す
 * - host が参照する順序付き resolver リスト
 *
 * Public API:
 * - Annotation, ParamType, MethodParameter, supports_login_user
 * - ArgumentResolver, ArgumentResolvers
 * - HttpLoginUserResolver, StompLoginUserResolver
 * - ResolveError, Channel
 */
mod error;
mod http;
mod parameter;
mod registry;
mod stomp;

pub use error::{Channel, ResolveError};
pub use http::HttpLoginUserResolver;
pub use parameter::{Annotation, MethodParameter, ParamType, supports_login_user};
pub use registry::{ArgumentResolver, ArgumentResolvers};
pub use stomp::StompLoginUserResolver;

use axum::http::request::Parts;

use crate::messaging::stomp::Message;
use crate::security::User;

pub type HttpArgumentResolvers = ArgumentResolvers<Parts, User>;
pub type StompArgumentResolvers<P> = ArgumentResolvers<Message<P>, User>;
