/*
 * Responsibility
 * - モジュール構成の宣言
 * - handler 引数へのログインユーザー注入 (HTTP / STOMP) と、それを載せる axum サーバー
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod messaging;
pub mod middleware;
pub mod resolver;
pub mod security;
pub mod state;

pub use api::v1::extractors::LoginUser;
pub use resolver::{
    Annotation, ArgumentResolver, ArgumentResolvers, HttpLoginUserResolver, MethodParameter,
    ParamType, ResolveError, StompLoginUserResolver,
};
pub use security::{Authentication, Principal, SecurityContext, User};
