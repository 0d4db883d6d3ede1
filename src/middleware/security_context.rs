//! upstream identity → SecurityContext を extensions に入れる
//!
//! - 認証 (トークン検証など) は upstream のゲートウェイで完了している前提。
//!   ここは転送されてきた identity ヘッダを読んで、リクエスト単位のコンテキストに載せるだけ。
//! - `x-auth-*` ヘッダはクライアントも自由に付けられる。前段のゲートウェイが
//!   クライアント由来の同名ヘッダを除去していない環境では `IdentityHeaders::trusted` を
//!   false にすること (`TRUST_IDENTITY_HEADERS=false`、production の既定値)。
//! - identity が無い・壊れている場合は空のコンテキストを入れる。
//!   拒否するかどうかは LoginUser を要求する handler 側 (resolver) が決める。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderName, Request},
    middleware::{self, Next},
    response::Response,
};
use thiserror::Error;
use uuid::Uuid;

use crate::config::IdentityHeaders;
use crate::security::{Authentication, SecurityContext, User};
use crate::state::AppState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityHeaderError {
    #[error("header '{0}' is not valid utf-8")]
    NotUtf8(HeaderName),
    #[error("header '{0}' is not a uuid")]
    InvalidUserId(HeaderName),
    #[error("header '{0}' is missing or empty")]
    Missing(HeaderName),
}

/// ルーター全体に SecurityContext を載せる middleware を適用する。
///
/// 例：
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::security_context::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(
        state,
        security_context_middleware,
    ))
}

async fn security_context_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let ctx = match context_from_headers(req.headers(), &state.identity_headers) {
        Ok(ctx) => ctx,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring malformed forwarded identity");
            SecurityContext::empty()
        }
    };

    // middleware → resolver への受け渡し
    req.extensions_mut().insert(ctx);

    next.run(req).await
}

/// 転送ヘッダから SecurityContext を組み立てる
///
/// user id ヘッダが無い、またはヘッダを信用しない設定なら未認証 (空のコンテキスト)。
pub fn context_from_headers(
    headers: &HeaderMap,
    names: &IdentityHeaders,
) -> Result<SecurityContext, IdentityHeaderError> {
    if !names.trusted {
        return Ok(SecurityContext::empty());
    }

    let Some(raw_id) = header_str(headers, &names.user_id)? else {
        return Ok(SecurityContext::empty());
    };

    let id = Uuid::parse_str(raw_id.trim())
        .map_err(|_| IdentityHeaderError::InvalidUserId(names.user_id.clone()))?;

    let nickname = header_str(headers, &names.nickname)?
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| IdentityHeaderError::Missing(names.nickname.clone()))?;

    let mut user = User::new(id, nickname);
    if let Some(email) = non_empty(header_str(headers, &names.email)?) {
        user = user.with_email(email);
    }
    if let Some(url) = non_empty(header_str(headers, &names.image_url)?) {
        user = user.with_image_url(url);
    }

    let authorities = header_str(headers, &names.authorities)?
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();

    Ok(SecurityContext::with_authentication(
        Authentication::new(user).with_authorities(authorities),
    ))
}

fn header_str<'h>(
    headers: &'h HeaderMap,
    name: &HeaderName,
) -> Result<Option<&'h str>, IdentityHeaderError> {
    headers
        .get(name)
        .map(|v| {
            v.to_str()
                .map_err(|_| IdentityHeaderError::NotUtf8(name.clone()))
        })
        .transpose()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, HeaderValue::from_str(v).unwrap());
        }
        map
    }

    #[test]
    fn no_identity_means_empty_context() {
        let ctx = context_from_headers(&HeaderMap::new(), &IdentityHeaders::default()).unwrap();
        assert!(!ctx.is_authenticated());
    }

    #[test]
    fn builds_the_principal_from_forwarded_headers() {
        let id = Uuid::new_v4();
        let id_str = id.to_string();
        let map = headers(&[
            ("x-auth-user-id", id_str.as_str()),
            ("x-auth-nickname", " yuna "),
            ("x-auth-email", "yuna@example.com"),
            ("x-auth-image-url", ""),
            ("x-auth-authorities", "ROLE_USER, ROLE_HOST,,"),
        ]);

        let ctx = context_from_headers(&map, &IdentityHeaders::default()).unwrap();
        let auth = ctx.authentication().unwrap();

        assert_eq!(
            auth.principal(),
            &User::new(id, "yuna").with_email("yuna@example.com")
        );
        assert_eq!(
            auth.authorities(),
            ["ROLE_USER".to_string(), "ROLE_HOST".to_string()]
        );
    }

    #[test]
    fn untrusted_headers_are_ignored() {
        let names = IdentityHeaders {
            trusted: false,
            ..IdentityHeaders::default()
        };
        let id = Uuid::new_v4().to_string();
        let map = headers(&[("x-auth-user-id", id.as_str()), ("x-auth-nickname", "eve")]);

        let ctx = context_from_headers(&map, &names).unwrap();
        assert!(!ctx.is_authenticated());
    }

    #[test]
    fn rejects_malformed_identity() {
        let names = IdentityHeaders::default();

        let bad_id = headers(&[("x-auth-user-id", "42"), ("x-auth-nickname", "a")]);
        assert_eq!(
            context_from_headers(&bad_id, &names).unwrap_err(),
            IdentityHeaderError::InvalidUserId(names.user_id.clone())
        );

        let id = Uuid::new_v4().to_string();
        let no_nickname = headers(&[("x-auth-user-id", id.as_str())]);
        assert_eq!(
            context_from_headers(&no_nickname, &names).unwrap_err(),
            IdentityHeaderError::Missing(names.nickname.clone())
        );
    }

    #[test]
    fn non_utf8_header_is_rejected() {
        let names = IdentityHeaders::default();
        let mut map = HeaderMap::new();
        map.insert(
            names.user_id.clone(),
            HeaderValue::from_bytes(&[0xfa, 0xfb]).unwrap(),
        );

        assert_eq!(
            context_from_headers(&map, &names).unwrap_err(),
            IdentityHeaderError::NotUtf8(names.user_id.clone())
        );
    }
}
