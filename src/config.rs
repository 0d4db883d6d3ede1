/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, APP_ENV, タイムアウト、upstream が転送する認証ヘッダの扱いなど)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// upstream (認証済みゲートウェイ) が転送してくる identity ヘッダの設定
///
/// - `trusted` が false の間はヘッダを一切読まない (全リクエストが未認証扱い)
/// - true にするのは、前段のゲートウェイがクライアント由来の同名ヘッダを除去している場合のみ
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub trusted: bool,
    pub user_id: HeaderName,
    pub nickname: HeaderName,
    pub email: HeaderName,
    pub image_url: HeaderName,
    pub authorities: HeaderName,
}

impl Default for IdentityHeaders {
    fn default() -> Self {
        Self {
            trusted: true,
            user_id: HeaderName::from_static("x-auth-user-id"),
            nickname: HeaderName::from_static("x-auth-nickname"),
            email: HeaderName::from_static("x-auth-email"),
            image_url: HeaderName::from_static("x-auth-image-url"),
            authorities: HeaderName::from_static("x-auth-authorities"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub request_timeout: Duration,
    pub request_body_limit: usize,

    pub identity_headers: IdentityHeaders,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            app_env: AppEnv::Development,
            request_timeout: Duration::from_secs(30),
            request_body_limit: 1024 * 1024,
            identity_headers: IdentityHeaders::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `lookup` で値を引いて Config を組み立てる (テストではプロセス環境に触れない)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port: u16 = parse_or(&lookup, "PORT", 3000)?;
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let request_timeout =
            Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?);
        if request_timeout.is_zero() {
            return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECS"));
        }

        let request_body_limit =
            parse_or(&lookup, "REQUEST_BODY_LIMIT_BYTES", defaults.request_body_limit)?;

        // production では明示的に有効化しない限り転送ヘッダを信用しない
        let trusted = parse_or(&lookup, "TRUST_IDENTITY_HEADERS", !app_env.is_production())?;

        let fallback = defaults.identity_headers;
        let identity_headers = IdentityHeaders {
            trusted,
            user_id: header_or(&lookup, "AUTH_USER_ID_HEADER", fallback.user_id)?,
            nickname: header_or(&lookup, "AUTH_NICKNAME_HEADER", fallback.nickname)?,
            email: header_or(&lookup, "AUTH_EMAIL_HEADER", fallback.email)?,
            image_url: header_or(&lookup, "AUTH_IMAGE_URL_HEADER", fallback.image_url)?,
            authorities: header_or(&lookup, "AUTH_AUTHORITIES_HEADER", fallback.authorities)?,
        };

        Ok(Self {
            addr,
            app_env,
            request_timeout,
            request_body_limit,
            identity_headers,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

fn header_or<F>(lookup: &F, key: &'static str, default: HeaderName) -> Result<HeaderName, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) => HeaderName::try_from(v.trim().to_ascii_lowercase())
            .map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.request_body_limit, 1024 * 1024);
        assert_eq!(config.identity_headers.user_id, "x-auth-user-id");
        assert!(config.identity_headers.trusted);
    }

    #[test]
    fn production_does_not_trust_identity_headers_by_default() {
        let config = Config::from_lookup(lookup(&[("APP_ENV", "production")])).unwrap();
        assert!(!config.identity_headers.trusted);

        let config = Config::from_lookup(lookup(&[
            ("APP_ENV", "production"),
            ("TRUST_IDENTITY_HEADERS", "true"),
        ]))
        .unwrap();
        assert!(config.identity_headers.trusted);

        let config =
            Config::from_lookup(lookup(&[("TRUST_IDENTITY_HEADERS", "false")])).unwrap();
        assert!(!config.identity_headers.trusted);
    }

    #[test]
    fn config_errors_surface_through_anyhow() {
        let err = anyhow::Error::from(
            Config::from_lookup(lookup(&[("PORT", "http")])).unwrap_err(),
        );
        assert_eq!(err.to_string(), "invalid configuration: PORT");
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::Invalid("PORT"))
        );
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("APP_ENV", "PROD"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("AUTH_USER_ID_HEADER", "X-Forwarded-User"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert!(config.app_env.is_production());
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.identity_headers.user_id, "x-forwarded-user");
        assert_eq!(config.identity_headers.nickname, "x-auth-nickname");
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            Config::from_lookup(lookup(&[("PORT", "http")])).unwrap_err(),
            ConfigError::Invalid("PORT")
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("REQUEST_TIMEOUT_SECS", "0")])).unwrap_err(),
            ConfigError::Invalid("REQUEST_TIMEOUT_SECS")
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("AUTH_NICKNAME_HEADER", "bad header")])).unwrap_err(),
            ConfigError::Invalid("AUTH_NICKNAME_HEADER")
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("TRUST_IDENTITY_HEADERS", "yes")])).unwrap_err(),
            ConfigError::Invalid("TRUST_IDENTITY_HEADERS")
        );
    }
}
