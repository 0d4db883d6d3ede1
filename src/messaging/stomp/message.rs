use crate::security::Authentication;

use super::StompCommand;

/// インバウンドメッセージのヘッダ
///
/// - `native` はフレームに乗ってきた生のヘッダ (同名ヘッダは順序を保って複数持つ)
/// - `session_id` / `user` は接続ハンドシェイクで確定し、以降のフレームに付与される
#[derive(Debug, Clone)]
pub struct MessageHeaders {
    command: StompCommand,
    native: Vec<(String, String)>,
    session_id: Option<String>,
    user: Option<Authentication>,
}

impl MessageHeaders {
    pub fn new(command: StompCommand) -> Self {
        Self {
            command,
            native: Vec::new(),
            session_id: None,
            user: None,
        }
    }

    pub fn native_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.native.push((name.into(), value.into()));
        self
    }

    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn user(mut self, user: Authentication) -> Self {
        self.user = Some(user);
        self
    }

    pub(super) fn command_ref(&self) -> StompCommand {
        self.command
    }

    pub(super) fn native_ref(&self) -> &[(String, String)] {
        &self.native
    }

    pub(super) fn session_id_ref(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub(super) fn user_ref(&self) -> Option<&Authentication> {
        self.user.as_ref()
    }
}

/// ヘッダ + ペイロード
#[derive(Debug, Clone)]
pub struct Message<P> {
    pub headers: MessageHeaders,
    pub payload: P,
}

impl<P> Message<P> {
    pub fn new(headers: MessageHeaders, payload: P) -> Self {
        Self { headers, payload }
    }
}
