use crate::security::Authentication;

use super::{Message, MessageHeaders, StompCommand};

/// Message のヘッダを STOMP の語彙で読むための read-only ラッパ
#[derive(Debug, Clone, Copy)]
pub struct StompHeaderAccessor<'a> {
    headers: &'a MessageHeaders,
}

impl<'a> StompHeaderAccessor<'a> {
    pub fn wrap<P>(message: &'a Message<P>) -> Self {
        Self {
            headers: &message.headers,
        }
    }

    pub fn command(&self) -> StompCommand {
        self.headers.command_ref()
    }

    pub fn destination(&self) -> Option<&'a str> {
        self.first_native_header("destination")
    }

    pub fn session_id(&self) -> Option<&'a str> {
        self.headers.session_id_ref()
    }

    /// 接続時に確定したユーザー (未認証の接続なら None)
    pub fn user(&self) -> Option<&'a Authentication> {
        self.headers.user_ref()
    }

    pub fn first_native_header(&self, name: &str) -> Option<&'a str> {
        self.native_headers(name).next()
    }

    pub fn native_headers(&self, name: &str) -> impl Iterator<Item = &'a str> {
        self.headers
            .native_ref()
            .iter()
            .filter(move |(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}
