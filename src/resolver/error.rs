use std::fmt;

use thiserror::Error;

/// principal をどこから読もうとしたか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Http,
    Stomp,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Http => f.write_str("http request"),
            Channel::Stomp => f.write_str("stomp message"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// 解決が呼ばれたのに principal が無い (upstream の認証設定漏れ)
    #[error("no authenticated principal on {channel}")]
    Unauthenticated { channel: Channel },

    /// どの resolver も引数を扱えない (host 側の配線ミス)
    #[error("no argument resolver supports parameter '{name}'")]
    UnsupportedParameter { name: &'static str },
}

impl ResolveError {
    pub fn unauthenticated(channel: Channel) -> Self {
        Self::Unauthenticated { channel }
    }
}
