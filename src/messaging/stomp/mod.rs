/*!
 * STOMP message envelope
 *
 * Responsibility:
 * - handler に渡るインバウンドメッセージ (ヘッダ + ペイロード) の型
 * - ヘッダを STOMP の語彙で読む accessor
 *
 * Notes:
 * - フレームのエンコード/デコードやブローカー中継はここでは扱わない
 */
mod accessor;
mod command;
mod message;

pub use accessor::StompHeaderAccessor;
pub use command::StompCommand;
pub use message::{Message, MessageHeaders};
