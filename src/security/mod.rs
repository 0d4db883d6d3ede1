/*
 * Responsibility
 * - 認証済み主体 (User) と、それを運ぶ SecurityContext / Authentication の型
 * - ここは「読むだけ」の契約。生成は middleware (HTTP) や接続ハンドシェイク (STOMP) 側の責務
 */
mod context;
mod principal;

pub use context::{Authentication, SecurityContext};
pub use principal::{Principal, User};
