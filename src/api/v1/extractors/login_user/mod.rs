/*!
 * Login user extractor
 *
 * Responsibility:
 * - 認証済みリクエストのログインユーザー（User）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込める
 *
 * Public API:
 * - LoginUser
 */

mod core;

pub use self::core::LoginUser;
