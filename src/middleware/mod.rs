/*
 * Responsibility
 * - middleware の公開インターフェース
 * - http: request-id / trace / limit / timeout
 * - security_context: upstream が確定した identity を SecurityContext として extensions に載せる
 */
pub mod http;
pub mod security_context;
