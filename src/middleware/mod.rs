/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth (Bearer 検証), error (404 fallback / uncaught-error boundary), http (横断的関心事)
 */
pub mod auth;
pub mod error;
pub mod http;
