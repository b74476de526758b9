/*
 * Responsibility
 * - Public entry points of the middleware stack
 * - auth: token gate for protected routes
 * - cors / http / security_headers: router-wide transport concerns
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
