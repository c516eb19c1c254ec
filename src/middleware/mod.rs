/*
 * Responsibility
 * - Public interface of the middleware layer (re-export)
 * - auth: field-based authentication, http: cross-cutting transport concerns
 */
pub mod auth;
pub mod http;
