//! Request middleware and extractors.
//!
//! - [`session::ensure_session`] -- Guarantees every request a session cookie.
//! - [`session::SessionId`] -- Extracts the current session id in handlers.

pub mod session;
