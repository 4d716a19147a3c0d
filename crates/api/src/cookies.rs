//! Minimal `Cookie` / `Set-Cookie` handling.
//!
//! The site only ever reads two cookies and writes them back with fixed
//! attributes, so header parsing is done by hand on top of `axum::http`.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};

/// Find the value of cookie `name` across all `Cookie` headers.
///
/// Returns the first match; values are returned as sent (still encoded).
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
}

/// Append a `Set-Cookie` header for a site-wide session cookie (no
/// `Expires`/`Max-Age`).
///
/// Values that are not valid header text are dropped with a warning.
pub fn append_set_cookie(headers: &mut HeaderMap, name: &str, value: &str, http_only: bool) {
    let mut cookie = format!("{name}={value}; Path=/; SameSite=Lax");
    if http_only {
        cookie.push_str("; HttpOnly");
    }
    match HeaderValue::from_str(&cookie) {
        Ok(header) => {
            headers.append(SET_COOKIE, header);
        }
        Err(e) => tracing::warn!(cookie = name, error = %e, "Refusing to set invalid cookie"),
    }
}
