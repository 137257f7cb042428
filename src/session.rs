//! Session cookie policy.
//!
//! Login and logout handlers live downstream; this module fixes the cookie
//! attributes they must use. `SameSite=Lax` keeps the cookie off cross-site
//! POSTs and `HttpOnly` keeps it away from scripts. `Secure` is intentionally
//! not set: the backend is served over plain HTTP in development, and a
//! `Secure` cookie would never reach it.

use axum::http::HeaderValue;

use crate::constants::SESSION_COOKIE_NAME;

/// `Set-Cookie` value establishing a login session.
pub fn session_cookie_value(token: &str) -> HeaderValue {
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE_NAME, token
    );
    HeaderValue::from_str(&cookie)
        .unwrap_or_else(|_| clear_session_cookie_value())
}

/// `Set-Cookie` value that expires the session cookie immediately.
pub fn clear_session_cookie_value() -> HeaderValue {
    let cookie = format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE_NAME
    );
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| {
        HeaderValue::from_static("journitag_session=; Path=/; Max-Age=0")
    })
}

/// Extract the session token from a `Cookie` request header value.
pub fn session_token_from_cookies(raw: &str) -> Option<String> {
    for part in raw.split(';') {
        let mut it = part.trim().splitn(2, '=');
        let name = it.next()?.trim();
        let value = it.next().unwrap_or("").trim();
        if name == SESSION_COOKIE_NAME && !value.is_empty() {
            return Some(value.to_string());
        }
    }
    None
}
