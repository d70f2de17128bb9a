/**
 * Session Cookie Convention
 *
 * The cookie attribute contract shared by every endpoint that touches the
 * session: HttpOnly, SameSite=Strict, Path=/, Secure in production, and a
 * Max-Age matching the token lifetime.
 *
 * Clearing reuses the exact same attribute set with an empty value and
 * Max-Age=0. Browsers only drop a cookie when the removal's attributes
 * match the ones it was set with, so both builders go through the same
 * base.
 */

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use crate::backend::auth::tokens::TOKEN_TTL_SECS;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "token";

fn base_cookie(value: String, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_secure(secure);
    cookie
}

/// Cookie carrying a freshly issued session token
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(token, secure);
    cookie.set_max_age(Duration::seconds(TOKEN_TTL_SECS as i64));
    cookie
}

/// Cookie that removes the session cookie from the browser
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(String::new(), secure);
    cookie.set_max_age(Duration::ZERO);
    cookie
}
