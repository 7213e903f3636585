//! Session middleware.
//!
//! Reads the `triage_session` cookie, looks up the stored language and
//! injects a `RequestSession` into request extensions. Requests without a
//! valid session get the configured default language. Cookies are only
//! issued by the language switcher.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::api::types::{ApiContext, RequestSession, SESSION_COOKIE};
use crate::config::ServerConfig;

pub async fn resolve_session(mut req: Request<axum::body::Body>, next: Next) -> Response {
    let session = match req.extensions().get::<ApiContext>() {
        Some(ctx) => {
            let id = session_id(req.headers());
            RequestSession {
                id,
                language: ctx.language_for(id),
            }
        }
        None => {
            tracing::error!("ApiContext missing from request extensions");
            RequestSession {
                id: None,
                language: ServerConfig::default().default_language,
            }
        }
    };

    req.extensions_mut().insert(session);
    next.run(req).await
}

/// Session id from the request cookies. Malformed ids are ignored.
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value for `id` under the configured attributes.
pub fn session_cookie(id: Uuid, config: &ServerConfig) -> Option<HeaderValue> {
    let mut cookie = format!(
        "{SESSION_COOKIE}={id}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        config.session_lifetime.as_secs()
    );
    if config.session_cookie_secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie).ok()
}

/// Attach the session cookie to `response`.
pub fn set_session_cookie(response: &mut Response, id: Uuid, config: &ServerConfig) {
    match session_cookie(id, config) {
        Some(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        None => tracing::error!("Session cookie could not be encoded"),
    }
}
