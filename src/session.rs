//! Browser session identification.
//!
//! Each browser gets an opaque id in the `contact_sid` cookie. The id is
//! only used to key one-shot notifications, so it carries no other state.

use axum::extract::Request;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use std::fmt;
use tracing::trace;
use uuid::Uuid;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "contact_sid";

const MAX_SESSION_ID_LEN: usize = 64;

/// Opaque per-browser session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Mint a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Accept a client-supplied id if it looks like one we could have issued.
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = !raw.is_empty()
            && raw.len() <= MAX_SESSION_ID_LEN
            && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Find the session id in the request's `Cookie` headers.
pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| SessionId::parse(value.trim()))
}

/// `Set-Cookie` value issuing `id` to the browser.
pub fn session_cookie(id: &SessionId) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}

/// Attach a [`SessionId`] to every request, issuing a cookie when the
/// browser does not present one.
pub async fn session_middleware(mut request: Request, next: Next) -> Response {
    let (session, issued) = match session_from_headers(request.headers()) {
        Some(id) => (id, false),
        None => (SessionId::generate(), true),
    };

    request.extensions_mut().insert(session.clone());
    let mut response = next.run(request).await;

    if issued {
        trace!(session = %session, "Issuing session cookie");
        if let Ok(value) = HeaderValue::from_str(&session_cookie(&session)) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }

    response
}
