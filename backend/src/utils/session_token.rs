// src/utils/session_token.rs

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderValue, Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{AppError, PageError},
    state::AppState,
};

/// Name of the cookie carrying the session token for page requests.
pub const SESSION_COOKIE: &str = "readiness_session";

/// Session token claims.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionClaims {
    /// Subject - the session UUID.
    pub sub: String,
    /// Expiration time as Unix timestamp.
    pub exp: usize,
}

impl SessionClaims {
    pub fn session_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub).map_err(|_| AppError::AuthError("Invalid session id".to_string()))
    }
}

/// Session resolved by one of the middlewares, injected into request extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentSession(pub Uuid);

fn unix_now() -> Result<u64, AppError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| AppError::InternalServerError(e.to_string()))
}

/// Signs a token for the given session.
pub fn sign_session_token(
    session_id: Uuid,
    secret: &str,
    expiration_seconds: u64,
) -> Result<String, AppError> {
    let expiration = unix_now()?.saturating_add(expiration_seconds);

    let claims = SessionClaims {
        sub: session_id.to_string(),
        exp: usize::try_from(expiration).unwrap_or(usize::MAX),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(e.to_string()))
}

/// True once less than half of the token lifetime is left.
pub fn needs_refresh(exp: usize, now: u64, ttl: u64) -> bool {
    (exp as u64).saturating_sub(now) < ttl / 2
}

/// Verifies and decodes a session token.
pub fn verify_session_token(token: &str, secret: &str) -> Result<SessionClaims, AppError> {
    let token_data = decode(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::AuthError("Invalid session token".to_string()))?;

    Ok(token_data.claims)
}

/// Pulls the token from `Authorization: Bearer` or, failing that, the session cookie.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    if let Some(token) = bearer {
        return Some(token.trim().to_string());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, token)| token.to_string())
}

/// `Set-Cookie` value for a freshly issued token.
pub fn session_cookie(token: &str, max_age: u64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, token, max_age
    )
}

/// Maps a token to a live session, if both the signature and the session check out.
async fn resolve_session(state: &AppState, token: &str) -> Option<(Uuid, usize)> {
    let claims = verify_session_token(token, &state.config.session_secret).ok()?;
    let id = claims.session_id().ok()?;
    state
        .sessions
        .contains(id)
        .await
        .then_some((id, claims.exp))
}

/// Axum Middleware: page sessions.
///
/// Resolves the visitor's session from the cookie. A missing, invalid or
/// purged session is replaced by a new one and the cookie is reissued.
/// A live session whose token is past half its lifetime gets a fresh token,
/// so an active visitor keeps their answers.
/// Injects `CurrentSession` into the request extensions.
pub async fn page_session_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let existing = match token_from_headers(req.headers()) {
        Some(token) => resolve_session(&state, &token).await,
        None => None,
    };

    let ttl = state.config.session_ttl;
    let (session_id, reissue) = match existing {
        Some((id, exp)) => {
            let now = match unix_now() {
                Ok(now) => now,
                Err(e) => return PageError(e).into_response(),
            };
            (id, needs_refresh(exp, now, ttl))
        }
        None => (state.sessions.create().await, true),
    };

    let issued = if reissue {
        match sign_session_token(session_id, &state.config.session_secret, ttl) {
            Ok(token) => Some(token),
            Err(e) => return PageError(e).into_response(),
        }
    } else {
        None
    };

    req.extensions_mut().insert(CurrentSession(session_id));
    let mut response = next.run(req).await;

    if let Some(token) = issued {
        match HeaderValue::from_str(&session_cookie(&token, state.config.session_ttl)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::error!("Failed to build session cookie: {:?}", e),
        }
    }

    response
}

/// Axum Middleware: API sessions.
///
/// Requires a valid token (Bearer header or cookie) for a live session.
/// Returns 401 Unauthorized otherwise.
pub async fn api_session_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = token_from_headers(req.headers()).ok_or(StatusCode::UNAUTHORIZED)?;

    match resolve_session(&state, &token).await {
        Some((id, _)) => {
            req.extensions_mut().insert(CurrentSession(id));
            Ok(next.run(req).await)
        }
        None => Err(StatusCode::UNAUTHORIZED),
    }
}
