//! urban-living/crates/ul-api/src/middleware.rs Middleware
//!
//! Request logging, CORS and viewer extraction.

use std::future::{ready, Ready};

use actix_cors::Cors;
use actix_web::dev::Payload;
use actix_web::http::header::HeaderName;
use actix_web::middleware::Logger;
use actix_web::{FromRequest, HttpRequest};
use ul_core::{AppError, Profile};

use crate::error::ApiError;

/// Display name of the signed-in user, set by the upstream authenticator.
pub const USER_NAME_HEADER: &str = "x-user-name";
/// Avatar URI of the signed-in user.
pub const USER_AVATAR_HEADER: &str = "x-user-avatar";

// Returns a standard set of middleware for the Urban Living API.
pub fn standard_middleware() -> Logger {
    // remote-ip "request-line" status-code response-size "referrer" "user-agent"
    Logger::default()
}

// Configures CORS (Cross-Origin Resource Sharing) for a UI served from another origin.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            HeaderName::from_static(USER_NAME_HEADER),
            HeaderName::from_static(USER_AVATAR_HEADER),
        ])
        .max_age(3600)
}

/// The signed-in user. Extraction fails with 401 when no name header is present;
/// use `Option<Viewer>` for routes that work anonymously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer(pub Profile);

impl Viewer {
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn from_request_headers(req: &HttpRequest) -> Option<Self> {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };
        let name = header(USER_NAME_HEADER)?;
        Some(Viewer(Profile::from_session(Some(name), header(USER_AVATAR_HEADER))))
    }
}

impl FromRequest for Viewer {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_request_headers(req).ok_or_else(|| AppError::Unauthenticated.into()))
    }
}
