//! Session middleware
//!
//! Restores the signed-in identity from the bearer token and resolves the
//! role-gated session for downstream handlers.

use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use shared::models::{Session, User};

use crate::error::{AppError, ErrorDetail, ErrorResponse};
use crate::services::auth::decode_session_token;

/// Session middleware that restores the identity stored in the bearer token.
/// Note: the token is validated inline against the environment-provided
/// secret to avoid state dependency issues in `from_fn` layers.
pub async fn auth_middleware(mut request: Request, next: Next) -> Response {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            return unauthorized_response("Missing or invalid Authorization header");
        }
    };

    // Secret from environment (fallback for middleware without state)
    let secret = std::env::var("SM__SESSION__SECRET")
        .or_else(|_| std::env::var("SM_SESSION_SECRET"))
        .unwrap_or_else(|_| "development-secret-key".to_string());

    let session = match decode_session_token(token, &secret) {
        Ok(session) => session,
        Err(msg) => {
            return unauthorized_response(&msg);
        }
    };

    request.extensions_mut().insert(session);

    next.run(request).await
}

/// Create unauthorized response
fn unauthorized_response(message: &str) -> Response {
    let error = ErrorResponse {
        error: ErrorDetail {
            code: "UNAUTHORIZED".to_string(),
            message: message.to_string(),
            field: None,
        },
    };

    (StatusCode::UNAUTHORIZED, Json(error)).into_response()
}

/// Extractor for the authenticated session
/// Use this in handlers to get the current session
#[derive(Clone, Debug)]
pub struct CurrentSession(pub Session);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(CurrentSession)
            .ok_or_else(|| {
                let error = ErrorResponse {
                    error: ErrorDetail {
                        code: "UNAUTHORIZED".to_string(),
                        message: "Authentication required".to_string(),
                        field: None,
                    },
                };
                (StatusCode::UNAUTHORIZED, Json(error))
            })
    }
}

/// Reject sessions that are not an admin
pub fn require_admin(session: &Session) -> Result<&User, AppError> {
    match session {
        Session::Admin { user } => Ok(user),
        Session::Refiller { .. } => Err(AppError::Forbidden(
            "reports are available to admin accounts only".to_string(),
        )),
    }
}

/// Reject sessions that are not a refiller; yields the assigned outlet
pub fn require_refiller(session: &Session) -> Result<(&User, &str), AppError> {
    match session {
        Session::Refiller { user, outlet_id } => Ok((user, outlet_id.as_str())),
        Session::Admin { .. } => Err(AppError::Forbidden(
            "stock entry capture is available to refiller accounts only".to_string(),
        )),
    }
}
