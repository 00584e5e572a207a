//! Rate Limit Middleware
//!
//! Applies the sliding-window limiter to the notes routes. Only GET and POST
//! are throttled; PUT and DELETE pass through untouched.

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::api::AppState;
use crate::error::{ApiError, Result};

/// Limiter key shared by all throttled requests. The service is limited as a
/// whole, not per client.
const LIMITER_KEY: &str = "notes-api";

/// Axum middleware enforcing the request rate limit.
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let method = request.method();

    if (method == Method::GET || method == Method::POST)
        && !state.limiter.try_acquire(LIMITER_KEY).await
    {
        warn!(%method, uri = %request.uri(), "rate limit exceeded");
        return Err(ApiError::RateLimited);
    }

    Ok(next.run(request).await)
}
