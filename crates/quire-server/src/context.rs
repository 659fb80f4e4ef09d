//! Request context extraction
//!
//! Builds the [`QueryContext`] handed to the resolver from request headers.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use quire_core::QueryContext;
use uuid::Uuid;

/// Header carrying the caller's correlation id
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Extractor wrapping the [`QueryContext`] for the current request
#[derive(Debug, Clone)]
pub struct RequestContext(pub QueryContext);

impl RequestContext {
    /// Build the context from request headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let correlation_id = headers
            .get(CORRELATION_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut ctx = QueryContext::new(correlation_id);

        // First language tag only, without quality weights
        if let Some(locale) = headers
            .get(axum::http::header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .and_then(|tag| tag.split(';').next())
            .map(str::trim)
            .filter(|tag| !tag.is_empty() && *tag != "*")
        {
            ctx = ctx.with_locale(locale);
        }

        RequestContext(ctx)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_headers_are_carried_into_context() {
        let mut headers = HeaderMap::new();
        headers.insert(CORRELATION_ID_HEADER, HeaderValue::from_static("req-7"));
        headers.insert(
            axum::http::header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("nl-BE;q=0.9, en;q=0.8"),
        );

        let RequestContext(ctx) = RequestContext::from_headers(&headers);
        assert_eq!(ctx.correlation_id, "req-7");
        assert_eq!(ctx.locale.as_deref(), Some("nl-BE"));
    }

    #[test]
    fn test_missing_correlation_id_is_generated() {
        let RequestContext(ctx) = RequestContext::from_headers(&HeaderMap::new());
        assert!(Uuid::parse_str(&ctx.correlation_id).is_ok());
        assert_eq!(ctx.locale, None);
    }
}
