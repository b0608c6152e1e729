//! Bearer token authentication middleware
//!
//! Checks the `Authorization: Bearer <token>` header against the single shared
//! token from configuration. The comparison runs in constant time.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    response::{IntoResponse, Response},
};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use tower::{Layer, Service};
use tracing::{debug, warn};

use crate::error::ApiError;

/// Paths served without a token
const PUBLIC_PATHS: &[&str] = &["/health"];

/// Layer that applies bearer token authentication
#[derive(Clone, Debug)]
pub struct BearerAuthLayer {
    /// Expected token
    token: Arc<SecretString>,
}

impl BearerAuthLayer {
    /// Require `token` on every path except `/health`
    #[must_use]
    pub fn new(token: SecretString) -> Self {
        Self {
            token: Arc::new(token),
        }
    }
}

impl<S> Layer<S> for BearerAuthLayer {
    type Service = BearerAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BearerAuth {
            inner,
            token: Arc::clone(&self.token),
        }
    }
}

/// Middleware service for bearer token authentication
#[derive(Clone, Debug)]
pub struct BearerAuth<S> {
    inner: S,
    token: Arc<SecretString>,
}

impl<S> Service<Request> for BearerAuth<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        // Call the instance that was polled ready
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let authorized = PUBLIC_PATHS.contains(&req.uri().path()) || self.check(&req);

        Box::pin(async move {
            if authorized {
                inner.call(req).await
            } else {
                Ok(ApiError::Unauthorized.into_response())
            }
        })
    }
}

impl<S> BearerAuth<S> {
    fn check(&self, req: &Request) -> bool {
        let presented = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token);

        match presented {
            Some(token) if token_matches(token, &self.token) => {
                debug!("Bearer token accepted");
                true
            },
            Some(_) => {
                warn!(path = %req.uri().path(), "Rejected request with wrong token");
                false
            },
            None => {
                warn!(path = %req.uri().path(), "Rejected request without bearer token");
                false
            },
        }
    }
}

/// Token part of a header value of exactly the form `Bearer <token>`
fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").filter(|token| !token.is_empty())
}

fn token_matches(presented: &str, expected: &SecretString) -> bool {
    presented
        .as_bytes()
        .ct_eq(expected.expose_secret().as_bytes())
        .into()
}
