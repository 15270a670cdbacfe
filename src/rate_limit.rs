use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: String,
    error: String,
}

/// Configuration for rate limiting
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Requests per second allowed
    pub per_second: u32,
    /// Burst size (max requests in a single burst)
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 10,
            burst_size: 20,
        }
    }
}

/// Rate limiter that tracks limits per client
///
/// Clients are keyed by the first x-forwarded-for address when present
/// (deployments behind a proxy), otherwise by the socket address.
#[derive(Clone)]
pub struct PerClientRateLimiter {
    /// Rate limiters indexed by client key
    limiters: Arc<DashMap<String, Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>>>,
    /// Configuration for new rate limiters
    config: RateLimitConfig,
    /// Clock for rate limiting
    clock: DefaultClock,
}

impl PerClientRateLimiter {
    /// Create a new per-client rate limiter with the given configuration
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            limiters: Arc::new(DashMap::new()),
            config,
            clock: DefaultClock::default(),
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Get or create a rate limiter for the given client key
    fn get_or_create_limiter(
        &self,
        client: &str,
    ) -> Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>> {
        self.limiters
            .entry(client.to_string())
            .or_insert_with(|| {
                // burst_size requests immediately, refilled at per_second
                let quota = Quota::per_second(NonZeroU32::new(self.config.per_second).unwrap())
                    .allow_burst(NonZeroU32::new(self.config.burst_size).unwrap());

                Arc::new(RateLimiter::direct(quota))
            })
            .clone()
    }

    /// Check if a request should be allowed for the given client key
    pub fn check_rate_limit(&self, client: &str) -> Result<(), std::time::Duration> {
        let limiter = self.get_or_create_limiter(client);

        match limiter.check() {
            Ok(_) => Ok(()),
            Err(not_until) => {
                let wait_duration = not_until.wait_time_from(self.clock.now());
                Err(wait_duration)
            }
        }
    }

    /// Get the number of tracked clients
    #[cfg(test)]
    pub fn tracked_clients_count(&self) -> usize {
        self.limiters.len()
    }
}

/// Derive the rate-limit key for a request
fn client_key(headers: &HeaderMap, addr: &SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| addr.ip().to_string())
}

/// Middleware to enforce per-client rate limiting
pub async fn rate_limit_middleware(
    State(limiter): State<PerClientRateLimiter>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    let client = client_key(&headers, &addr);

    match limiter.check_rate_limit(&client) {
        Ok(_) => next.run(request).await,
        Err(wait_duration) => {
            let retry_after = wait_duration.as_secs();

            tracing::warn!(
                "Rate limit exceeded for client {} (retry after {} seconds)",
                client,
                retry_after
            );

            let mut response = (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorResponse {
                    status: "error".to_string(),
                    error: format!(
                        "Rate limit exceeded. Please retry after {} seconds.",
                        retry_after
                    ),
                }),
            )
                .into_response();

            // Add Retry-After header
            response
                .headers_mut()
                .insert("Retry-After", retry_after.to_string().parse().unwrap());

            response
        }
    }
}
