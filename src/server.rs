use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::config::constants::MAX_AMOUNT_LENGTH;
use crate::error::{ConvertError, Result};
use crate::models::{ConvertRequest, ConvertResponse, HealthResponse, VoiceInfo, VoicesResponse};
use crate::rate_limit::{rate_limit_middleware, PerClientRateLimiter};
use crate::speech::{SpeechSink, Voice};
use crate::transcribe::convert_amount;

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub speaker: Arc<dyn SpeechSink>,
    pub rate_limiter: Option<PerClientRateLimiter>,
    pub request_timeout: Duration,
}

// HTTP Handlers

/// Convert a currency amount into its English spoken form
async fn convert_currency(
    State(state): State<AppState>,
    Json(req): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>> {
    tracing::debug!(
        "Convert request - amount_len={}, voice='{}', speak={}",
        req.amount.len(),
        req.voice,
        req.speak
    );

    // Empty amounts are well-formed (they read as "zero"); only size is
    // validated here
    if req.amount.chars().count() > MAX_AMOUNT_LENGTH {
        return Err(ConvertError::AmountTooLong(req.amount.chars().count()));
    }

    let conversion = convert_amount(&req.amount)?;

    let spoken = if req.speak {
        let voice = Voice::resolve(&req.voice);
        state.speaker.speak(&conversion.words, voice).await?;
        true
    } else {
        false
    };

    Ok(Json(ConvertResponse {
        status: "ok".to_string(),
        words: conversion.words,
        symbol: conversion.symbol.map(|symbol| symbol.to_string()),
        spoken,
    }))
}

/// List all available voices
async fn list_voices() -> Json<VoicesResponse> {
    let voices = Voice::all()
        .iter()
        .map(|voice| {
            let config = voice.config();
            VoiceInfo {
                id: config.id.to_string(),
                name: config.name.to_string(),
                gender: format!("{:?}", config.gender),
                description: config.description.to_string(),
            }
        })
        .collect();

    Json(VoicesResponse {
        voices,
        preferred: Voice::preferred().id().to_string(),
    })
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create and configure the HTTP server router
pub fn create_router(state: AppState) -> Router<()> {
    // Configure CORS to allow all origins (adjust as needed for production)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/convert", post(convert_currency))
        .route("/voices", get(list_voices))
        .route("/health", get(health_check));

    let router = match state.rate_limiter.clone() {
        Some(limiter) => router.layer(middleware::from_fn_with_state(
            limiter,
            rate_limit_middleware,
        )),
        None => router,
    };

    router
        .layer(TimeoutLayer::new(state.request_timeout))
        .with_state(state)
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::NullSpeaker;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::util::ServiceExt;

    fn test_router() -> Router<()> {
        create_router(AppState {
            speaker: Arc::new(NullSpeaker),
            rate_limiter: None,
            request_timeout: Duration::from_secs(5),
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn convert_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/convert")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_voices_endpoint() {
        let response = test_router()
            .oneshot(Request::builder().uri("/voices").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["voices"].as_array().unwrap().len(), Voice::all().len());
    }

    #[tokio::test]
    async fn test_convert_endpoint_basic() {
        let response = test_router()
            .oneshot(convert_request(r#"{"amount": "1234567"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["words"],
            "one million two hundred thirty four thousand five hundred sixty seven"
        );
        assert_eq!(json["spoken"], false);
    }

    #[tokio::test]
    async fn test_convert_endpoint_symbol_and_separators() {
        let response = test_router()
            .oneshot(convert_request(r#"{"amount": "$1,234"}"#))
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["words"], "one thousand two hundred thirty four");
        assert_eq!(json["symbol"], "$");
    }

    #[tokio::test]
    async fn test_convert_endpoint_zero() {
        let response = test_router()
            .oneshot(convert_request(r#"{"amount": ""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["words"], "zero");
    }

    #[tokio::test]
    async fn test_convert_endpoint_speak_with_null_sink() {
        let response = test_router()
            .oneshot(convert_request(r#"{"amount": "42", "speak": true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["words"], "forty two");
        assert_eq!(json["spoken"], true);
    }

    #[tokio::test]
    async fn test_convert_endpoint_rejects_oversized_amount() {
        let amount = "1".repeat(MAX_AMOUNT_LENGTH + 1);
        let body = format!(r#"{{"amount": "{}"}}"#, amount);

        let response = test_router().oneshot(convert_request(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["status"], "error");
    }

    #[tokio::test]
    async fn test_convert_endpoint_unsupported_magnitude() {
        let amount = "1".repeat(70);
        let body = format!(r#"{{"amount": "{}"}}"#, amount);

        let response = test_router().oneshot(convert_request(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
