use axum::{
    extract::{Query, State},
    middleware,
    routing::get,
    Json, Router,
};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::error::{AppError, Result};
use crate::logging::{access_log_middleware, request_id_middleware};
use crate::models::{AmountInput, ConvertQuery, ConvertRequest, ConvertResponse, HealthResponse};
use crate::services::amount_text::AmountTextService;

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AmountTextService>,
    pub request_timeout: Duration,
    pub slow_request_threshold_ms: u64,
}

// HTTP Handlers

/// Convert an amount sent as JSON
async fn convert_amount(
    State(state): State<AppState>,
    Json(req): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>> {
    let (amount, text) = match req.amount {
        AmountInput::Text(input) => state.service.text_for_input(&input)?,
        AmountInput::Number(value) => {
            let amount = Decimal::from_f64(value)
                .ok_or_else(|| AppError::InvalidAmount(format!("{} is not a valid amount", value)))?;
            (amount, state.service.text_for_amount(amount)?)
        }
    };

    Ok(Json(ConvertResponse {
        amount: to_cents(amount),
        text,
    }))
}

/// Convert an amount given as a query parameter
async fn convert_amount_query(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<ConvertResponse>> {
    let (amount, text) = state.service.text_for_input(&query.amount)?;
    Ok(Json(ConvertResponse {
        amount: to_cents(amount),
        text,
    }))
}

/// Report amounts as they were spelled out: rounded to cents, always two places
fn to_cents(amount: Decimal) -> Decimal {
    let mut shown = amount.round_dp(2);
    shown.rescale(2);
    shown
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        magnitude_ceiling: state.service.converter().ceiling().to_string(),
        max_amount: state.service.max_amount(),
    })
}

pub fn create_router(state: AppState) -> Router<()> {
    // Configure CORS to allow all origins (the form page may be served elsewhere)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let slow_threshold_ms = state.slow_request_threshold_ms;
    let request_timeout = state.request_timeout;

    Router::new()
        .route("/convert", get(convert_amount_query).post(convert_amount))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(
            // Outermost first: request id must exist before the access log reads it
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn_with_state(
                    slow_threshold_ms,
                    access_log_middleware,
                ))
                .layer(TimeoutLayer::new(request_timeout))
                .layer(cors),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::CurrencyTextConverter;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let service = AmountTextService::new(CurrencyTextConverter::default(), dec!(10000));
        create_router(AppState {
            service: Arc::new(service),
            request_timeout: Duration::from_secs(5),
            slow_request_threshold_ms: 1000,
        })
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("X-Request-ID", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("X-Request-ID").unwrap(), "abc-123");
    }

    #[tokio::test]
    async fn test_request_id_is_generated() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let id = response.headers().get("X-Request-ID").unwrap().to_str().unwrap();
        assert_eq!(id.len(), 36);
    }

    #[test]
    fn test_to_cents_pads_and_rounds() {
        assert_eq!(to_cents(dec!(1112)).to_string(), "1112.00");
        assert_eq!(to_cents(dec!(0.1)).to_string(), "0.10");
        assert_eq!(to_cents(dec!(10.305)).to_string(), "10.30");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = test_router()
            .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
