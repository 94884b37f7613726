//! HTTP request handlers for the income engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::IncomeInput;

use super::cors::cors_layer;
use super::request::IncomeRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints and the CORS policy.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.allowed_origins());

    Router::new()
        .route("/", get(health_handler))
        .route("/calculate-income", post(calculate_income_handler))
        .layer(cors)
        .with_state(state)
}

/// Handler for GET / (liveness probe).
async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Budgeting App API is running" }))
}

/// Handler for POST /calculate-income.
///
/// Validates the request body and returns the income breakdown.
async fn calculate_income_handler(
    State(state): State<AppState>,
    payload: Result<Json<IncomeRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing income calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let input = match IncomeInput::try_from(request) {
        Ok(input) => input,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request validation failed"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let breakdown = state.calculator().calculate(&input);
    info!(
        correlation_id = %correlation_id,
        income_type = %breakdown.income_type,
        tax_enabled = breakdown.tax_enabled,
        gross_annual_income = %breakdown.gross_annual_income,
        net_monthly_income = %breakdown.net_monthly_income,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    (StatusCode::OK, Json(breakdown)).into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description, e.g. "missing field `income_type`"
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::validation_error(body_text),
            )
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err)),
            )
        }
        JsonRejection::MissingJsonContentType(_) => ApiErrorResponse::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json"),
        ),
        _ => ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::malformed_json("Failed to parse request body"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeBreakdown;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::default())
    }

    async fn post_json(body: &str) -> Response {
        create_test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate-income")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let response =
            post_json(r#"{"income_type": "annual", "annual_salary": 60000, "tax_enabled": false}"#)
                .await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let breakdown: IncomeBreakdown = serde_json::from_slice(&body).unwrap();
        assert_eq!(breakdown.net_monthly_income, Decimal::from_str("5000").unwrap());
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let response = post_json("{invalid json").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_income_type_returns_422() {
        let response = post_json(r#"{"annual_salary": 60000}"#).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(
            error.message.contains("income_type"),
            "Expected error message to mention income_type, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_missing_content_type_returns_415() {
        let response = create_test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate-income")
                    .body(Body::from(r#"{"income_type": "annual", "annual_salary": 1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = create_test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["message"], "Budgeting App API is running");
    }
}
