//! HTTP API module for the income engine.
//!
//! This module provides the REST endpoints: a liveness probe at `GET /` and
//! the income calculation at `POST /calculate-income`.

mod cors;
mod handlers;
mod request;
mod response;
mod state;

pub use cors::cors_layer;
pub use handlers::create_router;
pub use request::IncomeRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
