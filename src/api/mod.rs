//! HTTP API module for the tax engine.
//!
//! This module provides the REST endpoints for decomposing an invoice,
//! rendering its plain-text summary and reading the loaded schedule.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
