//! trade-api
//!
//! HTTP client for the apartment trade backend. Requests are plain GETs
//! with query parameters; responses come wrapped in a `{ data }` envelope.

pub mod client;
pub mod envelope;
pub mod error;
pub mod params;

pub use client::{HttpTradeApi, TradeApi, DEFAULT_BASE_URL};
pub use error::ApiError;
