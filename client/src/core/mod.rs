//! # Core Abstractions
//!
//! Error types and the service trait the rest of the crate is built on.
//!
//! - **[`error`]**: the [`ApiError`] taxonomy and `Result<T>` alias
//! - **[`service`]**: the [`ApiService`] trait for dependency injection
//!
//! All stores accept `Arc<dyn ApiService>`, so production wiring uses the
//! real HTTP client while tests script responses per endpoint.

pub mod error;
pub mod service;

pub use error::{ApiError, Result};
pub use service::ApiService;
