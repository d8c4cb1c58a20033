//! # Utility Functions
//!
//! - **[`validation`]**: pure input validation for tickers, quantities,
//!   amounts, and registration fields, plus the advisory
//!   [`validation::apply_delta`] balance check.

pub mod validation;
