//! Error types for coercion failures.
//!
//! This module provides types for representing coercion errors with their
//! location path and rendered message.

mod coerce_error;

pub use coerce_error::{CoerceError, CoerceErrors};
pub use crate::value::ConversionError;
