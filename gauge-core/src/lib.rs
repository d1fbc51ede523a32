//! Gauge Core - Fundamental types
//!
//! This crate provides the core types used throughout Gauge:
//! - `Value`: Runtime values (numbers, text, objects, errors)
//! - `GaugeError`: Structured errors with machine-readable codes
//! - `ConvertConfig`: Settings applied to every conversion

mod config;
mod error;
mod value;

pub use config::{ConvertConfig, NonFinitePolicy, NON_FINITE_ENV};
pub use error::{codes, GaugeError};
pub use value::Value;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ConvertConfig, GaugeError, NonFinitePolicy, Value};
    pub use crate::error::codes;
}
