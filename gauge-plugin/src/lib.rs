//! Gauge Plugin System
//!
//! Provides the `FunctionPlugin` trait and the registry that dispatches
//! named calls to pure functions.

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::PluginRegistry;
pub use context::EvalContext;

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{FunctionPlugin, FunctionMeta, ArgMeta, PluginRegistry, EvalContext};
    pub use gauge_core::prelude::*;
}
