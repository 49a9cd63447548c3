//! Measure Plugin System
//!
//! Provides the `FunctionPlugin` trait and the registry callers use to
//! look up and invoke conversion functions by name.

mod traits;
mod registry;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::PluginRegistry;

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{FunctionPlugin, FunctionMeta, ArgMeta, PluginRegistry};
    pub use measure_core::prelude::*;
}
