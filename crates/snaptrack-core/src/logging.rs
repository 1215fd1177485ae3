#![forbid(unsafe_code)]

//! Structured logging facade.
//!
//! When the `tracing` feature is enabled this re-exports the `tracing`
//! macros so widget code and host adapters log through one spot. With the
//! feature disabled the crate emits nothing and pulls in no logging
//! dependency.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
