#![forbid(unsafe_code)]

//! Core: host contracts for the SnapTrack slider widget.
//!
//! # Role in SnapTrack
//! `snaptrack-core` is the host boundary. It owns the pointer event types
//! the widget consumes, the measure negotiation protocol, shared geometry
//! scalars, and the text measurement contract.
//!
//! # Primary responsibilities
//! - **PointerEvent**: normalized single-pointer input in widget-local
//!   coordinates.
//! - **MeasureSpec**: intrinsic-size negotiation with the hosting layout
//!   pass (`Exactly` / `AtMost` / `Unspecified` semantics).
//! - **TextMetrics**: the text width and line height queries the layout
//!   engine depends on, with a monospace fallback implementation.
//!
//! # How it fits in the system
//! The widget crate (`snaptrack`) consumes these types and stays
//! independent of any concrete UI framework; a host adapter translates its
//! native events, text stack, and resources into these contracts.

pub mod event;
pub mod geometry;
pub mod logging;
pub mod measure;
pub mod metrics;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
