#![forbid(unsafe_code)]

//! SnapTrack: a horizontal labeled-stop snap slider.
//!
//! # Role in SnapTrack
//! This crate is the widget. [`StopSlider`] renders a row of text labels
//! over a track line and lets the user pick one of them by dragging or
//! tapping a circular thumb that snaps to the nearest stop. The selected
//! index is reported to a listener exactly once per change.
//!
//! # Primary responsibilities
//! - **Track layout** ([`layout`]): evenly distribute stop centers across
//!   the available width from variable-width labels.
//! - **Hit-testing** ([`hit`]): resolve a pointer coordinate to the
//!   nearest stop within a tolerance band, and clamp the thumb to the
//!   track during a drag.
//! - **Selection** ([`selection`]): current/last-notified index pair and
//!   the single change listener.
//! - **Widget assembly** ([`widget`]): measure negotiation, the drag
//!   state machine, and rendering through the [`surface::Surface`] trait.
//!
//! # How it fits in the system
//! Everything host-specific stays behind traits from `snaptrack-core`:
//! the host adapter supplies text metrics, loads the thumb sprite, feeds
//! pointer events, and implements [`surface::Surface`] over its drawing
//! API. The widget itself is synchronous, single-threaded, and allocation
//! free outside layout recomputation.

pub mod gesture;
pub mod hit;
pub mod layout;
pub mod selection;
pub mod style;
pub mod surface;
pub mod widget;

pub use gesture::{DragPhase, SliderEvent};
pub use layout::{DegenerateLabels, TrackLayout};
pub use selection::{PositionListener, Selection, SetResult};
pub use style::{LabelStyle, LineStyle, Rgba, SliderStyle};
pub use surface::{DrawOp, RecordingSurface, Sprite, SpriteId, Surface};
pub use widget::{StopSlider, Strictness};
