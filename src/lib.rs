// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive orientation-marker overlay for 3D viewers.
//!
//! An [`OrientationMarkerWidget`] places a small secondary viewport on top
//! of a host's primary rendering surface. The overlay's camera mirrors the
//! orientation of the host camera, so a marker prop (typically a set of
//! axes) shows which way the main scene is facing. With the primary
//! pointer button the user can drag the overlay around or resize it from
//! any corner; releasing a resize snaps the overlay back to a square.
//!
//! # Key entry points
//!
//! - [`widget::OrientationMarkerWidget`] - lifecycle, configuration and
//!   pointer handling
//! - [`host::HostSurface`] - what the widget needs from the host renderer
//! - [`camera::CameraSynchronizer`] - host-to-overlay orientation copy
//! - [`geometry`] - normalized/pixel rectangles, hit-testing helpers and
//!   square enforcement
//! - [`options::WidgetOptions`] - TOML-backed configuration
//!
//! # Architecture
//!
//! Everything runs on the thread that owns the host surface. Pointer
//! events go through [`OrientationMarkerWidget::handle_event`], which
//! classifies the pointer against the overlay, advances the state
//! machine, and reports notifications in an [`EventResponse`]. Camera
//! changes reach the overlay through a callback registered with the host;
//! dropping the returned [`host::Subscription`] unregisters it.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod options;
pub mod overlay;
pub mod prop;
pub mod widget;

pub use error::OverlayError;
pub use widget::{EventResponse, OrientationMarkerWidget, WidgetEvent, WidgetState};
