//! Camera types for the host and overlay views.
//!
//! The overlay camera never follows the host camera's position; it only
//! mirrors orientation so the displayed prop appears to rotate in place.

/// Core camera value type.
pub mod core;
/// Orientation synchronization from the host camera to the overlay camera.
pub mod sync;

pub use self::core::Camera;
pub use sync::{match_orientation, CameraSynchronizer};
