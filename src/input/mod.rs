//! Input handling: host-agnostic pointer events fed to the widget.

/// Platform-agnostic input events.
pub mod event;

#[cfg(feature = "winit")]
pub use event::pixel_position;
pub use event::{MouseButton, PointerEvent};
