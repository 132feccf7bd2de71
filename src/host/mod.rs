//! The host side of the overlay: the primary rendering surface the
//! widget attaches to.
//!
//! Rendering and windowing are the host's business. The widget only needs
//! the surface size, a second layer to draw on, the active camera, and a
//! way to hear about camera changes.

mod headless;
mod notifier;

use std::cell::RefCell;
use std::rc::Rc;

use glam::UVec2;

pub use headless::HeadlessSurface;
pub use notifier::{CameraNotifier, Subscription};

use crate::camera::Camera;
use crate::overlay::SharedOverlay;

/// Callback run whenever the host camera changes. Receives the host's
/// active camera, if any.
pub type CameraCallback = Box<dyn FnMut(Option<&Camera>)>;

/// Shared handle to a host surface.
pub type SharedHost = Rc<RefCell<dyn HostSurface>>;

/// A layered rendering surface that can display overlays.
pub trait HostSurface {
    /// Surface size in pixels.
    fn size(&self) -> UVec2;

    /// Number of rendering layers.
    fn layer_count(&self) -> u32;

    /// Change the number of rendering layers.
    fn set_layer_count(&mut self, count: u32);

    /// Start drawing `overlay` on its layer. Attaching an overlay that is
    /// already attached has no effect.
    fn attach_overlay(&mut self, overlay: SharedOverlay);

    /// Stop drawing `overlay`.
    fn detach_overlay(&mut self, overlay: &SharedOverlay);

    /// The primary view's active camera.
    fn active_camera(&self) -> Option<Camera>;

    /// Register a callback for camera changes. The callback stays
    /// registered until the returned handle is dropped.
    ///
    /// Hosts must not notify while an attached overlay is borrowed. The
    /// widget's callback skips an update it cannot apply and does not
    /// retry it, so the overlay keeps its old orientation until the next
    /// camera change.
    fn subscribe_camera(&mut self, callback: CameraCallback) -> Subscription;
}
