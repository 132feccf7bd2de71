use std::cell::RefCell;
use std::rc::Weak;

use glam::Vec3;

use super::core::Camera;
use crate::host::CameraCallback;
use crate::overlay::OverlayRenderer;
use crate::prop::Bounds;

/// Narrowest view angle copied from the host camera, in degrees.
const MIN_VIEW_ANGLE: f32 = 1.0;
/// Widest view angle copied from the host camera, in degrees.
const MAX_VIEW_ANGLE: f32 = 179.0;

/// Copy the orientation of `host` onto `overlay`.
///
/// Only the view direction, view-up, view angle and projection mode are
/// taken from the host. The overlay camera is then re-framed around
/// `bounds` (a unit sphere at the origin when `None`) so the prop fills
/// the overlay and appears to rotate in place however the host camera is
/// panned or zoomed.
///
/// Returns `false` and leaves `overlay` untouched when the host camera's
/// eye and target coincide.
pub fn match_orientation(
    overlay: &mut Camera,
    host: &Camera,
    bounds: Option<Bounds>,
) -> bool {
    let direction = host.direction();
    if direction == Vec3::ZERO {
        return false;
    }

    // view-up must be orthogonal to the view direction
    let up = (host.up - direction * host.up.dot(direction))
        .try_normalize()
        .unwrap_or_else(|| direction.any_orthonormal_vector());

    let (center, radius) =
        bounds.map_or((Vec3::ZERO, 1.0), |b| (b.center(), b.radius()));
    let radius = if radius > f32::EPSILON { radius } else { 1.0 };

    let fovy = host.fovy.clamp(MIN_VIEW_ANGLE, MAX_VIEW_ANGLE);
    let distance = radius / (fovy.to_radians() * 0.5).sin();

    overlay.fovy = fovy;
    overlay.parallel = host.parallel;
    overlay.parallel_scale = radius;
    overlay.up = up;
    overlay.target = center;
    overlay.eye = center - direction * distance;
    true
}

/// Keeps an overlay camera oriented like the host camera.
///
/// Holds only a weak reference to the overlay, so a subscription that
/// outlives its widget never keeps the overlay alive.
#[derive(Debug, Clone)]
pub struct CameraSynchronizer {
    overlay: Weak<RefCell<OverlayRenderer>>,
}

impl CameraSynchronizer {
    /// Create a synchronizer writing to `overlay`.
    #[must_use]
    pub fn new(overlay: Weak<RefCell<OverlayRenderer>>) -> Self {
        Self { overlay }
    }

    /// React to a host camera change.
    ///
    /// No-op when the host has no camera or the overlay is gone. On
    /// success the overlay (and only the overlay) gets a render request.
    pub fn on_camera_changed(&self, host: Option<&Camera>) {
        let (Some(host), Some(overlay)) = (host, self.overlay.upgrade())
        else {
            return;
        };
        let Ok(mut overlay) = overlay.try_borrow_mut() else {
            log::debug!("overlay busy, skipping camera sync");
            return;
        };
        let bounds = overlay.prop().and_then(|prop| prop.bounds());
        if match_orientation(overlay.camera_mut(), host, bounds) {
            overlay.request_render();
        } else {
            log::debug!("host camera eye and target coincide, skipping sync");
        }
    }

    /// Box the synchronizer as a host camera callback.
    #[must_use]
    pub fn into_callback(self) -> CameraCallback {
        Box::new(move |host: Option<&Camera>| self.on_camera_changed(host))
    }
}
