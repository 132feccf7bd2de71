use std::cell::RefCell;
use std::rc::Rc;

use glam::UVec2;

use super::{CameraCallback, CameraNotifier, HostSurface, Subscription};
use crate::camera::Camera;
use crate::overlay::SharedOverlay;

/// In-memory host surface with no window or GPU behind it.
///
/// Keeps the primary camera, the attached overlays, and a count of
/// primary renders. Every camera update and every [`HeadlessSurface::render`]
/// notifies camera subscribers, matching a host that fires its camera
/// event at the start of each frame.
pub struct HeadlessSurface {
    size: UVec2,
    layer_count: u32,
    camera: Option<Camera>,
    overlays: Vec<SharedOverlay>,
    notifier: CameraNotifier,
    render_count: u64,
}

impl HeadlessSurface {
    /// Create a single-layer surface with a default camera.
    #[must_use]
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            layer_count: 1,
            camera: Some(Camera::default()),
            overlays: Vec::new(),
            notifier: CameraNotifier::new(),
            render_count: 0,
        }
    }

    /// Create a shared surface.
    #[must_use]
    pub fn shared(size: UVec2) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(size)))
    }

    /// Resize the surface.
    pub fn set_size(&mut self, size: UVec2) {
        self.size = size;
    }

    /// Current primary camera.
    #[must_use]
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Replace the primary camera and notify subscribers.
    pub fn set_camera(&mut self, camera: Option<Camera>) {
        self.camera = camera;
        self.notifier.notify(self.camera.as_ref());
    }

    /// Edit the primary camera in place and notify subscribers. Does
    /// nothing when there is no camera.
    pub fn update_camera(&mut self, edit: impl FnOnce(&mut Camera)) {
        if let Some(camera) = self.camera.as_mut() {
            edit(camera);
            self.notifier.notify(self.camera.as_ref());
        }
    }

    /// Draw a primary frame: notifies camera subscribers first.
    pub fn render(&mut self) {
        self.notifier.notify(self.camera.as_ref());
        self.render_count += 1;
    }

    /// Number of primary frames drawn.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Attached overlays in attachment order.
    #[must_use]
    pub fn overlays(&self) -> &[SharedOverlay] {
        &self.overlays
    }

    /// Number of live camera subscriptions.
    #[must_use]
    pub fn camera_subscriber_count(&self) -> usize {
        self.notifier.len()
    }
}

impl HostSurface for HeadlessSurface {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn layer_count(&self) -> u32 {
        self.layer_count
    }

    fn set_layer_count(&mut self, count: u32) {
        self.layer_count = count.max(1);
    }

    fn attach_overlay(&mut self, overlay: SharedOverlay) {
        if !self.overlays.iter().any(|o| Rc::ptr_eq(o, &overlay)) {
            self.overlays.push(overlay);
        }
    }

    fn detach_overlay(&mut self, overlay: &SharedOverlay) {
        self.overlays.retain(|o| !Rc::ptr_eq(o, overlay));
    }

    fn active_camera(&self) -> Option<Camera> {
        self.camera
    }

    fn subscribe_camera(&mut self, callback: CameraCallback) -> Subscription {
        self.notifier.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::overlay::OverlayRenderer;
    use crate::geometry::ViewportRect;

    #[test]
    fn attach_is_idempotent() {
        let mut surface = HeadlessSurface::new(UVec2::new(640, 480));
        let overlay = OverlayRenderer::shared(ViewportRect::DEFAULT);
        surface.attach_overlay(Rc::clone(&overlay));
        surface.attach_overlay(Rc::clone(&overlay));
        assert_eq!(surface.overlays().len(), 1);
        surface.detach_overlay(&overlay);
        assert!(surface.overlays().is_empty());
    }

    #[test]
    fn render_notifies_camera_subscribers() {
        let mut surface = HeadlessSurface::new(UVec2::new(640, 480));
        let hits = Rc::new(Cell::new(0));
        let sink = Rc::clone(&hits);
        let subscription = surface.subscribe_camera(Box::new(
            move |_: Option<&Camera>| sink.set(sink.get() + 1),
        ));
        surface.render();
        surface.update_camera(|camera| camera.fovy = 40.0);
        assert_eq!(hits.get(), 2);
        assert_eq!(surface.render_count(), 1);
        drop(subscription);
        assert_eq!(surface.camera_subscriber_count(), 0);
    }

    #[test]
    fn update_without_camera_is_silent() {
        let mut surface = HeadlessSurface::new(UVec2::new(640, 480));
        surface.set_camera(None);
        let hits = Rc::new(Cell::new(0));
        let sink = Rc::clone(&hits);
        let _subscription = surface.subscribe_camera(Box::new(
            move |_: Option<&Camera>| sink.set(sink.get() + 1),
        ));
        surface.update_camera(|camera| camera.fovy = 40.0);
        assert_eq!(hits.get(), 0);
    }
}
