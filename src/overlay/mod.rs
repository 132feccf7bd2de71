//! The secondary surface drawn on top of the host's primary view.
//!
//! An [`OverlayRenderer`] is shared between the widget (which moves and
//! resizes it), the host (which draws it on its upper layer), and the
//! camera synchronizer (which orients its camera).

mod outline;

use std::cell::RefCell;
use std::rc::Rc;

use glam::UVec2;

pub use outline::{Outline, OutlineVertex, DEFAULT_OUTLINE_COLOR};

use crate::camera::Camera;
use crate::geometry::{PixelRect, ViewportRect};
use crate::prop::SharedProp;

/// Shared handle to an overlay surface.
pub type SharedOverlay = Rc<RefCell<OverlayRenderer>>;

/// Host layer the overlay is registered on.
pub const OVERLAY_LAYER: u32 = 1;

/// Render state of the overlay viewport.
pub struct OverlayRenderer {
    viewport: ViewportRect,
    camera: Camera,
    layer: u32,
    prop: Option<SharedProp>,
    outline: Outline,
    render_requested: bool,
}

impl Default for OverlayRenderer {
    fn default() -> Self {
        Self::new(ViewportRect::DEFAULT)
    }
}

impl OverlayRenderer {
    /// Create an overlay covering `viewport` with no prop.
    #[must_use]
    pub fn new(viewport: ViewportRect) -> Self {
        Self {
            viewport,
            camera: Camera::default(),
            layer: OVERLAY_LAYER,
            prop: None,
            outline: Outline::default(),
            render_requested: false,
        }
    }

    /// Create a shared overlay.
    #[must_use]
    pub fn shared(viewport: ViewportRect) -> SharedOverlay {
        Rc::new(RefCell::new(Self::new(viewport)))
    }

    /// Current (live) viewport rectangle.
    #[must_use]
    pub fn viewport(&self) -> ViewportRect {
        self.viewport
    }

    pub(crate) fn set_viewport(&mut self, viewport: ViewportRect) {
        self.viewport = viewport;
    }

    /// Viewport in host pixels.
    #[must_use]
    pub fn pixel_rect(&self, surface_size: UVec2) -> PixelRect {
        self.viewport.to_pixels(surface_size)
    }

    /// Overlay camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub(crate) fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Host layer index.
    #[must_use]
    pub fn layer(&self) -> u32 {
        self.layer
    }

    pub(crate) fn set_layer(&mut self, layer: u32) {
        self.layer = layer;
    }

    /// Displayed prop, if any.
    #[must_use]
    pub fn prop(&self) -> Option<&SharedProp> {
        self.prop.as_ref()
    }

    pub(crate) fn set_prop(&mut self, prop: Option<SharedProp>) {
        self.prop = prop;
    }

    /// Whether there is prop content to draw. The outline is drawn
    /// independently of this.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.prop.as_ref().is_some_and(|prop| prop.visible())
    }

    /// Outline decoration.
    #[must_use]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub(crate) fn outline_mut(&mut self) -> &mut Outline {
        &mut self.outline
    }

    /// Ask the host to redraw the overlay surface.
    pub fn request_render(&mut self) {
        self.render_requested = true;
    }

    /// Whether a redraw is pending.
    #[must_use]
    pub fn render_requested(&self) -> bool {
        self.render_requested
    }

    /// Consume the pending redraw request.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }
}
