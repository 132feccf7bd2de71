//! The orientation-marker widget: lifecycle, configuration, and the
//! pointer state machine that moves and resizes the overlay.
//!
//! The widget's surface is split across submodules:
//!
//! - [`state`]: the [`WidgetState`] the widget reports and the hover
//!   classification it is derived from
//! - [`hit_test`]: pointer classification and cursor shapes
//! - `interaction`: the pointer event handlers ([`EventResponse`],
//!   [`WidgetEvent`])

mod interaction;
pub mod state;

use std::rc::Rc;

use glam::UVec2;

pub use hit_test::{CursorShape, DEFAULT_TOLERANCE, MAX_TOLERANCE, MIN_TOLERANCE};
pub use interaction::{EventResponse, WidgetEvent};
pub use state::{Hover, WidgetState};

use self::state::Interaction;
use crate::camera::CameraSynchronizer;
use crate::error::OverlayError;
use crate::geometry::ViewportRect;
use crate::host::{SharedHost, Subscription};
use crate::options::WidgetOptions;
use crate::overlay::{OverlayRenderer, SharedOverlay, OVERLAY_LAYER};
use crate::prop::SharedProp;

/// Interactive overlay showing a prop oriented like the host camera.
///
/// Typical use: attach a host with [`set_host`](Self::set_host), give it
/// a prop with [`set_prop`](Self::set_prop), then
/// [`enable`](Self::enable) it and forward pointer events to
/// [`handle_event`](Self::handle_event).
///
/// ```ignore
/// let mut widget = OrientationMarkerWidget::new();
/// widget.set_host(Some(host));
/// widget.set_prop(Some(Rc::new(AxesProp::default())));
/// widget.enable()?;
/// ```
pub struct OrientationMarkerWidget {
    host: Option<SharedHost>,
    overlay: SharedOverlay,
    camera_subscription: Option<Subscription>,
    prop: Option<SharedProp>,
    enabled: bool,
    interactive: bool,
    tolerance: i32,
    /// Last rectangle set by configuration or a completed drag.
    committed: ViewportRect,
    interaction: Interaction,
    cursor: CursorShape,
}

impl Default for OrientationMarkerWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationMarkerWidget {
    /// Create a disabled, interactive widget with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            host: None,
            overlay: OverlayRenderer::shared(ViewportRect::DEFAULT),
            camera_subscription: None,
            prop: None,
            enabled: false,
            interactive: true,
            tolerance: DEFAULT_TOLERANCE,
            committed: ViewportRect::DEFAULT,
            interaction: Interaction::default(),
            cursor: CursorShape::Default,
        }
    }

    /// Create a disabled widget configured from `options`.
    #[must_use]
    pub fn with_options(options: &WidgetOptions) -> Self {
        let mut widget = Self::new();
        widget.apply_options(options);
        widget
    }

    /// Apply configuration through the clamping setters.
    pub fn apply_options(&mut self, options: &WidgetOptions) {
        self.set_interactive(options.interactive);
        self.set_outline_color(options.outline_color);
        let [min_x, min_y, max_x, max_y] = options.viewport;
        self.set_viewport(min_x, min_y, max_x, max_y);
        self.set_tolerance(options.tolerance);
    }

    /// Snapshot of the current configuration.
    #[must_use]
    pub fn options(&self) -> WidgetOptions {
        WidgetOptions {
            interactive: self.interactive,
            outline_color: self.outline_color(),
            viewport: self.committed.to_array(),
            tolerance: self.tolerance,
        }
    }

    // ── Lifecycle ──

    /// Attach a host surface, or detach with `None`.
    ///
    /// An enabled widget is disabled on its previous host first and stays
    /// disabled; call [`enable`](Self::enable) again on the new host.
    pub fn set_host(&mut self, host: Option<SharedHost>) {
        self.disable();
        self.host = host;
    }

    /// The attached host surface.
    #[must_use]
    pub fn host(&self) -> Option<&SharedHost> {
        self.host.as_ref()
    }

    /// Show the overlay on the host's upper layer and start following the
    /// host camera. Does nothing if already enabled.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::NoHost`] when no host is attached.
    pub fn enable(&mut self) -> Result<(), OverlayError> {
        if self.enabled {
            return Ok(());
        }
        let host = self.host.clone().ok_or(OverlayError::NoHost)?;

        {
            let mut host = host.borrow_mut();
            if host.layer_count() <= OVERLAY_LAYER {
                host.set_layer_count(OVERLAY_LAYER + 1);
            }
            let size = host.size();
            {
                let mut overlay = self.overlay.borrow_mut();
                overlay.set_layer(OVERLAY_LAYER);
                overlay.set_viewport(self.committed);
                overlay.set_prop(self.prop.clone());
                let outline = overlay.outline_mut();
                outline.rebuild(self.committed.to_pixels(size));
                let _ = outline.set_visible(false);
            }
            host.attach_overlay(Rc::clone(&self.overlay));
            let synchronizer =
                CameraSynchronizer::new(Rc::downgrade(&self.overlay));
            self.camera_subscription =
                Some(host.subscribe_camera(synchronizer.into_callback()));
        }

        self.enabled = true;
        self.interaction = Interaction::default();
        self.cursor = CursorShape::Default;
        self.sync_camera();
        log::info!("orientation marker enabled on layer {OVERLAY_LAYER}");
        Ok(())
    }

    /// Remove the overlay from the host and stop following its camera.
    ///
    /// Always succeeds. An in-progress drag is abandoned without any
    /// notification and the rectangle returns to its last committed value.
    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }
        self.abort_interaction();
        drop(self.camera_subscription.take());
        if let Some(host) = &self.host {
            host.borrow_mut().detach_overlay(&self.overlay);
        }
        self.overlay.borrow_mut().set_prop(None);
        self.enabled = false;
        log::info!("orientation marker disabled");
    }

    /// Enable or disable.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::NoHost`] when enabling without a host.
    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), OverlayError> {
        if enabled {
            self.enable()
        } else {
            self.disable();
            Ok(())
        }
    }

    /// Whether the overlay is attached to the host.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    // ── Configuration ──

    /// Set the displayed prop. The widget keeps a shared reference; the
    /// caller may keep using the prop elsewhere.
    pub fn set_prop(&mut self, prop: Option<SharedProp>) {
        self.prop = prop;
        if self.enabled {
            self.overlay.borrow_mut().set_prop(self.prop.clone());
            self.sync_camera();
        }
    }

    /// The displayed prop.
    #[must_use]
    pub fn prop(&self) -> Option<&SharedProp> {
        self.prop.as_ref()
    }

    /// Allow or forbid moving and resizing with the pointer.
    ///
    /// Turning interaction off aborts any drag in progress, the same way
    /// [`disable`](Self::disable) does.
    pub fn set_interactive(&mut self, interactive: bool) {
        if !interactive && self.interactive {
            self.abort_interaction();
        }
        self.interactive = interactive;
    }

    /// Whether pointer interaction is allowed.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Set the outline color. Channels are clamped to `[0, 1]`.
    pub fn set_outline_color(&mut self, color: [f32; 3]) {
        self.overlay.borrow_mut().outline_mut().set_color(color);
    }

    /// Outline color.
    #[must_use]
    pub fn outline_color(&self) -> [f32; 3] {
        self.overlay.borrow().outline().color()
    }

    /// Place the overlay. Coordinates are normalized to the host surface
    /// and clamped to `[0, 1]`; a rectangle with no area is ignored.
    pub fn set_viewport(
        &mut self,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) {
        match ViewportRect::new(min_x, min_y, max_x, max_y) {
            Some(rect) => self.set_viewport_rect(rect),
            None => log::warn!(
                "ignoring empty overlay viewport \
                 ({min_x}, {min_y}, {max_x}, {max_y})"
            ),
        }
    }

    /// Place the overlay.
    pub fn set_viewport_rect(&mut self, rect: ViewportRect) {
        self.committed = rect;
        self.apply_live(rect);
    }

    /// Current overlay rectangle, including any drag in progress.
    #[must_use]
    pub fn viewport(&self) -> ViewportRect {
        self.overlay.borrow().viewport()
    }

    /// Last committed overlay rectangle.
    #[must_use]
    pub fn committed_viewport(&self) -> ViewportRect {
        self.committed
    }

    /// Set the corner tolerance in pixels, clamped to
    /// [`MIN_TOLERANCE`]..=[`MAX_TOLERANCE`].
    pub fn set_tolerance(&mut self, tolerance: i32) {
        self.tolerance = tolerance.clamp(MIN_TOLERANCE, MAX_TOLERANCE);
    }

    /// Corner tolerance in pixels.
    #[must_use]
    pub fn tolerance(&self) -> i32 {
        self.tolerance
    }

    // ── State ──

    /// Current widget state.
    #[must_use]
    pub fn state(&self) -> WidgetState {
        self.interaction.state()
    }

    /// Cursor shape for the current state.
    #[must_use]
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// The overlay surface.
    #[must_use]
    pub fn overlay(&self) -> &SharedOverlay {
        &self.overlay
    }

    // ── Internals ──

    fn host_size(&self) -> UVec2 {
        self.host
            .as_ref()
            .map_or(UVec2::ZERO, |host| host.borrow().size())
    }

    /// Orient the overlay camera from the host's current camera.
    fn sync_camera(&self) {
        let Some(host) = &self.host else {
            return;
        };
        let camera = host.borrow().active_camera();
        CameraSynchronizer::new(Rc::downgrade(&self.overlay))
            .on_camera_changed(camera.as_ref());
    }

    /// Write `rect` to the overlay, regenerate the outline, and ask for a
    /// redraw.
    fn apply_live(&self, rect: ViewportRect) {
        let size = self.host_size();
        let mut overlay = self.overlay.borrow_mut();
        overlay.set_viewport(rect);
        overlay.outline_mut().rebuild(rect.to_pixels(size));
        overlay.request_render();
    }

    /// Drop any drag, restore the committed rectangle, and return to
    /// `Outside`. Emits nothing.
    fn abort_interaction(&mut self) {
        if self.interaction.is_dragging() {
            log::debug!("orientation marker drag aborted");
            self.apply_live(self.committed);
        }
        self.interaction = Interaction::default();
        self.cursor = CursorShape::Default;
        let _ = self.overlay.borrow_mut().outline_mut().set_visible(false);
    }
}

impl Drop for OrientationMarkerWidget {
    fn drop(&mut self) {
        self.disable();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use glam::{IVec2, Vec3};

    use super::*;
    use crate::camera::Camera;
    use crate::host::{HeadlessSurface, HostSurface};
    use crate::input::{MouseButton, PointerEvent};
    use crate::prop::AxesProp;

    fn attached(
        size: UVec2,
    ) -> (OrientationMarkerWidget, Rc<RefCell<HeadlessSurface>>) {
        let surface = HeadlessSurface::shared(size);
        let host: SharedHost = surface.clone();
        let mut widget = OrientationMarkerWidget::new();
        widget.set_host(Some(host));
        (widget, surface)
    }

    #[test]
    fn defaults() {
        let widget = OrientationMarkerWidget::new();
        assert!(!widget.is_enabled());
        assert!(widget.is_interactive());
        assert_eq!(widget.viewport().to_array(), [0.0, 0.0, 0.2, 0.2]);
        assert_eq!(widget.outline_color(), [1.0, 1.0, 1.0]);
        assert_eq!(widget.tolerance(), DEFAULT_TOLERANCE);
        assert_eq!(widget.state(), WidgetState::Outside);
        assert!(widget.prop().is_none());
    }

    #[test]
    fn enable_requires_host() {
        let mut widget = OrientationMarkerWidget::new();
        assert!(matches!(widget.enable(), Err(OverlayError::NoHost)));
        assert!(!widget.is_enabled());
    }

    #[test]
    fn enable_attaches_on_upper_layer() {
        let (mut widget, surface) = attached(UVec2::new(400, 300));
        widget.enable().unwrap();

        let surface_ref = surface.borrow();
        assert!(surface_ref.layer_count() >= 2);
        assert_eq!(surface_ref.overlays().len(), 1);
        assert!(Rc::ptr_eq(&surface_ref.overlays()[0], widget.overlay()));
        assert_eq!(widget.overlay().borrow().layer(), OVERLAY_LAYER);
        assert_eq!(surface_ref.camera_subscriber_count(), 1);
    }

    #[test]
    fn enable_twice_subscribes_once() {
        let (mut widget, surface) = attached(UVec2::new(400, 300));
        widget.enable().unwrap();
        widget.enable().unwrap();
        assert_eq!(surface.borrow().camera_subscriber_count(), 1);
        assert_eq!(surface.borrow().overlays().len(), 1);
    }

    #[test]
    fn disable_detaches_and_unsubscribes() {
        let (mut widget, surface) = attached(UVec2::new(400, 300));
        widget.set_prop(Some(Rc::new(AxesProp::default())));
        widget.enable().unwrap();
        assert!(widget.overlay().borrow().has_content());

        widget.disable();
        assert!(!widget.is_enabled());
        assert!(surface.borrow().overlays().is_empty());
        assert_eq!(surface.borrow().camera_subscriber_count(), 0);
        assert!(widget.overlay().borrow().prop().is_none());
        // the widget still remembers the prop for the next enable
        assert!(widget.prop().is_some());

        widget.disable();
        widget.set_enabled(true).unwrap();
        assert!(widget.overlay().borrow().has_content());
    }

    #[test]
    fn drop_releases_host_resources() {
        let (mut widget, surface) = attached(UVec2::new(400, 300));
        let prop: SharedProp = Rc::new(AxesProp::default());
        widget.set_prop(Some(Rc::clone(&prop)));
        widget.enable().unwrap();
        drop(widget);
        assert!(surface.borrow().overlays().is_empty());
        assert_eq!(surface.borrow().camera_subscriber_count(), 0);
        assert_eq!(Rc::strong_count(&prop), 1);
    }

    #[test]
    fn switching_hosts_disables_on_old_host() {
        let (mut widget, old) = attached(UVec2::new(400, 300));
        widget.enable().unwrap();
        let new = HeadlessSurface::shared(UVec2::new(800, 600));
        let host: SharedHost = new.clone();
        widget.set_host(Some(host));
        assert!(!widget.is_enabled());
        assert!(old.borrow().overlays().is_empty());
        widget.enable().unwrap();
        assert_eq!(new.borrow().overlays().len(), 1);
    }

    #[test]
    fn enable_orients_overlay_immediately() {
        let (mut widget, surface) = attached(UVec2::new(400, 300));
        surface.borrow_mut().set_camera(Some(Camera {
            eye: Vec3::new(10.0, 0.0, 0.0),
            target: Vec3::new(0.0, 0.0, 0.0),
            ..Camera::default()
        }));
        widget.enable().unwrap();
        let overlay = widget.overlay().borrow();
        assert!((overlay.camera().direction() - Vec3::NEG_X).length() < 1e-5);
        assert!(overlay.render_requested());
    }

    #[test]
    fn host_camera_changes_follow_while_enabled() {
        let (mut widget, surface) = attached(UVec2::new(400, 300));
        widget.enable().unwrap();
        let _ = widget.overlay().borrow_mut().take_render_request();

        surface.borrow_mut().update_camera(|camera| {
            camera.eye = Vec3::new(0.0, 10.0, 0.0);
            camera.up = Vec3::Z;
        });
        assert!(widget.overlay().borrow_mut().take_render_request());
        assert!(
            (widget.overlay().borrow().camera().direction() - Vec3::NEG_Y)
                .length()
                < 1e-5
        );
        // the primary surface is never asked to redraw by the sync
        assert_eq!(surface.borrow().render_count(), 0);

        widget.disable();
        let before = *widget.overlay().borrow().camera();
        surface.borrow_mut().update_camera(|camera| {
            camera.eye = Vec3::new(10.0, 0.0, 0.0);
            camera.up = Vec3::Y;
        });
        assert_eq!(*widget.overlay().borrow().camera(), before);
    }

    #[test]
    fn missing_host_camera_leaves_overlay_camera() {
        let (mut widget, surface) = attached(UVec2::new(400, 300));
        widget.enable().unwrap();
        let before = *widget.overlay().borrow().camera();
        surface.borrow_mut().set_camera(None);
        assert_eq!(*widget.overlay().borrow().camera(), before);
    }

    #[test]
    fn configuration_is_clamped() {
        let mut widget = OrientationMarkerWidget::new();
        widget.set_tolerance(0);
        assert_eq!(widget.tolerance(), MIN_TOLERANCE);
        widget.set_tolerance(42);
        assert_eq!(widget.tolerance(), MAX_TOLERANCE);

        widget.set_outline_color([2.0, 0.5, -1.0]);
        assert_eq!(widget.outline_color(), [1.0, 0.5, 0.0]);

        widget.set_viewport(-0.5, 0.5, 0.25, 1.5);
        assert_eq!(widget.viewport().to_array(), [0.0, 0.5, 0.25, 1.0]);

        widget.set_viewport(0.3, 0.3, 0.3, 0.6);
        assert_eq!(widget.viewport().to_array(), [0.0, 0.5, 0.25, 1.0]);
    }

    #[test]
    fn options_round_trip_through_widget() {
        let options = WidgetOptions {
            interactive: false,
            outline_color: [0.2, 0.4, 0.6],
            viewport: [0.7, 0.7, 1.0, 1.0],
            tolerance: 3,
        };
        let widget = OrientationMarkerWidget::with_options(&options);
        assert_eq!(widget.options(), options);
    }

    #[test]
    fn non_interactive_widget_ignores_pointer() {
        let (mut widget, _surface) = attached(UVec2::new(500, 500));
        widget.set_interactive(false);
        widget.enable().unwrap();
        let response = widget.handle_event(PointerEvent::Pressed {
            button: MouseButton::Left,
            position: IVec2::new(50, 450),
        });
        assert!(!response.consumed);
        assert!(response.events.is_empty());
        assert_eq!(widget.state(), WidgetState::Outside);
    }
}
