//! Pointer handling for [`OrientationMarkerWidget`].

use glam::{IVec2, UVec2};

use super::hit_test::{classify, CursorShape};
use super::state::{Hover, Interaction};
use super::OrientationMarkerWidget;
use crate::geometry::{enforce_square, pixel_delta_to_normalized};
use crate::input::{MouseButton, PointerEvent};

/// Notification produced by the widget in response to a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A move or resize drag began.
    StartInteraction,
    /// A move or resize drag ended.
    EndInteraction,
    /// The overlay changed and the host should redraw.
    RenderRequested,
    /// The cursor the host should show changed.
    CursorChanged(CursorShape),
}

/// What the widget did with a pointer event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct EventResponse {
    /// Notifications in the order they occurred.
    pub events: Vec<WidgetEvent>,
    /// `true` when the host should not pass the event on to its own
    /// camera interaction.
    pub consumed: bool,
}

impl EventResponse {
    fn ignored() -> Self {
        Self::default()
    }

    fn push(&mut self, event: WidgetEvent) {
        self.events.push(event);
    }
}

impl OrientationMarkerWidget {
    /// Process a pointer event.
    ///
    /// Events are ignored while the widget is disabled or non-interactive,
    /// and when the host surface has no area. Only the primary (left)
    /// button moves or resizes the overlay.
    pub fn handle_event(&mut self, event: PointerEvent) -> EventResponse {
        if !self.enabled || !self.interactive {
            return EventResponse::ignored();
        }
        let size = self.host_size();
        if size.x == 0 || size.y == 0 {
            return EventResponse::ignored();
        }
        let resized = self.refresh_outline(size);
        let point = to_surface(event.position(), size);

        let mut response = match event {
            PointerEvent::Moved { .. } => self.on_pointer_moved(point, size),
            PointerEvent::Pressed {
                button: MouseButton::Left,
                ..
            } => self.on_primary_pressed(point, size),
            PointerEvent::Released {
                button: MouseButton::Left,
                ..
            } => self.on_primary_released(point, size),
            PointerEvent::Pressed { .. } | PointerEvent::Released { .. } => {
                EventResponse::ignored()
            }
        };
        if resized && !response.events.contains(&WidgetEvent::RenderRequested)
        {
            response.events.insert(0, WidgetEvent::RenderRequested);
        }
        response
    }

    /// Rebuild the outline when the host size no longer matches the one it
    /// was built for. Returns `true` when a visible outline moved.
    fn refresh_outline(&self, size: UVec2) -> bool {
        let mut overlay = self.overlay.borrow_mut();
        let rect = overlay.pixel_rect(size);
        if overlay.outline().rect() == rect {
            return false;
        }
        log::debug!("host resized to {size}, rebuilding overlay outline");
        overlay.outline_mut().rebuild(rect);
        if !overlay.outline().visible() {
            return false;
        }
        overlay.request_render();
        true
    }

    /// Pointer moved: re-classify while hovering, or drag the rectangle.
    fn on_pointer_moved(&mut self, point: IVec2, size: UVec2) -> EventResponse {
        let mut response = EventResponse::default();
        match self.interaction {
            Interaction::Hovering(_) => {
                let hover = self.classify(point, size);
                self.enter_hover(hover, &mut response);
            }
            Interaction::Translating { anchor } => {
                let delta = pixel_delta_to_normalized(point - anchor, size);
                let rect = self.viewport().translated(delta);
                self.apply_live(rect);
                self.interaction = Interaction::Translating { anchor: point };
                response.push(WidgetEvent::RenderRequested);
                response.consumed = true;
            }
            Interaction::Resizing { corner, anchor } => {
                let delta = pixel_delta_to_normalized(point - anchor, size);
                let rect = self.viewport().with_corner_moved(corner, delta);
                self.apply_live(rect);
                self.interaction = Interaction::Resizing {
                    corner,
                    anchor: point,
                };
                response.push(WidgetEvent::RenderRequested);
                response.consumed = true;
            }
        }
        response
    }

    /// Primary button down: start a translate or a corner resize.
    fn on_primary_pressed(
        &mut self,
        point: IVec2,
        size: UVec2,
    ) -> EventResponse {
        if self.interaction.is_dragging() {
            return EventResponse::ignored();
        }
        let mut response = EventResponse::default();
        let hover = self.classify(point, size);
        let interaction = match hover {
            Hover::Outside => {
                self.enter_hover(hover, &mut response);
                return response;
            }
            Hover::Inside => Interaction::Translating { anchor: point },
            Hover::Corner(corner) => Interaction::Resizing {
                corner,
                anchor: point,
            },
        };
        self.interaction = interaction;
        log::debug!("orientation marker: {:?}", self.state());

        self.update_cursor(&mut response);
        if self.show_outline(true) {
            response.push(WidgetEvent::RenderRequested);
        }
        response.push(WidgetEvent::StartInteraction);
        response.consumed = true;
        response
    }

    /// Primary button up: commit the drag, squaring after a resize.
    fn on_primary_released(
        &mut self,
        point: IVec2,
        size: UVec2,
    ) -> EventResponse {
        let mut response = EventResponse::default();
        match self.interaction {
            Interaction::Hovering(_) => return EventResponse::ignored(),
            Interaction::Translating { .. } => {}
            Interaction::Resizing { corner, .. } => {
                let squared = enforce_square(self.viewport(), corner.opposite());
                self.apply_live(squared);
                response.push(WidgetEvent::RenderRequested);
            }
        }
        self.committed = self.viewport();

        let hover = self.classify(point, size);
        self.enter_hover(hover, &mut response);
        log::debug!("orientation marker: {:?}", self.state());
        response.push(WidgetEvent::EndInteraction);
        response.consumed = true;
        response
    }

    fn classify(&self, point: IVec2, size: UVec2) -> Hover {
        let rect = self.overlay.borrow().pixel_rect(size);
        classify(point, &rect, self.tolerance)
    }

    /// Switch to hovering and refresh the cursor and outline for it.
    fn enter_hover(&mut self, hover: Hover, response: &mut EventResponse) {
        self.interaction = Interaction::Hovering(hover);
        self.update_cursor(response);
        if self.show_outline(hover != Hover::Outside) {
            response.push(WidgetEvent::RenderRequested);
        }
    }

    fn update_cursor(&mut self, response: &mut EventResponse) {
        let cursor = CursorShape::for_state(self.state());
        if cursor != self.cursor {
            self.cursor = cursor;
            response.push(WidgetEvent::CursorChanged(cursor));
        }
    }

    /// Returns `true` when outline visibility changed.
    fn show_outline(&self, visible: bool) -> bool {
        let mut overlay = self.overlay.borrow_mut();
        let changed = overlay.outline_mut().set_visible(visible);
        if changed {
            overlay.request_render();
        }
        changed
    }
}

/// Flip a top-left-origin pointer position to the bottom-left origin used
/// by viewport rectangles. Row 0 maps to the top row, `height - 1`.
fn to_surface(position: IVec2, size: UVec2) -> IVec2 {
    IVec2::new(position.x, size.y as i32 - 1 - position.y)
}
