use glam::IVec2;

/// Platform-agnostic pointer events consumed by the widget.
///
/// Positions are integer pixels relative to the host surface with the
/// origin at the top-left, as delivered by most windowing systems.
///
/// # Example
///
/// ```ignore
/// let response = widget.handle_event(PointerEvent::Moved {
///     position: IVec2::new(120, 380),
/// });
/// if !response.consumed {
///     camera_style.handle(event);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// A mouse button went down.
    Pressed {
        /// Which button changed.
        button: MouseButton,
        /// Pointer position in pixels.
        position: IVec2,
    },
    /// A mouse button was released.
    Released {
        /// Which button changed.
        button: MouseButton,
        /// Pointer position in pixels.
        position: IVec2,
    },
    /// The pointer moved.
    Moved {
        /// Pointer position in pixels.
        position: IVec2,
    },
}

impl PointerEvent {
    /// Pointer position carried by the event.
    #[must_use]
    pub fn position(self) -> IVec2 {
        match self {
            Self::Pressed { position, .. }
            | Self::Released { position, .. }
            | Self::Moved { position } => position,
        }
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

/// Round a winit physical cursor position to whole pixels.
#[cfg(feature = "winit")]
#[must_use]
pub fn pixel_position(
    position: winit::dpi::PhysicalPosition<f64>,
) -> IVec2 {
    IVec2::new(position.x.round() as i32, position.y.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_shared_by_all_variants() {
        let p = IVec2::new(4, 9);
        let events = [
            PointerEvent::Pressed {
                button: MouseButton::Left,
                position: p,
            },
            PointerEvent::Released {
                button: MouseButton::Right,
                position: p,
            },
            PointerEvent::Moved { position: p },
        ];
        for event in events {
            assert_eq!(event.position(), p);
        }
    }
}
