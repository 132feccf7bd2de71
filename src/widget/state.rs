//! Widget states and the pointer hover classification they derive from.

use glam::IVec2;

use crate::geometry::Corner;

/// Externally visible widget state.
///
/// `Adjusting` is reported both while hovering near a corner and while
/// that corner is being dragged; the corner names which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidgetState {
    /// Pointer is not over the overlay.
    #[default]
    Outside,
    /// Pointer is over the overlay but not near a corner.
    Inside,
    /// The overlay is being dragged.
    Translating,
    /// Pointer is at, or dragging, the given corner.
    Adjusting(Corner),
}

/// Where the pointer sits relative to the overlay while no button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hover {
    /// Beyond the tolerance band around the overlay.
    Outside,
    /// Over the overlay, away from the corners.
    Inside,
    /// Within tolerance of a corner.
    Corner(Corner),
}

impl From<Hover> for WidgetState {
    fn from(hover: Hover) -> Self {
        match hover {
            Hover::Outside => Self::Outside,
            Hover::Inside => Self::Inside,
            Hover::Corner(corner) => Self::Adjusting(corner),
        }
    }
}

/// Internal interaction phase. Drag anchors only exist while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Interaction {
    Hovering(Hover),
    Translating { anchor: IVec2 },
    Resizing { corner: Corner, anchor: IVec2 },
}

impl Default for Interaction {
    fn default() -> Self {
        Self::Hovering(Hover::Outside)
    }
}

impl Interaction {
    pub(crate) fn is_dragging(self) -> bool {
        !matches!(self, Self::Hovering(_))
    }

    pub(crate) fn state(self) -> WidgetState {
        match self {
            Self::Hovering(hover) => hover.into(),
            Self::Translating { .. } => WidgetState::Translating,
            Self::Resizing { corner, .. } => WidgetState::Adjusting(corner),
        }
    }
}
