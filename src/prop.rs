//! Props displayed inside the overlay.
//!
//! The overlay never owns the geometry of what it shows. Callers hand the
//! widget a [`SharedProp`] and are free to keep using the same prop
//! elsewhere; the widget only decides where it is drawn and from which
//! orientation.

use std::rc::Rc;

use glam::Vec3;

/// Axis-aligned bounds in the prop's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Bounds {
    /// Bounds symmetric about the origin with the given half extents.
    #[must_use]
    pub fn symmetric(half_extent: Vec3) -> Self {
        let half_extent = half_extent.abs();
        Self {
            min: -half_extent,
            max: half_extent,
        }
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Radius of the bounding sphere around [`Bounds::center`].
    #[must_use]
    pub fn radius(&self) -> f32 {
        (self.max - self.min).length() * 0.5
    }
}

/// Something the overlay can display.
///
/// Orientation synchronization frames the overlay camera around the
/// prop's bounds, so implementations should report bounds symmetric about
/// their own origin. Asymmetric bounds are accepted but the marker will
/// appear off-center as the host camera rotates.
pub trait Prop {
    /// Local-space bounds, or `None` when the prop has nothing to show.
    fn bounds(&self) -> Option<Bounds>;

    /// Whether the prop should currently be drawn.
    fn visible(&self) -> bool {
        true
    }
}

/// Shared, caller-owned prop handle.
pub type SharedProp = Rc<dyn Prop>;

/// Three labelled axes of the given lengths, centered on the origin.
///
/// Reports symmetric bounds so that it frames correctly as an
/// orientation marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxesProp {
    /// Length of the X, Y and Z axis shafts.
    pub total_length: Vec3,
    /// Whether the axes are drawn.
    pub visible: bool,
}

impl Default for AxesProp {
    fn default() -> Self {
        Self {
            total_length: Vec3::ONE,
            visible: true,
        }
    }
}

impl Prop for AxesProp {
    fn bounds(&self) -> Option<Bounds> {
        (self.total_length.max_element() > 0.0)
            .then(|| Bounds::symmetric(self.total_length))
    }

    fn visible(&self) -> bool {
        self.visible
    }
}
