use glam::{Mat4, Vec3};

/// Default view angle in degrees for a freshly created camera.
pub const DEFAULT_VIEW_ANGLE: f32 = 30.0;

/// Camera defined by eye position, target, view-up, and projection mode.
///
/// Both the host's primary camera and the overlay camera use this type.
/// Projection math lives with the host renderer; the overlay only needs
/// the orientation and framing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Vertical field of view in degrees (perspective projection).
    pub fovy: f32,
    /// Whether the camera uses a parallel (orthographic) projection.
    pub parallel: bool,
    /// Half-height of the view in world units (parallel projection).
    pub parallel_scale: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::Z,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: DEFAULT_VIEW_ANGLE,
            parallel: false,
            parallel_scale: 1.0,
        }
    }
}

impl Camera {
    /// Unit vector from the eye toward the target, or zero when the two
    /// coincide.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// Distance from the eye to the target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// Build the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}
