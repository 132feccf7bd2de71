//! Viewport rectangles in normalized and pixel space.
//!
//! Normalized rectangles are relative to the host surface with the origin
//! at the bottom-left, so `(0, 0, 1, 1)` covers the whole surface. Pixel
//! rectangles use the same bottom-left origin; callers flip pointer
//! coordinates before hit-testing.

use glam::{DVec2, IVec2, UVec2};

/// One of the four corners of a viewport rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Minimum x, minimum y.
    BottomLeft,
    /// Maximum x, minimum y.
    BottomRight,
    /// Minimum x, maximum y.
    TopLeft,
    /// Maximum x, maximum y.
    TopRight,
}

impl Corner {
    /// All corners in hit-test priority order. When the tolerance regions
    /// of several corners overlap, the first listed corner wins.
    pub const ALL: [Self; 4] = [
        Self::BottomLeft,
        Self::BottomRight,
        Self::TopLeft,
        Self::TopRight,
    ];

    /// The diagonally opposite corner.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
        }
    }

    /// Whether this corner owns the minimum x coordinate.
    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::BottomLeft | Self::TopLeft)
    }

    /// Whether this corner owns the minimum y coordinate.
    #[must_use]
    pub const fn is_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }
}

/// Normalized overlay rectangle.
///
/// Always satisfies `0 <= min < max <= 1` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    min: DVec2,
    max: DVec2,
}

impl Default for ViewportRect {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ViewportRect {
    /// Bottom-left fifth of the host surface.
    pub const DEFAULT: Self = Self {
        min: DVec2::ZERO,
        max: DVec2::new(0.2, 0.2),
    };

    /// Build a rectangle from its four coordinates.
    ///
    /// Coordinates are clamped to `[0, 1]` and each axis is ordered, so
    /// swapped bounds are accepted. Returns `None` for non-finite input or
    /// when an axis collapses to zero extent after clamping.
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<Self> {
        let coords = [min_x, min_y, max_x, max_y];
        if coords.iter().any(|c| !c.is_finite()) {
            return None;
        }
        let a = DVec2::new(min_x, min_y).clamp(DVec2::ZERO, DVec2::ONE);
        let b = DVec2::new(max_x, max_y).clamp(DVec2::ZERO, DVec2::ONE);
        let min = a.min(b);
        let max = a.max(b);
        (min.x < max.x && min.y < max.y).then_some(Self { min, max })
    }

    /// Build a rectangle from `[min_x, min_y, max_x, max_y]`.
    #[must_use]
    pub fn from_array(coords: [f64; 4]) -> Option<Self> {
        Self::new(coords[0], coords[1], coords[2], coords[3])
    }

    /// The rectangle as `[min_x, min_y, max_x, max_y]`.
    #[must_use]
    pub fn to_array(self) -> [f64; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }

    /// Bottom-left corner.
    #[must_use]
    pub fn min(self) -> DVec2 {
        self.min
    }

    /// Top-right corner.
    #[must_use]
    pub fn max(self) -> DVec2 {
        self.max
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    /// Position of the given corner.
    #[must_use]
    pub fn corner(self, corner: Corner) -> DVec2 {
        DVec2::new(
            if corner.is_left() { self.min.x } else { self.max.x },
            if corner.is_bottom() { self.min.y } else { self.max.y },
        )
    }

    /// Map to host pixels for a surface of the given size.
    #[must_use]
    pub fn to_pixels(self, size: UVec2) -> PixelRect {
        let size = size.as_dvec2();
        PixelRect {
            min: (self.min * size).round().as_ivec2(),
            max: (self.max * size).round().as_ivec2(),
        }
    }

    /// Shift all four coordinates by the same amount.
    ///
    /// The shift is clamped per axis so the rectangle stays inside the
    /// unit square with its size unchanged.
    #[must_use]
    pub fn translated(self, delta: DVec2) -> Self {
        let delta = delta.clamp(-self.min, DVec2::ONE - self.max);
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Move the two coordinates owned by `corner`, leaving the opposite
    /// corner fixed.
    ///
    /// The moved coordinates are clamped to `[0, 1]`. An axis whose new
    /// value would reach or cross the opposite corner keeps its previous
    /// value.
    #[must_use]
    pub fn with_corner_moved(self, corner: Corner, delta: DVec2) -> Self {
        let target =
            (self.corner(corner) + delta).clamp(DVec2::ZERO, DVec2::ONE);
        let mut rect = self;
        if corner.is_left() {
            if target.x < self.max.x {
                rect.min.x = target.x;
            }
        } else if target.x > self.min.x {
            rect.max.x = target.x;
        }
        if corner.is_bottom() {
            if target.y < self.max.y {
                rect.min.y = target.y;
            }
        } else if target.y > self.min.y {
            rect.max.y = target.y;
        }
        rect
    }
}

/// Integer pixel rectangle with a bottom-left origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelRect {
    /// Bottom-left pixel.
    pub min: IVec2,
    /// Top-right pixel.
    pub max: IVec2,
}

impl PixelRect {
    /// Position of the given corner.
    #[must_use]
    pub fn corner(self, corner: Corner) -> IVec2 {
        IVec2::new(
            if corner.is_left() { self.min.x } else { self.max.x },
            if corner.is_bottom() { self.min.y } else { self.max.y },
        )
    }

    /// Grow the rectangle by `amount` pixels on every side.
    #[must_use]
    pub fn expanded(self, amount: i32) -> Self {
        Self {
            min: self.min - IVec2::splat(amount),
            max: self.max + IVec2::splat(amount),
        }
    }
}

/// Whether `point` lies inside `rect`, edges included.
#[must_use]
pub fn point_in_rect(point: IVec2, rect: &PixelRect) -> bool {
    point.cmpge(rect.min).all() && point.cmple(rect.max).all()
}

/// The first corner (in [`Corner::ALL`] order) lying within `tolerance`
/// pixels of `point` on both axes.
#[must_use]
pub fn near_corner(
    point: IVec2,
    rect: &PixelRect,
    tolerance: i32,
) -> Option<Corner> {
    Corner::ALL.into_iter().find(|&corner| {
        let distance = (point - rect.corner(corner)).abs();
        distance.max_element() <= tolerance
    })
}

/// Force equal width and height, keeping `anchor` fixed.
///
/// Both edges leaving the anchor corner are shortened to the smaller of
/// the two extents, so the result always fits inside `rect`.
#[must_use]
pub fn enforce_square(rect: ViewportRect, anchor: Corner) -> ViewportRect {
    let side = rect.width().min(rect.height());
    let fixed = rect.corner(anchor);
    let far = DVec2::new(
        if anchor.is_left() {
            fixed.x + side
        } else {
            fixed.x - side
        },
        if anchor.is_bottom() {
            fixed.y + side
        } else {
            fixed.y - side
        },
    );
    ViewportRect {
        min: fixed.min(far),
        max: fixed.max(far),
    }
}

/// Convert a pixel delta into normalized surface units.
///
/// A surface with a zero dimension yields a zero delta.
#[must_use]
pub fn pixel_delta_to_normalized(delta: IVec2, size: UVec2) -> DVec2 {
    if size.x == 0 || size.y == 0 {
        return DVec2::ZERO;
    }
    delta.as_dvec2() / size.as_dvec2()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> ViewportRect {
        ViewportRect::new(min_x, min_y, max_x, max_y).unwrap()
    }

    #[test]
    fn new_clamps_and_orders() {
        let r = rect(0.6, -0.5, 0.1, 1.5);
        assert_eq!(r.to_array(), [0.1, 0.0, 0.6, 1.0]);
    }

    #[test]
    fn new_rejects_degenerate() {
        assert!(ViewportRect::new(0.3, 0.0, 0.3, 0.5).is_none());
        assert!(ViewportRect::new(1.2, 0.0, 1.5, 0.5).is_none());
        assert!(ViewportRect::new(f64::NAN, 0.0, 0.5, 0.5).is_none());
    }

    #[test]
    fn default_is_bottom_left() {
        assert_eq!(ViewportRect::default().to_array(), [0.0, 0.0, 0.2, 0.2]);
    }

    #[test]
    fn opposite_corners_pair_up() {
        for corner in Corner::ALL {
            assert_ne!(corner, corner.opposite());
            assert_eq!(corner, corner.opposite().opposite());
            assert_ne!(corner.is_left(), corner.opposite().is_left());
            assert_ne!(corner.is_bottom(), corner.opposite().is_bottom());
        }
    }

    #[test]
    fn to_pixels_rounds() {
        let px = rect(0.0, 0.0, 0.2, 0.2).to_pixels(UVec2::new(500, 500));
        assert_eq!(px.min, IVec2::ZERO);
        assert_eq!(px.max, IVec2::new(100, 100));
    }

    #[test]
    fn point_in_rect_includes_edges() {
        let px = PixelRect {
            min: IVec2::new(10, 10),
            max: IVec2::new(50, 40),
        };
        assert!(point_in_rect(IVec2::new(10, 10), &px));
        assert!(point_in_rect(IVec2::new(50, 40), &px));
        assert!(point_in_rect(IVec2::new(30, 20), &px));
        assert!(!point_in_rect(IVec2::new(9, 20), &px));
        assert!(!point_in_rect(IVec2::new(30, 41), &px));
    }

    #[test]
    fn near_corner_uses_per_axis_distance() {
        let px = PixelRect {
            min: IVec2::ZERO,
            max: IVec2::new(100, 100),
        };
        assert_eq!(
            near_corner(IVec2::new(3, -4), &px, 5),
            Some(Corner::BottomLeft)
        );
        assert_eq!(
            near_corner(IVec2::new(95, 5), &px, 5),
            Some(Corner::BottomRight)
        );
        assert_eq!(
            near_corner(IVec2::new(2, 99), &px, 5),
            Some(Corner::TopLeft)
        );
        assert_eq!(
            near_corner(IVec2::new(104, 104), &px, 5),
            Some(Corner::TopRight)
        );
        assert_eq!(near_corner(IVec2::new(6, 0), &px, 5), None);
    }

    #[test]
    fn near_corner_prefers_fixed_order_on_overlap() {
        // 4x4 rectangle: every corner's tolerance square covers the center.
        let px = PixelRect {
            min: IVec2::ZERO,
            max: IVec2::new(4, 4),
        };
        assert_eq!(
            near_corner(IVec2::new(2, 2), &px, 5),
            Some(Corner::BottomLeft)
        );
        assert_eq!(
            near_corner(IVec2::new(8, 2), &px, 5),
            Some(Corner::BottomRight)
        );
        assert_eq!(
            near_corner(IVec2::new(-1, 8), &px, 5),
            Some(Corner::TopLeft)
        );
    }

    #[test]
    fn translated_shifts_all_coordinates() {
        let r = rect(0.1, 0.1, 0.3, 0.4).translated(DVec2::new(0.2, -0.05));
        assert!((r.min().x - 0.3).abs() < EPS);
        assert!((r.min().y - 0.05).abs() < EPS);
        assert!((r.max().x - 0.5).abs() < EPS);
        assert!((r.max().y - 0.35).abs() < EPS);
    }

    #[test]
    fn translated_clamps_and_keeps_size() {
        let r = rect(0.1, 0.7, 0.3, 0.9).translated(DVec2::new(-0.5, 0.5));
        assert_eq!(r.min().x, 0.0);
        assert!((r.max().y - 1.0).abs() < EPS);
        assert!((r.width() - 0.2).abs() < EPS);
        assert!((r.height() - 0.2).abs() < EPS);
    }

    #[test]
    fn corner_move_keeps_opposite_fixed() {
        let r = rect(0.2, 0.2, 0.6, 0.6);
        let moved = r.with_corner_moved(Corner::TopLeft, DVec2::new(-0.1, 0.1));
        assert_eq!(
            moved.corner(Corner::BottomRight),
            r.corner(Corner::BottomRight)
        );
        assert!((moved.min().x - 0.1).abs() < EPS);
        assert!((moved.max().y - 0.7).abs() < EPS);
    }

    #[test]
    fn corner_move_refuses_crossing_per_axis() {
        let r = rect(0.2, 0.2, 0.6, 0.6);
        // x would cross the right edge, y is a legal move.
        let moved =
            r.with_corner_moved(Corner::BottomLeft, DVec2::new(0.5, 0.1));
        assert_eq!(moved.min().x, 0.2);
        assert!((moved.min().y - 0.3).abs() < EPS);
        // Landing exactly on the opposite edge is refused too.
        let touching =
            r.with_corner_moved(Corner::TopRight, DVec2::new(-0.4, 0.0));
        assert_eq!(touching, r);
    }

    #[test]
    fn corner_move_clamps_to_surface() {
        let r = rect(0.8, 0.8, 0.9, 0.9);
        let moved = r.with_corner_moved(Corner::TopRight, DVec2::new(0.5, 0.5));
        assert_eq!(moved.max(), DVec2::ONE);
    }

    #[test]
    fn enforce_square_pins_anchor() {
        let r = rect(0.1, 0.2, 0.5, 0.3);
        for anchor in Corner::ALL {
            let sq = enforce_square(r, anchor);
            assert!((sq.width() - sq.height()).abs() < EPS, "{anchor:?}");
            assert!((sq.width() - 0.1).abs() < EPS);
            assert_eq!(sq.corner(anchor), r.corner(anchor));
        }
    }

    #[test]
    fn pixel_delta_normalizes() {
        let d = pixel_delta_to_normalized(
            IVec2::new(50, -25),
            UVec2::new(500, 250),
        );
        assert_eq!(d, DVec2::new(0.1, -0.1));
        assert_eq!(
            pixel_delta_to_normalized(IVec2::new(5, 5), UVec2::new(0, 10)),
            DVec2::ZERO
        );
    }
}
