//! Pitch-space geometry: points, pure primitives, and the aspect-ratio-aware
//! mapping between container pixels and logical pitch coordinates.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Container rectangle in client pixels (a plain `DomRect` stand-in so the
/// mapping stays testable off-wasm).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// Axis-aligned rectangle derived from two corner points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Angle of the a→b vector in degrees. atan2 makes the zero vector 0°.
pub fn angle_degrees(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

pub fn bounding_box(a: Point, b: Point) -> Rect {
    Rect {
        left: a.x.min(b.x),
        top: a.y.min(b.y),
        width: (b.x - a.x).abs(),
        height: (b.y - a.y).abs(),
    }
}

/// Logical coordinate system for the pitch plus the on-screen aspect ratio it
/// is rendered at. Two variants exist in practice: the percentage space
/// (0–100 on both axes, drawn into a 16:9 box) and the SVG viewBox space
/// (0–100 × 0–56.25, aspect implied by its own extent).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PitchSpace {
    pub width: f64,
    pub height: f64,
    /// Target on-screen aspect ratio (width / height) used for letterboxing.
    pub aspect: f64,
}

impl PitchSpace {
    pub const PERCENT: PitchSpace = PitchSpace {
        width: 100.0,
        height: 100.0,
        aspect: 16.0 / 9.0,
    };

    pub const VIEWBOX: PitchSpace = PitchSpace {
        width: 100.0,
        height: 56.25,
        aspect: 100.0 / 56.25,
    };

    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    /// The letterboxed sub-rectangle of `bounds` the pitch content occupies,
    /// matching object-fit:contain semantics.
    pub fn content_rect(&self, bounds: Bounds) -> Rect {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Rect::default();
        }
        let container_aspect = bounds.width / bounds.height;
        if container_aspect > self.aspect {
            // Container is relatively wider: pillarbox left/right.
            let effective_width = bounds.height * self.aspect;
            Rect {
                left: bounds.left + (bounds.width - effective_width) / 2.0,
                top: bounds.top,
                width: effective_width,
                height: bounds.height,
            }
        } else {
            // Container is relatively taller: letterbox top/bottom.
            let effective_height = bounds.width / self.aspect;
            Rect {
                left: bounds.left,
                top: bounds.top + (bounds.height - effective_height) / 2.0,
                width: bounds.width,
                height: effective_height,
            }
        }
    }

    /// Map raw client coordinates into pitch space, clamped to the logical
    /// bounds. Unmeasurable containers degrade to the origin.
    pub fn from_client(&self, bounds: Bounds, client_x: f64, client_y: f64) -> Point {
        let content = self.content_rect(bounds);
        if content.width <= 0.0 || content.height <= 0.0 {
            return Point::ORIGIN;
        }
        let u = (client_x - content.left) / content.width;
        let v = (client_y - content.top) / content.height;
        self.clamp(Point::new(u * self.width, v * self.height))
    }

    /// Inverse of `from_client` for rendering: pitch point → client pixels.
    pub fn to_client(&self, bounds: Bounds, p: Point) -> (f64, f64) {
        let content = self.content_rect(bounds);
        (
            content.left + p.x / self.width * content.width,
            content.top + p.y / self.height * content.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_properties() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(40.0, 60.0);
        let c = Point::new(80.0, 5.0);
        assert_eq!(distance(a, a), 0.0);
        assert_eq!(distance(a, b), distance(b, a));
        assert_eq!(distance(a, b), 50.0);
        // Triangle inequality.
        assert!(distance(a, c) <= distance(a, b) + distance(b, c) + 1e-12);
    }

    #[test]
    fn angle_of_zero_vector_is_defined() {
        let p = Point::new(33.3, 44.4);
        assert_eq!(angle_degrees(p, p), 0.0);
        assert_eq!(angle_degrees(Point::ORIGIN, Point::new(10.0, 0.0)), 0.0);
        assert_eq!(angle_degrees(Point::ORIGIN, Point::new(0.0, 10.0)), 90.0);
    }

    #[test]
    fn midpoint_and_bbox() {
        let a = Point::new(10.0, 80.0);
        let b = Point::new(30.0, 20.0);
        assert_eq!(midpoint(a, b), Point::new(20.0, 50.0));
        let r = bounding_box(a, b);
        assert_eq!(r.left, 10.0);
        assert_eq!(r.top, 20.0);
        assert_eq!(r.width, 20.0);
        assert_eq!(r.height, 60.0);
        // Order-independent.
        assert_eq!(bounding_box(b, a), r);
    }

    #[test]
    fn wide_container_is_pillarboxed() {
        // 2:1 container, 16:9 content: 112.5px content width centered in 200.
        let bounds = Bounds::new(0.0, 0.0, 200.0, 100.0);
        let space = PitchSpace::PERCENT;
        let content = space.content_rect(bounds);
        assert!((content.width - 1600.0 / 9.0).abs() < 1e-9);
        assert!((content.left - (200.0 - 1600.0 / 9.0) / 2.0).abs() < 1e-9);
        // Content center maps to the logical center.
        let p = space.from_client(bounds, 100.0, 50.0);
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!((p.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn tall_container_is_letterboxed() {
        let bounds = Bounds::new(0.0, 0.0, 160.0, 400.0);
        let space = PitchSpace::VIEWBOX;
        let content = space.content_rect(bounds);
        assert_eq!(content.width, 160.0);
        assert!((content.height - 90.0).abs() < 1e-9);
        assert!((content.top - 155.0).abs() < 1e-9);
        let p = space.from_client(bounds, 80.0, 200.0);
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!((p.y - 56.25 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn output_is_clamped_to_logical_bounds() {
        let bounds = Bounds::new(10.0, 10.0, 320.0, 180.0);
        let space = PitchSpace::PERCENT;
        for (cx, cy) in [(-500.0, -500.0), (5000.0, 5000.0), (0.0, 9999.0)] {
            let p = space.from_client(bounds, cx, cy);
            assert!(p.x >= 0.0 && p.x <= space.width);
            assert!(p.y >= 0.0 && p.y <= space.height);
        }
    }

    #[test]
    fn degenerate_bounds_degrade_to_origin() {
        let space = PitchSpace::PERCENT;
        assert_eq!(space.from_client(Bounds::default(), 50.0, 50.0), Point::ORIGIN);
        let flat = Bounds::new(0.0, 0.0, 100.0, 0.0);
        assert_eq!(space.from_client(flat, 50.0, 50.0), Point::ORIGIN);
    }

    #[test]
    fn client_round_trip_inside_content() {
        let bounds = Bounds::new(5.0, 7.0, 640.0, 360.0);
        let space = PitchSpace::PERCENT;
        let p = Point::new(37.5, 81.25);
        let (cx, cy) = space.to_client(bounds, p);
        let back = space.from_client(bounds, cx, cy);
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn small_input_deltas_stay_small() {
        let bounds = Bounds::new(0.0, 0.0, 800.0, 450.0);
        let space = PitchSpace::PERCENT;
        let a = space.from_client(bounds, 400.0, 225.0);
        let b = space.from_client(bounds, 401.0, 226.0);
        assert!(distance(a, b) < 1.0);
    }
}
