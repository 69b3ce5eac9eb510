//! Circle layout and curved arrow math for the board.
//!
//! Pure functions over a [`Viewport`]; renderers only translate the returned
//! points into their own coordinate types.

use std::f32::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

/// Fraction of the viewport's shorter side used as the layout radius.
pub const RADIUS_FACTOR: f32 = 0.35;
/// Outward bow of an arrow, relative to its chord length.
pub const BOW_FACTOR: f32 = 0.15;
/// Midpoints closer than this to the center use the fixed fallback offset.
pub const MIN_CENTER_DISTANCE: f32 = 10.0;
pub const FALLBACK_OFFSET: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    pub const fn with_origin(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn radius(&self) -> f32 {
        self.width.min(self.height) * RADIUS_FACTOR
    }
}

/// Position of seat `index` out of `total`: seat 0 at the top, then clockwise on screen.
pub fn node_position(index: usize, total: usize, viewport: &Viewport) -> Point {
    let angle = (index as f32 * TAU) / total.max(1) as f32 - FRAC_PI_2;
    let center = viewport.center();
    let radius = viewport.radius();
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

pub fn node_positions(total: usize, viewport: &Viewport) -> Vec<Point> {
    (0..total)
        .map(|index| node_position(index, total, viewport))
        .collect()
}

/// Index of the node whose disc of `node_radius` contains `point`, nearest first.
pub fn hit_test(point: Point, total: usize, viewport: &Viewport, node_radius: f32) -> Option<usize> {
    node_positions(total, viewport)
        .into_iter()
        .enumerate()
        .map(|(index, center)| (index, center.distance(point)))
        .filter(|(_, distance)| *distance <= node_radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

/// Quadratic bezier from one seat to another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArrowPath {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl ArrowPath {
    /// Where the outcome label is drawn.
    pub fn label_anchor(&self) -> Point {
        self.control
    }

    pub fn svg_path(&self) -> String {
        format!(
            "M {} {} Q {} {} {} {}",
            self.start.x, self.start.y, self.control.x, self.control.y, self.end.x, self.end.y
        )
    }

    pub fn point_at(&self, t: f32) -> Point {
        let a = self.start.lerp(self.control, t);
        let b = self.control.lerp(self.end, t);
        a.lerp(b, t)
    }

    /// Unit direction of travel at `t`, falling back to the chord for zero-length tangents.
    pub fn direction_at(&self, t: f32) -> Point {
        let dx = 2.0 * (1.0 - t) * (self.control.x - self.start.x)
            + 2.0 * t * (self.end.x - self.control.x);
        let dy = 2.0 * (1.0 - t) * (self.control.y - self.start.y)
            + 2.0 * t * (self.end.y - self.control.y);
        let len = dx.hypot(dy);
        if len > f32::EPSILON {
            return Point::new(dx / len, dy / len);
        }
        let chord = self.start.distance(self.end);
        if chord > f32::EPSILON {
            Point::new(
                (self.end.x - self.start.x) / chord,
                (self.end.y - self.start.y) / chord,
            )
        } else {
            Point::new(0.0, -1.0)
        }
    }

    /// Triangle `[tip, left, right]` pointing along the curve, tip pulled back `inset` from the end.
    pub fn arrowhead(&self, inset: f32, length: f32, half_width: f32) -> [Point; 3] {
        let dir = self.direction_at(1.0);
        let tip = Point::new(self.end.x - dir.x * inset, self.end.y - dir.y * inset);
        let base = Point::new(tip.x - dir.x * length, tip.y - dir.y * length);
        let normal = Point::new(-dir.y, dir.x);
        [
            tip,
            Point::new(base.x + normal.x * half_width, base.y + normal.y * half_width),
            Point::new(base.x - normal.x * half_width, base.y - normal.y * half_width),
        ]
    }
}

pub fn arrow_between(start: Point, end: Point, center: Point) -> ArrowPath {
    let mid = start.lerp(end, 0.5);
    let dx = mid.x - center.x;
    let dy = mid.y - center.y;
    let len = dx.hypot(dy);

    let control = if len > MIN_CENTER_DISTANCE {
        let offset = start.distance(end) * BOW_FACTOR;
        Point::new(mid.x + dx / len * offset, mid.y + dy / len * offset)
    } else {
        Point::new(mid.x, mid.y - FALLBACK_OFFSET)
    };

    ArrowPath {
        start,
        control,
        end,
    }
}

pub fn arrow_for_seats(from: usize, to: usize, total: usize, viewport: &Viewport) -> ArrowPath {
    arrow_between(
        node_position(from, total, viewport),
        node_position(to, total, viewport),
        viewport.center(),
    )
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
