// src/geometry.rs

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// A point in canvas space. The y axis grows upward.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2) -> f32 {
        Vec2::from(*self).distance(Vec2::from(*other))
    }

    /// Bitwise equality, so `-0.0` and `0.0` differ and `NaN` matches itself.
    pub fn bit_eq(&self, other: &Point2) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl From<Point2> for Vec2 {
    fn from(p: Point2) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vec2> for Point2 {
    fn from(v: Vec2) -> Self {
        Point2::new(v.x, v.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
}

impl LineSegment {
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(&self.end)
    }

    pub fn bit_eq(&self, other: &LineSegment) -> bool {
        self.start.bit_eq(&other.start) && self.end.bit_eq(&other.end)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Point2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Topmost point of the circle (largest y).
    pub fn top(&self) -> Point2 {
        Point2::new(self.center.x, self.center.y + self.radius)
    }

    /// Bottommost point of the circle (smallest y).
    pub fn bottom(&self) -> Point2 {
        Point2::new(self.center.x, self.center.y - self.radius)
    }

    /// Strict containment; points on the boundary are not inside.
    pub fn contains_strictly(&self, point: &Point2) -> bool {
        self.center.distance(point) < self.radius
    }

    pub fn bit_eq(&self, other: &Circle) -> bool {
        self.center.bit_eq(&other.center) && self.radius.to_bits() == other.radius.to_bits()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasDimensions {
    pub width: f32,
    pub height: f32,
}

impl CanvasDimensions {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}
