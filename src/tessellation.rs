// src/tessellation.rs

use glam::Vec2;
use crate::geometry::{Circle, LineSegment, Point2};

pub const DEFAULT_CIRCLE_SEGMENTS: usize = 64;
pub const MIN_CIRCLE_SEGMENTS: usize = 3;

/// Approximates `circle` by a closed loop of `segments` straight edges.
///
/// Vertices sit at angles `2πi/n`, starting on the positive x axis and winding
/// counter-clockwise. The last edge ends where the first one starts.
pub fn tessellate_circle(circle: &Circle, segments: usize) -> Vec<LineSegment> {
    let count = segments.max(MIN_CIRCLE_SEGMENTS);
    let points = circle_vertices(circle, count);

    let mut edges = Vec::with_capacity(count);
    for i in 0..count {
        let j = (i + 1) % count;
        edges.push(LineSegment::new(points[i], points[j]));
    }
    edges
}

fn circle_vertices(circle: &Circle, count: usize) -> Vec<Point2> {
    let center = Vec2::from(circle.center);
    let spoke = Vec2::new(circle.radius, 0.0);

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let angle_rad = (i as f32) * std::f32::consts::TAU / (count as f32);
        points.push(Point2::from(center + Vec2::from_angle(angle_rad).rotate(spoke)));
    }
    points
}
