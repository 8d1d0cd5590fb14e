// src/rendering_lib/vertex.rs

use bytemuck::{Pod, Zeroable};
use stick_figure::{LineSegment, Point2};

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct Vertex {
    pub position: Point2, // canvas space, y up
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: Point2, color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// Two vertices per segment, laid out for a `LineList` draw.
    pub fn from_segments(segments: &[LineSegment], color: [f32; 4]) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(segments.len() * 2);
        for segment in segments {
            vertices.push(Vertex::new(segment.start, color));
            vertices.push(Vertex::new(segment.end, color));
        }
        vertices
    }

    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<Point2>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_expand_to_vertex_pairs() {
        let color = [1.0, 1.0, 1.0, 1.0];
        let segments = [
            LineSegment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)),
            LineSegment::new(Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)),
        ];
        let vertices = Vertex::from_segments(&segments, color);
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[1].position, Point2::new(1.0, 0.0));
        assert_eq!(vertices[3].position, Point2::new(1.0, 1.0));
    }

    #[test]
    fn layout_matches_struct_size() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::desc().array_stride, 24);
    }
}
