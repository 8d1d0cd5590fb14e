// src/sink.rs

use crate::error::FigureError;
use crate::geometry::{CanvasDimensions, Circle, LineSegment};
use crate::tessellation::{tessellate_circle, DEFAULT_CIRCLE_SEGMENTS};

/// Receives primitives and turns them into drawn output.
///
/// `set_canvas` is called once, before any draw call. Circles arrive as
/// descriptors; tessellating them is the sink's business.
pub trait RenderSink {
    fn set_canvas(&mut self, canvas: CanvasDimensions);
    fn draw_circle(&mut self, circle: &Circle);
    fn draw_lines(&mut self, segments: &[LineSegment]);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetCanvas(CanvasDimensions),
    Circle(Circle),
    Lines(Vec<LineSegment>),
}

/// Records every call in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    commands: Vec<DrawCommand>,
    canvas: Option<CanvasDimensions>,
    drew_before_canvas: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn canvas(&self) -> Option<CanvasDimensions> {
        self.canvas
    }

    /// Returns the recorded commands, or an error if anything was drawn before
    /// the canvas was set.
    pub fn finish(self) -> Result<Vec<DrawCommand>, FigureError> {
        if self.drew_before_canvas {
            return Err(FigureError::CanvasNotConfigured);
        }
        Ok(self.commands)
    }

    fn note_draw(&mut self) {
        if self.canvas.is_none() {
            self.drew_before_canvas = true;
        }
    }
}

impl RenderSink for RecordingSink {
    fn set_canvas(&mut self, canvas: CanvasDimensions) {
        if self.canvas.is_some() {
            log::warn!("canvas set more than once; keeping the latest dimensions");
        }
        self.canvas = Some(canvas);
        self.commands.push(DrawCommand::SetCanvas(canvas));
    }

    fn draw_circle(&mut self, circle: &Circle) {
        self.note_draw();
        self.commands.push(DrawCommand::Circle(*circle));
    }

    fn draw_lines(&mut self, segments: &[LineSegment]) {
        self.note_draw();
        self.commands.push(DrawCommand::Lines(segments.to_vec()));
    }
}

/// Flattens everything into one list of segments in draw order, tessellating
/// circles on the way in.
#[derive(Debug)]
pub struct LineListSink {
    canvas: Option<CanvasDimensions>,
    circle_segments: usize,
    segments: Vec<LineSegment>,
}

impl Default for LineListSink {
    fn default() -> Self {
        Self::new(DEFAULT_CIRCLE_SEGMENTS)
    }
}

impl LineListSink {
    pub fn new(circle_segments: usize) -> Self {
        Self {
            canvas: None,
            circle_segments,
            segments: Vec::new(),
        }
    }

    pub fn canvas(&self) -> Option<CanvasDimensions> {
        self.canvas
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<LineSegment> {
        self.segments
    }
}

impl RenderSink for LineListSink {
    fn set_canvas(&mut self, canvas: CanvasDimensions) {
        self.canvas = Some(canvas);
    }

    fn draw_circle(&mut self, circle: &Circle) {
        self.segments.extend(tessellate_circle(circle, self.circle_segments));
    }

    fn draw_lines(&mut self, segments: &[LineSegment]) {
        self.segments.extend_from_slice(segments);
    }
}
