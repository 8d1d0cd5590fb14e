// src/lib.rs

pub mod error;
pub mod figure;
pub mod geometry;
pub mod sink;
pub mod tessellation;

pub use error::FigureError;
pub use figure::{render_figure, FigureParams, Primitive, StickFigure};
pub use geometry::{CanvasDimensions, Circle, LineSegment, Point2};
pub use sink::{DrawCommand, LineListSink, RecordingSink, RenderSink};
