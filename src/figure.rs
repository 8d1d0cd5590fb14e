// src/figure.rs

use crate::error::FigureError;
use crate::geometry::{CanvasDimensions, Circle, LineSegment, Point2};
use crate::sink::RenderSink;

pub const HEAD_RADIUS: f32 = 20.0;
pub const TORSO_RADIUS: f32 = 40.0;
pub const HEAD_HEIGHT_RATIO: f32 = 0.75;
pub const TORSO_HEIGHT_RATIO: f32 = 0.5;
pub const ARM_LENGTH: f32 = 100.0;

/// Sizes and placement ratios for the figure. `Default` is the reference figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureParams {
    pub head_radius: f32,
    pub torso_radius: f32,
    /// Fraction of the canvas height where the head center sits.
    pub head_height_ratio: f32,
    /// Fraction of the canvas height where the torso center sits.
    pub torso_height_ratio: f32,
    pub arm_length: f32,
}

impl Default for FigureParams {
    fn default() -> Self {
        Self {
            head_radius: HEAD_RADIUS,
            torso_radius: TORSO_RADIUS,
            head_height_ratio: HEAD_HEIGHT_RATIO,
            torso_height_ratio: TORSO_HEIGHT_RATIO,
            arm_length: ARM_LENGTH,
        }
    }
}

impl FigureParams {
    pub fn validate(&self, canvas: &CanvasDimensions) -> Result<(), FigureError> {
        FigureError::check_positive("width", canvas.width)?;
        FigureError::check_positive("height", canvas.height)?;
        FigureError::check_positive("head_radius", self.head_radius)?;
        FigureError::check_positive("torso_radius", self.torso_radius)?;
        FigureError::check_positive("arm_length", self.arm_length)?;
        FigureError::check_positive("head_height_ratio", self.head_height_ratio)?;
        FigureError::check_positive("torso_height_ratio", self.torso_height_ratio)?;

        // Head must sit above the torso.
        if self.head_height_ratio <= self.torso_height_ratio {
            return Err(FigureError::HeadBelowTorso {
                head: self.head_height_ratio,
                torso: self.torso_height_ratio,
            });
        }
        Ok(())
    }
}

pub fn compute_head(canvas: &CanvasDimensions, params: &FigureParams) -> Circle {
    Circle::new(
        Point2::new(canvas.center_x(), canvas.height * params.head_height_ratio),
        params.head_radius,
    )
}

pub fn compute_torso(canvas: &CanvasDimensions, params: &FigureParams) -> Circle {
    Circle::new(
        Point2::new(canvas.center_x(), canvas.height * params.torso_height_ratio),
        params.torso_radius,
    )
}

pub fn compute_spine(head: &Circle, torso: &Circle) -> LineSegment {
    LineSegment::new(head.top(), torso.bottom())
}

/// Returns `[left, right]`. Both arms end at the head center.
pub fn compute_arms(head: &Circle, arm_length: f32) -> [LineSegment; 2] {
    let c = head.center;
    [
        LineSegment::new(Point2::new(c.x - arm_length, c.y), c),
        LineSegment::new(Point2::new(c.x + arm_length, c.y), c),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive<'a> {
    Circle(&'a Circle),
    Lines(&'a [LineSegment]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StickFigure {
    pub canvas: CanvasDimensions,
    pub head: Circle,
    pub torso: Circle,
    pub spine: LineSegment,
    pub arms: [LineSegment; 2],
}

impl StickFigure {
    /// Computes every shape. No validation happens here; degenerate input is
    /// followed literally.
    pub fn compute(canvas: CanvasDimensions, params: &FigureParams) -> Self {
        let head = compute_head(&canvas, params);
        let torso = compute_torso(&canvas, params);
        let spine = compute_spine(&head, &torso);
        let arms = compute_arms(&head, params.arm_length);

        log::debug!(
            "figure on {}x{}: head {:?} torso {:?} spine {:?}",
            canvas.width, canvas.height, head, torso, spine
        );

        Self { canvas, head, torso, spine, arms }
    }

    /// Shapes in draw order: head, torso, spine, arms.
    pub fn primitives(&self) -> impl Iterator<Item = Primitive<'_>> {
        [
            Primitive::Circle(&self.head),
            Primitive::Circle(&self.torso),
            Primitive::Lines(std::slice::from_ref(&self.spine)),
            Primitive::Lines(&self.arms),
        ]
        .into_iter()
    }

    /// Sets the canvas on `sink` and draws every primitive in order.
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.set_canvas(self.canvas);
        for primitive in self.primitives() {
            match primitive {
                Primitive::Circle(circle) => sink.draw_circle(circle),
                Primitive::Lines(segments) => sink.draw_lines(segments),
            }
        }
    }

    pub fn bit_eq(&self, other: &StickFigure) -> bool {
        self.head.bit_eq(&other.head)
            && self.torso.bit_eq(&other.torso)
            && self.spine.bit_eq(&other.spine)
            && self.arms[0].bit_eq(&other.arms[0])
            && self.arms[1].bit_eq(&other.arms[1])
    }
}

/// Validates the parameters, then computes the figure and renders it into `sink`.
/// Nothing reaches the sink when validation fails.
pub fn render_figure<S: RenderSink + ?Sized>(
    sink: &mut S,
    canvas: CanvasDimensions,
    params: &FigureParams,
) -> Result<StickFigure, FigureError> {
    params.validate(&canvas)?;
    let figure = StickFigure::compute(canvas, params);
    figure.render(sink);
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn reference_canvas() -> CanvasDimensions {
        CanvasDimensions::new(500.0, 500.0)
    }

    #[test]
    fn centers_follow_canvas_ratios() {
        let mut rng = rand::thread_rng();
        let params = FigureParams::default();
        for _ in 0..200 {
            let canvas = CanvasDimensions::new(rng.gen_range(1.0..4096.0), rng.gen_range(1.0..4096.0));
            let head = compute_head(&canvas, &params);
            let torso = compute_torso(&canvas, &params);
            assert_eq!(head.center, Point2::new(canvas.width / 2.0, 0.75 * canvas.height));
            assert_eq!(torso.center, Point2::new(canvas.width / 2.0, 0.5 * canvas.height));
            assert!(head.center.y > torso.center.y);
        }
    }

    #[test]
    fn head_is_smaller_than_torso() {
        let figure = StickFigure::compute(reference_canvas(), &FigureParams::default());
        assert_eq!(figure.head.radius, 20.0);
        assert_eq!(figure.torso.radius, 40.0);
        assert!(figure.head.radius < figure.torso.radius);
    }

    #[test]
    fn spine_joins_head_and_torso_edges() {
        let canvas = CanvasDimensions::new(320.0, 640.0);
        let params = FigureParams::default();
        let head = compute_head(&canvas, &params);
        let torso = compute_torso(&canvas, &params);
        let spine = compute_spine(&head, &torso);

        assert_eq!(spine.start.y, head.center.y + head.radius);
        assert_eq!(spine.end.y, torso.center.y - torso.radius);
        assert_eq!(spine.start.x, 160.0);
        assert_eq!(spine.end.x, 160.0);
        assert!(!head.contains_strictly(&spine.start));
        assert!(!torso.contains_strictly(&spine.end));
    }

    #[test]
    fn arms_are_symmetric_about_head() {
        let head = Circle::new(Point2::new(37.5, 80.0), 5.0);
        let [left, right] = compute_arms(&head, 12.0);

        assert_eq!(left.end, head.center);
        assert_eq!(right.end, head.center);
        assert_eq!(left.start.x + right.start.x, 2.0 * head.center.x);
        assert_eq!(left.start.y, head.center.y);
        assert_eq!(right.start.y, head.center.y);
        assert!(left.start.x < right.start.x);
    }

    #[test]
    fn validate_rejects_non_positive_values() {
        let params = FigureParams::default();
        assert!(params.validate(&reference_canvas()).is_ok());

        let err = params.validate(&CanvasDimensions::new(0.0, 500.0)).unwrap_err();
        assert_eq!(err, FigureError::InvalidParameter { name: "width", value: 0.0 });

        let bad = FigureParams { arm_length: -3.0, ..params };
        let err = bad.validate(&reference_canvas()).unwrap_err();
        assert_eq!(err, FigureError::InvalidParameter { name: "arm_length", value: -3.0 });
    }

    #[test]
    fn validate_rejects_head_below_torso() {
        let params = FigureParams { head_height_ratio: 0.25, ..FigureParams::default() };
        let err = params.validate(&reference_canvas()).unwrap_err();
        assert_eq!(err, FigureError::HeadBelowTorso { head: 0.25, torso: 0.5 });
        assert_eq!(err.to_string(), "head_height_ratio 0.25 must exceed torso_height_ratio 0.5");

        let level = FigureParams { head_height_ratio: 0.5, ..FigureParams::default() };
        assert!(matches!(
            level.validate(&reference_canvas()),
            Err(FigureError::HeadBelowTorso { .. })
        ));
    }

    #[test]
    fn primitives_come_in_draw_order() {
        let figure = StickFigure::compute(reference_canvas(), &FigureParams::default());
        let primitives: Vec<_> = figure.primitives().collect();
        assert_eq!(primitives.len(), 4);
        assert_eq!(primitives[0], Primitive::Circle(&figure.head));
        assert_eq!(primitives[1], Primitive::Circle(&figure.torso));
        assert_eq!(primitives[2], Primitive::Lines(&[figure.spine]));
        assert_eq!(primitives[3], Primitive::Lines(&figure.arms));
    }
}
