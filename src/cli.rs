// src/cli.rs

use stick_figure::{figure, tessellation::DEFAULT_CIRCLE_SEGMENTS, CanvasDimensions, FigureParams};

#[derive(clap::Parser, Debug)]
#[command(name = "stick_figure", version, about = "Draws a stick figure", long_about = None)]
pub struct Arguments {
    /// Canvas width
    #[arg(long, default_value_t = 500.0)]
    width: f32,

    /// Canvas height
    #[arg(long, default_value_t = 500.0)]
    height: f32,

    #[arg(long, default_value_t = figure::HEAD_RADIUS)]
    head_radius: f32,

    #[arg(long, default_value_t = figure::TORSO_RADIUS)]
    torso_radius: f32,

    /// Length of each arm, measured from the head center
    #[arg(long, default_value_t = figure::ARM_LENGTH)]
    arm_length: f32,

    /// Number of straight edges used to draw each circle
    #[arg(long, default_value_t = DEFAULT_CIRCLE_SEGMENTS)]
    segments: usize,

    /// Log the draw commands and exit instead of opening a window
    #[clap(
        long,
        action = clap::ArgAction::SetTrue,
    )]
    headless: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub canvas: CanvasDimensions,
    pub params: FigureParams,
    pub circle_segments: usize,
    pub headless: bool,
}

impl From<Arguments> for Settings {
    fn from(args: Arguments) -> Self {
        Self {
            canvas: CanvasDimensions::new(args.width, args.height),
            params: FigureParams {
                head_radius: args.head_radius,
                torso_radius: args.torso_radius,
                arm_length: args.arm_length,
                ..FigureParams::default()
            },
            circle_segments: args.segments,
            headless: args.headless,
        }
    }
}
