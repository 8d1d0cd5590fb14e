// src/main.rs

pub mod app;
pub mod cli;
pub mod ui;
pub mod rendering_lib;

use clap::Parser;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoopWindowTarget, EventLoop},
    window::WindowBuilder,
};
use app::{AppError, FigureApp};
use cli::{Arguments, Settings};
use stick_figure::{render_figure, DrawCommand, LineListSink, RecordingSink};

fn run_headless(settings: &Settings) -> Result<(), AppError> {
    let mut sink = RecordingSink::new();
    render_figure(&mut sink, settings.canvas, &settings.params)?;
    for (index, command) in sink.finish()?.iter().enumerate() {
        match command {
            DrawCommand::SetCanvas(canvas) => log::info!("{index}: canvas {} x {}", canvas.width, canvas.height),
            DrawCommand::Circle(circle) => log::info!("{index}: circle {:?} r={}", circle.center, circle.radius),
            DrawCommand::Lines(lines) => {
                for line in lines {
                    log::info!("{index}: line {:?} -> {:?}", line.start, line.end);
                }
            }
        }
    }
    Ok(())
}

pub async fn run(settings: Settings) -> Result<(), AppError> {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            console_log::init_with_level(log::Level::Warn).expect("Couldn't initialize logger");
        } else {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        }
    }

    if settings.headless {
        return run_headless(&settings);
    }

    let mut lines = LineListSink::new(settings.circle_segments);
    let figure = render_figure(&mut lines, settings.canvas, &settings.params)?;

    let event_loop = EventLoop::new()?;
    let window = std::sync::Arc::new(
        WindowBuilder::new()
            .with_title("Stick Figure")
            .with_inner_size(winit::dpi::LogicalSize::new(
                settings.canvas.width as f64,
                settings.canvas.height as f64,
            ))
            .build(&event_loop)?,
    );

    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowExtWebSys;
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                let dst = doc.get_element_by_id("wasm-viewport")?;
                let canvas = web_sys::Element::from(window.canvas()?);
                dst.append_child(&canvas).ok()?;
                Some(())
            })
            .expect("Couldn't append canvas to document body.");
    }

    let mut app_state = FigureApp::new(window.clone(), figure, lines).await?;

    event_loop.run(move |event, target: &EventLoopWindowTarget<()>| {
        target.set_control_flow(ControlFlow::Wait);

        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                if !app_state.handle_window_event(event, &window) {
                    match event {
                        WindowEvent::CloseRequested => {
                            target.exit();
                        }
                        WindowEvent::Resized(physical_size) => {
                            app_state.resize(*physical_size);
                            window.request_redraw();
                        }
                        WindowEvent::RedrawRequested => {
                            match app_state.render(&window) {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                    log::warn!("surface lost, reconfiguring");
                                    app_state.resize(app_state.get_size());
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    log::error!("WGPU Out Of Memory! Exiting.");
                                    target.exit();
                                }
                                Err(e) => log::warn!("Surface error: {:?}", e),
                            }
                        }
                        _ => {}
                    }
                } else {
                    window.request_redraw();
                }
            }
            Event::LoopExiting => {
                log::info!("closing preview");
            }
            _ => {}
        }
    })?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let settings = Settings::from(Arguments::parse());
    if let Err(e) = run(settings).await {
        log::error!("{e}");
        std::process::exit(1);
    }
}
