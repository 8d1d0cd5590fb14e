// src/ui.rs
use egui;
use stick_figure::{Primitive, StickFigure};

pub fn build_ui(ctx: &egui::Context, figure: &StickFigure, segment_count: usize) {
    egui::Window::new("Figure")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .default_open(false)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(format!("Canvas: {} x {}", figure.canvas.width, figure.canvas.height));
                ui.separator();

                for (index, primitive) in figure.primitives().enumerate() {
                    match primitive {
                        Primitive::Circle(c) => {
                            ui.label(format!(
                                "{index}: circle at ({}, {}) r={}",
                                c.center.x, c.center.y, c.radius
                            ));
                        }
                        Primitive::Lines(lines) => {
                            for l in lines {
                                ui.label(format!(
                                    "{index}: line ({}, {}) -> ({}, {})",
                                    l.start.x, l.start.y, l.end.x, l.end.y
                                ));
                            }
                        }
                    }
                }

                ui.separator();
                ui.label(format!("{segment_count} segments on the GPU"));
            });
        });
}
