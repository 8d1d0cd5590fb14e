// src/rendering_lib/shader.rs

pub const WGSL_SHADER_SOURCE: &str = r#"
struct CanvasDimensions {
    width: f32,
    height: f32,
}

@group(0) @binding(0)
var<uniform> canvas: CanvasDimensions;

struct VertexInput {
    @location(0) position: vec2<f32>, // canvas space, origin bottom-left
    @location(1) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
}

@vertex
fn vs_main(model: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.color = model.color;

    // Canvas y already points up, same as NDC, so both axes map [0, size] -> [-1, 1].
    let normalized_x = (model.position.x / (canvas.width / 2.0)) - 1.0;
    let normalized_y = (model.position.y / (canvas.height / 2.0)) - 1.0;

    out.clip_position = vec4<f32>(normalized_x, normalized_y, 0.0, 1.0);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;
