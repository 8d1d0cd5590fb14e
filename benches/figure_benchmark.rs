// benches/figure_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stick_figure::tessellation::{tessellate_circle, DEFAULT_CIRCLE_SEGMENTS};
use stick_figure::{render_figure, CanvasDimensions, FigureParams, LineListSink, StickFigure};
use rand::Rng;

fn random_canvas(rng: &mut impl Rng) -> CanvasDimensions {
    CanvasDimensions::new(rng.gen_range(100.0..2000.0), rng.gen_range(100.0..2000.0))
}

fn figure_benchmark_fn(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    const NUM_BENCH_CANVASES: usize = 100;
    let canvases: Vec<CanvasDimensions> = (0..NUM_BENCH_CANVASES).map(|_| random_canvas(&mut rng)).collect();
    let params = FigureParams::default();

    let mut group = c.benchmark_group("FigureOperations");

    group.bench_function("compute_100_canvases", |b| {
        let mut canvas_iter = canvases.iter().cycle();
        b.iter(|| {
            let canvas = canvas_iter.next().unwrap();
            StickFigure::compute(black_box(*canvas), black_box(&params))
        })
    });

    group.bench_function("render_into_line_list", |b| {
        let mut canvas_iter = canvases.iter().cycle();
        b.iter(|| {
            let canvas = canvas_iter.next().unwrap();
            let mut sink = LineListSink::new(DEFAULT_CIRCLE_SEGMENTS);
            render_figure(&mut sink, black_box(*canvas), &params).unwrap();
            sink.into_segments()
        })
    });

    group.bench_function("tessellate_head", |b| {
        let head = StickFigure::compute(canvases[0], &params).head;
        b.iter(|| tessellate_circle(black_box(&head), DEFAULT_CIRCLE_SEGMENTS))
    });
    group.finish();
}

criterion_group!(benches, figure_benchmark_fn);
criterion_main!(benches);
