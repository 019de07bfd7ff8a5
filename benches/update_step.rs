use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stepwise_mandelbrot::{
    Argb8888, ExecutionMode, Explorer, ExplorerConfig, GridSize, IterationEngine, MemorySurface,
    Region,
};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn create_engine(mode: ExecutionMode) -> IterationEngine {
    let grid = GridSize::new(WIDTH, HEIGHT).expect("bench grid is valid");
    let region = Region::new(-1.5, 0.5, -0.75, 0.75).expect("bench region is valid");
    IterationEngine::new(grid, region).with_execution_mode(mode)
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");

    for mode in [ExecutionMode::Serial, ExecutionMode::Parallel] {
        group.bench_with_input(BenchmarkId::new("first_100_steps", format!("{:?}", mode)), &mode, |b, &mode| {
            b.iter_batched(
                || create_engine(mode),
                |mut engine| {
                    for _ in 0..100 {
                        black_box(engine.update());
                    }
                    engine
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("explorer_tick_640x480", |b| {
        b.iter_batched(
            || {
                let explorer = Explorer::new(ExplorerConfig::default(), WIDTH, HEIGHT, Argb8888)
                    .expect("bench explorer is valid");
                let surface =
                    MemorySurface::new(GridSize::new(WIDTH, HEIGHT).expect("bench grid is valid"));
                (explorer, surface)
            },
            |(mut explorer, mut surface)| {
                for _ in 0..20 {
                    black_box(explorer.tick(&mut surface));
                }
                (explorer, surface)
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_update, bench_tick);
criterion_main!(benches);
