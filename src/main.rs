use std::time::Instant;

use log::{info, warn};
use stepwise_mandelbrot::{
    Explorer, ExplorerConfig, GridSize, MemorySurface, Point, Rgba8888, TickOutcome, Zoom,
};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn run_epoch(explorer: &mut Explorer<Rgba8888>, surface: &mut MemorySurface) {
    let start = Instant::now();
    let mut last_active = explorer.engine().active_count();

    while let TickOutcome::Stepped { active, .. } = explorer.tick(surface) {
        last_active = active;
    }

    let region = explorer.region();
    info!(
        "real [{}, {}], imag [{}, {}]: {} steps, {} of {} pixels never escaped, {:?}",
        region.r_min(),
        region.r_max(),
        region.i_min(),
        region.i_max(),
        explorer.engine().step_count(),
        last_active,
        explorer.engine().grid().pixel_count(),
        start.elapsed()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let grid = GridSize::new(WIDTH, HEIGHT)?;
    let mut surface = MemorySurface::new(grid);
    let mut explorer = Explorer::new(ExplorerConfig::default(), WIDTH, HEIGHT, Rgba8888)?;

    explorer.clear(&mut surface);
    run_epoch(&mut explorer, &mut surface);

    // seahorse valley, between the main cardioid and the period-2 bulb
    let target = Point {
        x: (WIDTH * 3 / 8) as i32,
        y: (HEIGHT * 7 / 16) as i32,
    };
    match explorer.zoom(target, Zoom::In, &mut surface) {
        Ok(_) => run_epoch(&mut explorer, &mut surface),
        Err(e) => warn!("zoom ignored: {}", e),
    }

    Ok(())
}
