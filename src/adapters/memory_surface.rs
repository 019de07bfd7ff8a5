use crate::controllers::explorer::ports::pixel_surface::PixelSurface;
use crate::core::data::grid_size::GridSize;

/// Headless [`PixelSurface`] backed by an owned row-major pixel vector.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    grid: GridSize,
    pixels: Vec<u32>,
}

impl MemorySurface {
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            pixels: vec![0; grid.pixel_count()],
        }
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

impl PixelSurface for MemorySurface {
    fn width(&self) -> u32 {
        self.grid.width()
    }

    fn height(&self) -> u32 {
        self.grid.height()
    }

    fn with_locked_pixels<R>(&mut self, f: impl FnOnce(&mut [u32]) -> R) -> R {
        f(&mut self.pixels)
    }
}
