use crate::core::data::colour::Colour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::region::{Region, RegionError};
use crate::core::engine::incremental_engine::ExecutionMode;
use crate::core::palette::cubehelix::CubehelixParams;
use crate::core::palette::kinds::PaletteKind;

const DEFAULT_PALETTE_LEVELS: usize = 1000;
const DEFAULT_REAL_RANGE: (f64, f64) = (-1.5, 0.5);
const DEFAULT_ZOOM_IN_SCALE: f64 = 0.5;
const DEFAULT_ZOOM_OUT_SCALE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub palette_kind: PaletteKind,
    pub cubehelix: CubehelixParams,
    pub palette_levels: usize,
    /// Step ceiling per region epoch. `None` stops once every palette entry
    /// has been used.
    pub max_steps: Option<u64>,
    /// Colour painted over the grid at the start of every epoch.
    pub clear_colour: Colour,
    pub execution_mode: ExecutionMode,
    /// Real extent of the starting view; the imaginary extent follows the
    /// grid's aspect ratio, centred on the real axis.
    pub initial_real_range: (f64, f64),
    /// Factor applied to both ranges on a zoom in.
    pub zoom_in_scale: f64,
    /// Factor applied to both ranges on a zoom out.
    pub zoom_out_scale: f64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            palette_kind: PaletteKind::default(),
            cubehelix: CubehelixParams::default(),
            palette_levels: DEFAULT_PALETTE_LEVELS,
            max_steps: None,
            clear_colour: Colour::WHITE,
            execution_mode: ExecutionMode::default(),
            initial_real_range: DEFAULT_REAL_RANGE,
            zoom_in_scale: DEFAULT_ZOOM_IN_SCALE,
            zoom_out_scale: DEFAULT_ZOOM_OUT_SCALE,
        }
    }
}

impl ExplorerConfig {
    /// Starting view for `grid`, with square pixels.
    pub fn initial_region(&self, grid: GridSize) -> Result<Region, RegionError> {
        let (r_min, r_max) = self.initial_real_range;
        let aspect = grid.height() as f64 / grid.width() as f64;
        let imag_half_range = (r_max - r_min) / 2.0 * aspect;

        Region::new(r_min, r_max, -imag_half_range, imag_half_range)
    }
}
