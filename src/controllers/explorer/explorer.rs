use log::{debug, info};
use std::error::Error;
use std::fmt;

use crate::adapters::pixel_format::PixelFormat;
use crate::controllers::explorer::explorer_config::ExplorerConfig;
use crate::controllers::explorer::ports::pixel_surface::PixelSurface;
use crate::controllers::explorer::zoom::{Zoom, zoomed_region};
use crate::core::actions::compositor::paint;
use crate::core::data::grid_size::{GridSize, GridSizeError};
use crate::core::data::point::Point;
use crate::core::data::region::{Region, RegionError};
use crate::core::engine::incremental_engine::IterationEngine;
use crate::core::engine::region_mapper::PixelToComplexError;
use crate::core::palette::colour_table::{Palette, PaletteError};
use crate::core::palette::cubehelix::CubehelixParams;
use crate::core::palette::factory::build_palette;
use crate::core::palette::kinds::PaletteKind;

#[derive(Debug, PartialEq)]
pub enum ExplorerError {
    Grid(GridSizeError),
    Region(RegionError),
    Palette(PaletteError),
    Pixel(PixelToComplexError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid grid: {}", e),
            Self::Region(e) => write!(f, "invalid region: {}", e),
            Self::Palette(e) => write!(f, "invalid palette: {}", e),
            Self::Pixel(e) => write!(f, "invalid pixel: {}", e),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Region(e) => Some(e),
            Self::Palette(e) => Some(e),
            Self::Pixel(e) => Some(e),
        }
    }
}

impl From<GridSizeError> for ExplorerError {
    fn from(e: GridSizeError) -> Self {
        Self::Grid(e)
    }
}

impl From<RegionError> for ExplorerError {
    fn from(e: RegionError) -> Self {
        Self::Region(e)
    }
}

impl From<PaletteError> for ExplorerError {
    fn from(e: PaletteError) -> Self {
        Self::Palette(e)
    }
}

impl From<PixelToComplexError> for ExplorerError {
    fn from(e: PixelToComplexError) -> Self {
        Self::Pixel(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One step was taken and painted. `active` pixels received its colour.
    Stepped { step: u64, active: usize },
    /// The step ceiling for this region epoch has been reached.
    Finished,
}

/// One interactive exploration session over a fixed-size surface.
///
/// Each [`tick`](Self::tick) advances the engine by one step and paints the
/// colour for the new step count onto every pixel that is still iterating.
/// Pixels that escaped keep the colour of the step they escaped on.
pub struct Explorer<F: PixelFormat> {
    config: ExplorerConfig,
    engine: IterationEngine,
    palette: Palette,
    pixel_format: F,
}

impl<F: PixelFormat> Explorer<F> {
    pub fn new(
        config: ExplorerConfig,
        width: u32,
        height: u32,
        pixel_format: F,
    ) -> Result<Self, ExplorerError> {
        let grid = GridSize::new(width, height)?;
        let region = config.initial_region(grid)?;
        let palette = build_palette(config.palette_kind, config.cubehelix, config.palette_levels)?;
        let engine = IterationEngine::new(grid, region).with_execution_mode(config.execution_mode);

        info!(
            "explorer ready: {}x{} grid, {} palette with {} levels",
            width,
            height,
            config.palette_kind,
            palette.levels()
        );

        Ok(Self {
            config,
            engine,
            palette,
            pixel_format,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &IterationEngine {
        &self.engine
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.engine.region()
    }

    #[must_use]
    pub fn max_steps(&self) -> u64 {
        self.config
            .max_steps
            .unwrap_or(self.palette.levels() as u64)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.engine.step_count() >= self.max_steps()
    }

    /// Paints the clear colour over every pixel still iterating. Straight
    /// after a region change that is the whole grid.
    pub fn clear<S: PixelSurface>(&self, surface: &mut S) {
        let colour = self.pixel_format.encode(self.config.clear_colour);
        self.paint_onto(surface, colour);
    }

    pub fn tick<S: PixelSurface>(&mut self, surface: &mut S) -> TickOutcome {
        if self.is_finished() {
            return TickOutcome::Finished;
        }

        self.engine.update();

        let step = self.engine.step_count();
        let colour = self
            .palette
            .colour_at(i64::try_from(step).unwrap_or(i64::MAX));
        self.paint_onto(surface, self.pixel_format.encode(colour));

        TickOutcome::Stepped {
            step,
            active: self.engine.active_count(),
        }
    }

    /// Re-centres the view on `point` and zooms in or out, then restarts
    /// rendering from a cleared surface.
    ///
    /// A point outside the grid, or a zoom that would collapse the region,
    /// leaves the session exactly as it was.
    pub fn zoom<S: PixelSurface>(
        &mut self,
        point: Point,
        zoom: Zoom,
        surface: &mut S,
    ) -> Result<Region, ExplorerError> {
        let grid = self.engine.grid();
        if !grid.contains_point(point) {
            return Err(PixelToComplexError::PointOutsideGrid { point, grid }.into());
        }

        let fx = point.x as f64 / grid.width() as f64;
        let fy = point.y as f64 / grid.height() as f64;
        let centre = self.engine.mapper().complex_at_fraction(fx, fy);
        let scale = match zoom {
            Zoom::In => self.config.zoom_in_scale,
            Zoom::Out => self.config.zoom_out_scale,
        };

        let region = zoomed_region(self.engine.region(), centre, scale)?;

        info!(
            "zoom {:?} at ({}, {}) → real [{}, {}], imag [{}, {}]",
            zoom,
            centre.real,
            centre.imag,
            region.r_min(),
            region.r_max(),
            region.i_min(),
            region.i_max()
        );

        self.restart(region, surface);
        Ok(region)
    }

    pub fn reset_view<S: PixelSurface>(&mut self, surface: &mut S) -> Result<Region, ExplorerError> {
        let region = self.config.initial_region(self.engine.grid())?;
        self.restart(region, surface);
        Ok(region)
    }

    /// Rebuilds the palette. Rendering carries on from the current step.
    pub fn set_palette(
        &mut self,
        kind: PaletteKind,
        cubehelix: CubehelixParams,
    ) -> Result<(), ExplorerError> {
        self.palette = build_palette(kind, cubehelix, self.config.palette_levels)?;
        self.config.palette_kind = kind;
        self.config.cubehelix = cubehelix;
        Ok(())
    }

    fn restart<S: PixelSurface>(&mut self, region: Region, surface: &mut S) {
        self.engine.apply_region(region);
        self.clear(surface);
    }

    fn paint_onto<S: PixelSurface>(&self, surface: &mut S, colour: u32) {
        let grid = self.engine.grid();
        assert!(
            surface.width() == grid.width() && surface.height() == grid.height(),
            "surface is {}x{} but the explorer grid is {}x{}",
            surface.width(),
            surface.height(),
            grid.width(),
            grid.height()
        );

        let flags = self.engine.active_flags();
        surface.with_locked_pixels(|pixels| paint(flags, colour, pixels));

        debug!(
            "painted {:#010x} over {} active pixels",
            colour,
            self.engine.active_count()
        );
    }
}
