mod adapters;
mod controllers;
mod core;

pub use crate::adapters::memory_surface::MemorySurface;
pub use crate::adapters::pixel_format::{Argb8888, PixelFormat, Rgba8888};
pub use crate::controllers::explorer::ports::pixel_surface::PixelSurface;
pub use crate::controllers::explorer::{Explorer, ExplorerConfig, ExplorerError, TickOutcome, Zoom};
pub use crate::core::actions::compositor::{paint, reset_all};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid_size::{GridSize, GridSizeError};
pub use crate::core::data::point::Point;
pub use crate::core::data::region::{Region, RegionError};
pub use crate::core::engine::incremental_engine::{ExecutionMode, IterationEngine};
pub use crate::core::engine::iteration_store::IterationStore;
pub use crate::core::engine::region_mapper::{PixelToComplexError, RegionMapper};
pub use crate::core::palette::colour_table::{Palette, PaletteError};
pub use crate::core::palette::cubehelix::{Cubehelix, CubehelixParams, generate_palette};
pub use crate::core::palette::factory::{build_palette, colour_ramp_factory};
pub use crate::core::palette::kinds::PaletteKind;
pub use crate::core::palette::ports::colour_ramp::ColourRamp;
pub use crate::core::palette::ramps::{blue_white_gradient::BlueWhiteGradient, fire_gradient::FireGradient};
