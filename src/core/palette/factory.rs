use log::debug;

use crate::core::palette::colour_table::{Palette, PaletteError};
use crate::core::palette::cubehelix::{Cubehelix, CubehelixParams};
use crate::core::palette::kinds::PaletteKind;
use crate::core::palette::ports::colour_ramp::ColourRamp;
use crate::core::palette::ramps::{
    blue_white_gradient::BlueWhiteGradient, fire_gradient::FireGradient,
};

/// Ramp for `kind`. `params` only shapes the cubehelix ramp.
#[must_use]
pub fn colour_ramp_factory(kind: PaletteKind, params: CubehelixParams) -> Box<dyn ColourRamp> {
    match kind {
        PaletteKind::Cubehelix => Box::new(Cubehelix::new(params)),
        PaletteKind::FireGradient => Box::new(FireGradient),
        PaletteKind::BlueWhiteGradient => Box::new(BlueWhiteGradient),
    }
}

pub fn build_palette(
    kind: PaletteKind,
    params: CubehelixParams,
    nlev: usize,
) -> Result<Palette, PaletteError> {
    debug!("building {} palette with {} levels", kind, nlev);

    let ramp = colour_ramp_factory(kind, params);
    Palette::from_ramp(ramp.as_ref(), nlev)
}
