use crate::core::data::colour::Colour;
use crate::core::palette::kinds::PaletteKind;
use crate::core::palette::ports::colour_ramp::ColourRamp;

/// Bernstein-polynomial ramp, black at both ends. Blue peaks near a quarter,
/// green near the middle and red near three quarters, so it sweeps from deep
/// blue through green to orange-red.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlueWhiteGradient;

impl ColourRamp for BlueWhiteGradient {
    fn colour(&self, x: f64) -> Colour {
        let t = x.clamp(0.0, 1.0);
        let u = 1.0 - t;

        let r = (9.0 * u * t * t * t * 255.0) as u8;
        let g = (15.0 * u * u * t * t * 255.0) as u8;
        let b = (8.5 * u * u * u * t * 255.0) as u8;

        Colour { r, g, b }
    }

    fn kind(&self) -> PaletteKind {
        PaletteKind::BlueWhiteGradient
    }
}
