use crate::core::data::colour::Colour;
use crate::core::palette::kinds::PaletteKind;

/// A continuous colour ramp over the unit interval.
pub trait ColourRamp: Send + Sync {
    /// Colour at fraction `x`, where `0.0` is the start of the ramp and `1.0`
    /// the end.
    fn colour(&self, x: f64) -> Colour;

    fn kind(&self) -> PaletteKind;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}
