use crate::core::data::colour::Colour;
use crate::core::palette::ports::colour_ramp::ColourRamp;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaletteError {
    NoLevels,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLevels => write!(f, "palette must have at least one level"),
        }
    }
}

impl Error for PaletteError {}

/// Fraction of the ramp covered by entry `index` of an `nlev` entry table.
///
/// A single-entry table samples the start of the ramp.
#[must_use]
pub fn level_fraction(index: usize, nlev: usize) -> f64 {
    index as f64 / nlev.saturating_sub(1).max(1) as f64
}

/// Fixed-length, immutable table of colours sampled evenly along a ramp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    pub fn from_ramp<R>(ramp: &R, nlev: usize) -> Result<Self, PaletteError>
    where
        R: ColourRamp + ?Sized,
    {
        if nlev == 0 {
            return Err(PaletteError::NoLevels);
        }

        let colours = (0..nlev)
            .map(|index| ramp.colour(level_fraction(index, nlev)))
            .collect();

        Ok(Self { colours })
    }

    pub fn from_colours(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        if colours.is_empty() {
            return Err(PaletteError::NoLevels);
        }

        Ok(Self { colours })
    }

    /// Number of entries, `nlev`. Always at least one.
    #[must_use]
    pub fn levels(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Entry at `index`, clamped into `[0, nlev - 1]`.
    ///
    /// Step counters driven by the frame rate can overshoot the table, so an
    /// out-of-range index is not an error.
    #[must_use]
    pub fn colour_at(&self, index: i64) -> Colour {
        let last = self.colours.len() - 1;
        let clamped = usize::try_from(index).map_or(0, |index| index.min(last));
        self.colours[clamped]
    }
}
