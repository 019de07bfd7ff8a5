use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    InvalidRegion {
        r_min: f64,
        r_max: f64,
        i_min: f64,
        i_max: f64,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion {
                r_min,
                r_max,
                i_min,
                i_max,
            } => {
                write!(
                    f,
                    "region must have finite min < max on both axes: real [{}, {}], imag [{}, {}]",
                    r_min, r_max, i_min, i_max
                )
            }
        }
    }
}

impl Error for RegionError {}

/// An axis-aligned rectangle of the complex plane.
///
/// Always holds `r_min < r_max` and `i_min < i_max` with finite bounds and
/// finite ranges; the only way to get a `Region` is through [`Region::new`],
/// so a value is never half-updated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    r_min: f64,
    r_max: f64,
    i_min: f64,
    i_max: f64,
}

impl Region {
    pub fn new(r_min: f64, r_max: f64, i_min: f64, i_max: f64) -> Result<Self, RegionError> {
        if !is_valid_axis(r_min, r_max) || !is_valid_axis(i_min, i_max) {
            return Err(RegionError::InvalidRegion {
                r_min,
                r_max,
                i_min,
                i_max,
            });
        }

        Ok(Self {
            r_min,
            r_max,
            i_min,
            i_max,
        })
    }

    /// Region of the given half-extents around `centre`.
    pub fn centred_on(
        centre: Complex,
        real_half_range: f64,
        imag_half_range: f64,
    ) -> Result<Self, RegionError> {
        Self::new(
            centre.real - real_half_range,
            centre.real + real_half_range,
            centre.imag - imag_half_range,
            centre.imag + imag_half_range,
        )
    }

    #[must_use]
    pub fn r_min(&self) -> f64 {
        self.r_min
    }

    #[must_use]
    pub fn r_max(&self) -> f64 {
        self.r_max
    }

    #[must_use]
    pub fn i_min(&self) -> f64 {
        self.i_min
    }

    #[must_use]
    pub fn i_max(&self) -> f64 {
        self.i_max
    }

    #[must_use]
    pub fn real_range(&self) -> f64 {
        self.r_max - self.r_min
    }

    #[must_use]
    pub fn imag_range(&self) -> f64 {
        self.i_max - self.i_min
    }
}

/// `min < max`, both finite, and `max - min` representable. NaN fails the
/// comparison.
fn is_valid_axis(min: f64, max: f64) -> bool {
    min < max && min.is_finite() && max.is_finite() && (max - min).is_finite()
}
