//! Cubehelix colour ramp (D. A. Green, 2011).
//!
//! Luminance rises monotonically from black to white while the hue rotates
//! around the colour cube, so the ramp stays ordered when printed in grey.

use std::f64::consts::PI;

use crate::core::data::colour::Colour;
use crate::core::palette::colour_table::{Palette, PaletteError};
use crate::core::palette::kinds::PaletteKind;
use crate::core::palette::ports::colour_ramp::ColourRamp;

/// Shape parameters of a cubehelix ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubehelixParams {
    /// Starting hue, in thirds of a turn (0 = blue, 1 = red, 2 = green).
    pub start: f64,
    /// Number of hue rotations across the ramp; the sign sets the direction.
    pub rotations: f64,
    /// Saturation multiplier; 0 gives pure greyscale.
    pub hue: f64,
    /// Exponent applied to the luminance ramp.
    pub gamma: f64,
}

impl Default for CubehelixParams {
    fn default() -> Self {
        Self {
            start: 0.0,
            rotations: 3.0,
            hue: 1.0,
            gamma: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubehelix {
    params: CubehelixParams,
}

impl Cubehelix {
    #[must_use]
    pub fn new(params: CubehelixParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> CubehelixParams {
        self.params
    }
}

impl ColourRamp for Cubehelix {
    fn colour(&self, x: f64) -> Colour {
        let CubehelixParams {
            start,
            rotations,
            hue,
            gamma,
        } = self.params;

        let luminance = x.powf(gamma);
        let phi = 2.0 * PI * (start / 3.0 + 1.0 + rotations * x);
        let amplitude = hue * luminance * (1.0 - luminance) / 2.0;
        let (sin_phi, cos_phi) = phi.sin_cos();

        let red = luminance + amplitude * (-0.14861 * cos_phi + 1.78277 * sin_phi);
        let green = luminance + amplitude * (-0.29227 * cos_phi - 0.90649 * sin_phi);
        let blue = luminance + amplitude * (1.97294 * cos_phi);

        Colour::from_unit_rgb(red, green, blue)
    }

    fn kind(&self) -> PaletteKind {
        PaletteKind::Cubehelix
    }
}

/// Builds an `nlev` entry cubehelix palette.
///
/// Pure and deterministic: identical arguments always give an identical
/// table. `nlev == 1` is valid and yields the start of the ramp only.
pub fn generate_palette(
    start: f64,
    rotations: f64,
    hue: f64,
    gamma: f64,
    nlev: usize,
) -> Result<Palette, PaletteError> {
    let ramp = Cubehelix::new(CubehelixParams {
        start,
        rotations,
        hue,
        gamma,
    });

    Palette::from_ramp(&ramp, nlev)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_palette_has_requested_length() {
        let palette = generate_palette(0.0, 3.0, 1.0, 1.0, 1000).unwrap();

        assert_eq!(palette.levels(), 1000);
    }

    #[test]
    fn test_generate_palette_is_deterministic() {
        let first = generate_palette(0.0, 3.0, 1.0, 1.0, 1000).unwrap();
        let second = generate_palette(0.0, 3.0, 1.0, 1.0, 1000).unwrap();

        assert_eq!(first.colours(), second.colours());
    }

    #[test]
    fn test_ramp_runs_from_black_to_white() {
        let palette = generate_palette(0.5, -1.5, 1.2, 1.0, 256).unwrap();

        assert_eq!(palette.colour_at(0), Colour::BLACK);
        assert_eq!(palette.colour_at(255), Colour::WHITE);
    }

    #[test]
    fn test_single_level_palette_is_black() {
        for (start, rotations, hue) in [(0.0, 3.0, 1.0), (2.5, -7.0, 3.0), (1.0, 0.0, 0.0)] {
            let palette = generate_palette(start, rotations, hue, 1.0, 1).unwrap();

            assert_eq!(palette.colours(), &[Colour::BLACK]);
        }
    }

    #[test]
    fn test_zero_levels_is_an_error() {
        assert_eq!(
            generate_palette(0.0, 3.0, 1.0, 1.0, 0),
            Err(PaletteError::NoLevels)
        );
    }

    #[test]
    fn test_midpoint_without_rotation() {
        // x = 0.5, L = 0.5, A = 0.125, phi = 2π so cos = 1 and sin ≈ 0
        let palette = generate_palette(0.0, 0.0, 1.0, 1.0, 3).unwrap();

        assert_eq!(
            palette.colour_at(1),
            Colour {
                r: 123,
                g: 118,
                b: 190
            }
        );
    }

    #[test]
    fn test_zero_hue_is_greyscale() {
        let palette = generate_palette(0.0, 3.0, 0.0, 1.0, 50).unwrap();

        assert!(palette.colours().iter().all(|c| c.r == c.g && c.g == c.b));
    }

    #[test]
    fn test_luminance_is_monotonic_for_default_params() {
        let palette = generate_palette(0.0, 3.0, 1.0, 1.0, 1000).unwrap();
        let luma: Vec<f64> = palette
            .colours()
            .iter()
            .map(|c| 0.30 * c.r as f64 + 0.59 * c.g as f64 + 0.11 * c.b as f64)
            .collect();

        // allow for 8-bit rounding and channel clipping
        assert!(luma.windows(2).all(|pair| pair[1] >= pair[0] - 2.0));
    }

    #[test]
    fn test_ramp_reports_kind() {
        let ramp = Cubehelix::new(CubehelixParams::default());

        assert_eq!(ramp.kind(), PaletteKind::Cubehelix);
        assert_eq!(ramp.display_name(), "Cubehelix");
    }
}
