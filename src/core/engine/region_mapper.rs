use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::region::Region;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexError {
    PointOutsideGrid { point: Point, grid: GridSize },
}

impl fmt::Display for PixelToComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid { point, grid } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} pixel grid",
                    point.x,
                    point.y,
                    grid.width(),
                    grid.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexError {}

/// Affine pixel → complex transform for a fixed grid, sampling pixel centres.
///
/// The transform is separable, so it is cached as one real part per column
/// and one imaginary part per row rather than one coordinate per pixel.
#[derive(Debug, Clone)]
pub struct RegionMapper {
    grid: GridSize,
    region: Region,
    reals: Vec<f64>,
    imags: Vec<f64>,
}

impl RegionMapper {
    #[must_use]
    pub fn new(grid: GridSize, region: Region) -> Self {
        let mut mapper = Self {
            grid,
            region,
            reals: Vec::with_capacity(grid.width() as usize),
            imags: Vec::with_capacity(grid.height() as usize),
        };
        mapper.recompute();
        mapper
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
        self.recompute();
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Real part of every column's centre, `width` entries.
    #[must_use]
    pub fn reals(&self) -> &[f64] {
        &self.reals
    }

    /// Imaginary part of every row's centre, `height` entries.
    #[must_use]
    pub fn imags(&self) -> &[f64] {
        &self.imags
    }

    pub fn pixel_to_complex(&self, point: Point) -> Result<Complex, PixelToComplexError> {
        if !self.grid.contains_point(point) {
            return Err(PixelToComplexError::PointOutsideGrid {
                point,
                grid: self.grid,
            });
        }

        Ok(Complex {
            real: self.reals[point.x as usize],
            imag: self.imags[point.y as usize],
        })
    }

    /// Maps a fractional screen position (`x / width`, `y / height`) onto the
    /// region without the half-pixel offset; `(0, 0)` is the region's corner.
    #[must_use]
    pub fn complex_at_fraction(&self, fx: f64, fy: f64) -> Complex {
        Complex {
            real: self.region.r_min() + fx * self.region.real_range(),
            imag: self.region.i_min() + fy * self.region.imag_range(),
        }
    }

    fn recompute(&mut self) {
        let width = self.grid.width() as f64;
        let height = self.grid.height() as f64;
        let region = self.region;

        self.reals.clear();
        self.reals.extend(
            (0..self.grid.width())
                .map(|x| region.r_min() + (x as f64 + 0.5) / width * region.real_range()),
        );

        self.imags.clear();
        self.imags.extend(
            (0..self.grid.height())
                .map(|y| region.i_min() + (y as f64 + 0.5) / height * region.imag_range()),
        );
    }
}
