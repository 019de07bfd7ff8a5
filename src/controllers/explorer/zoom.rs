use crate::core::data::complex::Complex;
use crate::core::data::region::{Region, RegionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zoom {
    In,
    Out,
}

/// Region re-centred on `centre` with both ranges multiplied by `scale`.
///
/// At extreme magnification the new bounds can collapse onto each other in
/// `f64`; that surfaces as [`RegionError::InvalidRegion`].
pub fn zoomed_region(region: Region, centre: Complex, scale: f64) -> Result<Region, RegionError> {
    Region::centred_on(
        centre,
        region.real_range() * scale / 2.0,
        region.imag_range() * scale / 2.0,
    )
}
