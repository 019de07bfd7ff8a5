//! Writes the current step's colour onto the pixels that are still iterating.
//!
//! Pixels whose flag is `false` are never touched, which is what keeps an
//! escaped pixel showing the colour it was given on the step it escaped.

/// Writes `colour` into every offset of `pixels` whose flag is set.
///
/// # Panics
/// Panics if `dirty_flags` and `pixels` have different lengths; the two are
/// always sized from the same grid, so a mismatch is a wiring bug.
pub fn paint(dirty_flags: &[bool], colour: u32, pixels: &mut [u32]) {
    assert_eq!(
        dirty_flags.len(),
        pixels.len(),
        "dirty flag count {} does not match pixel buffer length {}",
        dirty_flags.len(),
        pixels.len()
    );

    for (pixel, _) in pixels
        .iter_mut()
        .zip(dirty_flags)
        .filter(|(_, dirty)| **dirty)
    {
        *pixel = colour;
    }
}

/// Marks every pixel dirty again, starting a fresh rendering epoch.
pub fn reset_all(dirty_flags: &mut [bool]) {
    dirty_flags.fill(true);
}
