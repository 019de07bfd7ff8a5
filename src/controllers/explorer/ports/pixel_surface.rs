/// A 32-bit pixel surface owned by the host display layer.
///
/// The explorer only writes pixels from inside [`with_locked_pixels`], so an
/// implementation can hold whatever lock its platform needs for exactly the
/// duration of one paint pass.
///
/// [`with_locked_pixels`]: PixelSurface::with_locked_pixels
pub trait PixelSurface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Runs `f` over the surface's row-major pixels while they are locked.
    fn with_locked_pixels<R>(&mut self, f: impl FnOnce(&mut [u32]) -> R) -> R;
}
