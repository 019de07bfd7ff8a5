use crate::core::actions::compositor::reset_all;
use crate::core::data::complex::Complex;

/// Per-pixel orbit state: the current iterate and whether it is still
/// iterating.
///
/// No per-pixel iteration count is kept: every active pixel has been stepped
/// exactly as many times as the engine's global counter says.
#[derive(Debug, Clone)]
pub struct IterationStore {
    iterates: Vec<Complex>,
    active: Vec<bool>,
}

impl IterationStore {
    #[must_use]
    pub fn new(pixel_count: usize) -> Self {
        Self {
            iterates: vec![Complex::ZERO; pixel_count],
            active: vec![true; pixel_count],
        }
    }

    pub fn reset(&mut self) {
        self.iterates.fill(Complex::ZERO);
        reset_all(&mut self.active);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn iterates(&self) -> &[Complex] {
        &self.iterates
    }

    #[must_use]
    pub fn active(&self) -> &[bool] {
        &self.active
    }

    /// Split borrow used by the update loop.
    pub(crate) fn parts_mut(&mut self) -> (&mut [Complex], &mut [bool]) {
        (&mut self.iterates, &mut self.active)
    }
}

/// Advances one row by a single step. Returns how many pixels escaped.
pub(crate) fn step_row(
    iterates: &mut [Complex],
    active: &mut [bool],
    reals: &[f64],
    imag: f64,
) -> usize {
    debug_assert_eq!(iterates.len(), reals.len());
    debug_assert_eq!(active.len(), reals.len());

    let mut escaped = 0;

    for ((z, is_active), &real) in iterates.iter_mut().zip(active.iter_mut()).zip(reals) {
        if !*is_active {
            continue;
        }

        *z = z.step(Complex { real, imag });

        if z.has_escaped() {
            *is_active = false;
            escaped += 1;
        }
    }

    escaped
}
