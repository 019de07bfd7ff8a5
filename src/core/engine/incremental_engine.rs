use log::{debug, trace};
use rayon::prelude::*;

use crate::core::data::grid_size::GridSize;
use crate::core::data::region::{Region, RegionError};
use crate::core::engine::iteration_store::{IterationStore, step_row};
use crate::core::engine::region_mapper::RegionMapper;

/// How the per-pixel loop of [`IterationEngine::update`] is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    Serial,
    /// Rows are stepped in parallel on rayon's global pool.
    #[default]
    Parallel,
}

/// Escape-time engine that advances every still-iterating pixel by exactly one
/// step per [`update`](Self::update) call.
///
/// The grid size is fixed for the engine's lifetime. Each successful
/// [`set_region`](Self::set_region) starts a new region epoch: iterates go back
/// to zero, every pixel becomes active and the step counter returns to 0.
#[derive(Debug, Clone)]
pub struct IterationEngine {
    mapper: RegionMapper,
    store: IterationStore,
    step_count: u64,
    active_count: usize,
    execution_mode: ExecutionMode,
}

impl IterationEngine {
    #[must_use]
    pub fn new(grid: GridSize, region: Region) -> Self {
        debug!(
            "creating iteration engine for {}x{} grid",
            grid.width(),
            grid.height()
        );

        Self {
            mapper: RegionMapper::new(grid, region),
            store: IterationStore::new(grid.pixel_count()),
            step_count: 0,
            active_count: grid.pixel_count(),
            execution_mode: ExecutionMode::default(),
        }
    }

    #[must_use]
    pub fn with_execution_mode(mut self, execution_mode: ExecutionMode) -> Self {
        self.execution_mode = execution_mode;
        self
    }

    /// Validates and applies a new region, resetting all iteration state.
    ///
    /// On error the previous region, iterates, flags and step count are left
    /// exactly as they were.
    pub fn set_region(
        &mut self,
        r_min: f64,
        r_max: f64,
        i_min: f64,
        i_max: f64,
    ) -> Result<(), RegionError> {
        let region = Region::new(r_min, r_max, i_min, i_max)?;
        self.apply_region(region);
        Ok(())
    }

    /// Applies an already validated region, resetting all iteration state.
    pub fn apply_region(&mut self, region: Region) {
        debug!(
            "region set to real [{}, {}], imag [{}, {}]",
            region.r_min(),
            region.r_max(),
            region.i_min(),
            region.i_max()
        );

        self.mapper.set_region(region);
        self.reset();
    }

    /// Discards the current epoch's progress without changing the region.
    pub fn reset(&mut self) {
        self.store.reset();
        self.step_count = 0;
        self.active_count = self.store.len();
    }

    /// Advances every active pixel by one step of `z ← z² + c` and returns the
    /// active flags as they stand afterwards.
    ///
    /// Pixels with `|z|² > 4` are flagged inactive and are never stepped again
    /// until the next reset. The step counter always grows by exactly one.
    pub fn update(&mut self) -> &[bool] {
        let width = self.mapper.grid().width() as usize;
        let reals = self.mapper.reals();
        let imags = self.mapper.imags();
        let (iterates, active) = self.store.parts_mut();

        let escaped: usize = match self.execution_mode {
            ExecutionMode::Serial => iterates
                .chunks_mut(width)
                .zip(active.chunks_mut(width))
                .zip(imags)
                .map(|((z_row, active_row), &imag)| step_row(z_row, active_row, reals, imag))
                .sum(),
            ExecutionMode::Parallel => iterates
                .par_chunks_mut(width)
                .zip(active.par_chunks_mut(width))
                .zip(imags.par_iter())
                .map(|((z_row, active_row), &imag)| step_row(z_row, active_row, reals, imag))
                .sum(),
        };

        self.step_count += 1;
        self.active_count -= escaped;

        trace!(
            "step {}: {} escaped, {} still active",
            self.step_count, escaped, self.active_count
        );

        self.store.active()
    }

    #[must_use]
    pub fn active_flags(&self) -> &[bool] {
        self.store.active()
    }

    #[must_use]
    pub fn store(&self) -> &IterationStore {
        &self.store
    }

    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.mapper.grid()
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.mapper.region()
    }

    #[must_use]
    pub fn mapper(&self) -> &RegionMapper {
        &self.mapper
    }

    #[must_use]
    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;

    fn single_pixel_engine(centre: f64) -> IterationEngine {
        let grid = GridSize::new(1, 1).unwrap();
        let region = Region::new(centre - 0.5, centre + 0.5, centre - 0.5, centre + 0.5).unwrap();
        IterationEngine::new(grid, region)
    }

    fn classic_engine(width: u32, height: u32, mode: ExecutionMode) -> IterationEngine {
        let grid = GridSize::new(width, height).unwrap();
        let region = Region::new(-2.0, 1.0, -1.2, 1.2).unwrap();
        IterationEngine::new(grid, region).with_execution_mode(mode)
    }

    #[test]
    fn test_new_engine_starts_fully_active_at_step_zero() {
        let engine = classic_engine(8, 6, ExecutionMode::Serial);

        assert_eq!(engine.step_count(), 0);
        assert_eq!(engine.active_count(), 48);
        assert_eq!(engine.active_flags().len(), 48);
        assert!(engine.active_flags().iter().all(|a| *a));
    }

    #[test]
    fn test_immediate_escape_after_one_update() {
        // single pixel centred on c = 3 + 3i, |c|² = 18
        let mut engine = single_pixel_engine(3.0);

        let flags = engine.update();

        assert_eq!(flags, &[false]);
        assert_eq!(engine.step_count(), 1);
        assert_eq!(engine.active_count(), 0);
    }

    #[test]
    fn test_origin_never_escapes() {
        let mut engine = single_pixel_engine(0.0);

        for _ in 0..10_000 {
            engine.update();
        }

        assert_eq!(engine.active_flags(), &[true]);
        assert_eq!(engine.step_count(), 10_000);
    }

    #[test]
    fn test_step_counter_advances_even_when_nothing_is_active() {
        let mut engine = single_pixel_engine(3.0);

        engine.update();
        engine.update();
        engine.update();

        assert_eq!(engine.step_count(), 3);
        assert_eq!(engine.active_count(), 0);
    }

    #[test]
    fn test_inactive_pixels_stay_frozen() {
        let mut engine = classic_engine(32, 24, ExecutionMode::Parallel);
        let mut ever_inactive = vec![false; 32 * 24];

        for _ in 0..200 {
            let flags = engine.update();
            for (seen, &active) in ever_inactive.iter_mut().zip(flags) {
                assert!(!(*seen && active), "an escaped pixel became active again");
                *seen |= !active;
            }
        }

        assert!(ever_inactive.iter().any(|e| *e));
        assert!(ever_inactive.iter().any(|e| !*e));
    }

    #[test]
    fn test_escaped_iterates_are_no_longer_updated() {
        let mut engine = single_pixel_engine(3.0);

        engine.update();
        let frozen = engine.store().iterates()[0];
        engine.update();

        assert_eq!(engine.store().iterates()[0], frozen);
    }

    #[test]
    fn test_active_count_matches_flags() {
        let mut engine = classic_engine(40, 30, ExecutionMode::Parallel);

        for _ in 0..50 {
            engine.update();
        }

        let counted = engine.active_flags().iter().filter(|a| **a).count();
        assert_eq!(engine.active_count(), counted);
    }

    #[test]
    fn test_serial_and_parallel_produce_identical_state() {
        let mut serial = classic_engine(37, 23, ExecutionMode::Serial);
        let mut parallel = classic_engine(37, 23, ExecutionMode::Parallel);

        for _ in 0..100 {
            let serial_flags = serial.update().to_vec();
            let parallel_flags = parallel.update().to_vec();
            assert_eq!(serial_flags, parallel_flags);
        }

        assert_eq!(serial.store().iterates(), parallel.store().iterates());
        assert_eq!(serial.active_count(), parallel.active_count());
    }

    #[test]
    fn test_set_region_resets_epoch() {
        let mut engine = classic_engine(16, 16, ExecutionMode::Serial);
        for _ in 0..20 {
            engine.update();
        }
        assert!(engine.active_count() < 256);

        engine.set_region(-0.5, 0.5, -0.5, 0.5).unwrap();

        assert_eq!(engine.step_count(), 0);
        assert_eq!(engine.active_count(), 256);
        assert!(engine.active_flags().iter().all(|a| *a));
        assert_eq!(engine.region(), Region::new(-0.5, 0.5, -0.5, 0.5).unwrap());
    }

    #[test]
    fn test_invalid_region_leaves_state_intact() {
        let mut engine = classic_engine(16, 16, ExecutionMode::Serial);
        for _ in 0..20 {
            engine.update();
        }
        let region = engine.region();
        let flags = engine.active_flags().to_vec();
        let iterates = engine.store().iterates().to_vec();

        let result = engine.set_region(1.0, -1.0, -1.0, 1.0);
        assert!(matches!(result, Err(RegionError::InvalidRegion { .. })));
        let result = engine.set_region(f64::NEG_INFINITY, f64::INFINITY, -1.0, 1.0);
        assert!(matches!(result, Err(RegionError::InvalidRegion { .. })));

        assert_eq!(engine.region(), region);
        assert_eq!(engine.step_count(), 20);
        assert_eq!(engine.active_flags(), flags.as_slice());
        assert_eq!(engine.store().iterates(), iterates.as_slice());
    }

    #[test]
    fn test_pixel_escapes_on_the_expected_step() {
        // pixel centres: -2.5 + 0.5i (|c|² = 6.5), -1.5 + 0.5i, -0.5 + 0.5i
        let grid = GridSize::new(3, 1).unwrap();
        let region = Region::new(-3.0, 0.0, 0.0, 1.0).unwrap();
        let mut engine = IterationEngine::new(grid, region);

        let c = engine.mapper().pixel_to_complex(Point { x: 0, y: 0 }).unwrap();
        assert!((c.real + 2.5).abs() < 1e-12);
        assert!((c.imag - 0.5).abs() < 1e-12);

        let flags = engine.update();
        assert_eq!(flags, &[false, true, true]);
    }
}
