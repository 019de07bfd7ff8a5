pub mod incremental_engine;
pub mod iteration_store;
pub mod region_mapper;
