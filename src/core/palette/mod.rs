pub mod colour_table;
pub mod cubehelix;
pub mod factory;
pub mod kinds;
pub mod ports;
pub mod ramps;
