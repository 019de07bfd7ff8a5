pub mod colour_ramp;
