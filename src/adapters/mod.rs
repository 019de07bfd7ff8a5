pub mod memory_surface;
pub mod pixel_format;
