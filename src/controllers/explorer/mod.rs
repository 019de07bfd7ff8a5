//! Interactive exploration session on top of the incremental engine.
//!
//! The explorer owns the engine and palette and drives them one frame at a
//! time against a host-provided pixel surface:
//! - **Input**: frame ticks, zoom gestures at a pixel, palette changes
//! - **Output**: the `PixelSurface` port, written only under its lock
//! - **Core**: `IterationEngine`, `Palette` and the compositor from `core/`

pub mod explorer;
pub mod explorer_config;
pub mod ports;
pub mod zoom;

pub use explorer::{Explorer, ExplorerError, TickOutcome};
pub use explorer_config::ExplorerConfig;
pub use zoom::Zoom;
