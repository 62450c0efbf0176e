//! Offline generators for numeric tables baked into the engine shaders, plus a
//! JSON compactor for demo assets.
//!
//! - [`gauss`] builds normalised one-sided Gaussian blur rows.
//! - [`rings`] samples points on concentric rings from a seedable RNG.
//! - [`emit`] prints either table as source literals.
//! - [`unpretty`] strips formatting whitespace from JSON files.

pub mod config;
pub mod emit;
pub mod gauss;
pub mod metrics;
pub mod rings;
pub mod unpretty;

pub use config::{AngleMode, KernelTableSettings, RingSamplingSettings};
pub use gauss::{generate_kernel_table, KernelRow, KernelTable};
pub use rings::{generate_ring_pattern, sample_rings, RingPattern, RingSample};
