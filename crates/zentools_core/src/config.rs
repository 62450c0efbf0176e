//! Settings for the table generators.
//!
//! The defaults reproduce the tables currently pasted into the engine shaders.

use anyhow::{anyhow, ensure, Result};
use serde::{Deserialize, Serialize};

/// Number of taps per kernel row, and number of rows.
pub const MAX_KERNEL_SIZE: usize = 8;
/// Scale applied to the per-row variance (row `i` has variance `i * VARIANCE`).
pub const VARIANCE: f64 = 1.0;
/// Number of concentric sampling rings.
pub const DISTANCE_RING_COUNT: usize = 32;
/// Samples drawn on every ring.
pub const SAMPLES_PER_DISTANCE_RING: usize = 3;
/// Largest accepted kernel size. The table holds size² weights.
pub const KERNEL_SIZE_LIMIT: usize = 64;
/// Largest accepted ring pattern, in samples.
pub const RING_SAMPLE_LIMIT: usize = 1 << 20;
/// Seed used when the caller does not provide one.
pub const DEFAULT_SEED: u64 = 0x5EED5EED5EED5EED;

/// Parameters of the Gaussian blur weight table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelTableSettings {
    pub max_kernel_size: usize,
    pub variance: f64,
}

impl Default for KernelTableSettings {
    fn default() -> Self {
        Self {
            max_kernel_size: MAX_KERNEL_SIZE,
            variance: VARIANCE,
        }
    }
}

impl KernelTableSettings {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.max_kernel_size >= 1,
            "kernel size must be at least 1 (got {})",
            self.max_kernel_size
        );
        ensure!(
            self.max_kernel_size <= KERNEL_SIZE_LIMIT,
            "kernel size must be at most {KERNEL_SIZE_LIMIT} (got {})",
            self.max_kernel_size
        );
        ensure!(
            self.variance.is_finite() && self.variance >= 0.0,
            "variance must be finite and non-negative (got {})",
            self.variance
        );
        // The widest row has variance (size - 1) * variance.
        let widest = (self.max_kernel_size - 1) as f64 * self.variance;
        ensure!(
            widest.is_finite(),
            "variance {} overflows at radius {}",
            self.variance,
            self.max_kernel_size - 1
        );
        Ok(())
    }
}

/// How the per-sample angle is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleMode {
    /// Uniform in `[0, 1000)` used directly as radians. Matches the tables
    /// already baked into shipped shaders.
    #[default]
    Legacy,
    /// Uniform in `[0, 2π)`.
    Uniform,
}

impl AngleMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "legacy" => Some(Self::Legacy),
            "uniform" => Some(Self::Uniform),
            _ => None,
        }
    }
}

/// Parameters of the concentric ring sampling pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSamplingSettings {
    pub ring_count: usize,
    pub samples_per_ring: usize,
    pub seed: Option<u64>,
    pub angle_mode: AngleMode,
}

impl Default for RingSamplingSettings {
    fn default() -> Self {
        Self {
            ring_count: DISTANCE_RING_COUNT,
            samples_per_ring: SAMPLES_PER_DISTANCE_RING,
            seed: None,
            angle_mode: AngleMode::default(),
        }
    }
}

impl RingSamplingSettings {
    /// Total number of samples the pattern will contain, `None` on overflow.
    pub fn sample_count(&self) -> Option<usize> {
        self.ring_count.checked_mul(self.samples_per_ring)
    }

    pub fn validate(&self) -> Result<()> {
        let count = self.sample_count().ok_or_else(|| {
            anyhow!(
                "{} rings of {} samples overflows the sample count",
                self.ring_count,
                self.samples_per_ring
            )
        })?;
        ensure!(
            count <= RING_SAMPLE_LIMIT,
            "ring pattern must hold at most {RING_SAMPLE_LIMIT} samples (got {count})"
        );
        Ok(())
    }
}
