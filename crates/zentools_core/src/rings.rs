//! Concentric ring sampling pattern used by the screen-space shaders.

use anyhow::Result;
use glam::DVec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::config::{AngleMode, RingSamplingSettings, DEFAULT_SEED};

/// Upper bound of the legacy angle draw, in radians.
const LEGACY_ANGLE_SPAN: f64 = 1000.0;

/// A point on ring `ring`, stored as `(x, y, ring)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSample {
    pub ring: usize,
    pub position: DVec3,
}

impl RingSample {
    pub fn on_ring<R: Rng + ?Sized>(rng: &mut R, ring: usize, mode: AngleMode) -> Self {
        let angle = draw_angle(rng, mode);
        let radius = ring as f64;
        Self {
            ring,
            position: DVec3::new(angle.sin() * radius, angle.cos() * radius, radius),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RingPattern {
    pub seed: u64,
    pub samples: Vec<RingSample>,
}

impl RingPattern {
    pub fn ring(&self, ring: usize) -> impl Iterator<Item = &RingSample> {
        self.samples.iter().filter(move |s| s.ring == ring)
    }
}

/// Seeds a ChaCha stream from the settings and samples every ring.
pub fn generate_ring_pattern(settings: &RingSamplingSettings) -> Result<RingPattern> {
    let seed = settings.seed.unwrap_or(DEFAULT_SEED);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let samples = sample_rings(settings, &mut rng)?;
    debug!(seed, count = samples.len(), "sampled rings");
    Ok(RingPattern { seed, samples })
}

/// Samples every ring in ascending order from the given random source.
pub fn sample_rings<R: Rng + ?Sized>(
    settings: &RingSamplingSettings,
    rng: &mut R,
) -> Result<Vec<RingSample>> {
    settings.validate()?;
    let mut samples = Vec::with_capacity(settings.sample_count().unwrap_or_default());
    for ring in 0..settings.ring_count {
        for _ in 0..settings.samples_per_ring {
            samples.push(RingSample::on_ring(rng, ring, settings.angle_mode));
        }
    }
    Ok(samples)
}

fn draw_angle<R: Rng + ?Sized>(rng: &mut R, mode: AngleMode) -> f64 {
    match mode {
        AngleMode::Legacy => rng.gen::<f64>() * LEGACY_ANGLE_SPAN,
        AngleMode::Uniform => rng.gen_range(0.0..std::f64::consts::TAU),
    }
}
