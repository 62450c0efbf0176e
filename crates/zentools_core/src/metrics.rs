//! Numeric checks over generated tables.

use glam::DVec3;

/// Mass of a one-sided kernel row once mirrored about its centre tap.
///
/// The centre tap appears once, every other tap twice.
pub fn symmetric_mass(row: &[f64]) -> f64 {
    match row.first() {
        Some(center) => 2.0 * row.iter().sum::<f64>() - center,
        None => 0.0,
    }
}

/// Distance of a ring sample from the origin, ignoring the ring index stored in `z`.
pub fn planar_radius(sample: DVec3) -> f64 {
    sample.truncate().length()
}

/// Number of leading nonzero taps in a row.
pub fn support_len(row: &[f64]) -> usize {
    row.iter().take_while(|&&w| w != 0.0).count()
}
