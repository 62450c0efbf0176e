//! Discrete Gaussian blur weights, one row per standard deviation.
//!
//! Row `i` holds the right half (centre included) of a symmetric kernel with
//! variance `i * variance`, cut off at radius `i`. Rows are normalised so that
//! the mirrored kernel sums to one.

use anyhow::{ensure, Result};
use tracing::debug;

use crate::config::KernelTableSettings;
use crate::metrics::symmetric_mass;

/// One-sided weights of a single kernel, centre tap first.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelRow {
    pub radius: usize,
    pub weights: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KernelTable {
    pub settings: KernelTableSettings,
    pub rows: Vec<KernelRow>,
}

/// 1-D normal density. A zero `sigma` degenerates to a unit impulse at the origin.
pub fn normal_density(x: f64, sigma: f64) -> f64 {
    if sigma == 0.0 {
        return if x == 0.0 { 1.0 } else { 0.0 };
    }
    let inv = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * sigma);
    inv * (-x * x / (2.0 * sigma * sigma)).exp()
}

/// Builds the normalised row for `radius`, `size` taps wide.
pub fn kernel_row(radius: usize, size: usize, variance: f64) -> Result<KernelRow> {
    let sigma = (radius as f64 * variance).sqrt();
    let taps: Vec<f64> = (0..size)
        .map(|v| {
            if v > radius {
                0.0
            } else {
                normal_density(v as f64, sigma)
            }
        })
        .collect();

    let sum = symmetric_mass(&taps);
    ensure!(
        sum.is_finite() && sum > 0.0,
        "kernel row {radius} has degenerate mass {sum} (sigma {sigma})"
    );

    Ok(KernelRow {
        radius,
        weights: taps.into_iter().map(|w| w / sum).collect(),
    })
}

pub fn generate_kernel_table(settings: &KernelTableSettings) -> Result<KernelTable> {
    settings.validate()?;
    let size = settings.max_kernel_size;
    let rows = (0..size)
        .map(|radius| kernel_row(radius, size, settings.variance))
        .collect::<Result<Vec<_>>>()?;

    for row in &rows {
        debug!(
            radius = row.radius,
            mass = symmetric_mass(&row.weights),
            "kernel row"
        );
    }

    Ok(KernelTable {
        settings: settings.clone(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sigma_is_an_impulse() {
        assert_eq!(normal_density(0.0, 0.0), 1.0);
        assert_eq!(normal_density(1.0, 0.0), 0.0);
        assert_eq!(normal_density(-3.0, 0.0), 0.0);
    }

    #[test]
    fn density_peak_matches_closed_form() {
        let peak = normal_density(0.0, 1.0);
        assert!((peak - 0.398_942_280_401_432_7).abs() < 1e-15);
        assert!((normal_density(1.0, 2.0) - normal_density(-1.0, 2.0)).abs() < 1e-15);
    }

    #[test]
    fn radius_zero_row_is_unit_impulse() {
        let row = kernel_row(0, 8, 1.0).unwrap();
        assert_eq!(row.weights, vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_variance_collapses_every_row() {
        let settings = KernelTableSettings {
            max_kernel_size: 4,
            variance: 0.0,
        };
        let table = generate_kernel_table(&settings).unwrap();
        for row in &table.rows {
            assert_eq!(row.weights, vec![1.0, 0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn weights_decrease_away_from_center() {
        let row = kernel_row(5, 8, 1.0).unwrap();
        for pair in row.weights[..=5].windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn invalid_settings_fail_fast() {
        let settings = KernelTableSettings {
            max_kernel_size: 0,
            variance: 1.0,
        };
        assert!(generate_kernel_table(&settings).is_err());
    }

    #[test]
    fn overflowing_variance_is_rejected_not_divided_by_zero() {
        let settings = KernelTableSettings {
            max_kernel_size: 8,
            variance: 1e308,
        };
        assert!(generate_kernel_table(&settings).is_err());

        // Row 2 alone: sigma is infinite, every tap is zero.
        assert!(kernel_row(2, 8, 1e308).is_err());
    }
}
