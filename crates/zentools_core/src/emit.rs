//! Text emitters producing literal data ready to paste into shader source.

use std::io::{self, Write};

use crate::gauss::KernelTable;
use crate::rings::RingPattern;

/// Writes one `  { w0, w1, ... },` line per kernel row.
pub fn write_kernel_table<W: Write>(table: &KernelTable, mut out: W) -> io::Result<()> {
    for row in &table.rows {
        let weights = row
            .weights
            .iter()
            .map(|&w| fmt_f64(w))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "  {{ {weights} }},")?;
    }
    Ok(())
}

/// Writes one `  vec3(x, y, ring),` line per sample.
pub fn write_ring_pattern<W: Write>(pattern: &RingPattern, mut out: W) -> io::Result<()> {
    for sample in &pattern.samples {
        writeln!(
            out,
            "  vec3({}, {}, {}),",
            fmt_f64(sample.position.x),
            fmt_f64(sample.position.y),
            sample.ring
        )?;
    }
    Ok(())
}

/// Shortest round-trip formatting with negative zero folded to `0`.
///
/// Magnitudes below `1e-6` switch to exponent form (`1.23e-7`), the cutoff
/// JavaScript number formatting uses, so narrow kernels do not expand into
/// long runs of zeros.
fn fmt_f64(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() < 1e-6 {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::config::KernelTableSettings;
    use crate::gauss::KernelRow;
    use crate::rings::RingSample;

    #[test]
    fn kernel_rows_are_brace_delimited() {
        let table = KernelTable {
            settings: KernelTableSettings {
                max_kernel_size: 3,
                variance: 1.0,
            },
            rows: vec![
                KernelRow {
                    radius: 0,
                    weights: vec![1.0, 0.0, 0.0],
                },
                KernelRow {
                    radius: 1,
                    weights: vec![0.5, 0.25, 0.0],
                },
            ],
        };
        let mut buf = Vec::new();
        write_kernel_table(&table, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "  { 1, 0, 0 },\n  { 0.5, 0.25, 0 },\n"
        );
    }

    #[test]
    fn tiny_weights_use_exponent_form() {
        assert_eq!(fmt_f64(1.23e-7), "1.23e-7");
        assert_eq!(fmt_f64(-4.5e-12), "-4.5e-12");
        assert_eq!(fmt_f64(1e-6), "0.000001");
        assert_eq!(fmt_f64(0.004573233083254649), "0.004573233083254649");
        assert_eq!(fmt_f64(-0.0), "0");
    }

    #[test]
    fn ring_samples_print_integer_ring_index() {
        let pattern = RingPattern {
            seed: 0,
            samples: vec![
                RingSample {
                    ring: 0,
                    position: DVec3::new(-0.0, 0.0, 0.0),
                },
                RingSample {
                    ring: 2,
                    position: DVec3::new(-1.5, 1.25, 2.0),
                },
            ],
        };
        let mut buf = Vec::new();
        write_ring_pattern(&pattern, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "  vec3(0, 0, 0),\n  vec3(-1.5, 1.25, 2),\n"
        );
    }
}
