//! Argument parsing and entry points shared by the `gauss_kernel`,
//! `sampling_kernel` and `unpretty` binaries.

use std::io::Write;

use anyhow::{anyhow, bail, Context, Result};
use tracing::info;
use zentools_core::{
    emit::{write_kernel_table, write_ring_pattern},
    generate_kernel_table, generate_ring_pattern,
    unpretty::unpretty_file,
    AngleMode, KernelTableSettings, RingSamplingSettings,
};

/// Installs a stderr subscriber so stdout carries only the generated table.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn parse_kernel_options<I>(args: I) -> Result<KernelTableSettings>
where
    I: IntoIterator<Item = String>,
{
    let mut settings = KernelTableSettings::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--size=") {
            settings.max_kernel_size = value.parse().context("invalid --size value")?;
        } else if let Some(value) = arg.strip_prefix("--variance=") {
            settings.variance = value.parse().context("invalid --variance value")?;
        } else {
            bail!("unrecognized argument: {arg}");
        }
    }
    Ok(settings)
}

pub fn parse_ring_options<I>(args: I) -> Result<RingSamplingSettings>
where
    I: IntoIterator<Item = String>,
{
    let mut settings = RingSamplingSettings::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--rings=") {
            settings.ring_count = value.parse().context("invalid --rings value")?;
        } else if let Some(value) = arg.strip_prefix("--samples=") {
            settings.samples_per_ring = value.parse().context("invalid --samples value")?;
        } else if let Some(value) = arg.strip_prefix("--seed=") {
            settings.seed = Some(parse_seed(value).context("invalid --seed value")?);
        } else if let Some(value) = arg.strip_prefix("--angles=") {
            settings.angle_mode = AngleMode::parse(value).ok_or_else(|| {
                anyhow!("invalid --angles value '{value}' (expected legacy or uniform)")
            })?;
        } else {
            bail!("unrecognized argument: {arg}");
        }
    }
    Ok(settings)
}

pub fn parse_seed(value: &str) -> Result<u64> {
    if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        u64::from_str_radix(hex, 16).context("expected hex literal")
    } else {
        value.parse().context("expected integer seed")
    }
}

pub fn run_gauss_kernel<W: Write>(settings: &KernelTableSettings, out: W) -> Result<()> {
    let table = generate_kernel_table(settings)?;
    info!(
        rows = table.rows.len(),
        variance = settings.variance,
        "generated gaussian kernel table"
    );
    write_kernel_table(&table, out).context("failed to write kernel table")
}

pub fn run_sampling_kernel<W: Write>(settings: &RingSamplingSettings, out: W) -> Result<()> {
    let pattern = generate_ring_pattern(settings)?;
    info!(
        samples = pattern.samples.len(),
        seed = %format!("0x{:X}", pattern.seed),
        angles = ?settings.angle_mode,
        "generated ring sampling pattern"
    );
    write_ring_pattern(&pattern, out).context("failed to write ring pattern")
}

/// Compacts the file named by the first argument. Without one, prints the
/// usage message to `out` and stops.
pub fn run_unpretty<I, W>(args: I, mut out: W) -> Result<()>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    let Some(filename) = args.into_iter().next() else {
        writeln!(out, "missing file name")?;
        return Ok(());
    };
    let written = unpretty_file(&filename)?;
    info!(input = %filename, output = %written.display(), "wrote compacted JSON");
    Ok(())
}
