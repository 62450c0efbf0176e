//! Prints the Gaussian blur weight table as `{ ... },` rows.

use std::{env, io};

use anyhow::Result;
use zentools_cli::{init_tracing, parse_kernel_options, run_gauss_kernel};

fn main() -> Result<()> {
    init_tracing();
    let settings = parse_kernel_options(env::args().skip(1))?;
    run_gauss_kernel(&settings, io::stdout().lock())
}
