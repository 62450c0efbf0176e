//! Prints the concentric ring sampling pattern as `vec3(...)` literals.

use std::{env, io};

use anyhow::Result;
use zentools_cli::{init_tracing, parse_ring_options, run_sampling_kernel};

fn main() -> Result<()> {
    init_tracing();
    let settings = parse_ring_options(env::args().skip(1))?;
    run_sampling_kernel(&settings, io::stdout().lock())
}
