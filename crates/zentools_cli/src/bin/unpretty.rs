//! Writes a whitespace-free copy of a JSON file to `<filename>.zenu`.

use std::{env, io};

use anyhow::Result;
use zentools_cli::{init_tracing, run_unpretty};

fn main() -> Result<()> {
    init_tracing();
    run_unpretty(env::args().skip(1), io::stdout().lock())
}
