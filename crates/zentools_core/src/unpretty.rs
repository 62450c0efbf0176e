//! Strips formatting from JSON documents before they are bundled with a demo.
//!
//! Numbers go through `serde_json`'s own formatting: a float literal keeps a
//! fractional part (`1.0` stays `1.0`, `1e2` becomes `100.0`) where the older
//! JavaScript tool printed `1` and `100`. The parsed values are identical, but
//! `.zenu` bytes may differ from files produced by that tool.

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;

/// Suffix appended to the input file name.
pub const OUTPUT_EXTENSION: &str = "zenu";

/// Parses `text` as JSON and re-serialises it without whitespace. Key order is kept.
pub fn compact_json(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text).context("input is not valid JSON")?;
    serde_json::to_string(&value).context("failed to serialise JSON")
}

/// `scene.json` becomes `scene.json.zenu`.
pub fn output_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    PathBuf::from(name)
}

/// Compacts the JSON file at `path` and writes it next to the input. Returns the output path.
pub fn unpretty_file(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let compact = compact_json(&text).with_context(|| format!("failed to parse {}", path.display()))?;
    let out = output_path(path);
    fs::write(&out, compact).with_context(|| format!("failed to write {}", out.display()))?;
    Ok(out)
}
