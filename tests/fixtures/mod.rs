#![allow(dead_code)]

use std::path::{Path, PathBuf};

use benchplot::settings::Settings;

pub const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

pub fn init_tracing() {
    once_cell::sync::Lazy::force(&benchplot::tracing::TEST_TRACING);
}

pub fn fixture_results_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/benchmark_results.txt")
}

/// Writes `rows` as a results file in `dir` and returns settings pointing at `dir`.
pub fn settings_with_results(dir: &Path, rows: &[&str]) -> anyhow::Result<Settings> {
    let input = dir.join("benchmark_results.txt");
    let mut contents = rows.join("\n");
    contents.push('\n');
    std::fs::write(&input, contents)?;

    Ok(Settings { input, output_dir: dir.to_path_buf(), ..Settings::default() })
}

/// Width and height from a PNG's IHDR chunk.
pub fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    assert!(bytes.starts_with(PNG_SIGNATURE), "not a PNG image");
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    (width, height)
}
