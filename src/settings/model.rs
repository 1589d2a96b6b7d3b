use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::figure::DEFAULT_DPI;

pub const DEFAULT_INPUT: &str = "benchmark_results.txt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// headerless `test_type,threads,time` results file.
    pub input: PathBuf,
    /// directory the chart images are written into.
    pub output_dir: PathBuf,
    pub dpi: u32,
    pub charts: Vec<ChartSetting>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            dpi: DEFAULT_DPI,
            charts: vec![ChartSetting::insert_only(), ChartSetting::mixed()],
        }
    }
}

impl Settings {
    pub fn output_path(&self, chart: &ChartSetting) -> PathBuf {
        self.output_dir.join(&chart.file_name)
    }
}

/// A chart of every record whose `test_type` contains `pattern`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSetting {
    pub pattern: String,
    pub title: String,
    pub file_name: PathBuf,
}

impl ChartSetting {
    pub fn new(pattern: impl Into<String>, title: impl Into<String>, file_name: impl AsRef<Path>) -> Self {
        Self {
            pattern: pattern.into(),
            title: title.into(),
            file_name: file_name.as_ref().to_path_buf(),
        }
    }

    pub fn insert_only() -> Self {
        Self::new("insert", "Insert-only Benchmark", "insert_only_benchmark.png")
    }

    pub fn mixed() -> Self {
        Self::new("mixed", "Mixed Benchmark", "mixed_benchmark.png")
    }
}
