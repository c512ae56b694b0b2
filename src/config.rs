use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_PROGRESS_INTERVAL: usize = 500_000;

/// Empirical ratio between UTF-8 byte size and char count for CJK-heavy text.
pub const DEFAULT_CORRECTION_FACTOR: f64 = 2.99;

pub const DEFAULT_TEST_TEXT: &str = "data/test-text.txt";
pub const DEFAULT_STANDARD_TEXT: &str = "data/standard-text.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "target/segeval";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThroughputConfig {
    /// Chars consumed between two progress reports
    pub progress_interval: usize,
    pub correction_factor: f64,
}

impl Default for ThroughputConfig {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            correction_factor: DEFAULT_CORRECTION_FACTOR,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Reject any line-count difference between produced and reference
    pub strict_alignment: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Raw text fed to every segmenter
    pub test_text: PathBuf,
    /// Human-verified segmentation of `test_text`
    pub standard_text: PathBuf,
    /// Where each segmenter's output file is written
    pub output_dir: PathBuf,
    pub throughput: ThroughputConfig,
    pub scorer: ScorerConfig,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            test_text: PathBuf::from(DEFAULT_TEST_TEXT),
            standard_text: PathBuf::from(DEFAULT_STANDARD_TEXT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            throughput: ThroughputConfig::default(),
            scorer: ScorerConfig::default(),
        }
    }
}
