use crate::error::{EvalError, Result};
use crate::result::EvaluationResult;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct ReportRow<'a> {
    segmenter: &'a str,
    speed: Option<f64>,
    total_line_count: usize,
    perfect_line_count: usize,
    wrong_line_count: usize,
    total_char_count: usize,
    perfect_char_count: usize,
    wrong_char_count: usize,
    perfect_line_rate: f64,
    perfect_char_rate: f64,
}

impl<'a> From<&'a EvaluationResult> for ReportRow<'a> {
    fn from(result: &'a EvaluationResult) -> Self {
        Self {
            segmenter: result.segmenter().unwrap_or(""),
            speed: result.segmentation_speed(),
            total_line_count: result.total_line_count(),
            perfect_line_count: result.perfect_line_count(),
            wrong_line_count: result.wrong_line_count(),
            total_char_count: result.total_char_count(),
            perfect_char_count: result.perfect_char_count(),
            wrong_char_count: result.wrong_char_count(),
            perfect_line_rate: result.perfect_line_rate(),
            perfect_char_rate: result.perfect_char_rate(),
        }
    }
}

pub fn log_summary(results: &[EvaluationResult]) {
    info!("========== EVALUATION SUMMARY ==========");
    for (rank, result) in results.iter().enumerate() {
        info!("#{}", rank + 1);
        for line in result.to_string().lines() {
            info!("  {}", line);
        }
    }
    info!("========================================");
}

const HEADER: [&str; 10] = [
    "segmenter",
    "speed",
    "total_line_count",
    "perfect_line_count",
    "wrong_line_count",
    "total_char_count",
    "perfect_char_count",
    "wrong_char_count",
    "perfect_line_rate",
    "perfect_char_rate",
];

/// One header row, then one row per result in the given order. The header is
/// written even when there are no results.
pub fn write_csv<W: Write>(writer: W, results: &[EvaluationResult]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADER)?;
    for result in results {
        wtr.serialize(ReportRow::from(result))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file(path: impl AsRef<Path>, results: &[EvaluationResult]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| EvalError::file(path, e))?;
    write_csv(file, results)?;
    info!("[REPORT] Wrote {} rows to '{}'", results.len(), path.display());
    Ok(())
}
