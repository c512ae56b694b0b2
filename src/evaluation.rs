use crate::config::EvaluationConfig;
use crate::error::{EvalError, Result};
use crate::result::EvaluationResult;
use crate::scorer::Scorer;
use crate::segmenter::Segmenter;
use crate::throughput::{LogObserver, ProgressObserver, ThroughputRunner};
use crate::timing::{Timer, TimingStats};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Runs every registered segmenter over the test text, scores each output
/// against the standard text and ranks the results.
pub struct Evaluation {
    config: EvaluationConfig,
    segmenters: Vec<(String, Box<dyn Segmenter>)>,
}

fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl Evaluation {
    pub fn new(config: EvaluationConfig) -> Self {
        Self {
            config,
            segmenters: Vec::new(),
        }
    }

    pub fn add_segmenter(
        &mut self,
        name: impl Into<String>,
        segmenter: impl Segmenter + 'static,
    ) -> &mut Self {
        self.segmenters.push((name.into(), Box::new(segmenter)));
        self
    }

    /// Where the output of the segmenter registered as `name` is written.
    pub fn result_path(&self, name: &str) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}-result.txt", file_stem(name)))
    }

    pub fn run(&self) -> Result<Vec<EvaluationResult>> {
        self.run_with(&mut LogObserver)
    }

    pub fn run_with<O>(&self, observer: &mut O) -> Result<Vec<EvaluationResult>>
    where
        O: ProgressObserver + ?Sized,
    {
        let _timer = Timer::new("Evaluation::run");
        info!(
            "[EVAL] Evaluating {} segmenters on '{}'",
            self.segmenters.len(),
            self.config.test_text.display()
        );

        if self.segmenters.is_empty() {
            return Ok(Vec::new());
        }

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| EvalError::file(&self.config.output_dir, e))?;

        let runner = ThroughputRunner::new(self.config.throughput.clone());
        let scorer = Scorer::new(self.config.scorer.clone());
        let mut stats = TimingStats::new();
        let mut results = Vec::with_capacity(self.segmenters.len());

        for (name, segmenter) in &self.segmenters {
            info!("[EVAL] Segmenter '{}'", name);
            let result_path = self.result_path(name);

            let throughput = runner.run_files(
                &self.config.test_text,
                &result_path,
                &**segmenter,
                &mut *observer,
            )?;
            stats.record("segment", throughput.elapsed);

            let start = Instant::now();
            let result = scorer.score_files(&result_path, &self.config.standard_text)?;
            stats.record("score", start.elapsed());

            results.push(result.with_segmenter(name.as_str()).with_speed(throughput.rate));
        }

        results.sort_by(|a, b| a.cmp_rank(b));
        stats.log_summary();

        if let Some(best) = results.first() {
            info!(
                "[EVAL] Best: {} ({:.2}% perfect lines)",
                best.segmenter().unwrap_or("?"),
                best.perfect_line_rate()
            );
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_path_sanitizes_name() {
        let evaluation = Evaluation::new(EvaluationConfig {
            output_dir: PathBuf::from("out"),
            ..EvaluationConfig::default()
        });

        assert_eq!(
            evaluation.result_path("jieba/full mode"),
            PathBuf::from("out").join("jieba_full_mode-result.txt")
        );
    }

    #[test]
    fn test_run_without_segmenters_is_empty() {
        let evaluation = Evaluation::new(EvaluationConfig {
            test_text: PathBuf::from("does/not/exist.txt"),
            ..EvaluationConfig::default()
        });

        assert!(evaluation.run().unwrap().is_empty());
    }
}
