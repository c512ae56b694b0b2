use crate::config::ScorerConfig;
use crate::error::{EvalError, Result};
use crate::result::EvaluationResult;
use crate::timing::Timer;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Strips the ASCII control chars and spaces (`<= U+0020`) at both ends.
/// Wider Unicode spaces such as U+3000 are content, not padding.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

fn is_token_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Number of chars in `line` once every ASCII whitespace char is removed.
pub fn stripped_len(line: &str) -> usize {
    line.chars().filter(|&c| !is_token_separator(c)).count()
}

/// Whole-line exact-match scoring of a produced segmentation against a
/// reference segmentation.
///
/// Both streams are read in lockstep: line *i* of the produced stream is only
/// ever compared with line *i* of the reference. Produced lines that are blank
/// after trimming are not scored, but still consume their reference line.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScorerConfig,
}

impl Scorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    pub fn score<P, R>(&self, produced: P, reference: R) -> Result<EvaluationResult>
    where
        P: BufRead,
        R: BufRead,
    {
        self.score_lines(
            produced.lines().map(|l| l.map_err(EvalError::from)),
            reference.lines().map(|l| l.map_err(EvalError::from)),
        )
    }

    pub fn score_files(
        &self,
        produced: impl AsRef<Path>,
        reference: impl AsRef<Path>,
    ) -> Result<EvaluationResult> {
        let produced = produced.as_ref();
        let reference = reference.as_ref();
        let _timer = Timer::new("Scorer::score_files");

        info!(
            "[SCORER] Comparing '{}' against '{}'",
            produced.display(),
            reference.display()
        );

        let produced_file = File::open(produced).map_err(|e| EvalError::file(produced, e))?;
        let reference_file = File::open(reference).map_err(|e| EvalError::file(reference, e))?;

        self.score_lines(
            BufReader::new(produced_file)
                .lines()
                .map(|l| l.map_err(|e| EvalError::file(produced, e))),
            BufReader::new(reference_file)
                .lines()
                .map(|l| l.map_err(|e| EvalError::file(reference, e))),
        )
    }

    fn score_lines<P, R>(&self, produced: P, mut reference: R) -> Result<EvaluationResult>
    where
        P: Iterator<Item = Result<String>>,
        R: Iterator<Item = Result<String>>,
    {
        let mut perfect_lines = 0;
        let mut wrong_lines = 0;
        let mut perfect_chars = 0;
        let mut wrong_chars = 0;
        let mut line_no = 0;

        for produced_line in produced {
            let produced_line = produced_line?;
            line_no += 1;
            let reference_line = reference.next().transpose()?;

            let produced_line = trim_line(&produced_line);
            if produced_line.is_empty() {
                if reference_line.is_none() && self.config.strict_alignment {
                    return Err(EvalError::Misaligned { line: line_no });
                }
                continue;
            }

            let Some(reference_line) = reference_line else {
                return Err(EvalError::Misaligned { line: line_no });
            };
            let reference_line = trim_line(&reference_line);
            let chars = stripped_len(reference_line);

            if produced_line == reference_line {
                perfect_lines += 1;
                perfect_chars += chars;
            } else {
                debug!(
                    "[SCORER] line {} differs: produced '{}', reference '{}'",
                    line_no, produced_line, reference_line
                );
                wrong_lines += 1;
                wrong_chars += chars;
            }
        }

        if let Some(extra) = reference.next() {
            extra?;
            if self.config.strict_alignment {
                return Err(EvalError::Misaligned { line: line_no + 1 });
            }
            warn!(
                "[SCORER] reference has more lines than the {} produced lines, the rest is ignored",
                line_no
            );
        }

        let result = EvaluationResult::new(perfect_lines, wrong_lines, perfect_chars, wrong_chars);
        info!(
            "[SCORER] Scored {} lines: {} perfect, {} wrong",
            result.total_line_count(),
            result.perfect_line_count(),
            result.wrong_line_count()
        );
        Ok(result)
    }
}
