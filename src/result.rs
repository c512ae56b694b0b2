use std::cmp::Ordering;
use std::fmt;

/// Line and char level exact-match counts for one produced/reference pair.
///
/// Totals are derived at construction, so `total == perfect + wrong` holds
/// for both granularities for the lifetime of the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationResult {
    segmenter: Option<String>,
    /// Chars per millisecond, when a throughput run preceded the scoring
    segmentation_speed: Option<f64>,
    total_line_count: usize,
    perfect_line_count: usize,
    wrong_line_count: usize,
    total_char_count: usize,
    perfect_char_count: usize,
    wrong_char_count: usize,
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

impl EvaluationResult {
    pub fn new(
        perfect_line_count: usize,
        wrong_line_count: usize,
        perfect_char_count: usize,
        wrong_char_count: usize,
    ) -> Self {
        Self {
            segmenter: None,
            segmentation_speed: None,
            total_line_count: perfect_line_count + wrong_line_count,
            perfect_line_count,
            wrong_line_count,
            total_char_count: perfect_char_count + wrong_char_count,
            perfect_char_count,
            wrong_char_count,
        }
    }

    pub fn with_segmenter(mut self, name: impl Into<String>) -> Self {
        self.segmenter = Some(name.into());
        self
    }

    pub fn with_speed(mut self, chars_per_ms: f64) -> Self {
        self.segmentation_speed = Some(chars_per_ms);
        self
    }

    pub fn segmenter(&self) -> Option<&str> {
        self.segmenter.as_deref()
    }

    pub fn segmentation_speed(&self) -> Option<f64> {
        self.segmentation_speed
    }

    pub fn total_line_count(&self) -> usize {
        self.total_line_count
    }

    pub fn perfect_line_count(&self) -> usize {
        self.perfect_line_count
    }

    pub fn wrong_line_count(&self) -> usize {
        self.wrong_line_count
    }

    pub fn total_char_count(&self) -> usize {
        self.total_char_count
    }

    pub fn perfect_char_count(&self) -> usize {
        self.perfect_char_count
    }

    pub fn wrong_char_count(&self) -> usize {
        self.wrong_char_count
    }

    pub fn perfect_line_rate(&self) -> f64 {
        percent(self.perfect_line_count, self.total_line_count)
    }

    pub fn wrong_line_rate(&self) -> f64 {
        percent(self.wrong_line_count, self.total_line_count)
    }

    pub fn perfect_char_rate(&self) -> f64 {
        percent(self.perfect_char_count, self.total_char_count)
    }

    pub fn wrong_char_rate(&self) -> f64 {
        percent(self.wrong_char_count, self.total_char_count)
    }

    /// Best first: higher perfect-line rate, then higher perfect-char rate.
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        other
            .perfect_line_rate()
            .partial_cmp(&self.perfect_line_rate())
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                other
                    .perfect_char_rate()
                    .partial_cmp(&self.perfect_char_rate())
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.segmenter {
            writeln!(f, "segmenter: {}", name)?;
        }
        if let Some(speed) = self.segmentation_speed {
            writeln!(f, "speed: {:.2} chars/ms", speed)?;
        }
        writeln!(f, "lines: {}", self.total_line_count)?;
        writeln!(
            f,
            "  perfect: {} ({:.2}%)",
            self.perfect_line_count,
            self.perfect_line_rate()
        )?;
        writeln!(
            f,
            "  wrong: {} ({:.2}%)",
            self.wrong_line_count,
            self.wrong_line_rate()
        )?;
        writeln!(f, "chars: {}", self.total_char_count)?;
        writeln!(
            f,
            "  perfect: {} ({:.2}%)",
            self.perfect_char_count,
            self.perfect_char_rate()
        )?;
        write!(
            f,
            "  wrong: {} ({:.2}%)",
            self.wrong_char_count,
            self.wrong_char_rate()
        )
    }
}
