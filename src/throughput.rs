use crate::config::ThroughputConfig;
use crate::error::{EvalError, Result};
use crate::scorer::trim_line;
use crate::segmenter::Segmenter;
use crate::timing::{Timer, rate_per_ms};
use log::info;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Outcome of one segmentation pass over an input.
#[derive(Debug, Clone, PartialEq)]
pub struct Throughput {
    /// Chars of every non-blank input line, internal spaces included
    pub total_chars: usize,
    pub size_bytes: u64,
    pub elapsed: Duration,
    /// Chars per millisecond
    pub rate: f64,
}

impl Throughput {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ThroughputEvent {
    Started { size_bytes: u64 },
    Progress { processed_chars: usize, percent: f64 },
    Finished(Throughput),
}

/// Receives the operator-facing events of a throughput run.
pub trait ProgressObserver {
    fn on_event(&mut self, event: &ThroughputEvent);
}

impl ProgressObserver for () {
    fn on_event(&mut self, _event: &ThroughputEvent) {}
}

impl ProgressObserver for Vec<ThroughputEvent> {
    fn on_event(&mut self, event: &ThroughputEvent) {
        self.push(event.clone());
    }
}

/// Writes every event to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ProgressObserver for LogObserver {
    fn on_event(&mut self, event: &ThroughputEvent) {
        match event {
            ThroughputEvent::Started { size_bytes } => {
                info!("[THROUGHPUT] size: {} bytes", size_bytes);
                info!(
                    "[THROUGHPUT] file size: {:.2} MB",
                    *size_bytes as f64 / 1024.0 / 1024.0
                );
            }
            ThroughputEvent::Progress { percent, .. } => {
                info!("[THROUGHPUT] progress: {:.0}%", percent);
            }
            ThroughputEvent::Finished(throughput) => {
                info!("[THROUGHPUT] chars: {}", throughput.total_chars);
                info!("[THROUGHPUT] elapsed: {:.0} ms", throughput.elapsed_ms());
                info!("[THROUGHPUT] speed: {:.2} chars/ms", throughput.rate);
            }
        }
    }
}

/// Estimated share of the input processed, in percent. The byte size is
/// converted to a char estimate through `correction_factor`; an empty input
/// always reports 0.
pub fn progress_percent(processed_chars: usize, size_bytes: u64, correction_factor: f64) -> f64 {
    if size_bytes == 0 {
        return 0.0;
    }
    processed_chars as f64 * correction_factor / size_bytes as f64 * 100.0
}

#[derive(Debug, Clone, Default)]
pub struct ThroughputRunner {
    config: ThroughputConfig,
}

impl ThroughputRunner {
    pub fn new(config: ThroughputConfig) -> Self {
        Self { config }
    }

    /// Segments `input` line by line into `output`.
    ///
    /// Blank lines are copied as empty lines without reaching the segmenter
    /// and count for nothing. `size_bytes` only feeds the progress estimate.
    pub fn run<R, W, S, O>(
        &self,
        input: R,
        size_bytes: u64,
        output: W,
        segmenter: &S,
        observer: &mut O,
    ) -> Result<Throughput>
    where
        R: BufRead,
        W: Write,
        S: Segmenter + ?Sized,
        O: ProgressObserver + ?Sized,
    {
        self.segment_lines(
            input.lines().map(|l| l.map_err(EvalError::from)),
            size_bytes,
            output,
            EvalError::from,
            segmenter,
            observer,
        )
    }

    pub fn run_files<S, O>(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        segmenter: &S,
        observer: &mut O,
    ) -> Result<Throughput>
    where
        S: Segmenter + ?Sized,
        O: ProgressObserver + ?Sized,
    {
        let input = input.as_ref();
        let output = output.as_ref();

        info!(
            "[THROUGHPUT] Segmenting '{}' into '{}'",
            input.display(),
            output.display()
        );

        let size_bytes = fs::metadata(input)
            .map_err(|e| EvalError::file(input, e))?
            .len();
        let reader = File::open(input).map_err(|e| EvalError::file(input, e))?;
        let writer = File::create(output).map_err(|e| EvalError::file(output, e))?;

        self.segment_lines(
            BufReader::new(reader)
                .lines()
                .map(|l| l.map_err(|e| EvalError::file(input, e))),
            size_bytes,
            BufWriter::new(writer),
            |e| EvalError::file(output, e),
            segmenter,
            observer,
        )
    }

    fn segment_lines<I, W, E, S, O>(
        &self,
        lines: I,
        size_bytes: u64,
        mut output: W,
        write_error: E,
        segmenter: &S,
        observer: &mut O,
    ) -> Result<Throughput>
    where
        I: Iterator<Item = Result<String>>,
        W: Write,
        E: Fn(io::Error) -> EvalError,
        S: Segmenter + ?Sized,
        O: ProgressObserver + ?Sized,
    {
        observer.on_event(&ThroughputEvent::Started { size_bytes });

        let timer = Timer::new("ThroughputRunner::run");
        let mut total_chars = 0;
        let mut since_report = 0;

        for line in lines {
            let line = line?;
            if trim_line(&line).is_empty() {
                output.write_all(b"\n").map_err(&write_error)?;
                continue;
            }

            let chars = line.chars().count();
            total_chars += chars;
            output
                .write_all(segmenter.segment(&line).as_bytes())
                .map_err(&write_error)?;
            output.write_all(b"\n").map_err(&write_error)?;

            since_report += chars;
            if since_report > self.config.progress_interval {
                since_report = 0;
                observer.on_event(&ThroughputEvent::Progress {
                    processed_chars: total_chars,
                    percent: progress_percent(
                        total_chars,
                        size_bytes,
                        self.config.correction_factor,
                    ),
                });
            }
        }
        output.flush().map_err(&write_error)?;

        let elapsed = timer.stop_with_rate(total_chars);
        let throughput = Throughput {
            total_chars,
            size_bytes,
            elapsed,
            rate: rate_per_ms(total_chars, elapsed),
        };
        observer.on_event(&ThroughputEvent::Finished(throughput.clone()));
        Ok(throughput)
    }
}
