use clap::Parser;
use segeval::config::{
    DEFAULT_CORRECTION_FACTOR, DEFAULT_OUTPUT_DIR, DEFAULT_PROGRESS_INTERVAL,
    DEFAULT_STANDARD_TEXT, DEFAULT_TEST_TEXT,
};
use segeval::{
    CharSegmenter, Evaluation, EvaluationConfig, ScorerConfig, ThroughputConfig,
    WhitespaceSegmenter, report,
};
use std::path::PathBuf;

/// Scores the baseline segmenters against a standard segmentation.
#[derive(Parser, Debug)]
#[command(name = "segeval", version)]
struct Args {
    /// Raw text to segment
    #[arg(long, default_value = DEFAULT_TEST_TEXT)]
    test_text: PathBuf,

    /// Reference segmentation of the test text
    #[arg(long, default_value = DEFAULT_STANDARD_TEXT)]
    standard_text: PathBuf,

    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Also export the ranked results as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: usize,

    #[arg(long, default_value_t = DEFAULT_CORRECTION_FACTOR)]
    correction_factor: f64,

    /// Fail when the produced and standard files differ in line count
    #[arg(long)]
    strict_alignment: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = EvaluationConfig {
        test_text: args.test_text,
        standard_text: args.standard_text,
        output_dir: args.output_dir,
        throughput: ThroughputConfig {
            progress_interval: args.progress_interval,
            correction_factor: args.correction_factor,
        },
        scorer: ScorerConfig {
            strict_alignment: args.strict_alignment,
        },
    };

    let mut evaluation = Evaluation::new(config);
    evaluation
        .add_segmenter("whitespace", WhitespaceSegmenter)
        .add_segmenter("chars", CharSegmenter);

    let results = evaluation.run()?;
    report::log_summary(&results);

    if let Some(path) = args.csv {
        report::write_csv_file(path, &results)?;
    }

    Ok(())
}
