pub mod config;
pub mod error;
pub mod evaluation;
pub mod report;
pub mod result;
pub mod scorer;
pub mod segmenter;
pub mod throughput;
pub mod timing;

pub use config::{EvaluationConfig, ScorerConfig, ThroughputConfig};
pub use error::{EvalError, Result};
pub use evaluation::Evaluation;
pub use result::EvaluationResult;
pub use scorer::Scorer;
pub use segmenter::{CharSegmenter, Segmenter, WhitespaceSegmenter};
pub use throughput::{
    LogObserver, ProgressObserver, Throughput, ThroughputEvent, ThroughputRunner,
};
