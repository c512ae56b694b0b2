use segeval::{
    CharSegmenter, EvalError, ThroughputConfig, ThroughputEvent, ThroughputRunner,
    WhitespaceSegmenter,
};
use std::fs;
use tempfile::tempdir;

fn identity(line: &str) -> String {
    line.to_string()
}

#[test]
fn test_all_blank_input_keeps_blank_lines() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "\n  \n\t\n\n").unwrap();

    let mut events: Vec<ThroughputEvent> = Vec::new();
    let throughput = ThroughputRunner::default()
        .run_files(&input, &output, &identity, &mut events)
        .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "\n\n\n\n");
    assert_eq!(throughput.total_chars, 0);
    assert_eq!(throughput.rate, 0.0);
    assert_eq!(throughput.size_bytes, 7);
}

#[test]
fn test_identity_segmenter_counts_raw_line_length() {
    let mut output: Vec<u8> = Vec::new();

    let throughput = ThroughputRunner::default()
        .run("你好 世界\n".as_bytes(), 14, &mut output, &identity, &mut ())
        .unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "你好 世界\n");
    // internal space included, unlike the scorer's reference char count
    assert_eq!(throughput.total_chars, 5);
}

#[test]
fn test_untrimmed_line_is_counted_and_segmented_as_is() {
    let mut output: Vec<u8> = Vec::new();

    let throughput = ThroughputRunner::default()
        .run("  北京大学 \n".as_bytes(), 16, &mut output, &identity, &mut ())
        .unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "  北京大学 \n");
    assert_eq!(throughput.total_chars, 7);
}

#[test]
fn test_writes_segmented_lines() {
    let mut output: Vec<u8> = Vec::new();

    ThroughputRunner::default()
        .run(
            "北京大学\n\n前来应聘\n".as_bytes(),
            26,
            &mut output,
            &CharSegmenter,
            &mut (),
        )
        .unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "北 京 大 学\n\n前 来 应 聘\n"
    );
}

#[test]
fn test_default_interval_and_factor() {
    let config = ThroughputConfig::default();
    assert_eq!(config.progress_interval, 500_000);
    assert_eq!(config.correction_factor, 2.99);

    let line = "字".repeat(250_001);
    let input = format!("{line}\n{line}\n");
    let mut events: Vec<ThroughputEvent> = Vec::new();

    ThroughputRunner::new(config)
        .run(
            input.as_bytes(),
            input.len() as u64,
            std::io::sink(),
            &WhitespaceSegmenter,
            &mut events,
        )
        .unwrap();

    let percents: Vec<f64> = events
        .iter()
        .filter_map(|e| match e {
            ThroughputEvent::Progress { percent, .. } => Some(*percent),
            _ => None,
        })
        .collect();
    assert_eq!(percents.len(), 1);
    // 3 bytes per char, so the estimate lands just under 100%
    assert!(percents[0] > 99.0 && percents[0] < 100.0);
}

#[test]
fn test_finished_event_matches_returned_measurement() {
    let mut events: Vec<ThroughputEvent> = Vec::new();

    let throughput = ThroughputRunner::default()
        .run("a b\n".as_bytes(), 4, std::io::sink(), &identity, &mut events)
        .unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0], ThroughputEvent::Started { size_bytes: 4 });
    assert_eq!(events[1], ThroughputEvent::Finished(throughput));
}

#[test]
fn test_missing_input_is_a_file_error() {
    let dir = tempdir().unwrap();
    let err = ThroughputRunner::default()
        .run_files(
            dir.path().join("missing.txt"),
            dir.path().join("out.txt"),
            &identity,
            &mut (),
        )
        .unwrap_err();

    assert!(matches!(err, EvalError::File { .. }));
}

#[test]
fn test_ideographic_space_line_is_not_blank() {
    let mut output: Vec<u8> = Vec::new();

    let throughput = ThroughputRunner::default()
        .run("\u{3000}\n".as_bytes(), 4, &mut output, &identity, &mut ())
        .unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "\u{3000}\n");
    assert_eq!(throughput.total_chars, 1);
}

#[test]
fn test_invalid_utf8_input_reports_input_path() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, [b'a', b'\n', 0xff, 0xfe, b'\n']).unwrap();

    let err = ThroughputRunner::default()
        .run_files(&input, dir.path().join("out.txt"), &identity, &mut ())
        .unwrap_err();

    match err {
        EvalError::File { path, .. } => assert_eq!(path, input),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_file_has_zero_rate() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "").unwrap();

    let mut events: Vec<ThroughputEvent> = Vec::new();
    let throughput = ThroughputRunner::default()
        .run_files(&input, &output, &identity, &mut events)
        .unwrap();

    assert_eq!(throughput.total_chars, 0);
    assert_eq!(throughput.size_bytes, 0);
    assert_eq!(throughput.rate, 0.0);
    assert!(fs::read_to_string(&output).unwrap().is_empty());
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], ThroughputEvent::Started { size_bytes: 0 });
    assert_eq!(events[1], ThroughputEvent::Finished(throughput));
}
