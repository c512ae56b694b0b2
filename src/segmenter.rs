use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // One token per ideograph/kana, runs of anything else that is neither
    // whitespace nor punctuation, one token per punctuation mark.
    static ref RE_UNIGRAM: Regex = Regex::new(
        r"(?u)[\p{Han}\p{Hiragana}\p{Katakana}]|[^\s\p{P}\p{Han}\p{Hiragana}\p{Katakana}]+|\p{P}"
    )
    .expect("valid regex");
}

/// Turns one line of raw text into whitespace-joined tokens.
pub trait Segmenter {
    fn segment(&self, line: &str) -> String;
}

impl<F> Segmenter for F
where
    F: Fn(&str) -> String,
{
    fn segment(&self, line: &str) -> String {
        self(line)
    }
}

/// Keeps the tokens already present in the line, normalizing separators to
/// single spaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, line: &str) -> String {
        line.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Unigram baseline: every CJK char is a word of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharSegmenter;

impl Segmenter for CharSegmenter {
    fn segment(&self, line: &str) -> String {
        RE_UNIGRAM
            .find_iter(line)
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_segmenter() {
        let upper = |line: &str| line.to_uppercase();
        assert_eq!(upper.segment("ab c"), "AB C");
    }

    #[test]
    fn test_whitespace_collapses_separators() {
        assert_eq!(WhitespaceSegmenter.segment("  北京 \t 大学  "), "北京 大学");
    }

    #[test]
    fn test_char_splits_han() {
        assert_eq!(CharSegmenter.segment("北京大学"), "北 京 大 学");
    }

    #[test]
    fn test_char_keeps_latin_and_digit_runs() {
        assert_eq!(
            CharSegmenter.segment("我用Rust写了2024行"),
            "我 用 Rust 写 了 2024 行"
        );
    }

    #[test]
    fn test_char_splits_punctuation() {
        assert_eq!(CharSegmenter.segment("你好，世界。"), "你 好 ， 世 界 。");
    }
}
