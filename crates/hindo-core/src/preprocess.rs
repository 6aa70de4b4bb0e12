use unicode_normalization::UnicodeNormalization;

/// Builds the key a meta row is stored and looked up under.
///
/// Stored expressions and user queries must go through the same
/// normalizer, otherwise rows like `ＣＤ` or `ｶﾞｯｺｳ` become unreachable.
pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        normalize_key(text)
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// NFKC with control characters removed and outer whitespace trimmed.
///
/// Idempotent, so already normalized keys pass through unchanged.
pub fn normalize_key(text: &str) -> String {
    text.nfkc()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}
