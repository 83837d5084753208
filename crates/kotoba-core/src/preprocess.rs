use unicode_normalization::UnicodeNormalization;

/// Input cleanup applied by callers before a sentence reaches the lookup case
pub trait Preprocessor {
    fn process(&self, text: &str) -> String;
}

/// Leaves the sentence untouched
pub struct Passthrough;

impl Preprocessor for Passthrough {
    fn process(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Trim, NFKC-normalize and join wrapped lines (copied paragraphs)
pub struct NormalizingPreprocessor;

impl Preprocessor for NormalizingPreprocessor {
    fn process(&self, text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            return String::new();
        }

        // Full-width ASCII and half-width kana fold to their canonical forms
        let text: String = text.nfkc().collect();

        text.replace(['\n', '\r'], "").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizing_folds_width_and_lines() {
        let processed = NormalizingPreprocessor.process("  ｶﾀｶﾅ\r\nＡＢＣ  ");
        assert_eq!(processed, "カタカナABC");
    }

    #[test]
    fn test_blank_input_stays_empty() {
        assert_eq!(NormalizingPreprocessor.process(" \n "), "");
    }

    #[test]
    fn test_passthrough_keeps_text() {
        assert_eq!(Passthrough.process(" 猫 "), " 猫 ");
    }
}
