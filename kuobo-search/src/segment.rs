//! Chinese word segmentation.
//!
//! Entries and queries are mostly unspaced Chinese, so they are split into
//! words with the jieba dictionary before token-set comparison.

use std::sync::OnceLock;

use jieba_rs::Jieba;

/// Process-wide segmenter; the dictionary is loaded on first use.
static JIEBA: OnceLock<Jieba> = OnceLock::new();

fn jieba() -> &'static Jieba {
    JIEBA.get_or_init(|| {
        tracing::debug!("loading jieba dictionary");
        Jieba::new()
    })
}

/// Split `text` into words and re-join them with single spaces.
///
/// Uses the HMM model for words missing from the dictionary.
pub fn segment(text: &str) -> String {
    jieba().cut(text, true).join(" ")
}
