//! Show-notes extraction: paragraph text from an entry's HTML summary.
//!
//! Feed summaries are HTML fragments. Only `<p>` elements carry show notes;
//! everything from the closing-remarks paragraph onward is boilerplate.

use scraper::{Html, Selector};

/// Collect the text of every `<p>` element in `html`, in document order.
///
/// Nested paragraphs are reported individually, as the parser sees them.
pub fn paragraphs(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    let Ok(selector) = Selector::parse("p") else {
        return Vec::new();
    };
    fragment
        .select(&selector)
        .map(|p| p.text().collect::<String>())
        .collect()
}

/// Drop empty and whitespace-only paragraphs.
pub fn drop_blank(paragraphs: Vec<String>) -> Vec<String> {
    paragraphs
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect()
}

/// Keep only the paragraphs before the first one whose text is exactly
/// `marker`.
///
/// Without a marker paragraph, all paragraphs are kept.
pub fn cut_at_marker(mut paragraphs: Vec<String>, marker: &str) -> Vec<String> {
    if let Some(pos) = paragraphs.iter().position(|p| p == marker) {
        paragraphs.truncate(pos);
    }
    paragraphs
}

/// Extract the cleaned body text of a summary: paragraphs, blank ones
/// dropped, cut at `marker`, joined with newlines.
pub fn body_text(html: &str, marker: &str) -> String {
    cut_at_marker(drop_blank(paragraphs(html)), marker).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn paragraphs_in_document_order() {
        let html = "<div><p>first</p><span>skip</span><p>second <b>bold</b></p></div>";
        assert_eq!(paragraphs(html), strings(&["first", "second bold"]));
    }

    #[test]
    fn paragraphs_of_plain_text_is_empty() {
        assert!(paragraphs("no markup at all").is_empty());
    }

    #[test]
    fn drop_blank_removes_empty_and_whitespace() {
        let input = strings(&["", "a", "  ", "b"]);
        assert_eq!(drop_blank(input), strings(&["a", "b"]));
    }

    #[test]
    fn cut_at_marker_drops_marker_and_tail() {
        let input = strings(&["a", "b", "说在最后", "c"]);
        assert_eq!(cut_at_marker(input, "说在最后"), strings(&["a", "b"]));
    }

    #[test]
    fn cut_at_marker_keeps_all_without_marker() {
        let input = strings(&["a", "b"]);
        assert_eq!(cut_at_marker(input, "说在最后"), strings(&["a", "b"]));
    }

    #[test]
    fn cut_at_marker_uses_first_occurrence() {
        let input = strings(&["a", "说在最后", "b", "说在最后"]);
        assert_eq!(cut_at_marker(input, "说在最后"), strings(&["a"]));
    }

    #[test]
    fn cut_at_marker_requires_whole_paragraph() {
        let input = strings(&["a", "我们说在最后一段", "b"]);
        assert_eq!(cut_at_marker(input.clone(), "说在最后"), input);
    }

    #[test]
    fn body_text_joins_with_newlines() {
        let html = "<p>a</p><p>b</p><p>说在最后</p><p>c</p>";
        assert_eq!(body_text(html, "说在最后"), "a\nb");
    }

    #[test]
    fn body_text_without_marker() {
        assert_eq!(body_text("<p>a</p><p>b</p>", "说在最后"), "a\nb");
    }

    #[test]
    fn body_text_skips_blank_paragraphs_before_cut() {
        let html = "<p></p><p>a</p><p>  </p><p>b</p><p>说在最后</p><p>c</p>";
        assert_eq!(body_text(html, "说在最后"), "a\nb");
    }

    #[test]
    fn padded_marker_paragraph_is_kept() {
        let html = "<p>a</p><p> 说在最后 </p><p>c</p>";
        assert_eq!(body_text(html, "说在最后"), "a\n 说在最后 \nc");
    }

    #[test]
    fn cut_at_marker_requires_exact_text() {
        let input = strings(&["a", "说在最后 ", "b"]);
        assert_eq!(cut_at_marker(input.clone(), "说在最后"), input);
    }

    #[test]
    fn body_text_of_empty_summary_is_empty() {
        assert_eq!(body_text("", "说在最后"), "");
    }
}
