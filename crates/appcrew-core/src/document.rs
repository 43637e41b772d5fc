use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Closing tag a complete document must end with.
pub const CLOSING_TAG: &str = "</html>";

/// Appended when model output is cut off before the closing tags.
/// Best-effort repair only; the document is not otherwise validated.
pub const REPAIR_FRAGMENT: &str = "\n</body>\n</html>";

const HTML_FENCE: &str = "```html";
const FENCE: &str = "```";

/// The cleaned, closing-tag-repaired HTML produced by the build stage,
/// together with its download filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub content: String,
    pub filename: String,
}

impl ExtractedDocument {
    /// Extract the document from raw model output and stamp its filename.
    pub fn from_raw(raw: &str, now: DateTime<Local>) -> Self {
        Self {
            content: extract(raw),
            filename: filename_for(&now),
        }
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

/// Pull the HTML document out of raw model output.
///
/// Preference order: the first ```html fenced block, then the first generic
/// fenced block, then the raw text as-is. The result is trimmed and, when it
/// does not already end with `</html>`, closed with a fixed two-line fragment.
pub fn extract(raw: &str) -> String {
    let body = if let Some((_, rest)) = raw.split_once(HTML_FENCE) {
        rest.split(FENCE).next().unwrap_or("")
    } else if raw.contains(FENCE) {
        raw.split(FENCE).nth(1).unwrap_or("")
    } else {
        raw
    };

    let mut content = body.trim().to_string();
    if !content.ends_with(CLOSING_TAG) {
        debug!("document missing closing tag, appending repair fragment");
        content.push_str(REPAIR_FRAGMENT);
    }
    content
}

/// Download filename: `app_<YYYYMMDD_HHMMSS>.html`.
pub fn filename_for(now: &DateTime<Local>) -> String {
    format!("app_{}.html", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const COMPLETE: &str = "<!DOCTYPE html>\n<html>\n<body>\n<p>hi</p>\n</body>\n</html>";

    #[test]
    fn html_fence_takes_tagged_block() {
        let raw = "Here is your app:\n```html\n<p>hi</p>\n```\nEnjoy!";
        let out = extract(raw);
        assert!(out.starts_with("<p>hi</p>"));
        assert!(out.ends_with("</body>\n</html>"));
    }

    #[test]
    fn tagged_block_with_repair_from_spec_example() {
        let out = extract("```html\n<p>hi</p>\n```");
        assert_eq!(out, "<p>hi</p>\n</body>\n</html>");
    }

    #[test]
    fn generic_fence_takes_first_block() {
        let raw = "prose\n```\n<div>x</div>\n```\ntrailing";
        let out = extract(raw);
        assert!(out.starts_with("<div>x</div>"));
    }

    #[test]
    fn html_fence_preferred_over_generic() {
        // A generic fence earlier in the text must not win over ```html.
        let raw = "```\nnot the app\n```\n```html\n<p>app</p>\n```";
        let out = extract(raw);
        assert!(out.starts_with("<p>app</p>"));
    }

    #[test]
    fn unfenced_complete_document_is_returned_trimmed() {
        let raw = format!("  \n{COMPLETE}\n  ");
        assert_eq!(extract(&raw), COMPLETE);
    }

    #[test]
    fn no_repair_when_already_closed() {
        let out = extract(COMPLETE);
        assert!(!out.ends_with("</html>\n</body>\n</html>"));
        assert_eq!(out, COMPLETE);
    }

    #[test]
    fn repair_appended_exactly_once() {
        let out = extract("<p>cut off");
        assert_eq!(out, "<p>cut off\n</body>\n</html>");
        // Running the repaired output through again must not duplicate it.
        assert_eq!(extract(&out), out);
    }

    #[test]
    fn idempotent_on_clean_input() {
        let once = extract(COMPLETE);
        assert_eq!(extract(&once), once);
    }

    #[test]
    fn empty_input_becomes_bare_repair() {
        assert_eq!(extract(""), "\n</body>\n</html>");
    }

    #[test]
    fn filename_pattern() {
        let ts = Local.with_ymd_and_hms(2026, 8, 30, 14, 5, 9).unwrap();
        let name = filename_for(&ts);
        assert_eq!(name, "app_20260830_140509.html");
        assert!(name.starts_with("app_"));
        assert!(name.ends_with(".html"));
        let digits = &name[4..name.len() - 5];
        assert_eq!(digits.len(), 15);
        for (i, c) in digits.chars().enumerate() {
            if i == 8 {
                assert_eq!(c, '_');
            } else {
                assert!(c.is_ascii_digit());
            }
        }
    }

    #[test]
    fn metrics_count_lines_and_chars() {
        let ts = Local.with_ymd_and_hms(2026, 8, 30, 0, 0, 0).unwrap();
        let doc = ExtractedDocument::from_raw(COMPLETE, ts);
        assert_eq!(doc.line_count(), 6);
        assert_eq!(doc.char_count(), COMPLETE.chars().count());
    }
}
