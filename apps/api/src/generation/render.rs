//! Folds the model's markdown-ish output into the HTML fragments the frontend
//! renders inline, and back to plain text for downloads.

use std::sync::OnceLock;

use regex::Regex;

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold regex"))
}

/// Converts `**bold**` spans to `<b>` tags, `---` separators to paragraph
/// breaks, and newlines to `<br>`.
pub fn clean_output(text: &str) -> String {
    let text = bold_re().replace_all(text, "<b>$1</b>");
    let text = text.replace(" --- ", "<br><br>");
    text.replace('\n', "<br>")
}

/// Reverses `clean_output` for the plain-text download.
pub fn to_plain_text(text: &str) -> String {
    text.replace("<br>", "\n")
        .replace("<b>", "")
        .replace("</b>", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_output_bold_and_newlines() {
        assert_eq!(
            clean_output("Dear **Hiring Manager**,\nI am writing"),
            "Dear <b>Hiring Manager</b>,<br>I am writing"
        );
    }

    #[test]
    fn test_clean_output_separator() {
        assert_eq!(clean_output("intro --- body"), "intro<br><br>body");
    }

    #[test]
    fn test_clean_output_multiple_bold_spans() {
        assert_eq!(
            clean_output("**a** and **b**"),
            "<b>a</b> and <b>b</b>"
        );
    }

    #[test]
    fn test_to_plain_text_reverses_markup() {
        let html = clean_output("Dear **Hiring Manager**,\nI am writing");
        assert_eq!(to_plain_text(&html), "Dear Hiring Manager,\nI am writing");
    }
}
