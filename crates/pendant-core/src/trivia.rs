//! Documentation-comment classification over leading trivia.
//!
//! A declaration's documentation block is located by scanning the trivia
//! content for the contiguous `///` run immediately preceding the
//! declaration, never by positional index into a trivia list: the block's
//! position shifts when file-header trivia precedes the first member of a
//! container, so index-based lookups are fragile.

/// Extracts the documentation-comment run immediately preceding the
/// declaration from its leading trivia.
///
/// Lines are scanned from the end of the trivia upward: trailing
/// whitespace-only lines (the indentation before the declaration token) are
/// skipped, then contiguous `///` lines are collected. Returns the run with
/// the `///` markers stripped, joined by newlines, or `None` when no such
/// run exists.
#[must_use]
pub fn doc_comment_run(trivia: &str) -> Option<String> {
    let mut doc_lines: Vec<&str> = Vec::new();
    for line in trivia.lines().rev() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix("///") {
            doc_lines.push(rest.strip_prefix(' ').unwrap_or(rest));
        } else if trimmed.is_empty() && doc_lines.is_empty() {
            // indentation between the run and the declaration token
            continue;
        } else {
            break;
        }
    }
    if doc_lines.is_empty() {
        return None;
    }
    doc_lines.reverse();
    Some(doc_lines.join("\n"))
}

/// Returns the text enclosed by `<summary>`/`</summary>`, untrimmed.
///
/// `Some` whenever the opening marker exists; a missing closing marker
/// yields the remainder of the run. `None` means the documentation block
/// has no summary section at all.
#[must_use]
pub fn summary_body(doc: &str) -> Option<String> {
    let start = doc.find("<summary>")? + "<summary>".len();
    let rest = &doc[start..];
    let body = match rest.find("</summary>") {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(body.to_string())
}

/// Returns the body of the `<param name="...">` entry for the given
/// parameter, or `None` when no entry with that exact name exists.
#[must_use]
pub fn param_description(doc: &str, name: &str) -> Option<String> {
    let marker = format!("<param name=\"{name}\">");
    let start = doc.find(&marker)? + marker.len();
    let rest = &doc[start..];
    let body = match rest.find("</param>") {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(body.to_string())
}

/// The literal adjacent-markers probe for a blank element body
/// (`<param name="x"></param>` renders as `"><` in the raw text).
#[must_use]
pub fn has_empty_element(doc: &str) -> bool {
    doc.contains("\"><")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENTED: &str = "    /// <summary>\n    /// Stores the count.\n    /// </summary>\n    ";

    #[test]
    fn finds_doc_run_with_trailing_indentation() {
        let doc = doc_comment_run(DOCUMENTED).expect("doc run");
        assert!(doc.contains("<summary>"));
        assert!(doc.contains("Stores the count."));
        assert!(!doc.contains("///"));
    }

    #[test]
    fn ignores_file_header_trivia_before_the_run() {
        // First member of a file: a header comment and a blank line shift
        // the run's position inside the trivia.
        let trivia =
            "// Program.cs\n// Author: someone\n\n/// <summary>\n/// The widget.\n/// </summary>\n";
        let doc = doc_comment_run(trivia).expect("doc run");
        assert!(doc.contains("The widget."));
        assert!(!doc.contains("Program.cs"));
    }

    #[test]
    fn plain_comment_is_not_a_doc_run() {
        assert!(doc_comment_run("// just a note\n").is_none());
        assert!(doc_comment_run("   \n  ").is_none());
        assert!(doc_comment_run("").is_none());
    }

    #[test]
    fn run_is_interrupted_by_non_doc_line() {
        // Only the run adjacent to the declaration counts.
        let trivia = "/// <summary>old</summary>\nint unrelated;\n/// <summary>new</summary>\n";
        let doc = doc_comment_run(trivia).expect("doc run");
        assert!(doc.contains("new"));
        assert!(!doc.contains("old"));
    }

    #[test]
    fn summary_body_extraction() {
        assert_eq!(
            summary_body("<summary>\nStores the count.\n</summary>").as_deref(),
            Some("\nStores the count.\n")
        );
        assert_eq!(summary_body("<summary></summary>").as_deref(), Some(""));
        assert!(summary_body("no markers here").is_none());
    }

    #[test]
    fn summary_body_tolerates_missing_close() {
        assert_eq!(summary_body("<summary>tail").as_deref(), Some("tail"));
    }

    #[test]
    fn param_description_by_name() {
        let doc = "<summary>Adds.</summary>\n<param name=\"left\">The left operand.</param>\n<param name=\"right\"></param>";
        assert_eq!(
            param_description(doc, "left").as_deref(),
            Some("The left operand.")
        );
        assert_eq!(param_description(doc, "right").as_deref(), Some(""));
        assert!(param_description(doc, "missing").is_none());
    }

    #[test]
    fn empty_element_probe() {
        assert!(has_empty_element("<param name=\"x\"></param>"));
        assert!(!has_empty_element("<param name=\"x\">described</param>"));
    }
}
