//! Export of the rendered document.
//!
//! HTML export writes the exact output of the render pipeline to disk, so
//! an exported file shows the same content as the in-app preview. The PDF
//! path lives in `state.rs` because it drives the preview widget through
//! the toolkit's printer.

use std::path::{Path, PathBuf};

use syntect::parsing::SyntaxSet;

use super::document::write_text;
use super::error::Result;
use super::styles::{StyleSheets, Theme, render_document};

/// Render `(text, theme)` and write the self-contained HTML document.
pub fn export_html(
    path: &Path,
    text: &str,
    theme: Theme,
    sheets: &StyleSheets,
    syntaxes: &SyntaxSet,
) -> Result<()> {
    let html = render_document(text, theme, sheets, syntaxes);
    write_text(path, &html)
}

/// Suggested export target next to the source file ("notes.md" -> "notes.html").
pub fn suggest_html_path(source: Option<&Path>) -> PathBuf {
    match source {
        Some(path) => path.with_extension("html"),
        None => PathBuf::from("untitled.html"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::preview::render_markdown;

    #[test]
    fn test_export_matches_preview_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        let sheets = StyleSheets::generate().unwrap();
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let source = "# Exported\n\nplain paragraph\n";

        export_html(&path, source, Theme::Light, &sheets, &syntaxes).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let fragment = render_markdown(source, &syntaxes);
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains(&fragment));
        assert!(written.contains("<style>"));
    }

    #[test]
    fn test_export_to_bad_path_is_error() {
        let sheets = StyleSheets::generate().unwrap();
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let result = export_html(
            Path::new("/nonexistent/dir/out.html"),
            "x",
            Theme::Light,
            &sheets,
            &syntaxes,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_suggest_html_path() {
        assert_eq!(
            suggest_html_path(Some(Path::new("/docs/readme.md"))),
            PathBuf::from("/docs/readme.html")
        );
        assert_eq!(suggest_html_path(None), PathBuf::from("untitled.html"));
    }
}
