//! Theme and style composition for the preview and exports.
//!
//! The final document is always `template(css, content)` where the CSS is
//! `base (+ dark overrides) + syntect theme CSS` for the active theme. The
//! two syntect bundles are generated once at startup and cached for the
//! process lifetime; nothing here is recomputed per keystroke.

use syntect::highlighting::ThemeSet;
use syntect::html::css_for_theme_with_class_style;
use syntect::parsing::SyntaxSet;

use super::error::Result;
use super::preview::{CODE_CLASS_STYLE, render_markdown};

/// Syntect theme used for the light CSS bundle.
const LIGHT_SYNTAX_THEME: &str = "InspiredGitHub";
/// Syntect theme used for the dark CSS bundle.
const DARK_SYNTAX_THEME: &str = "base16-ocean.dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Base CSS for markdown elements, shared by both themes.
const BASE_CSS: &str = "\
body { font-family: sans-serif; line-height: 1.6; padding: 20px; }
h1, h2, h3, h4, h5, h6 { line-height: 1.2; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 8px; }
th { background-color: #f2f2f2; }
blockquote { border-left: 4px solid #ccc; padding-left: 10px; color: #666; }
code { background-color: #f9f9f9; padding: 2px 4px; border-radius: 4px; }
.codehilite { background: #f8f8f8; border: 1px solid #ccc; padding: 10px; border-radius: 4px; overflow-x: auto; }
img { max-width: 100%; height: auto; }
";

/// Dark-mode overrides layered on top of the base CSS.
const DARK_CSS: &str = "\
body { background-color: #2b2b2b; color: #dcdcdc; }
h1, h2, h3, h4, h5, h6 { color: #ffffff; }
table { border-color: #555; }
th, td { border-color: #555; }
th { background-color: #3a3a3a; }
blockquote { border-left-color: #555; color: #aaa; }
code { background-color: #3c3c3c; color: #dcdcdc; }
.codehilite { background: #23272e; border-color: #555; }
a { color: #87ceeb; }
";

/// The two syntect CSS bundles, generated once at startup.
pub struct StyleSheets {
    light_syntax: String,
    dark_syntax: String,
}

impl StyleSheets {
    pub fn generate() -> Result<Self> {
        let themes = ThemeSet::load_defaults();
        let light_syntax =
            css_for_theme_with_class_style(&themes.themes[LIGHT_SYNTAX_THEME], CODE_CLASS_STYLE)?;
        let dark_syntax =
            css_for_theme_with_class_style(&themes.themes[DARK_SYNTAX_THEME], CODE_CLASS_STYLE)?;
        Ok(Self {
            light_syntax,
            dark_syntax,
        })
    }

    /// Full CSS bundle for the given theme.
    pub fn compose_css(&self, theme: Theme) -> String {
        match theme {
            Theme::Light => format!("{}{}", BASE_CSS, self.light_syntax),
            Theme::Dark => format!("{}{}{}", BASE_CSS, DARK_CSS, self.dark_syntax),
        }
    }
}

/// Wrap an HTML fragment in the fixed document template with inlined CSS.
pub fn wrap_document(content: &str, css: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <style>\n{css}</style>\n\
         </head>\n\
         <body>\n{content}</body>\n\
         </html>\n"
    )
}

/// The whole pipeline: (text, theme) -> self-contained HTML document.
pub fn render_document(
    text: &str,
    theme: Theme,
    sheets: &StyleSheets,
    syntaxes: &SyntaxSet,
) -> String {
    let content = render_markdown(text, syntaxes);
    wrap_document(&content, &sheets.compose_css(theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_css_differs_by_theme() {
        let sheets = StyleSheets::generate().unwrap();
        let light = sheets.compose_css(Theme::Light);
        let dark = sheets.compose_css(Theme::Dark);
        assert_ne!(light, dark);
        assert!(light.starts_with(BASE_CSS));
        assert!(dark.contains("background-color: #2b2b2b"));
        assert!(!light.contains("background-color: #2b2b2b"));
    }

    #[test]
    fn test_wrap_document_embeds_parts() {
        let doc = wrap_document("<p>hi</p>", "body { color: red; }");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<meta charset=\"utf-8\">"));
        assert!(doc.contains("body { color: red; }"));
        assert!(doc.contains("<p>hi</p>"));
    }

    #[test]
    fn test_theme_toggle_changes_only_css() {
        let sheets = StyleSheets::generate().unwrap();
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let source = "# Title\n\n```rust\nlet x = 1;\n```\n";

        let fragment = render_markdown(source, &syntaxes);
        let light = render_document(source, Theme::Light, &sheets, &syntaxes);
        let dark = render_document(source, Theme::Dark, &sheets, &syntaxes);

        // Same content fragment appears verbatim in both documents.
        assert!(light.contains(&fragment));
        assert!(dark.contains(&fragment));
        assert_ne!(light, dark);
    }

    #[test]
    fn test_render_document_is_pure() {
        let sheets = StyleSheets::generate().unwrap();
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let source = "some *markdown*";
        assert_eq!(
            render_document(source, Theme::Dark, &sheets, &syntaxes),
            render_document(source, Theme::Dark, &sheets, &syntaxes)
        );
    }

    #[test]
    fn test_theme_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
