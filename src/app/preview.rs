//! Markdown to HTML transformation for the live preview.
//!
//! Parsing is delegated entirely to pulldown-cmark (tables, strikethrough,
//! fenced code blocks). Fenced blocks are intercepted and replaced with
//! syntect-generated classed HTML so the theme CSS can color them; the
//! styling itself lives in `styles.rs`. The transformation is a pure
//! function of the input text, so re-running it on the same text yields
//! byte-identical output.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Class style used for both code-block HTML and the generated theme CSS.
/// Must match `styles::StyleSheets::generate`.
pub const CODE_CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

/// Render Markdown source to an HTML fragment (no template, no CSS).
pub fn render_markdown(text: &str, syntaxes: &SyntaxSet) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);

    let mut events: Vec<Event> = Vec::new();
    let mut code_lang: Option<String> = None;
    let mut code_text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                code_lang = Some(match kind {
                    CodeBlockKind::Fenced(info) => fence_language(&info).to_string(),
                    CodeBlockKind::Indented => String::new(),
                });
                code_text.clear();
            }
            Event::Text(chunk) if code_lang.is_some() => {
                code_text.push_str(&chunk);
            }
            Event::End(TagEnd::CodeBlock) => {
                // An unmatched end tag can't occur; pulldown-cmark balances
                // start/end events even for unclosed fences.
                let lang = code_lang.take().unwrap_or_default();
                let block = highlight_code_block(&code_text, &lang, syntaxes);
                events.push(Event::Html(CowStr::from(block)));
            }
            other => events.push(other),
        }
    }

    let mut output = String::with_capacity(text.len() * 2);
    html::push_html(&mut output, events.into_iter());
    output
}

/// First token of a fence info string ("rust,ignore" -> "rust").
fn fence_language(info: &str) -> &str {
    info.split([' ', ',', '\t'])
        .next()
        .unwrap_or("")
        .trim()
}

/// Highlight one fenced/indented code block as classed HTML wrapped in
/// `<pre class="codehilite"><code class="language-X">`.
fn highlight_code_block(code: &str, lang: &str, syntaxes: &SyntaxSet) -> String {
    let syntax = syntaxes
        .find_syntax_by_token(lang)
        .unwrap_or_else(|| syntaxes.find_syntax_plain_text());

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntaxes, CODE_CLASS_STYLE);
    for line in LinesWithEndings::from(code) {
        // A parse failure on one line leaves that line unstyled; the block
        // still renders.
        let _ = generator.parse_html_for_line_which_includes_newline(line);
    }
    let body = generator.finalize();

    let class_attr = if lang.is_empty() {
        String::new()
    } else {
        format!(" class=\"language-{}\"", lang)
    };
    format!(
        "<pre class=\"codehilite\"><code{}>{}</code></pre>\n",
        class_attr, body
    )
}
