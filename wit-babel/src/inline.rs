//! Inline markup rendering for item text
//!
//! Item text (emphasis, links, inline code) is handed to an [`InlineRenderer`] after the
//! bullet marker and identifier have been removed. Renderers are pure text-to-text functions
//! and return inline HTML only: no paragraph wrapper, no block elements, no line breaks. The
//! structured formatter owns the element around it.
//!
//! Structured output uses [`MarkdownInline`], backed by `comrak`. Item text is one line, but
//! CommonMark would still read some openings as blocks (`# Title` a heading, `1986. A year`
//! a list); those block markers are backslash-escaped first so they stay text.

use comrak::{markdown_to_html, Options};
use std::borrow::Cow;

/// Text-to-text rendering of already extracted item text.
pub trait InlineRenderer {
    fn render(&self, text: &str) -> String;
}

/// CommonMark inline rendering through `comrak`.
pub struct MarkdownInline {
    options: Options<'static>,
}

impl Default for MarkdownInline {
    fn default() -> Self {
        let mut options = Options::default();
        options.extension.strikethrough = true;
        Self { options }
    }
}

impl InlineRenderer for MarkdownInline {
    fn render(&self, text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            return String::new();
        }

        let html = markdown_to_html(&escape_block_start(text), &self.options);
        match html
            .trim_end()
            .strip_prefix("<p>")
            .and_then(|inner| inner.strip_suffix("</p>"))
        {
            Some(inner) if !inner.contains('\n') && !inner.contains("<p>") => inner.to_string(),
            // raw HTML blocks, link reference definitions
            _ => escape_html(text),
        }
    }
}

/// Leaves text untouched; used where no markup may be produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl InlineRenderer for PassThrough {
    fn render(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Escape the characters HTML treats as markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn ends_marker(rest: &str) -> bool {
    rest.chars().next().map_or(true, char::is_whitespace)
}

/// Backslash-escape a leading CommonMark block marker so the line parses as a paragraph.
fn escape_block_start(text: &str) -> Cow<'_, str> {
    let Some(first) = text.chars().next() else {
        return Cow::Borrowed(text);
    };

    let escape_first = match first {
        '>' => true,
        '#' => {
            let hashes = text.chars().take_while(|c| *c == '#').count();
            hashes <= 6 && ends_marker(&text[hashes..])
        }
        '-' | '+' | '*' | '_' => {
            let thematic = text
                .chars()
                .all(|c| c == first || c == ' ' || c == '\t')
                && text.chars().filter(|c| *c == first).count() >= 3;
            thematic || (first != '_' && ends_marker(&text[1..]))
        }
        '`' | '~' => text.starts_with("```") || text.starts_with("~~~"),
        '0'..='9' => {
            let digits = text.chars().take_while(char::is_ascii_digit).count();
            let rest = &text[digits..];
            let ordered = digits <= 9
                && (rest.starts_with('.') || rest.starts_with(')'))
                && ends_marker(&rest[1..]);
            if ordered {
                return Cow::Owned(format!("{}\\{}", &text[..digits], rest));
            }
            false
        }
        _ => false,
    };

    if escape_first {
        Cow::Owned(format!("\\{text}"))
    } else {
        Cow::Borrowed(text)
    }
}
