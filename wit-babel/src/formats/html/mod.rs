//! Structured (HTML) output
//!
//! # Element Mapping
//!
//! | Outline construct  | HTML                                                              |
//! |--------------------|-------------------------------------------------------------------|
//! | Tree root          | `<ol class="wit-nest wit-root" id="witroot_T">` (`<ul>` unnumbered) |
//! | Nested branch      | `<ol class="wit-nest" data-wit-for="C">`                          |
//! | Item               | `<li class="wit-item" data-wit-content="C">`                      |
//! | Item identifier    | `<a name="ID"></a>` ahead of the item text                        |
//! | Item text          | `<p>` + rendered inline text (`<p>* ` + text on unnumbered levels) |
//! | Continuation       | `<br><p>` + rendered text inside the same item                    |
//! | Cross-reference    | `<a href="#ID">§1.2</a>`                                          |
//!
//! `T` is the tree index and `C` the item's content identifier, `wit-T-` followed by the
//! dash-joined numbering (`wit-1-2-1`). A nested branch points at the item owning it, which
//! is what the collapsibility script toggles. Unnumbered lists carry the literal bullet glyph
//! in their items and suppress the browser's own marker.
//!
//! Each bullet produces one single-line record. Its closing `</li>` stays pending until the
//! next bullet, continuation or run end decides whether the item is closed there or keeps a
//! child list. Lines outside lists are copied unchanged.
//!
//! `@{id}` tokens are swapped for placeholders while text goes through the inline renderer and
//! put back afterwards, so markup inside an identifier (`@{_intro_}`) cannot hide a reference
//! from the resolver.

pub mod assets;

use crate::classify::BULLET;
use crate::counters::Numbering;
use crate::formats::Formatter;
use crate::ids::ItemText;
use crate::inline::{escape_html, InlineRenderer, MarkdownInline};
use crate::nesting::{Continuation, ItemStep, ListKind, RunClose};
use crate::output::{Origin, OutputBuffer, OutputRecord};
use crate::references::REFERENCE;
use regex::Captures;

const CLOSE_LI: &str = "</li>";
const LINE_BREAK: &str = "<br>";
const UNORDERED_STYLE: &str = r#" style="list-style-type: none""#;
const PLACEHOLDER_OPEN: char = '\u{E000}';
const PLACEHOLDER_CLOSE: char = '\u{E001}';

fn close_list(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Ordered => "</ol>",
        ListKind::Unordered => "</ul>",
    }
}

fn list_tag(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Ordered => "ol",
        ListKind::Unordered => "ul",
    }
}

fn list_style(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Ordered => "",
        ListKind::Unordered => UNORDERED_STYLE,
    }
}

/// Identifier tying an item to the nested lists it owns.
pub fn content_id(tree: usize, numbering: &Numbering) -> String {
    format!("wit-{tree}-{}", numbering.dashed())
}

fn open_item(tree: usize, numbering: &Numbering) -> String {
    format!(
        r#"<li class="wit-item" data-wit-content="{}">"#,
        content_id(tree, numbering)
    )
}

fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_OPEN}{index}{PLACEHOLDER_CLOSE}")
}

fn paragraph(inline: &str) -> String {
    if inline.is_empty() {
        String::new()
    } else {
        format!("<p>{inline}</p>")
    }
}

/// Formatter producing nested HTML lists.
pub struct HtmlFormatter {
    renderer: Box<dyn InlineRenderer>,
    collapsed: bool,
    numbered: bool,
}

impl HtmlFormatter {
    pub fn new(collapsed: bool) -> Self {
        Self::with_renderer(Box::new(MarkdownInline::default()), collapsed)
    }

    pub fn with_renderer(renderer: Box<dyn InlineRenderer>, collapsed: bool) -> Self {
        Self {
            renderer,
            collapsed,
            numbered: false,
        }
    }

    fn open_level(&self, step: &ItemStep, level: usize, kind: ListKind) -> String {
        let tag = list_tag(kind);
        let style = list_style(kind);
        if level == 1 {
            format!(r#"<{tag} class="wit-nest wit-root" id="witroot_{}"{style}>"#, step.tree)
        } else {
            let owner = content_id(step.tree, &step.numbering.prefix(level - 1));
            format!(r#"<{tag} class="wit-nest" data-wit-for="{owner}"{style}>"#)
        }
    }

    /// Inline-render `text` with every reference token kept verbatim.
    fn render_text(&self, text: &str) -> String {
        let mut tokens = Vec::new();
        let shielded = REFERENCE.replace_all(text, |captures: &Captures<'_>| {
            tokens.push(captures[0].to_string());
            placeholder(tokens.len() - 1)
        });

        let mut rendered = self.renderer.render(&shielded);
        for (index, token) in tokens.iter().enumerate() {
            let marker = placeholder(index);
            if !rendered.contains(&marker) {
                // the renderer swallowed a token; fall back to the escaped source text
                return escape_html(text.trim());
            }
            rendered = rendered.replace(&marker, token);
        }
        rendered
    }
}

impl Formatter for HtmlFormatter {
    fn item(&mut self, step: &ItemStep, item: &ItemText<'_>, line: usize, out: &mut OutputBuffer) {
        let mut html = String::new();

        for kind in &step.closed {
            html.push_str(close_list(*kind));
            html.push_str(CLOSE_LI);
        }

        if step.is_new_branch() && !step.starts_run() {
            // the previous item now holds the child list, it is closed later
            out.retract_close();
        }

        for (offset, kind) in step.opened.iter().enumerate() {
            let level = step.previous_depth + 1 + offset;
            html.push_str(&self.open_level(step, level, *kind));
            if level < step.depth {
                html.push_str(&open_item(step.tree, &step.numbering.prefix(level)));
            }
        }

        html.push_str(&open_item(step.tree, &step.numbering));
        if let Some(id) = item.id {
            html.push_str(&format!(r#"<a name="{id}"></a>"#));
        }
        let text = self.render_text(item.text);
        let inline = match step.kind {
            ListKind::Ordered => text,
            ListKind::Unordered if text.is_empty() => BULLET.to_string(),
            ListKind::Unordered => format!("{BULLET} {text}"),
        };
        html.push_str(&paragraph(&inline));

        debug_assert!(!html.contains('\n'), "item record spans lines: {html:?}");
        out.push_item(OutputRecord::new(Origin::Line(line), html).with_pending_close(CLOSE_LI));
    }

    fn continuation(&mut self, continuation: &Continuation<'_>, line: usize, out: &mut OutputBuffer) {
        let close = out.retract_close();
        let text = format!(
            "{LINE_BREAK}{}",
            paragraph(&self.render_text(continuation.text))
        );
        debug_assert!(!text.contains('\n'), "continuation record spans lines: {text:?}");
        let mut record = OutputRecord::new(Origin::Line(line), text);
        if let Some(close) = close {
            record = record.with_pending_close(close);
        }
        out.push_item(record);
    }

    fn close_run(&mut self, close: &RunClose, out: &mut OutputBuffer) {
        self.numbered |= close.numbered;
        let tags: Vec<&str> = close.closed.iter().map(|kind| close_list(*kind)).collect();
        out.push(OutputRecord::new(Origin::Synthetic, tags.join(CLOSE_LI)));
        out.end_item();
    }

    fn finish(&mut self, out: &mut OutputBuffer) {
        if !self.numbered {
            return;
        }
        out.prepend(OutputRecord::new(Origin::Synthetic, assets::STYLESHEET));
        out.push(OutputRecord::new(
            Origin::Synthetic,
            assets::script(self.collapsed),
        ));
    }

    fn reference(&self, id: &str, section: &str) -> String {
        format!("<a href=\"#{id}\">§{section}</a>")
    }
}
