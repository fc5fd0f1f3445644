//! Summary renderer - turns summary Markdown into an HTML fragment
//!
//! This module provides the public rendering entry point used by the site to
//! display generated weekly summaries. Input is machine-generated text that
//! follows a small Markdown convention but is not guaranteed to be clean; the
//! renderer never fails and degrades to literal text for anything it does not
//! recognize.
//!
//! # Pipeline
//!
//! 1. **Normalize**: `\r\n` and lone `\r` become `\n`
//! 2. **Escape**: `&`, `<`, `>` are escaped once, across the whole document
//! 3. **Block scan**: lines are classified and grouped into blocks
//!    (see [`parser`](crate::parser))
//! 4. **Inline spans**: each block resolves its own emphasis and code spans
//!    (see [`inline`](crate::inline))
//! 5. **Emit**: one pass over the blocks writes the fragment
//!
//! Inline resolution is scoped to a single block. A `**` that opens in one
//! paragraph can never close in the next one, and a heading or list followed
//! directly by text yields a separate paragraph for that text.
//!
//! # Output Shapes
//!
//! Blocks are joined with a single `\n`:
//!
//! ```text
//! <h2>Main Themes</h2>
//! <ul><li>alpha</li><li>beta</li></ul>
//! <p>first line<br>second line</p>
//! ```
//!
//! # Reentrancy
//!
//! Rendering holds no state, so one [`Renderer`] can be shared freely across
//! threads. Rendering is not idempotent on its own output: a second pass
//! escapes the first pass's tags. Render each raw document exactly once.

use crate::inline::{Inline, render_inline};
use crate::parser::{Block, parse_blocks};
use crate::security::escape_html;

/// Stateless summary renderer
///
/// # Usage
///
/// ```rust
/// use weekly_summary_renderer::Renderer;
///
/// let renderer = Renderer::new();
/// let html = renderer.render("# Weekly Notes\n\n- alpha\n- beta");
/// assert_eq!(html, "<h1>Weekly Notes</h1>\n<ul><li>alpha</li><li>beta</li></ul>");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render summary Markdown to an HTML fragment
    ///
    /// Empty or whitespace-only input renders to an empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use weekly_summary_renderer::Renderer;
    ///
    /// let html = Renderer::new().render("<img src=x> is **not** a tag");
    /// assert_eq!(html, "<p>&lt;img src=x&gt; is <strong>not</strong> a tag</p>");
    /// ```
    pub fn render(&self, markdown: &str) -> String {
        render_blocks(&self.parse(markdown))
    }

    /// Parse summary Markdown into blocks without emitting HTML
    ///
    /// Text inside the returned blocks is already escaped.
    pub fn parse(&self, markdown: &str) -> Vec<Block> {
        let normalized = normalize_line_endings(markdown);
        let escaped = escape_html(&normalized);
        parse_blocks(&escaped)
    }
}

/// Render summary Markdown with a default [`Renderer`]
pub fn render(markdown: &str) -> String {
    Renderer::new().render(markdown)
}

/// Write parsed blocks as an HTML fragment
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut output = String::with_capacity(blocks.len() * 64);

    for (idx, block) in blocks.iter().enumerate() {
        if idx > 0 {
            output.push('\n');
        }
        render_block(block, &mut output);
    }

    output
}

fn render_block(block: &Block, output: &mut String) {
    match block {
        Block::Heading { level, content } => {
            output.push_str(&format!("<h{level}>"));
            render_inline(content, output);
            output.push_str(&format!("</h{level}>"));
        }
        Block::Rule => output.push_str("<hr>"),
        Block::Quote(content) => {
            output.push_str("<blockquote>");
            render_inline(content, output);
            output.push_str("</blockquote>");
        }
        Block::UnorderedList(items) => render_list("ul", items, output),
        Block::OrderedList(items) => render_list("ol", items, output),
        Block::Paragraph(content) => {
            let mut inner = String::new();
            render_inline(content, &mut inner);
            output.push_str("<p>");
            output.push_str(&inner.replace('\n', "<br>"));
            output.push_str("</p>");
        }
    }
}

fn render_list(tag: &str, items: &[Vec<Inline>], output: &mut String) {
    output.push_str(&format!("<{tag}>"));
    for item in items {
        output.push_str("<li>");
        render_inline(item, output);
        output.push_str("</li>");
    }
    output.push_str(&format!("</{tag}>"));
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
