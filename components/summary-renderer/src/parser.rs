//! Line-scanning block parser
//!
//! Splits escaped summary text into a flat sequence of [`Block`]s. Blocks
//! never nest. Each block resolves its own inline spans as soon as it is
//! closed, so emphasis cannot leak from one block into the next.
//!
//! # Line Classification
//!
//! Every line is classified on its own, in this order:
//!
//! | Line                                  | Kind          |
//! |---------------------------------------|---------------|
//! | empty or whitespace only              | blank         |
//! | `#`..`###`, whitespace, text          | heading       |
//! | `---` (trailing whitespace allowed)   | rule          |
//! | `&gt; ` prefix                        | quote line    |
//! | `- ` prefix                           | bullet item   |
//! | ASCII digits, `. ` prefix             | numbered item |
//! | anything else                         | text          |
//!
//! The quote marker is matched in its escaped form because parsing runs on
//! text that already went through [`escape_html`](crate::security::escape_html).
//!
//! # Grouping
//!
//! Consecutive lines of the same group kind (quote, bullet, numbered, text)
//! form one block. A blank line or a line of any other kind closes the open
//! group. Headings and rules are always single-line blocks.

use crate::inline::{Inline, parse_inline};

/// Escaped form of the `> ` quote marker
const QUOTE_MARKER: &str = "&gt; ";

/// Deepest heading level recognized
const MAX_HEADING_LEVEL: usize = 3;

/// A classified block with its resolved inline content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#`, `##` or `###` heading
    Heading { level: u8, content: Vec<Inline> },
    /// `---`
    Rule,
    /// Consecutive `> ` lines
    Quote(Vec<Inline>),
    /// Consecutive `- ` lines, one entry per item
    UnorderedList(Vec<Vec<Inline>>),
    /// Consecutive `N. ` lines, one entry per item
    OrderedList(Vec<Vec<Inline>>),
    /// Consecutive text lines
    Paragraph(Vec<Inline>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Heading(u8, &'a str),
    Rule,
    Quote(&'a str),
    Bullet(&'a str),
    Numbered(&'a str),
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }
    if let Some((level, text)) = heading(line) {
        return Line::Heading(level, text);
    }
    if line.trim_end() == "---" {
        return Line::Rule;
    }
    if let Some(rest) = line.strip_prefix(QUOTE_MARKER) {
        return Line::Quote(rest);
    }
    if let Some(rest) = line.strip_prefix("- ") {
        return Line::Bullet(rest);
    }
    if let Some(rest) = numbered_item(line) {
        return Line::Numbered(rest);
    }
    Line::Text(line)
}

fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL {
        return None;
    }

    let rest = &line[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    Some((hashes as u8, text))
}

fn numbered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

/// Group currently being collected
#[derive(Debug, Default)]
enum State<'a> {
    #[default]
    Idle,
    Paragraph(Vec<&'a str>),
    Quote(Vec<&'a str>),
    Unordered(Vec<&'a str>),
    Ordered(Vec<&'a str>),
}

/// Finite-state scanner over the lines of one document
#[derive(Debug, Default)]
struct BlockParser<'a> {
    blocks: Vec<Block>,
    state: State<'a>,
}

impl<'a> BlockParser<'a> {
    fn feed(&mut self, line: &'a str) {
        let line = classify(line);

        // Same kind as the open group: extend it
        if let (Line::Quote(text), State::Quote(lines))
        | (Line::Bullet(text), State::Unordered(lines))
        | (Line::Numbered(text), State::Ordered(lines))
        | (Line::Text(text), State::Paragraph(lines)) = (line, &mut self.state)
        {
            lines.push(text);
            return;
        }

        match line {
            Line::Blank => self.close(),
            Line::Heading(level, text) => {
                self.close();
                self.blocks.push(Block::Heading {
                    level,
                    content: parse_inline(text),
                });
            }
            Line::Rule => {
                self.close();
                self.blocks.push(Block::Rule);
            }
            Line::Quote(text) => self.open(State::Quote(vec![text])),
            Line::Bullet(text) => self.open(State::Unordered(vec![text])),
            Line::Numbered(text) => self.open(State::Ordered(vec![text])),
            Line::Text(text) => self.open(State::Paragraph(vec![text])),
        }
    }

    fn open(&mut self, state: State<'a>) {
        self.close();
        self.state = state;
    }

    /// Emit the open group, if any, as a block
    fn close(&mut self) {
        let block = match std::mem::take(&mut self.state) {
            State::Idle => return,
            State::Paragraph(lines) => Block::Paragraph(parse_inline(&lines.join("\n"))),
            State::Quote(lines) => Block::Quote(parse_inline(lines.join("\n").trim())),
            State::Unordered(items) => Block::UnorderedList(list_items(&items)),
            State::Ordered(items) => Block::OrderedList(list_items(&items)),
        };
        self.blocks.push(block);
    }

    fn finish(mut self) -> Vec<Block> {
        self.close();
        self.blocks
    }
}

fn list_items(items: &[&str]) -> Vec<Vec<Inline>> {
    items.iter().map(|item| parse_inline(item.trim())).collect()
}

/// Parse escaped text into blocks
///
/// `escaped` must already have gone through
/// [`escape_html`](crate::security::escape_html) and use `\n` line endings.
/// Callers normally go through [`Renderer`](crate::renderer::Renderer), which
/// takes care of both.
///
/// # Examples
///
/// ```
/// use weekly_summary_renderer::parser::{Block, parse_blocks};
///
/// let blocks = parse_blocks("- alpha\n- beta");
/// assert!(matches!(&blocks[..], [Block::UnorderedList(items)] if items.len() == 2));
/// ```
pub fn parse_blocks(escaped: &str) -> Vec<Block> {
    let mut parser = BlockParser::default();
    for line in escaped.split('\n') {
        parser.feed(line);
    }
    parser.finish()
}
