//! Inline span resolution
//!
//! Resolves emphasis and code spans inside the text of a single block. The
//! caller hands over one block's worth of already-escaped text at a time, so
//! a marker can never pair with another marker in a different block.
//!
//! # Precedence
//!
//! Passes run in a fixed order:
//!
//! 1. `***text***` → bold + italic
//! 2. `**text**` → bold
//! 3. `*text*` → italic
//! 4. `` `text` `` → code
//!
//! Every pass is leftmost and non-greedy and needs at least one character
//! between the markers. A pass sees the spans made by earlier passes as
//! opaque siblings: it can pair markers around them, so `*the **key** point*`
//! nests bold inside italic, and it also descends into them, so
//! `**a *b* c**` nests italic inside bold. Markers without a partner stay
//! literal.
//!
//! Code runs last. A code span may swallow emphasis spans that sit between its
//! backticks at the same nesting level, so `` `a *b* c` `` yields
//! `<code>a <em>b</em> c</code>`. Spans are a tree, so the output never
//! contains crossed tags.

/// An inline node inside a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Escaped text
    Text(String),
    /// `**text**`
    Strong(Vec<Inline>),
    /// `*text*`
    Emphasis(Vec<Inline>),
    /// `***text***`
    StrongEmphasis(Vec<Inline>),
    /// `` `text` ``
    Code(Vec<Inline>),
}

impl Inline {
    /// Rebuild an emphasis container with transformed children.
    ///
    /// Text and code nodes are returned unchanged.
    fn map_children(self, f: impl FnOnce(Vec<Inline>) -> Vec<Inline>) -> Inline {
        match self {
            Inline::Strong(children) => Inline::Strong(f(children)),
            Inline::Emphasis(children) => Inline::Emphasis(f(children)),
            Inline::StrongEmphasis(children) => Inline::StrongEmphasis(f(children)),
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum EmphasisRule {
    Triple,
    Double,
    Single,
}

impl EmphasisRule {
    const ORDER: [EmphasisRule; 3] = [
        EmphasisRule::Triple,
        EmphasisRule::Double,
        EmphasisRule::Single,
    ];

    /// Number of `*` in each marker
    fn marker_len(self) -> usize {
        match self {
            EmphasisRule::Triple => 3,
            EmphasisRule::Double => 2,
            EmphasisRule::Single => 1,
        }
    }

    fn wrap(self, children: Vec<Inline>) -> Inline {
        match self {
            EmphasisRule::Triple => Inline::StrongEmphasis(children),
            EmphasisRule::Double => Inline::Strong(children),
            EmphasisRule::Single => Inline::Emphasis(children),
        }
    }
}

/// Resolve the inline spans of one block's escaped text
///
/// # Examples
///
/// ```
/// use weekly_summary_renderer::inline::{Inline, parse_inline};
///
/// let spans = parse_inline("a **b** c");
/// assert_eq!(
///     spans,
///     vec![
///         Inline::Text("a ".to_string()),
///         Inline::Strong(vec![Inline::Text("b".to_string())]),
///         Inline::Text(" c".to_string()),
///     ]
/// );
/// ```
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    push_text(&mut nodes, text);

    for rule in EmphasisRule::ORDER {
        nodes = apply_emphasis(nodes, rule);
    }
    apply_code(nodes)
}

/// Write inline nodes as HTML
///
/// Text is written as-is; it was escaped before parsing.
pub fn render_inline(nodes: &[Inline], output: &mut String) {
    for node in nodes {
        match node {
            Inline::Text(text) => output.push_str(text),
            Inline::Strong(children) => {
                output.push_str("<strong>");
                render_inline(children, output);
                output.push_str("</strong>");
            }
            Inline::Emphasis(children) => {
                output.push_str("<em>");
                render_inline(children, output);
                output.push_str("</em>");
            }
            Inline::StrongEmphasis(children) => {
                output.push_str("<strong><em>");
                render_inline(children, output);
                output.push_str("</em></strong>");
            }
            Inline::Code(children) => {
                output.push_str("<code>");
                render_inline(children, output);
                output.push_str("</code>");
            }
        }
    }
}

/// Append text, merging with a trailing text node
fn push_text(nodes: &mut Vec<Inline>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Text(last)) = nodes.last_mut() {
        last.push_str(text);
    } else {
        nodes.push(Inline::Text(text.to_string()));
    }
}

/// One sibling-level unit seen by an emphasis pass
enum Unit {
    Char(char),
    Node(Inline),
}

fn unitize(nodes: Vec<Inline>) -> Vec<Unit> {
    let mut units = Vec::new();
    for node in nodes {
        match node {
            Inline::Text(text) => units.extend(text.chars().map(Unit::Char)),
            other => units.push(Unit::Node(other)),
        }
    }
    units
}

fn is_marker(units: &[Unit], at: usize, len: usize) -> bool {
    units
        .get(at..at + len)
        .is_some_and(|run| run.iter().all(|unit| matches!(unit, Unit::Char('*'))))
}

/// Pair markers leftmost-first, closing each at the nearest marker that
/// leaves at least one unit between the two.
fn pair_markers(units: &[Unit], len: usize) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut idx = 0;
    while idx < units.len() {
        if is_marker(units, idx, len)
            && let Some(close) = (idx + len + 1..units.len()).find(|&k| is_marker(units, k, len))
        {
            spans.push((idx, close));
            idx = close + len;
            continue;
        }
        idx += 1;
    }
    spans
}

fn push_unit(nodes: &mut Vec<Inline>, unit: Unit, rule: EmphasisRule) {
    match unit {
        Unit::Char(c) => push_text(nodes, c.encode_utf8(&mut [0; 4])),
        Unit::Node(node) => nodes.push(node.map_children(|c| apply_emphasis(c, rule))),
    }
}

fn apply_emphasis(nodes: Vec<Inline>, rule: EmphasisRule) -> Vec<Inline> {
    let len = rule.marker_len();
    let units = unitize(nodes);
    let mut spans = pair_markers(&units, len).into_iter().peekable();

    let mut output = Vec::new();
    let mut open: Option<(usize, Vec<Inline>)> = None;
    let mut skip = 0;

    for (idx, unit) in units.into_iter().enumerate() {
        if skip > 0 {
            skip -= 1;
            continue;
        }

        if let Some((close, mut children)) = open.take() {
            if idx == close {
                output.push(rule.wrap(children));
                skip = len - 1;
            } else {
                push_unit(&mut children, unit, rule);
                open = Some((close, children));
            }
            continue;
        }

        if let Some(&(start, close)) = spans.peek()
            && start == idx
        {
            spans.next();
            open = Some((close, Vec::new()));
            skip = len - 1;
            continue;
        }

        push_unit(&mut output, unit, rule);
    }

    output
}

/// One sibling-level unit seen by the code pass
enum Atom {
    Tick,
    Text(String),
    Node(Inline),
}

fn atomize(nodes: Vec<Inline>) -> Vec<Atom> {
    let mut atoms = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Inline::Text(text) => {
                for (idx, segment) in text.split('`').enumerate() {
                    if idx > 0 {
                        atoms.push(Atom::Tick);
                    }
                    if !segment.is_empty() {
                        atoms.push(Atom::Text(segment.to_string()));
                    }
                }
            }
            other => atoms.push(Atom::Node(other)),
        }
    }
    atoms
}

/// Pair backticks leftmost-first. Text atoms are never empty, so any closing
/// tick two or more atoms after the opening one encloses at least one char.
fn pair_ticks(atoms: &[Atom]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut idx = 0;
    while idx < atoms.len() {
        if matches!(atoms[idx], Atom::Tick)
            && let Some(close) = (idx + 2..atoms.len()).find(|&k| matches!(atoms[k], Atom::Tick))
        {
            spans.push((idx, close));
            idx = close + 1;
            continue;
        }
        idx += 1;
    }
    spans
}

fn apply_code(nodes: Vec<Inline>) -> Vec<Inline> {
    let atoms = atomize(nodes);
    let mut spans = pair_ticks(&atoms).into_iter().peekable();

    let mut output = Vec::new();
    let mut code: Option<(usize, Vec<Inline>)> = None;

    for (idx, atom) in atoms.into_iter().enumerate() {
        if let Some((close, mut children)) = code.take() {
            if idx == close {
                output.push(Inline::Code(children));
            } else {
                match atom {
                    Atom::Tick => push_text(&mut children, "`"),
                    Atom::Text(text) => push_text(&mut children, &text),
                    Atom::Node(node) => children.push(node),
                }
                code = Some((close, children));
            }
            continue;
        }

        if let Some(&(open, close)) = spans.peek()
            && open == idx
        {
            spans.next();
            code = Some((close, Vec::new()));
            continue;
        }

        match atom {
            Atom::Tick => push_text(&mut output, "`"),
            Atom::Text(text) => push_text(&mut output, &text),
            Atom::Node(node) => output.push(node.map_children(apply_code)),
        }
    }

    output
}
