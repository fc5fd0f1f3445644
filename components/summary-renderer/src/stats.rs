//! Rough per-section item counts for a summary
//!
//! The week index shows how many themes, friction points and content ideas a
//! summary lists. Counts come from the Markdown itself: every line starting
//! with `-` under a matching `## ` section counts as one item. It is a
//! heuristic over model output, not a parse; a `---` rule inside a section is
//! counted too.

use regex::Regex;
use std::sync::OnceLock;

/// Section title pattern for main themes
pub const THEMES_PATTERN: &str = "themes";
/// Section title pattern for misunderstandings and friction points
pub const FRICTION_PATTERN: &str = "misunderstanding|friction";
/// Section title pattern for content ideas
pub const IDEAS_PATTERN: &str = "content ideas";

/// Item counts shown next to each week
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SectionStats {
    pub themes: usize,
    pub friction: usize,
    pub ideas: usize,
}

impl SectionStats {
    /// Count items in the standard summary sections
    ///
    /// # Examples
    ///
    /// ```
    /// use weekly_summary_renderer::stats::SectionStats;
    ///
    /// let md = "## 2. Main Themes\n- fees\n- docs\n## 6. Content Ideas\n- post";
    /// let stats = SectionStats::from_markdown(md);
    /// assert_eq!((stats.themes, stats.friction, stats.ideas), (2, 0, 1));
    /// ```
    pub fn from_markdown(markdown: &str) -> Self {
        Self {
            themes: count_section_items(markdown, THEMES_PATTERN),
            friction: count_section_items(markdown, FRICTION_PATTERN),
            ideas: count_section_items(markdown, IDEAS_PATTERN),
        }
    }
}

fn section_header() -> Option<&'static Regex> {
    static SECTION_HEADER: OnceLock<Option<Regex>> = OnceLock::new();
    SECTION_HEADER
        .get_or_init(|| Regex::new(r"^##\s").ok())
        .as_ref()
}

/// Count bullet lines under `## ` sections whose title matches `pattern`
///
/// `pattern` is a case-insensitive regular expression searched anywhere in
/// the header line. An invalid pattern matches no section.
pub fn count_section_items(markdown: &str, pattern: &str) -> usize {
    let (Some(header), Ok(title)) = (section_header(), Regex::new(&format!("(?i){pattern}")))
    else {
        return 0;
    };

    let mut in_section = false;
    let mut count = 0;
    for line in markdown.lines() {
        if header.is_match(line) {
            in_section = title.is_match(line);
            continue;
        }
        if in_section && line.trim().starts_with('-') {
            count += 1;
        }
    }
    count
}
