//! Published summary records and the week index
//!
//! The publishing step writes one JSON record per week plus an `index.json`
//! listing every published week. Both shapes are decoded leniently: missing
//! fields fall back to defaults so an older record still displays.

use serde::{Deserialize, Serialize};

/// A meeting note that went into a summary
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzedNote {
    pub title: String,
    pub date: String,
}

/// One week's published summary
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryRecord {
    /// First day of the week (`YYYY-MM-DD`)
    pub week_start: String,
    /// Last day of the week, inclusive
    pub week_end: String,
    pub note_count: u32,
    /// RFC 3339 timestamp of generation
    pub generated_at: String,
    /// Model that wrote the summary
    pub model: String,
    pub theme_count: u32,
    pub friction_count: u32,
    pub idea_count: u32,
    /// Structured Markdown body (preferred)
    pub summary_markdown: Option<String>,
    /// Plain-text body written by older pipelines
    pub summary: Option<String>,
    pub notes_analyzed: Vec<AnalyzedNote>,
}

impl SummaryRecord {
    /// Text to hand to the renderer
    ///
    /// Prefers the structured Markdown field and falls back to the plain
    /// text field. Blank fields count as missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekly_summary_renderer::summary::SummaryRecord;
    ///
    /// let record = SummaryRecord {
    ///     summary_markdown: Some("  ".to_string()),
    ///     summary: Some("plain".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(record.body(), Some("plain"));
    /// ```
    pub fn body(&self) -> Option<&str> {
        [&self.summary_markdown, &self.summary]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|text| !text.trim().is_empty())
    }
}

/// Entry for one week in `index.json`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekEntry {
    pub week_start: String,
    pub week_end: String,
    /// Record file name relative to the summaries directory
    pub file: String,
    pub note_count: u32,
    pub generated_at: String,
    pub theme_count: u32,
    pub friction_count: u32,
    pub idea_count: u32,
}

/// The `index.json` listing of published weeks
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryIndex {
    pub weeks: Vec<WeekEntry>,
}

impl SummaryIndex {
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Weeks ordered newest first
    ///
    /// `week_start` is an ISO date, so string order is date order.
    pub fn sorted(&self) -> Vec<WeekEntry> {
        let mut weeks = self.weeks.clone();
        weeks.sort_by(|a, b| b.week_start.cmp(&a.week_start));
        weeks
    }

    /// Most recent published week
    pub fn latest(&self) -> Option<&WeekEntry> {
        self.weeks.iter().max_by(|a, b| a.week_start.cmp(&b.week_start))
    }

    /// Entry for the week starting on `week_start`
    pub fn find(&self, week_start: &str) -> Option<&WeekEntry> {
        self.weeks.iter().find(|week| week.week_start == week_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(week_start: &str) -> WeekEntry {
        WeekEntry {
            week_start: week_start.to_string(),
            file: format!("{week_start}.json"),
            ..Default::default()
        }
    }

    #[test]
    fn test_record_decodes_published_shape() {
        let json = r#"{
            "week_start": "2026-02-09",
            "week_end": "2026-02-15",
            "note_count": 2,
            "generated_at": "2026-02-16T09:00:00+00:00",
            "model": "summary-model",
            "theme_count": 3,
            "friction_count": 1,
            "idea_count": 5,
            "summary_markdown": "\n- a",
            "notes_analyzed": [
                {"title": "Sync with Acme", "date": "2026-02-10"},
                {"title": "Partner call", "date": "2026-02-12"}
            ]
        }"#;

        let record: SummaryRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.week_start, "2026-02-09");
        assert_eq!(record.note_count, 2);
        assert_eq!(record.idea_count, 5);
        assert_eq!(record.notes_analyzed.len(), 2);
        assert_eq!(record.notes_analyzed[0].title, "Sync with Acme");
        assert_eq!(record.summary, None);
        assert_eq!(record.body(), Some("\n- a"));
    }

    #[test]
    fn test_record_missing_fields_default() {
        let record: SummaryRecord = serde_json::from_str("{}").expect("empty object");
        assert_eq!(record, SummaryRecord::default());
        assert_eq!(record.body(), None);
    }

    #[test]
    fn test_body_prefers_markdown() {
        let record = SummaryRecord {
            summary_markdown: Some("# md".to_string()),
            summary: Some("plain".to_string()),
            ..Default::default()
        };
        assert_eq!(record.body(), Some("# md"));
    }

    #[test]
    fn test_body_falls_back_to_plain_text() {
        let record = SummaryRecord {
            summary: Some("plain".to_string()),
            ..Default::default()
        };
        assert_eq!(record.body(), Some("plain"));
    }

    #[test]
    fn test_index_sorted_newest_first() {
        let index = SummaryIndex {
            weeks: vec![entry("2026-01-26"), entry("2026-02-09"), entry("2026-02-02")],
        };
        let starts: Vec<String> = index.sorted().into_iter().map(|w| w.week_start).collect();
        assert_eq!(starts, vec!["2026-02-09", "2026-02-02", "2026-01-26"]);
        assert_eq!(
            index.latest().map(|w| w.week_start.as_str()),
            Some("2026-02-09")
        );
    }

    #[test]
    fn test_index_find() {
        let index = SummaryIndex {
            weeks: vec![entry("2026-02-02"), entry("2026-02-09")],
        };
        assert_eq!(
            index.find("2026-02-02").map(|w| w.file.as_str()),
            Some("2026-02-02.json")
        );
        assert!(index.find("2025-12-29").is_none());
    }

    #[test]
    fn test_empty_index() {
        let index: SummaryIndex = serde_json::from_str(r#"{"weeks": []}"#).expect("valid");
        assert!(index.is_empty());
        assert!(index.latest().is_none());
    }
}
