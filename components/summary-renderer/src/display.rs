//! Display controller for published summaries
//!
//! Fetches the week index and weekly records from a [`SummaryStore`], renders
//! the chosen record exactly once, and reports the outcome as a value the
//! page layer can show directly. Load failures become user-visible states;
//! nothing here retries.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::SummaryError;
use crate::renderer::Renderer;
use crate::summary::{AnalyzedNote, SummaryIndex, SummaryRecord, WeekEntry};

/// Message shown when a summary or the index could not be loaded
pub const COULD_NOT_LOAD_MESSAGE: &str = "Could not load this summary.";
/// Message shown when no week has been published yet
pub const NOTHING_PUBLISHED_MESSAGE: &str = "No summaries have been published yet.";

/// Source of published summaries
pub trait SummaryStore {
    /// Load the week index
    fn load_index(&self) -> Result<SummaryIndex, SummaryError>;

    /// Load one weekly record by its index file name
    fn load_record(&self, file: &str) -> Result<SummaryRecord, SummaryError>;
}

/// Summary store backed by a directory of JSON files
#[derive(Debug, Clone, Default)]
pub struct FsSummaryStore {
    config: StoreConfig,
}

impl FsSummaryStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SummaryError> {
        let display = path.display().to_string();
        let bytes = fs::read(path).map_err(|source| SummaryError::Io {
            path: display.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| SummaryError::Json {
            path: display,
            source,
        })
    }
}

/// Record file names come from `index.json`; they must stay inside the root
fn validate_file_name(file: &str) -> Result<(), SummaryError> {
    let invalid = file.is_empty()
        || file.contains('/')
        || file.contains('\\')
        || file == "."
        || file.contains("..");
    if invalid {
        return Err(SummaryError::InvalidFileName(file.to_string()));
    }
    Ok(())
}

impl SummaryStore for FsSummaryStore {
    fn load_index(&self) -> Result<SummaryIndex, SummaryError> {
        let path = self.config.index_path();
        debug!(path = %path.display(), "loading summary index");
        Self::read_json(&path)
    }

    fn load_record(&self, file: &str) -> Result<SummaryRecord, SummaryError> {
        validate_file_name(file)?;
        let path = self.config.record_path(file);
        debug!(path = %path.display(), "loading summary record");
        Self::read_json(&path)
    }
}

/// Weeks available for selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekListing {
    /// Published weeks, newest first
    Weeks(Vec<WeekEntry>),
    /// Nothing published yet
    Empty,
    /// The index could not be loaded
    Unavailable { message: String, code: u32 },
}

/// A rendered week ready for the content container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSummary {
    pub week_start: String,
    pub week_end: String,
    pub note_count: u32,
    pub generated_at: String,
    pub notes: Vec<AnalyzedNote>,
    /// HTML fragment for direct injection
    pub html: String,
}

/// Outcome of showing one week
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Rendered(RenderedSummary),
    /// Nothing published yet
    NothingPublished,
    /// The record could not be loaded
    Unavailable { message: String, code: u32 },
}

impl DisplayState {
    fn unavailable(err: &SummaryError) -> Self {
        DisplayState::Unavailable {
            message: COULD_NOT_LOAD_MESSAGE.to_string(),
            code: err.code(),
        }
    }

    /// Rendered HTML, if any
    pub fn html(&self) -> Option<&str> {
        match self {
            DisplayState::Rendered(summary) => Some(&summary.html),
            _ => None,
        }
    }
}

/// Loads summaries from a store and renders them for display
#[derive(Debug, Clone)]
pub struct DisplayController<S> {
    store: S,
    renderer: Renderer,
}

impl<S: SummaryStore> DisplayController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            renderer: Renderer::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// List published weeks, newest first
    ///
    /// A missing index means the site has never published and lists as
    /// [`WeekListing::Empty`].
    pub fn load_weeks(&self) -> WeekListing {
        match self.store.load_index() {
            Ok(index) if index.is_empty() => WeekListing::Empty,
            Ok(index) => WeekListing::Weeks(index.sorted()),
            Err(err) if err.is_not_found() => {
                debug!("no summary index found");
                WeekListing::Empty
            }
            Err(err) => {
                warn!(error = %err, code = err.code(), "could not load summary index");
                WeekListing::Unavailable {
                    message: COULD_NOT_LOAD_MESSAGE.to_string(),
                    code: err.code(),
                }
            }
        }
    }

    /// Fetch and render one week
    ///
    /// A record with neither body field renders to an empty fragment.
    pub fn show(&self, entry: &WeekEntry) -> DisplayState {
        let record = match self.store.load_record(&entry.file) {
            Ok(record) => record,
            Err(err) => {
                warn!(
                    week_start = %entry.week_start,
                    error = %err,
                    code = err.code(),
                    "could not load summary record"
                );
                return DisplayState::unavailable(&err);
            }
        };

        let html = record
            .body()
            .map(|body| self.renderer.render(body))
            .unwrap_or_default();
        debug!(
            week_start = %entry.week_start,
            html_bytes = html.len(),
            "rendered summary"
        );

        DisplayState::Rendered(RenderedSummary {
            week_start: record.week_start,
            week_end: record.week_end,
            note_count: record.note_count,
            generated_at: record.generated_at,
            notes: record.notes_analyzed,
            html,
        })
    }

    /// Fetch and render the week starting on `week_start`
    pub fn show_week(&self, week_start: &str) -> DisplayState {
        let index = match self.store.load_index() {
            Ok(index) => index,
            Err(err) if err.is_not_found() => return DisplayState::NothingPublished,
            Err(err) => {
                warn!(error = %err, code = err.code(), "could not load summary index");
                return DisplayState::unavailable(&err);
            }
        };

        match index.find(week_start) {
            Some(entry) => self.show(entry),
            None => {
                let err = SummaryError::NotFound(week_start.to_string());
                warn!(error = %err, "requested week is not in the index");
                DisplayState::unavailable(&err)
            }
        }
    }

    /// Fetch and render the most recent week
    pub fn show_latest(&self) -> DisplayState {
        match self.store.load_index() {
            Ok(index) => match index.latest() {
                Some(entry) => self.show(entry),
                None => DisplayState::NothingPublished,
            },
            Err(err) if err.is_not_found() => DisplayState::NothingPublished,
            Err(err) => {
                warn!(error = %err, code = err.code(), "could not load summary index");
                DisplayState::unavailable(&err)
            }
        }
    }
}

/// Page view state owned by the caller
///
/// Tracks the week picker sidebar and the selected week. Each user action is a
/// discrete transition.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub sidebar_open: bool,
    pub selected_week: Option<String>,
}

impl ViewState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Select a week; the sidebar closes so the summary is visible
    pub fn select_week(&mut self, week_start: impl Into<String>) {
        self.selected_week = Some(week_start.into());
        self.sidebar_open = false;
    }

    pub fn is_selected(&self, week_start: &str) -> bool {
        self.selected_week.as_deref() == Some(week_start)
    }
}
