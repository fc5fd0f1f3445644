//! Weekly Summary Renderer
//!
//! This library renders the machine-generated weekly meeting-note summaries
//! published by the summary site. The core is a pure Markdown-to-HTML
//! renderer for a small, fixed Markdown convention; around it sit the record
//! model and a display controller that loads published weeks and turns them
//! into fragments ready for a page container.
//!
//! # Architecture
//!
//! The library is structured into several modules:
//! - `renderer`: Public rendering entry point and HTML emission
//! - `parser`: Line-scanning block parser
//! - `inline`: Block-scoped emphasis and code span resolution
//! - `security`: Escaping boundary for untrusted text
//! - `summary`: Published record and week index model
//! - `stats`: Per-section item counts
//! - `display`: Summary store and display controller
//! - `config`: Store configuration
//! - `error`: Errors raised while loading summaries
//!
//! # Safety
//!
//! All input text is HTML-escaped before any Markdown rule runs. The renderer
//! only ever emits its own fixed tags, so the returned fragment carries no
//! markup from the summary text itself.
//!
//! # Example
//!
//! ```rust
//! use weekly_summary_renderer::render;
//!
//! let html = render("## Main Themes\n- **Fees**\n- <script>");
//! assert_eq!(
//!     html,
//!     "<h2>Main Themes</h2>\n<ul><li><strong>Fees</strong></li><li>&lt;script&gt;</li></ul>"
//! );
//! ```

// Module declarations
pub mod config;
pub mod display;
pub mod error;
pub mod inline;
pub mod parser;
pub mod renderer;
pub mod security;
pub mod stats;
pub mod summary;

// Re-export main types for convenience
pub use config::StoreConfig;
pub use display::{DisplayController, DisplayState, FsSummaryStore, SummaryStore, ViewState};
pub use error::SummaryError;
pub use parser::Block;
pub use renderer::{Renderer, render};
pub use summary::{SummaryIndex, SummaryRecord, WeekEntry};
