//! Render a published summary for inspection
//!
//! Usage: `render-corpus <summaries_dir> [week_start]`
//!
//! Prints the HTML fragment the site would show for the given week, or for
//! the latest week when none is given. Set `RUST_LOG=debug` to see store
//! activity; the default level is `info`.

use std::env;
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;
use weekly_summary_renderer::StoreConfig;
use weekly_summary_renderer::display::{DisplayController, DisplayState, FsSummaryStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <summaries_dir> [week_start]", args[0]);
        process::exit(1);
    }

    let store = FsSummaryStore::new(StoreConfig::with_root(&args[1]));
    let controller = DisplayController::new(store);

    let state = match args.get(2) {
        Some(week_start) => controller.show_week(week_start),
        None => controller.show_latest(),
    };

    match state {
        DisplayState::Rendered(summary) => {
            info!(
                week_start = %summary.week_start,
                week_end = %summary.week_end,
                notes = summary.note_count,
                "rendered week"
            );
            println!("{}", summary.html);
        }
        DisplayState::NothingPublished => {
            eprintln!("{}", weekly_summary_renderer::display::NOTHING_PUBLISHED_MESSAGE);
        }
        DisplayState::Unavailable { message, code } => {
            eprintln!("{} (error code {})", message, code);
            process::exit(1);
        }
    }
}
