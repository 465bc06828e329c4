//! Output module for rendering import results
//!
//! This module handles:
//! - Rendering the fighter table and summary lines
//! - The progress bar shown during concurrent imports

mod progress;
mod table;

pub use progress::{page_progress_bar, CHARS_FINE, TEMPLATE_BAR_WITH_POSITION};
pub use table::{elapsed_line, loading_banner, render_report, render_table, summary_line};
