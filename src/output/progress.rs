//! Progress bar for concurrent imports

use indicatif::{ProgressBar, ProgressStyle};

/// Template showing the bar and completed pages
///
/// `████████████████████░░░░░░░░░░░░░░░░░░░░ 13/26 (50%) eta 00:00:02`
pub const TEMPLATE_BAR_WITH_POSITION: &str =
    "{bar:40.blue} {pos:>}/{len} ({percent}%) eta {eta_precise:.blue}";

/// Fine blocks as progress characters
pub const CHARS_FINE: &str = "█▉▊▋▌▍▎▏  ";

/// Creates the page progress bar, hidden when `enabled` is false
pub fn page_progress_bar(len: u64, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::default_bar()
        .template(TEMPLATE_BAR_WITH_POSITION)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(CHARS_FINE);

    ProgressBar::new(len).with_style(style)
}
