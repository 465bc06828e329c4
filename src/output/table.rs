//! Text table rendering
//!
//! Renders the header and fighter rows as an ASCII grid whose columns are
//! sized to their widest value, followed by the summary lines.

use crate::model::{ResultTable, HEADERS};
use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use std::time::Duration;

/// Renders the fighter rows under the fixed header
///
/// Absent optional fields (nickname, height, reach, stance) are left as
/// empty cells.
pub fn render_table(results: &ResultTable) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(HEADERS);

    for record in results.rows() {
        table.add_row(record.cells());
    }

    table.to_string()
}

/// `"N Fighters retrieved!"`
pub fn summary_line(count: usize) -> String {
    format!("{} Fighters retrieved!", count)
}

/// Elapsed wall-clock time in seconds, two decimals
pub fn elapsed_line(elapsed: Duration) -> String {
    format!("Process took: {:.2} seconds", elapsed.as_secs_f64())
}

/// Line printed before a run starts
pub fn loading_banner(host: &str, sequential: bool) -> String {
    let mode = if sequential {
        "synchronously"
    } else {
        "concurrently"
    };
    format!("Loading Fighters from {} {}...", host, mode)
}

/// Renders the table followed by the count and elapsed-time lines
pub fn render_report(results: &ResultTable, elapsed: Duration) -> String {
    format!(
        "{}\n{}\n{}",
        render_table(results),
        summary_line(results.len()),
        elapsed_line(elapsed)
    )
}
