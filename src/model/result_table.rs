use crate::model::{FighterRecord, PageId, FIELD_COUNT};

/// Column headers of the rendered table
pub const HEADERS: [&str; FIELD_COUNT] = [
    "First name",
    "Last Name",
    "Nickname",
    "Height",
    "Weight (lbs)",
    "Reach",
    "Stance",
    "Wins",
    "Losses",
    "Draws",
];

/// Records accumulated over one run
///
/// Pages are appended whole, in the order they complete. Records are never
/// modified once added.
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    rows: Vec<FighterRecord>,
    pages: Vec<(PageId, usize)>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends all records of a completed page
    pub fn push_page(&mut self, page: PageId, records: Vec<FighterRecord>) {
        self.pages.push((page, records.len()));
        self.rows.extend(records);
    }

    /// Number of fighter rows, header excluded
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[FighterRecord] {
        &self.rows
    }

    /// Completed pages with their row counts, in completion order
    pub fn pages(&self) -> &[(PageId, usize)] {
        &self.pages
    }
}
