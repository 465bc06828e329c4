//! Listing page parser
//!
//! Turns the HTML of one alphabetical listing page into fighter records.
//! Every `<tr>` after the first two is a fighter row with at least ten
//! `<td>` cells in fixed order.

use crate::model::{FighterRecord, FIELD_COUNT};
use crate::ParseError;
use scraper::{ElementRef, Html, Selector};

/// Rows preceding the data: the column header and an empty spacer row
const HEADER_ROWS: usize = 2;

/// Placeholder the site uses for unknown measurements
const PLACEHOLDER: &str = "--";

const FIRST_NAME: usize = 0;
const LAST_NAME: usize = 1;
const NICKNAME: usize = 2;
const HEIGHT: usize = 3;
const WEIGHT: usize = 4;
const REACH: usize = 5;
const STANCE: usize = 6;
const WINS: usize = 7;
const LOSSES: usize = 8;
const DRAWS: usize = 9;

/// Parses a listing page into fighter records
///
/// # Field Rules
///
/// | Column | Source | Absent when |
/// |--------|--------|-------------|
/// | first/last name | text of the nested `<a>` | never (missing link is an error) |
/// | nickname | text of the nested `<a>` | link missing or has no text |
/// | height, reach, stance | cell text | empty or `--` |
/// | weight | cell text | never |
/// | wins, losses, draws | cell text as integer | never (non-numeric is an error) |
///
/// All values are trimmed. A single malformed row fails the whole page.
///
/// # Example
///
/// ```
/// use fightstats::crawler::parse_fighters;
///
/// let html = r#"<table>
///   <tr><th>First</th></tr>
///   <tr><td></td></tr>
///   <tr>
///     <td><a>Tom</a></td><td><a>Aaron</a></td><td><a></a></td>
///     <td>--</td><td>155 lbs.</td><td>--</td><td></td>
///     <td>5</td><td>3</td><td>0</td>
///   </tr>
/// </table>"#;
///
/// let fighters = parse_fighters(html).unwrap();
/// assert_eq!(fighters.len(), 1);
/// assert_eq!(fighters[0].last_name, "Aaron");
/// assert_eq!(fighters[0].height, None);
/// ```
pub fn parse_fighters(html: &str) -> Result<Vec<FighterRecord>, ParseError> {
    let document = Html::parse_document(html);
    let selectors = RowSelectors::new();

    document
        .select(&selectors.row)
        .enumerate()
        .skip(HEADER_ROWS)
        .map(|(index, row)| parse_row(index, row, &selectors))
        .collect()
}

struct RowSelectors {
    row: Selector,
    cell: Selector,
    link: Selector,
}

impl RowSelectors {
    fn new() -> Self {
        // Static selectors; parsing cannot fail
        Self {
            row: Selector::parse("tr").expect("valid selector"),
            cell: Selector::parse("td").expect("valid selector"),
            link: Selector::parse("a").expect("valid selector"),
        }
    }
}

fn parse_row(
    index: usize,
    row: ElementRef<'_>,
    selectors: &RowSelectors,
) -> Result<FighterRecord, ParseError> {
    let cells: Vec<ElementRef<'_>> = row.select(&selectors.cell).collect();
    if cells.len() < FIELD_COUNT {
        return Err(ParseError::MissingCells {
            row: index,
            found: cells.len(),
        });
    }

    let name = |column: usize| -> Result<String, ParseError> {
        link_text(&cells[column], selectors)
            .map(|text| text.trim().to_string())
            .ok_or(ParseError::MissingLink { row: index, column })
    };

    let count = |column: usize| -> Result<u32, ParseError> {
        let value = cell_text(&cells[column]);
        value.parse().map_err(|_| ParseError::InvalidCount {
            row: index,
            column,
            value,
        })
    };

    Ok(FighterRecord {
        first_name: name(FIRST_NAME)?,
        last_name: name(LAST_NAME)?,
        nickname: link_text(&cells[NICKNAME], selectors).map(|text| text.trim().to_string()),
        height: optional(cell_text(&cells[HEIGHT])),
        weight: cell_text(&cells[WEIGHT]),
        reach: optional(cell_text(&cells[REACH])),
        stance: optional(cell_text(&cells[STANCE])),
        wins: count(WINS)?,
        losses: count(LOSSES)?,
        draws: count(DRAWS)?,
    })
}

/// Text of the first link in a cell, `None` if there is no link or it is empty
fn link_text(cell: &ElementRef<'_>, selectors: &RowSelectors) -> Option<String> {
    let link = cell.select(&selectors.link).next()?;
    let mut parts = link.text().peekable();
    parts.peek()?;
    Some(parts.collect())
}

/// Trimmed text held directly by the cell, ignoring nested elements
fn cell_text(cell: &ElementRef<'_>) -> String {
    cell.children()
        .filter_map(|node| node.value().as_text())
        .fold(String::new(), |mut text, part| {
            text.push_str(part);
            text
        })
        .trim()
        .to_string()
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() || value == PLACEHOLDER {
        None
    } else {
        Some(value)
    }
}
