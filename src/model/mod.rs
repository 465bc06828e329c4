//! Data model for imported fighter listings
//!
//! - `PageId`: one of the 26 listing pages, keyed by starting letter
//! - `FighterRecord`: one parsed fighter row
//! - `ResultTable`: the records of a whole run, in page-completion order

mod fighter;
mod page_id;
mod result_table;

pub use fighter::{FighterRecord, FIELD_COUNT};
pub use page_id::PageId;
pub use result_table::{ResultTable, HEADERS};
