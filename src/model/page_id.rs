use std::fmt;

/// Identifies one alphabetical listing page
///
/// The set is fixed: the 26 lowercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(char);

impl PageId {
    /// Number of listing pages
    pub const COUNT: usize = 26;

    /// Creates a page identifier, returning `None` for anything but `a..=z`
    pub fn new(letter: char) -> Option<Self> {
        letter.is_ascii_lowercase().then_some(Self(letter))
    }

    /// All page identifiers in alphabetical order
    pub fn all() -> impl Iterator<Item = PageId> + Clone {
        ('a'..='z').map(PageId)
    }

    /// The letter this page lists
    pub fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
