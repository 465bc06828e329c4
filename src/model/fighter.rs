/// Number of columns in a fighter row
pub const FIELD_COUNT: usize = 10;

/// One fighter row from a listing page
///
/// Height, weight and reach are kept as the raw tokens found on the page
/// (for example `6' 2"`, `155 lbs.`, `74.0"`). `None` marks a field the page
/// left empty or filled with the `--` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FighterRecord {
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub height: Option<String>,
    pub weight: String,
    pub reach: Option<String>,
    pub stance: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl FighterRecord {
    /// Returns the record as display cells
    ///
    /// Absent fields render as empty strings rather than a "None" marker.
    pub fn cells(&self) -> [String; FIELD_COUNT] {
        fn opt(value: &Option<String>) -> String {
            value.clone().unwrap_or_default()
        }

        [
            self.first_name.clone(),
            self.last_name.clone(),
            opt(&self.nickname),
            opt(&self.height),
            self.weight.clone(),
            opt(&self.reach),
            opt(&self.stance),
            self.wins.to_string(),
            self.losses.to_string(),
            self.draws.to_string(),
        ]
    }
}
