use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an order is served.
///
/// On the wire this is the plain table label, with the sentinel `"Takeaway"`
/// for counter pickup. The sentinel matches case-insensitively after
/// trimming, so `" takeaway "` is takeaway too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Table {
    Dine(String),
    Takeaway,
}

impl Table {
    pub const TAKEAWAY: &'static str = "Takeaway";

    /// Parses a raw label. Returns `None` for a blank label.
    pub fn parse(raw: &str) -> Option<Table> {
        let label = raw.trim();
        if label.is_empty() {
            None
        } else if label.eq_ignore_ascii_case(Self::TAKEAWAY) {
            Some(Table::Takeaway)
        } else {
            Some(Table::Dine(label.to_string()))
        }
    }

    pub fn is_takeaway(&self) -> bool {
        matches!(self, Table::Takeaway)
    }

    pub fn label(&self) -> &str {
        match self {
            Table::Dine(label) => label,
            Table::Takeaway => Self::TAKEAWAY,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for Table {
    type Error = &'static str;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Table::parse(&raw).ok_or("table label must not be empty")
    }
}

impl From<Table> for String {
    fn from(table: Table) -> Self {
        table.label().to_string()
    }
}
