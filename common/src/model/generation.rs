use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::record::Record;

/// The dataset sizes a user can ask for.
///
/// On the wire a `RowCount` is the bare integer (`10`, `20`, `30` or `40`).
/// Any other integer is refused during deserialization, so a request that
/// made it through `serde` always carries one of the four sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RowCount {
    #[default]
    Ten,
    Twenty,
    Thirty,
    Forty,
}

/// Raised when an integer is not one of the enumerated row counts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("row count must be one of 10, 20, 30 or 40 (got {0})")]
pub struct InvalidRowCount(pub String);

impl RowCount {
    /// Every selectable size, in the order the form lists them.
    pub const ALL: [RowCount; 4] = [
        RowCount::Ten,
        RowCount::Twenty,
        RowCount::Thirty,
        RowCount::Forty,
    ];

    pub fn get(self) -> u32 {
        match self {
            RowCount::Ten => 10,
            RowCount::Twenty => 20,
            RowCount::Thirty => 30,
            RowCount::Forty => 40,
        }
    }
}

impl TryFrom<u32> for RowCount {
    type Error = InvalidRowCount;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        RowCount::ALL
            .into_iter()
            .find(|count| count.get() == value)
            .ok_or_else(|| InvalidRowCount(value.to_string()))
    }
}

impl From<RowCount> for u32 {
    fn from(count: RowCount) -> Self {
        count.get()
    }
}

/// Parses the value of a `<select>` option (`"10"`, `"20"`, ...).
impl FromStr for RowCount {
    type Err = InvalidRowCount;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map_err(|_| InvalidRowCount(s.to_string()))
            .and_then(RowCount::try_from)
    }
}

impl fmt::Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Body returned by the generation endpoint.
///
/// A successful reply carries `jsonData` and `csvData`; a failed one carries
/// `error` (usually alongside a non-2xx status). Every field is optional on
/// the wire so the page can decode whatever the server sent and decide what
/// it means.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct GenerateReply {
    /// Generated records, in the order the generator produced them.
    #[serde(rename = "jsonData", default, skip_serializing_if = "Option::is_none")]
    pub json_data: Option<Vec<Record>>,

    /// The same records rendered as CSV. Opaque to the page.
    #[serde(rename = "csvData", default, skip_serializing_if = "Option::is_none")]
    pub csv_data: Option<String>,

    /// Human-readable failure reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateReply {
    pub fn success(records: Vec<Record>, csv: String) -> Self {
        Self {
            json_data: Some(records),
            csv_data: Some(csv),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}
