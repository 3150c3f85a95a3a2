use serde::{Deserialize, Serialize};

use crate::model::generation::RowCount;

/// Request payload for the generation endpoint.
///
/// Serialized as `{ "text": "...", "row": 10 }`. The text is sent exactly as
/// the user typed it; emptiness is checked on the trimmed value only.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Natural-language description of the dataset to synthesize.
    pub text: String,
    /// How many records to ask for.
    pub row: RowCount,
}

impl GenerateRequest {
    /// `true` when the description holds something other than whitespace.
    pub fn has_description(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
