use super::error::GenerationError;
use super::form::{GenerationResult, Ticket};

pub enum Msg {
    UpdateDescription(String),
    /// Raw `value` of the row-count `<select>`.
    SelectRowCount(String),
    Generate,
    Completed {
        ticket: Ticket,
        outcome: Result<GenerationResult, GenerationError>,
    },
    DownloadCsv,
    Reset,
}
