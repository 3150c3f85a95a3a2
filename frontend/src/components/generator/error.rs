use common::model::record::ColumnMismatch;

/// Shown whenever the server gave no reason of its own.
pub const GENERIC_FAILURE: &str = "Failed to generate data";

/// Why a generation attempt ended without data.
///
/// The `Display` text is what the page shows in its error panel.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    /// The request never got an answer (network down, connection refused).
    /// The detail goes to the console only.
    #[error("{}", GENERIC_FAILURE)]
    Transport(String),

    /// Non-2xx status without an `error` field in the body.
    #[error("{}", GENERIC_FAILURE)]
    Rejected(u16),

    /// The server explained the failure; its text is shown as-is.
    #[error("{0}")]
    Backend(String),

    /// 2xx but the body could not be decoded, or lacked `jsonData`/`csvData`.
    #[error("The generation service returned an unreadable response")]
    Malformed(String),

    /// Records that do not share one set of columns.
    #[error("The generated rows are inconsistent: {0}")]
    Shape(#[from] ColumnMismatch),
}
