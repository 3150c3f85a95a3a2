//! The generation form controller.
//!
//! `GeneratorForm` owns the form input and a single `Phase` value describing
//! where the page is in the request lifecycle. It knows nothing about the
//! DOM or the network: `update.rs` asks it for a `PendingRequest`, performs
//! the call, and hands the outcome back through `complete`.
//!
//! Every accepted submit takes a new `Ticket`. A completion is only applied
//! when it carries the ticket of the request currently in flight, so a reply
//! that arrives after a reset (or after a newer submit) is dropped instead of
//! overwriting fresher state.

use common::model::generation::{GenerateReply, RowCount};
use common::model::record::{uniform_columns, Record};
use common::requests::GenerateRequest;

use super::error::GenerationError;

/// How many records the preview table shows.
pub const PREVIEW_ROWS: usize = 5;

/// Identifies one accepted submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Data returned by a successful generation.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationResult {
    /// Row count the request asked for; used to name the export.
    pub requested: RowCount,
    /// Column names of the first record, in order.
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
    /// CSV produced by the server, passed through untouched.
    pub csv: String,
}

impl GenerationResult {
    /// The records shown in the preview table.
    pub fn preview_rows(&self) -> &[Record] {
        &self.rows[..self.rows.len().min(PREVIEW_ROWS)]
    }

    /// Cell text of `row` in column order. A missing cell renders empty.
    pub fn cells<'a>(&'a self, row: &'a Record) -> impl Iterator<Item = String> + 'a {
        self.columns
            .iter()
            .map(move |column| row.get(column).map(ToString::to_string).unwrap_or_default())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Idle,
    InFlight { ticket: Ticket },
    Succeeded(GenerationResult),
    Failed(String),
}

/// A request the controller has accepted and the caller must now send.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRequest {
    pub ticket: Ticket,
    pub request: GenerateRequest,
}

/// What `complete` did with an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// A CSV file ready to hand to the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
}

impl CsvExport {
    pub const MIME_TYPE: &'static str = "text/csv;charset=utf-8;";
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorForm {
    description: String,
    row_count: RowCount,
    phase: Phase,
    last_ticket: u64,
}

impl Default for GeneratorForm {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorForm {
    pub fn new() -> Self {
        Self {
            description: String::new(),
            row_count: RowCount::default(),
            phase: Phase::Idle,
            last_ticket: 0,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    pub fn row_count(&self) -> RowCount {
        self.row_count
    }

    pub fn set_row_count(&mut self, row_count: RowCount) {
        self.row_count = row_count;
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, Phase::InFlight { .. })
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match &self.phase {
            Phase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the Generate control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_in_flight() && !self.description.trim().is_empty()
    }

    /// Moves to `InFlight` and returns the request to send, or `None` when
    /// the description is blank or another request is outstanding.
    pub fn begin_submit(&mut self) -> Option<PendingRequest> {
        if !self.can_submit() {
            return None;
        }

        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        self.phase = Phase::InFlight { ticket };

        Some(PendingRequest {
            ticket,
            request: GenerateRequest {
                text: self.description.clone(),
                row: self.row_count,
            },
        })
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns `Completion::Stale` and leaves the form untouched when that
    /// request is no longer the one in flight.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<GenerationResult, GenerationError>,
    ) -> Completion {
        match self.phase {
            Phase::InFlight { ticket: current } if current == ticket => {
                self.phase = match outcome {
                    Ok(result) => Phase::Succeeded(result),
                    Err(err) => Phase::Failed(err.to_string()),
                };
                Completion::Applied
            }
            _ => Completion::Stale,
        }
    }

    /// Back to a blank form. Any request still outstanding becomes stale.
    pub fn reset(&mut self) {
        self.description.clear();
        self.row_count = RowCount::default();
        self.phase = Phase::Idle;
    }

    /// The CSV download for the current result, if there is one to offer.
    pub fn export(&self) -> Option<CsvExport> {
        let result = self.result()?;
        if result.csv.is_empty() {
            return None;
        }
        Some(CsvExport {
            file_name: format!("synthetic-data-{}-rows.csv", result.requested),
            contents: result.csv.clone(),
        })
    }
}

/// Turns an HTTP answer into a generation outcome.
///
/// `ok` is the transport-level success flag (2xx). `body` is `None` when the
/// body could not be decoded as a `GenerateReply`. A non-blank `error` field
/// wins over everything else, whatever the status; a blank one counts as absent.
pub fn resolve_reply(
    requested: RowCount,
    status: u16,
    ok: bool,
    body: Result<GenerateReply, String>,
) -> Result<GenerationResult, GenerationError> {
    if let Ok(GenerateReply {
        error: Some(message),
        ..
    }) = &body
    {
        if !message.trim().is_empty() {
            return Err(GenerationError::Backend(message.clone()));
        }
    }
    if !ok {
        return Err(GenerationError::Rejected(status));
    }

    let reply = body.map_err(GenerationError::Malformed)?;
    let (Some(rows), Some(csv)) = (reply.json_data, reply.csv_data) else {
        return Err(GenerationError::Malformed(
            "reply is missing jsonData or csvData".to_string(),
        ));
    };
    let columns = uniform_columns(&rows)?;

    Ok(GenerationResult {
        requested,
        columns,
        rows,
        csv,
    })
}
