//! # Generation Service Module
//!
//! Serves `POST /`, the endpoint the generator page talks to. The same
//! resource falls back to the embedded frontend for every other method, so
//! `GET /` still loads the page.
//!
//! ## Sub-modules:
//! - `create`: the handler, request validation and the error-to-JSON mapping.
//! - `upstream`: the `RecordSource` seam and the HTTP generator behind it.
//! - `encode`: CSV rendering of the generated records.

mod create;
mod encode;
mod upstream;

use actix_web::web::{self, post, route};
use actix_web::Resource;

use crate::services::assets::serve_embedded;

pub use create::GenerateError;
pub use upstream::{RecordSource, UpstreamGenerator};

/// Largest request body accepted, in bytes.
const MAX_REQUEST_BYTES: usize = 64 * 1024;

/// JSON extractor settings: malformed bodies and unknown row counts are
/// answered with the `{ "error": ... }` envelope instead of plain text.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_REQUEST_BYTES)
        .error_handler(|err, _req| GenerateError::InvalidRequest(err.to_string()).into())
}

/// Configures and returns the resource for `/`.
///
/// # Registered Routes:
///
/// *   **`POST /`**:
///     - **Handler**: `create::process`
///     - **Description**: Expects `{ "text": string, "row": 10|20|30|40 }`, asks the
///       upstream generator for records, and answers `{ "jsonData", "csvData" }` or
///       `{ "error" }` with a `400`/`500` status.
///
/// *   **anything else on `/`**: the embedded frontend.
pub fn configure_routes() -> Resource {
    web::resource("/")
        .app_data(json_config())
        .route(post().to(create::process))
        .default_service(route().to(serve_embedded))
}
