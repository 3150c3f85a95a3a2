//! Types shared by the generator page and the server that backs it.
//!
//! - `requests`: the body the page posts to the generation endpoint.
//! - `model::generation`: the enumerated row counts and the reply envelope.
//! - `model::record`: generated records and the column-shape check both sides rely on.

pub mod model;
pub mod requests;
