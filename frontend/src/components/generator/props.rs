//! Defines the properties for the `GeneratorComponent`.

use yew::prelude::*;

/// Where the page posts generation requests unless told otherwise.
pub const GENERATE_ENDPOINT: &str = "http://localhost:8000/";

/// Properties for the `GeneratorComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct GeneratorProps {
    /// URL of the generation endpoint. Every submit is a single `POST` of
    /// `{ "text", "row" }` to this address.
    #[prop_or(AttrValue::Static(GENERATE_ENDPOINT))]
    pub endpoint: AttrValue,
}
