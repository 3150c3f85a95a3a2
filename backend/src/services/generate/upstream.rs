//! The external generator that actually synthesizes records.
//!
//! The endpoint only orchestrates: it forwards the page's request to a
//! `RecordSource` and post-processes what comes back. `UpstreamGenerator` is
//! the production source, a plain HTTP service answering a JSON array of flat
//! records for `POST { "text", "row" }`.

use async_trait::async_trait;
use common::model::record::Record;
use common::requests::GenerateRequest;
use log::debug;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("could not reach the generator: {0}")]
    Request(#[from] reqwest::Error),
    #[error("generator answered with status {0}")]
    Status(u16),
}

#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<Record>, UpstreamError>;
}

pub struct UpstreamGenerator {
    client: reqwest::Client,
    url: String,
}

impl UpstreamGenerator {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl RecordSource for UpstreamGenerator {
    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<Record>, UpstreamError> {
        debug!("Forwarding generation request to {}", self.url);
        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        Ok(response.json::<Vec<Record>>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::generation::RowCount;

    #[actix_web::test]
    async fn unreachable_generator_is_a_request_error() {
        // Nothing listens on the discard port.
        let source = UpstreamGenerator::new("http://127.0.0.1:9/generate");
        let request = GenerateRequest {
            text: "cars".to_string(),
            row: RowCount::Ten,
        };

        let err = source.generate(&request).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Request(_)), "{err}");
    }
}
