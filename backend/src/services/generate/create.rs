use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use common::model::generation::GenerateReply;
use common::model::record::{uniform_columns, ColumnMismatch};
use common::requests::GenerateRequest;
use log::{error, info, warn};

use super::encode::{records_to_csv, EncodeError};
use super::upstream::{RecordSource, UpstreamError};

/// What the page is told for every server-side failure.
pub const GENERATION_FAILED: &str = "Data could not be generated";

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The request itself is unusable; its message is returned to the caller.
    #[error("{0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("generator returned no records")]
    Empty,
    #[error(transparent)]
    Shape(#[from] ColumnMismatch),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl ResponseError for GenerateError {
    fn status_code(&self) -> StatusCode {
        match self {
            GenerateError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            GenerateError::InvalidRequest(message) => message.clone(),
            _ => GENERATION_FAILED.to_string(),
        };
        HttpResponse::build(self.status_code()).json(GenerateReply::failure(message))
    }
}

/// HTTP handler for `POST /`.
///
/// - On success: `200 OK` with `{ "jsonData": [...], "csvData": "..." }`.
/// - On failure: the `GenerateError` status with `{ "error": "..." }`.
pub async fn process(
    source: web::Data<dyn RecordSource>,
    payload: web::Json<GenerateRequest>,
) -> Result<HttpResponse, GenerateError> {
    let request = payload.into_inner();

    match generate_dataset(source.get_ref(), &request).await {
        Ok(reply) => Ok(HttpResponse::Ok().json(reply)),
        Err(err) => {
            if err.status_code().is_server_error() {
                error!("Generation of {} rows for {:?} failed: {}", request.row, request.text, err);
            } else {
                warn!("Rejected generation request: {}", err);
            }
            Err(err)
        }
    }
}

/// Asks `source` for records and packages them with their CSV rendering.
///
/// Fails when the description is blank, the generator fails or returns
/// nothing, or the records do not share one set of columns.
pub async fn generate_dataset(
    source: &dyn RecordSource,
    request: &GenerateRequest,
) -> Result<GenerateReply, GenerateError> {
    if !request.has_description() {
        return Err(GenerateError::InvalidRequest(
            "text must not be empty".to_string(),
        ));
    }

    info!("Generating {} rows for {:?}", request.row, request.text);
    let records = source.generate(request).await?;
    if records.is_empty() {
        return Err(GenerateError::Empty);
    }
    if records.len() != request.row.get() as usize {
        warn!(
            "Generator returned {} rows, {} were requested",
            records.len(),
            request.row
        );
    }

    let columns = uniform_columns(&records)?;
    let csv = records_to_csv(&columns, &records)?;
    Ok(GenerateReply::success(records, csv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::generate::configure_routes;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use common::model::record::Record;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    /// Answers every request with the same records, or with an upstream status error.
    struct FixedSource {
        reply: Result<Vec<Record>, u16>,
        seen: Mutex<Vec<GenerateRequest>>,
    }

    impl FixedSource {
        fn records(json: &str) -> Self {
            Self {
                reply: Ok(serde_json::from_str(json).unwrap()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RecordSource for FixedSource {
        async fn generate(&self, request: &GenerateRequest) -> Result<Vec<Record>, UpstreamError> {
            self.seen.lock().unwrap().push(request.clone());
            self.reply.clone().map_err(UpstreamError::Status)
        }
    }

    async fn post(source: Arc<FixedSource>, body: Value) -> (StatusCode, Value) {
        let source: Arc<dyn RecordSource> = source;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(source))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post().uri("/").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn returns_records_and_csv() {
        let source = Arc::new(FixedSource::records(r#"[{"a":1,"b":2},{"a":3,"b":4}]"#));
        let (status, body) = post(source.clone(), json!({ "text": "pairs", "row": 10 })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "jsonData": [{ "a": 1, "b": 2 }, { "a": 3, "b": 4 }],
                "csvData": "a,b\n1,2\n3,4\n",
            })
        );

        let seen = source.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].text, "pairs");
        assert_eq!(seen[0].row.get(), 10);
    }

    #[actix_web::test]
    async fn upstream_failure_is_a_generic_500() {
        let source = Arc::new(FixedSource::failing(503));
        let (status, body) = post(source, json!({ "text": "cars", "row": 20 })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": GENERATION_FAILED }));
    }

    #[actix_web::test]
    async fn unknown_row_count_is_a_400_with_a_reason() {
        let source = Arc::new(FixedSource::records(r#"[{"a":1}]"#));
        let (status, body) = post(source.clone(), json!({ "text": "cars", "row": 15 })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("row count must be one of"), "{message}");
        assert!(source.seen.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn blank_description_never_reaches_the_generator() {
        let source = Arc::new(FixedSource::records(r#"[{"a":1}]"#));
        let (status, body) = post(source.clone(), json!({ "text": "   ", "row": 10 })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "text must not be empty" }));
        assert!(source.seen.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn heterogeneous_records_are_refused() {
        let source = Arc::new(FixedSource::records(r#"[{"a":1,"b":2},{"a":3}]"#));
        let (status, body) = post(source, json!({ "text": "pairs", "row": 10 })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": GENERATION_FAILED }));
    }

    #[actix_web::test]
    async fn empty_generation_is_refused() {
        let source = Arc::new(FixedSource::records("[]"));
        let (status, body) = post(source, json!({ "text": "nothing", "row": 10 })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": GENERATION_FAILED }));
    }

    #[actix_web::test]
    async fn get_on_root_is_not_routed_to_the_handler() {
        let source: Arc<dyn RecordSource> = Arc::new(FixedSource::records("[]"));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(source))
                .service(configure_routes()),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_ne!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_ne!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
