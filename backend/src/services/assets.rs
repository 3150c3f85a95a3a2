//! Serves the compiled frontend, embedded into the binary at build time.
//!
//! `build.rs` copies `../frontend/dist` into `static/dist`; unknown paths fall
//! back to `index.html` so the page owns its own routing. Only `GET` and
//! `HEAD` are answered; anything else that reaches here is a `405`.

use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return HttpResponse::MethodNotAllowed().finish();
    }

    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn refuses_writes_to_static_paths() {
        let req = TestRequest::post().uri("/app.js").to_http_request();
        let resp = serve_embedded(req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_the_page_or_not_found() {
        let req = TestRequest::get().uri("/no/such/file").to_http_request();
        let resp = serve_embedded(req).await;
        let expected = if STATIC_DIR.get_file("index.html").is_some() {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        };
        assert_eq!(resp.status(), expected);
    }
}
