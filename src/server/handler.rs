// src/server/handler.rs
// =============================================================================
// Thin adapter between actix-web and service::run_service.
//
//   GET   /projectinfo/v1/github.com/<owner>/<repo>  -> 200 + JSON
//   other methods                                    -> 405
//   bad path / unusable upstream body                -> 400 + plain text
//   upstream unreachable                             -> 502 + plain text
//   /projectinfo/v1 (no trailing slash)              -> 301 to /projectinfo/v1/
// =============================================================================

use actix_web::http::header::{self, ContentType};
use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::config::Config;
use crate::service::{run_service, ServiceError, SERVICE_BASE_PATH};

pub async fn service_handler(
    req: HttpRequest,
    config: web::Data<Config>,
) -> Result<HttpResponse, ServiceError> {
    if req.method() != Method::GET {
        return Ok(HttpResponse::MethodNotAllowed()
            .insert_header((header::ALLOW, "GET"))
            .content_type(ContentType::plaintext())
            .body("Only GET requests allowed"));
    }

    let response = run_service(req.path(), config.get_ref()).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn redirect_to_base_path() -> HttpResponse {
    HttpResponse::MovedPermanently()
        .insert_header((header::LOCATION, SERVICE_BASE_PATH))
        .finish()
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            ServiceError::MalformedUpstreamResponse { .. } => StatusCode::BAD_REQUEST,
            ServiceError::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status)
            .content_type(ContentType::plaintext())
            .body(format!(
                "{}\n{}",
                status.canonical_reason().unwrap_or_default(),
                self
            ))
    }
}
