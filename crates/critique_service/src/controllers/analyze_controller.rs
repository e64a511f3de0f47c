use actix_web::{http::Method, web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::middleware::extract_trace_id;
use crate::server::AppState;
use crate::services::request_validator;

/// `/analyze` is the documented path; `/api/analyze` keeps existing frontends working.
const ANALYZE_PATHS: [&str; 2] = ["/analyze", "/api/analyze"];

async fn analyze(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request = request_validator::validate(&body).map_err(|e| {
        log::info!(
            "[{}] Rejected analyze request: {}",
            extract_trace_id(&req).unwrap_or_default(),
            e
        );
        e
    })?;

    let result = app_state.analysis_service.analyze(&request).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// CORS pre-flight. The headers themselves come from the CORS middleware.
async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    for path in ANALYZE_PATHS {
        cfg.service(
            web::resource(path)
                .route(web::post().to(analyze))
                .route(web::method(Method::OPTIONS).to(preflight))
                .default_service(web::to(method_not_allowed)),
        );
    }
}
