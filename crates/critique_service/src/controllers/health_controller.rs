use actix_web::{web, HttpResponse, Responder};

use crate::dto::HealthResponse;

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health_check)));
}
