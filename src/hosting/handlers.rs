use super::*;
use crate::ladder::Sort;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::error::InternalError;
use actix_web::error::JsonPayloadError;
use actix_web::error::QueryPayloadError;
use actix_web::web;

pub async fn start(parlor: web::Data<Parlor>, body: web::Json<StartRequest>) -> impl Responder {
    match parlor.start(body.p1(), body.p2()).await {
        Ok(opening) => HttpResponse::Ok().json(opening),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

pub async fn play(parlor: web::Data<Parlor>) -> impl Responder {
    match parlor.play().await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

pub async fn leaderboard(
    parlor: web::Data<Parlor>,
    query: web::Query<BoardQuery>,
) -> impl Responder {
    let sort = Sort::from(query.sort.as_deref());
    log::debug!("leaderboard by {}", sort);
    HttpResponse::Ok().json(parlor.standings(sort).await)
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Unparseable start bodies get the same `{"error": ...}` shape as rejected names.
pub fn malformed(err: JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    log::warn!("malformed request body: {}", err);
    let body = serde_json::json!({ "error": err.to_string() });
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Unparseable leaderboard queries, same shape.
pub fn malformed_query(err: QueryPayloadError, _: &HttpRequest) -> actix_web::Error {
    log::warn!("malformed query string: {}", err);
    let body = serde_json::json!({ "error": err.to_string() });
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
