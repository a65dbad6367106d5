use actix_web::{HttpResponse, Responder, delete, get, post, web};
use chrono::Utc;

use crate::forms::trends::TrendRangeQuery;
use crate::generation::OpenAiClient;
use crate::repository::DieselRepository;
use crate::routes::{ResourceMessages, delete_response, error_response};
use crate::services::trends::{
    delete_trend as delete_trend_service, generate_current_trends as generate_trends_service,
    list_trends as list_trends_service,
};

pub const MESSAGES: ResourceMessages = ResourceMessages {
    invalid: "Invalid date range",
    not_found: "Trend not found",
};

/// Trends valid now, or overlapping `startDate`/`endDate` when given.
#[get("")]
pub async fn list_trends(
    query: web::Query<TrendRangeQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let list_query = match query.into_inner().into_list_query(Utc::now().naive_utc()) {
        Ok(list_query) => list_query,
        Err(e) => return error_response(e.into(), MESSAGES),
    };

    match list_trends_service(list_query, repo.get_ref()) {
        Ok(trends) => HttpResponse::Ok().json(trends),
        Err(err) => error_response(err, MESSAGES),
    }
}

#[post("/generate")]
pub async fn generate_trends(
    repo: web::Data<DieselRepository>,
    generator: web::Data<OpenAiClient>,
) -> impl Responder {
    match generate_trends_service(repo.get_ref(), generator.get_ref()).await {
        Ok(trends) => HttpResponse::Ok().json(trends),
        Err(err) => error_response(err, MESSAGES),
    }
}

#[delete("/{trend_id}")]
pub async fn delete_trend(
    trend_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    delete_response(
        &trend_id,
        |id| delete_trend_service(id, repo.get_ref()),
        MESSAGES,
    )
}
