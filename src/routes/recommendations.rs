use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::generation::OpenAiClient;
use crate::repository::DieselRepository;
use crate::routes::{ResourceMessages, delete_response, error_response};
use crate::services::recommendations::{
    delete_recommendation as delete_recommendation_service,
    generate_recommendations as generate_recommendations_service,
    list_recommendations as list_recommendations_service,
};

pub const MESSAGES: ResourceMessages = ResourceMessages {
    invalid: "Invalid recommendation data",
    not_found: "Recommendation not found",
};

#[get("")]
pub async fn list_recommendations(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_recommendations_service(repo.get_ref()) {
        Ok(recommendations) => HttpResponse::Ok().json(recommendations),
        Err(err) => error_response(err, MESSAGES),
    }
}

#[post("/generate")]
pub async fn generate_recommendations(
    repo: web::Data<DieselRepository>,
    generator: web::Data<OpenAiClient>,
) -> impl Responder {
    match generate_recommendations_service(repo.get_ref(), generator.get_ref()).await {
        Ok(recommendations) => HttpResponse::Ok().json(recommendations),
        Err(err) => error_response(err, MESSAGES),
    }
}

#[delete("/{recommendation_id}")]
pub async fn delete_recommendation(
    recommendation_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    delete_response(
        &recommendation_id,
        |id| delete_recommendation_service(id, repo.get_ref()),
        MESSAGES,
    )
}
