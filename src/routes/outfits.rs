use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::outfits::{
    AddOutfitForm, AddOutfitFormPayload, SuggestOutfitForm, SuggestOutfitFormPayload,
};
use crate::generation::OpenAiClient;
use crate::repository::DieselRepository;
use crate::routes::{ResourceMessages, error_response};
use crate::services::outfits::{
    add_outfit as add_outfit_service, list_outfits as list_outfits_service,
    suggest_outfit as suggest_outfit_service,
};

pub const MESSAGES: ResourceMessages = ResourceMessages {
    invalid: "Invalid outfit data",
    not_found: "Outfit not found",
};

#[get("")]
pub async fn list_outfits(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_outfits_service(repo.get_ref()) {
        Ok(outfits) => HttpResponse::Ok().json(outfits),
        Err(err) => error_response(err, MESSAGES),
    }
}

#[post("")]
pub async fn add_outfit(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddOutfitForm>,
) -> impl Responder {
    let payload: AddOutfitFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into(), MESSAGES),
    };

    match add_outfit_service(payload, repo.get_ref()) {
        Ok(outfit) => HttpResponse::Ok().json(outfit),
        Err(err) => error_response(err, MESSAGES),
    }
}

#[post("/suggest")]
pub async fn suggest_outfit(
    repo: web::Data<DieselRepository>,
    generator: web::Data<OpenAiClient>,
    web::Json(form): web::Json<SuggestOutfitForm>,
) -> impl Responder {
    let payload: SuggestOutfitFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into(), MESSAGES),
    };

    match suggest_outfit_service(payload, repo.get_ref(), generator.get_ref()).await {
        Ok(suggestion) => HttpResponse::Ok().json(suggestion),
        Err(err) => error_response(err, MESSAGES),
    }
}
