use actix_web::{HttpResponse, Responder, get, post, web};

use crate::domain::preferences::NewPreferences;
use crate::forms::preferences::UpdatePreferencesForm;
use crate::repository::DieselRepository;
use crate::routes::{ResourceMessages, error_response};
use crate::services::preferences::{
    get_preferences as get_preferences_service, update_preferences as update_preferences_service,
};

pub const MESSAGES: ResourceMessages = ResourceMessages {
    invalid: "Invalid preferences data",
    not_found: "Preferences not found",
};

/// Stored preferences, or `null` before any were saved.
#[get("")]
pub async fn get_preferences(repo: web::Data<DieselRepository>) -> impl Responder {
    match get_preferences_service(repo.get_ref()) {
        Ok(preferences) => HttpResponse::Ok().json(preferences),
        Err(err) => error_response(err, MESSAGES),
    }
}

#[post("")]
pub async fn update_preferences(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdatePreferencesForm>,
) -> impl Responder {
    let preferences: NewPreferences = match form.try_into() {
        Ok(preferences) => preferences,
        Err(e) => return error_response(e.into(), MESSAGES),
    };

    match update_preferences_service(preferences, repo.get_ref()) {
        Ok(preferences) => HttpResponse::Ok().json(preferences),
        Err(err) => error_response(err, MESSAGES),
    }
}
