use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::domain::dates::DateRange;
use crate::forms::scheduled_outfits::{
    ScheduleOutfitForm, ScheduleOutfitFormPayload, ScheduledOutfitRangeQuery,
};
use crate::repository::DieselRepository;
use crate::routes::{ResourceMessages, delete_response, error_response};
use crate::services::scheduled_outfits::{
    list_scheduled_outfits as list_scheduled_outfits_service,
    schedule_outfit as schedule_outfit_service, unschedule_outfit as unschedule_outfit_service,
};

pub const MESSAGES: ResourceMessages = ResourceMessages {
    invalid: "Invalid scheduled outfit data",
    not_found: "Outfit not found",
};

pub const INVALID_RANGE: &str = "Invalid date range";

const RANGE_MESSAGES: ResourceMessages = ResourceMessages {
    invalid: INVALID_RANGE,
    not_found: MESSAGES.not_found,
};

#[get("")]
pub async fn list_scheduled_outfits(
    query: web::Query<ScheduledOutfitRangeQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let range: DateRange = match query.into_inner().try_into() {
        Ok(range) => range,
        Err(e) => return error_response(e.into(), RANGE_MESSAGES),
    };

    match list_scheduled_outfits_service(range, repo.get_ref()) {
        Ok(scheduled) => HttpResponse::Ok().json(scheduled),
        Err(err) => error_response(err, MESSAGES),
    }
}

#[post("")]
pub async fn schedule_outfit(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ScheduleOutfitForm>,
) -> impl Responder {
    let payload: ScheduleOutfitFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into(), MESSAGES),
    };

    match schedule_outfit_service(payload, repo.get_ref()) {
        Ok(scheduled) => HttpResponse::Ok().json(scheduled),
        Err(err) => error_response(err, MESSAGES),
    }
}

#[delete("/{scheduled_id}")]
pub async fn unschedule_outfit(
    scheduled_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    delete_response(
        &scheduled_id,
        |id| unschedule_outfit_service(id, repo.get_ref()),
        MESSAGES,
    )
}
