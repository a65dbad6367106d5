use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::forms::clothing::{AddClothingItemForm, AddClothingItemFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{ResourceMessages, delete_response, error_response, parse_path_id};
use crate::services::ServiceError;
use crate::services::clothing::{
    add_clothing_item as add_clothing_item_service,
    delete_clothing_item as delete_clothing_item_service,
    get_clothing_item as get_clothing_item_service,
    list_clothing_items as list_clothing_items_service,
};

pub const MESSAGES: ResourceMessages = ResourceMessages {
    invalid: "Invalid clothing item data",
    not_found: "Clothing item not found",
};

#[get("")]
pub async fn list_clothing_items(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_clothing_items_service(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, MESSAGES),
    }
}

#[get("/{item_id}")]
pub async fn get_clothing_item(
    item_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(item_id) = parse_path_id(&item_id) else {
        return error_response(ServiceError::NotFound, MESSAGES);
    };

    match get_clothing_item_service(item_id, repo.get_ref()) {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(err) => error_response(err, MESSAGES),
    }
}

#[post("")]
pub async fn add_clothing_item(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddClothingItemForm>,
) -> impl Responder {
    let payload: AddClothingItemFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into(), MESSAGES),
    };

    match add_clothing_item_service(payload, repo.get_ref()) {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(err) => error_response(err, MESSAGES),
    }
}

#[delete("/{item_id}")]
pub async fn delete_clothing_item(
    item_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    delete_response(
        &item_id,
        |id| delete_clothing_item_service(id, repo.get_ref()),
        MESSAGES,
    )
}
