//! JSON API under `/api`, one scope per resource.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::services::{ServiceError, ServiceResult};

pub mod clothing;
pub mod outfits;
pub mod preferences;
pub mod recommendations;
pub mod scheduled_outfits;
pub mod trends;
pub mod weather;

pub const INTERNAL_ERROR: &str = "Internal server error";

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

/// Static messages a resource answers with on failure.
#[derive(Debug, Clone, Copy)]
pub struct ResourceMessages {
    pub invalid: &'static str,
    pub not_found: &'static str,
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorBody { error: message })
}

/// Map a service failure onto a JSON error response.
pub fn error_response(err: ServiceError, messages: ResourceMessages) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody {
            error: messages.not_found,
        }),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            log::debug!("Rejected request: {message}");
            bad_request(messages.invalid)
        }
        ServiceError::Unavailable => HttpResponse::ServiceUnavailable().json(ErrorBody {
            error: "Service unavailable",
        }),
        ServiceError::Upstream => HttpResponse::BadGateway().json(ErrorBody {
            error: "Upstream service error",
        }),
        ServiceError::Internal => HttpResponse::InternalServerError().json(ErrorBody {
            error: INTERNAL_ERROR,
        }),
    }
}

/// Parse a numeric path id; anything else yields `None`.
pub fn parse_path_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Answer a delete: ids that do not parse have nothing to remove.
pub fn delete_response<F>(raw_id: &str, delete: F, messages: ResourceMessages) -> HttpResponse
where
    F: FnOnce(i32) -> ServiceResult<()>,
{
    let result = match parse_path_id(raw_id) {
        Some(id) => delete(id),
        None => {
            log::debug!("Ignoring delete of non-numeric id {raw_id:?}");
            Ok(())
        }
    };
    match result {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, messages),
    }
}

/// JSON extractor settings answering malformed bodies with `message`.
pub fn json_config(message: &'static str) -> web::JsonConfig {
    web::JsonConfig::default().error_handler(move |err, _req| {
        log::debug!("Rejected JSON body: {err}");
        InternalError::from_response(err, bad_request(message)).into()
    })
}

/// Query string extractor settings answering malformed queries with `message`.
pub fn query_config(message: &'static str) -> web::QueryConfig {
    web::QueryConfig::default().error_handler(move |err, _req| {
        log::debug!("Rejected query string: {err}");
        InternalError::from_response(err, bad_request(message)).into()
    })
}

/// Register every API scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/clothing")
                    .app_data(json_config(clothing::MESSAGES.invalid))
                    .service(clothing::list_clothing_items)
                    .service(clothing::get_clothing_item)
                    .service(clothing::add_clothing_item)
                    .service(clothing::delete_clothing_item),
            )
            .service(
                web::scope("/outfits")
                    .app_data(json_config(outfits::MESSAGES.invalid))
                    .service(outfits::list_outfits)
                    .service(outfits::suggest_outfit)
                    .service(outfits::add_outfit),
            )
            .service(
                web::scope("/scheduled-outfits")
                    .app_data(json_config(scheduled_outfits::MESSAGES.invalid))
                    .app_data(query_config(scheduled_outfits::INVALID_RANGE))
                    .service(scheduled_outfits::list_scheduled_outfits)
                    .service(scheduled_outfits::schedule_outfit)
                    .service(scheduled_outfits::unschedule_outfit),
            )
            .service(
                web::scope("/preferences")
                    .app_data(json_config(preferences::MESSAGES.invalid))
                    .service(preferences::get_preferences)
                    .service(preferences::update_preferences),
            )
            .service(
                web::scope("/recommendations")
                    .service(recommendations::list_recommendations)
                    .service(recommendations::generate_recommendations)
                    .service(recommendations::delete_recommendation),
            )
            .service(
                web::scope("/trends")
                    .app_data(query_config(trends::MESSAGES.invalid))
                    .service(trends::list_trends)
                    .service(trends::generate_trends)
                    .service(trends::delete_trend),
            )
            .service(
                web::scope("/weather")
                    .app_data(query_config(weather::MESSAGES.invalid))
                    .service(weather::current_weather),
            ),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;

    const MESSAGES: ResourceMessages = ResourceMessages {
        invalid: "Invalid data",
        not_found: "Not found",
    };

    #[test]
    fn parses_numeric_path_ids_only() {
        assert_eq!(parse_path_id("42"), Some(42));
        assert_eq!(parse_path_id("-3"), Some(-3));
        assert_eq!(parse_path_id("abc"), None);
        assert_eq!(parse_path_id("1.5"), None);
    }

    #[test]
    fn delete_of_unparsable_id_is_a_no_op() {
        let response = delete_response("abc", |_| panic!("must not be called"), MESSAGES);
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = delete_response(
            "7",
            |id| {
                assert_eq!(id, 7);
                Err(ServiceError::Internal)
            },
            MESSAGES,
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn maps_service_errors_to_statuses() {
        let cases = [
            (ServiceError::NotFound, StatusCode::NOT_FOUND),
            (ServiceError::Form("bad".into()), StatusCode::BAD_REQUEST),
            (ServiceError::TypeConstraint("bad".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Unavailable, StatusCode::SERVICE_UNAVAILABLE),
            (ServiceError::Upstream, StatusCode::BAD_GATEWAY),
            (ServiceError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(error_response(err, MESSAGES).status(), status);
        }
    }
}
