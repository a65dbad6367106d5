use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::routes::{ResourceMessages, error_response};
use crate::services::weather::current_weather as current_weather_service;
use crate::weather::OpenWeatherClient;

pub const MESSAGES: ResourceMessages = ResourceMessages {
    invalid: "Invalid coordinates",
    not_found: "Weather not found",
};

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: f64,
    pub lon: f64,
}

#[get("")]
pub async fn current_weather(
    query: web::Query<WeatherQuery>,
    client: web::Data<OpenWeatherClient>,
) -> impl Responder {
    match current_weather_service(query.lat, query.lon, client.get_ref()).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => error_response(err, MESSAGES),
    }
}
