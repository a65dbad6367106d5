use crate::domain::weather::WeatherReport;
use crate::weather::{WeatherError, WeatherSource};

use super::{ServiceError, ServiceResult};

pub async fn current_weather<W>(lat: f64, lon: f64, source: &W) -> ServiceResult<WeatherReport>
where
    W: WeatherSource,
{
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(ServiceError::Form("Invalid coordinates".to_string()));
    }

    source.current_weather(lat, lon).await.map_err(|e| match e {
        WeatherError::MissingApiKey => ServiceError::Unavailable,
        e => {
            log::error!("Failed to fetch weather: {e}");
            ServiceError::Upstream
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::WeatherCondition;

    struct FixedWeather(Result<WeatherReport, WeatherError>);

    impl WeatherSource for FixedWeather {
        async fn current_weather(
            &self,
            _lat: f64,
            _lon: f64,
        ) -> Result<WeatherReport, WeatherError> {
            self.0.clone()
        }
    }

    #[actix_web::test]
    async fn maps_weather_errors() {
        let source = FixedWeather(Err(WeatherError::MissingApiKey));
        assert_eq!(current_weather(1.0, 2.0, &source).await, Err(ServiceError::Unavailable));

        let source = FixedWeather(Err(WeatherError::Http(500)));
        assert_eq!(current_weather(1.0, 2.0, &source).await, Err(ServiceError::Upstream));
    }

    #[actix_web::test]
    async fn passes_report_through() {
        let report = WeatherReport {
            temperature: 21,
            weather: WeatherCondition::Sunny,
            description: "clear sky".into(),
            location: "Porto".into(),
        };
        let source = FixedWeather(Ok(report.clone()));
        assert_eq!(current_weather(41.1, -8.6, &source).await, Ok(report));
    }

    #[actix_web::test]
    async fn rejects_out_of_range_coordinates() {
        let source = FixedWeather(Err(WeatherError::MissingApiKey));
        assert!(matches!(
            current_weather(120.0, 0.0, &source).await,
            Err(ServiceError::Form(_))
        ));
    }
}
