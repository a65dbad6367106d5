use serde::{Deserialize, Serialize};

use crate::domain::types::WeatherCondition;

/// Current conditions at the user's location, reduced to what outfit
/// suggestions need.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// Temperature in whole degrees Celsius.
    pub temperature: i32,
    pub weather: WeatherCondition,
    pub description: String,
    pub location: String,
}

impl WeatherCondition {
    /// Map an OpenWeather condition code onto the four supported conditions.
    ///
    /// Thunderstorm, drizzle and rain groups (2xx-5xx) are rainy, 6xx is
    /// snowy, 801 and above are cloudy; everything else (atmosphere group and
    /// clear sky) counts as sunny.
    pub fn from_condition_code(code: u32) -> Self {
        match code {
            200..=599 => Self::Rainy,
            600..=699 => Self::Snowy,
            801.. => Self::Cloudy,
            _ => Self::Sunny,
        }
    }
}

/// Convert Kelvin to Celsius, rounded to the nearest degree.
pub fn kelvin_to_celsius(kelvin: f64) -> i32 {
    (kelvin - 273.15).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_condition_codes() {
        assert_eq!(WeatherCondition::from_condition_code(211), WeatherCondition::Rainy);
        assert_eq!(WeatherCondition::from_condition_code(501), WeatherCondition::Rainy);
        assert_eq!(WeatherCondition::from_condition_code(601), WeatherCondition::Snowy);
        assert_eq!(WeatherCondition::from_condition_code(741), WeatherCondition::Sunny);
        assert_eq!(WeatherCondition::from_condition_code(800), WeatherCondition::Sunny);
        assert_eq!(WeatherCondition::from_condition_code(801), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_condition_code(804), WeatherCondition::Cloudy);
    }

    #[test]
    fn converts_kelvin() {
        assert_eq!(kelvin_to_celsius(273.15), 0);
        assert_eq!(kelvin_to_celsius(296.15), 23);
        assert_eq!(kelvin_to_celsius(260.0), -13);
    }
}
