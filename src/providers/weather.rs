//! Weather provider (Visual Crossing timeline API).

use serde::Deserialize;

use super::ContentProviders;
use crate::core::AppResult;

/// Current conditions for a city, metric units.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: f64,
    pub conditions: String,
    pub humidity: f64,
    pub wind_speed: f64,
}

#[derive(Deserialize)]
struct TimelineResponse {
    #[serde(rename = "currentConditions")]
    current_conditions: CurrentConditions,
}

#[derive(Deserialize)]
struct CurrentConditions {
    temp: f64,
    conditions: String,
    humidity: f64,
    windspeed: f64,
}

impl ContentProviders {
    /// Fetch current weather for a city.
    pub async fn fetch_weather(&self, city: &str) -> AppResult<WeatherReport> {
        let url = format!(
            "{}/VisualCrossingWebServices/rest/services/timeline/{}?unitGroup=metric&key={}&contentType=json",
            self.config().weather_base,
            urlencoding::encode(city),
            self.config().weather_api_key,
        );
        let data: TimelineResponse = self.get_json(&url).await?;

        Ok(WeatherReport {
            city: city.to_string(),
            temperature: data.current_conditions.temp,
            conditions: data.current_conditions.conditions,
            humidity: data.current_conditions.humidity,
            wind_speed: data.current_conditions.windspeed,
        })
    }
}
