use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;

/// A single dated weather forecast
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Forecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub location: String,
}

impl Forecast {
    /// Derived Fahrenheit reading. The conversion floors, so -5C maps to 23F.
    pub fn temperature_f(&self) -> i32 {
        32 + (self.temperature_c as f64 / 0.5556).floor() as i32
    }
}

/// Create/replace payload for a forecast
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ForecastRequest {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: Option<String>,
    pub location: Option<String>,
}

impl ForecastRequest {
    pub fn into_forecast(self, default_location: &str) -> Forecast {
        Forecast {
            date: self.date,
            temperature_c: self.temperature_c,
            summary: self.summary,
            location: self
                .location
                .unwrap_or_else(|| default_location.to_string()),
        }
    }
}

/// Forecast as served by the API. Fallback entries carry no id or timestamp.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ForecastResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub temperature_f: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl ForecastResponse {
    pub fn saved(id: Uuid, forecast: &Forecast, saved_at: DateTime<Utc>) -> Self {
        Self {
            id: Some(id),
            date: forecast.date,
            temperature_c: forecast.temperature_c,
            temperature_f: forecast.temperature_f(),
            summary: forecast.summary.clone(),
            location: forecast.location.clone(),
            saved_at: Some(saved_at),
        }
    }

    pub fn synthetic(forecast: &Forecast) -> Self {
        Self {
            id: None,
            date: forecast.date,
            temperature_c: forecast.temperature_c,
            temperature_f: forecast.temperature_f(),
            summary: forecast.summary.clone(),
            location: forecast.location.clone(),
            saved_at: None,
        }
    }
}

/// Temperature statistics over every stored forecast
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ForecastStatistics {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_temperature_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_temperature_c: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_temperature_c: Option<i32>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub summaries: HashMap<String, usize>,
}

/// Ids minted by the sample generator, in generation order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub count: usize,
    pub ids: Vec<Uuid>,
}
