use chrono::{Duration, Utc};
use common::models::Forecast;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::store::ForecastStore;

/// Summary vocabulary for generated forecasts
pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// Generated Celsius temperatures fall in this half-open range
pub const TEMPERATURE_RANGE: std::ops::Range<i32> = -20..55;

pub const DEFAULT_SAMPLE_COUNT: usize = 5;

/// Fixed (temperature, summary) pairs shown when the store has no entries
const FALLBACK_PAIRS: [(i32, &str); 5] = [
    (-5, "Freezing"),
    (2, "Bracing"),
    (8, "Chilly"),
    (12, "Cool"),
    (18, "Mild"),
];

/// The display dataset for an empty store: five forecasts for consecutive
/// days starting today. These are never inserted and carry no id.
pub fn fallback_forecasts(location: &str) -> Vec<Forecast> {
    let today = Utc::now().date_naive();
    FALLBACK_PAIRS
        .iter()
        .enumerate()
        .map(|(i, &(temperature_c, summary))| Forecast {
            date: today + Duration::days(i as i64),
            temperature_c,
            summary: Some(summary.to_string()),
            location: location.to_string(),
        })
        .collect()
}

/// Inserts randomized sample forecasts into the store.
///
/// The randomness source is owned here and seedable, so tests can pin it
/// down while production runs from entropy.
pub struct SampleGenerator {
    store: Arc<ForecastStore>,
    location: String,
    rng: Mutex<StdRng>,
}

impl SampleGenerator {
    pub fn new(store: Arc<ForecastStore>, location: String) -> Self {
        Self {
            store,
            location,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Generator with a fixed seed, for reproducible output.
    pub fn seeded(store: Arc<ForecastStore>, location: String, seed: u64) -> Self {
        Self {
            store,
            location,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Create `count` forecasts for consecutive days starting today and
    /// return their ids in generation order.
    pub async fn generate(&self, count: usize) -> Vec<Uuid> {
        let today = Utc::now().date_naive();
        let mut ids = Vec::with_capacity(count);

        for i in 0..count {
            let forecast = {
                let mut rng = self.rng.lock().await;
                Forecast {
                    date: today + Duration::days(i as i64),
                    temperature_c: rng.gen_range(TEMPERATURE_RANGE),
                    summary: Some(SUMMARIES[rng.gen_range(0..SUMMARIES.len())].to_string()),
                    location: self.location.clone(),
                }
            };
            ids.push(self.store.create(forecast).await);
        }

        info!(count, operation = "generate", "Sample forecasts inserted");
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_dataset_shape() {
        let forecasts = fallback_forecasts("Testville");
        let today = Utc::now().date_naive();

        assert_eq!(forecasts.len(), 5);
        for (i, forecast) in forecasts.iter().enumerate() {
            assert_eq!(forecast.date, today + Duration::days(i as i64));
            assert_eq!(forecast.location, "Testville");
        }

        let temperatures: Vec<i32> = forecasts.iter().map(|f| f.temperature_c).collect();
        assert_eq!(temperatures, vec![-5, 2, 8, 12, 18]);

        let summaries: Vec<&str> = forecasts
            .iter()
            .filter_map(|f| f.summary.as_deref())
            .collect();
        assert_eq!(
            summaries,
            vec!["Freezing", "Bracing", "Chilly", "Cool", "Mild"]
        );
    }

    #[tokio::test]
    async fn test_generate_structural_properties() {
        let store = Arc::new(ForecastStore::new());
        let generator = SampleGenerator::seeded(store.clone(), "Testville".to_string(), 7);

        let ids = generator.generate(5).await;

        let distinct: HashSet<Uuid> = ids.iter().copied().collect();
        assert_eq!(ids.len(), 5);
        assert_eq!(distinct.len(), 5);
        assert_eq!(store.len().await, 5);

        for id in ids {
            let entry = store.get(id).await.expect("Generated forecast not found");
            assert!(TEMPERATURE_RANGE.contains(&entry.forecast.temperature_c));
            let summary = entry.forecast.summary.as_deref().expect("Missing summary");
            assert!(SUMMARIES.contains(&summary));
            assert_eq!(entry.forecast.location, "Testville");
        }
    }

    #[tokio::test]
    async fn test_generate_zero_is_a_noop() {
        let store = Arc::new(ForecastStore::new());
        let generator = SampleGenerator::seeded(store.clone(), "Testville".to_string(), 7);

        let ids = generator.generate(0).await;

        assert!(ids.is_empty());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_seeded_generators_agree() {
        let first_store = Arc::new(ForecastStore::new());
        let second_store = Arc::new(ForecastStore::new());
        let first = SampleGenerator::seeded(first_store.clone(), "Testville".to_string(), 42);
        let second = SampleGenerator::seeded(second_store.clone(), "Testville".to_string(), 42);

        let first_ids = first.generate(5).await;
        let second_ids = second.generate(5).await;

        let mut first_forecasts = Vec::new();
        for id in first_ids {
            first_forecasts.push(first_store.get(id).await.unwrap().forecast);
        }
        let mut second_forecasts = Vec::new();
        for id in second_ids {
            second_forecasts.push(second_store.get(id).await.unwrap().forecast);
        }

        assert_eq!(first_forecasts, second_forecasts);
    }
}
