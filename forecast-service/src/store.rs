use chrono::{DateTime, Utc};
use common::models::Forecast;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// A forecast together with the time it was last written
#[derive(Debug, Clone)]
pub struct StoredForecast {
    pub forecast: Forecast,
    pub saved_at: DateTime<Utc>,
}

/// In-memory keyed collection of saved forecasts.
///
/// The map is only reachable through the lock, so concurrent handlers always
/// observe a consistent state. Ids are minted here and never supplied by
/// callers; a deleted id is gone for good.
pub struct ForecastStore {
    entries: RwLock<HashMap<Uuid, StoredForecast>>,
}

impl ForecastStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a forecast under a freshly minted id and return the id.
    pub async fn create(&self, forecast: Forecast) -> Uuid {
        let id = Uuid::new_v4();
        let mut entries = self.entries.write().await;
        entries.insert(
            id,
            StoredForecast {
                forecast,
                saved_at: Utc::now(),
            },
        );
        info!(id = %id, operation = "create", "Forecast stored");
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<StoredForecast> {
        let entries = self.entries.read().await;
        entries.get(&id).cloned()
    }

    /// Point-in-time snapshot of every entry, in no particular order.
    pub async fn list(&self) -> Vec<(Uuid, StoredForecast)> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .map(|(id, entry)| (*id, entry.clone()))
            .collect()
    }

    /// Replace the stored forecast wholesale and refresh its timestamp.
    /// Returns false if the id is not present.
    pub async fn update(&self, id: Uuid, forecast: Forecast) -> bool {
        let mut entries = self.entries.write().await;
        match entries.get_mut(&id) {
            Some(entry) => {
                entry.forecast = forecast;
                entry.saved_at = Utc::now();
                info!(id = %id, operation = "update", "Forecast replaced");
                true
            }
            None => false,
        }
    }

    /// Remove the entry. Returns false if the id is not present.
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut entries = self.entries.write().await;
        let removed = entries.remove(&id).is_some();
        if removed {
            info!(id = %id, operation = "delete", "Forecast removed");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for ForecastStore {
    fn default() -> Self {
        Self::new()
    }
}
