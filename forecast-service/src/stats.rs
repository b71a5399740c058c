use common::models::ForecastStatistics;
use std::collections::HashMap;
use uuid::Uuid;

use crate::store::StoredForecast;

/// Bucket label for forecasts that carry no summary text
const UNKNOWN_SUMMARY: &str = "Unknown";

/// Compute count, min/max/average temperature and per-summary counts over a
/// snapshot of the store. An empty snapshot reports only a zero count.
pub fn compute(entries: &[(Uuid, StoredForecast)]) -> ForecastStatistics {
    if entries.is_empty() {
        return ForecastStatistics {
            count: 0,
            average_temperature_c: None,
            min_temperature_c: None,
            max_temperature_c: None,
            summaries: HashMap::new(),
        };
    }

    let temperatures: Vec<i32> = entries
        .iter()
        .map(|(_, entry)| entry.forecast.temperature_c)
        .collect();
    let sum: i64 = temperatures.iter().map(|&t| i64::from(t)).sum();

    let mut summaries: HashMap<String, usize> = HashMap::new();
    for (_, entry) in entries {
        let label = match entry.forecast.summary.as_deref() {
            Some(summary) if !summary.is_empty() => summary,
            _ => UNKNOWN_SUMMARY,
        };
        *summaries.entry(label.to_string()).or_default() += 1;
    }

    ForecastStatistics {
        count: temperatures.len(),
        average_temperature_c: Some(sum as f64 / temperatures.len() as f64),
        min_temperature_c: temperatures.iter().min().copied(),
        max_temperature_c: temperatures.iter().max().copied(),
        summaries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use common::models::Forecast;

    fn entry(temperature_c: i32, summary: Option<&str>) -> (Uuid, StoredForecast) {
        (
            Uuid::new_v4(),
            StoredForecast {
                forecast: Forecast {
                    date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
                    temperature_c,
                    summary: summary.map(str::to_string),
                    location: "Testville".to_string(),
                },
                saved_at: Utc::now(),
            },
        )
    }

    #[test]
    fn test_empty_snapshot_reports_only_count() {
        let statistics = compute(&[]);

        assert_eq!(statistics.count, 0);
        assert!(statistics.average_temperature_c.is_none());
        assert!(statistics.min_temperature_c.is_none());
        assert!(statistics.max_temperature_c.is_none());
        assert!(statistics.summaries.is_empty());
    }

    #[test]
    fn test_temperature_aggregates() {
        let entries = vec![
            entry(-5, Some("Freezing")),
            entry(2, Some("Bracing")),
            entry(8, Some("Chilly")),
            entry(12, Some("Cool")),
            entry(18, Some("Mild")),
        ];

        let statistics = compute(&entries);

        assert_eq!(statistics.count, 5);
        assert_eq!(statistics.average_temperature_c, Some(7.0));
        assert_eq!(statistics.min_temperature_c, Some(-5));
        assert_eq!(statistics.max_temperature_c, Some(18));
    }

    #[test]
    fn test_summary_grouping_counts_duplicates() {
        let entries = vec![
            entry(20, Some("Warm")),
            entry(22, Some("Warm")),
            entry(30, Some("Hot")),
        ];

        let statistics = compute(&entries);

        assert_eq!(statistics.summaries.get("Warm"), Some(&2));
        assert_eq!(statistics.summaries.get("Hot"), Some(&1));
    }

    #[test]
    fn test_missing_and_empty_summaries_group_as_unknown() {
        let entries = vec![entry(10, None), entry(11, Some("")), entry(12, Some("Cool"))];

        let statistics = compute(&entries);

        assert_eq!(statistics.summaries.get("Unknown"), Some(&2));
        assert_eq!(statistics.summaries.get("Cool"), Some(&1));
    }
}
