use chrono::NaiveDate;
use common::models::Forecast;
use serde::Deserialize;

/// Optional bounds narrowing a forecast listing. Each supplied bound is a
/// conjunctive predicate; absent bounds match everything. Filtering never
/// touches the store and an empty result is a valid answer.
#[derive(Debug, Default, Deserialize)]
pub struct ForecastQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub min_temp: Option<i32>,
    pub max_temp: Option<i32>,
}

impl ForecastQuery {
    pub fn matches(&self, forecast: &Forecast) -> bool {
        self.from.is_none_or(|from| forecast.date >= from)
            && self.to.is_none_or(|to| forecast.date <= to)
            && self.min_temp.is_none_or(|min| forecast.temperature_c >= min)
            && self.max_temp.is_none_or(|max| forecast.temperature_c <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast(day: u32, temperature_c: i32) -> Forecast {
        Forecast {
            date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            temperature_c,
            summary: None,
            location: "Testville".to_string(),
        }
    }

    #[test]
    fn test_no_bounds_matches_everything() {
        let query = ForecastQuery::default();
        assert!(query.matches(&forecast(1, -40)));
        assert!(query.matches(&forecast(28, 55)));
    }

    #[test]
    fn test_temperature_bounds_are_conjunctive() {
        let query = ForecastQuery {
            min_temp: Some(0),
            max_temp: Some(10),
            ..Default::default()
        };

        let temperatures = [-5, 2, 8, 12, 18];
        let kept: Vec<i32> = temperatures
            .iter()
            .map(|&t| forecast(1, t))
            .filter(|f| query.matches(f))
            .map(|f| f.temperature_c)
            .collect();

        assert_eq!(kept, vec![2, 8]);
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let query = ForecastQuery {
            from: Some(NaiveDate::from_ymd_opt(2026, 8, 2).unwrap()),
            to: Some(NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()),
            ..Default::default()
        };

        assert!(!query.matches(&forecast(1, 10)));
        assert!(query.matches(&forecast(2, 10)));
        assert!(query.matches(&forecast(4, 10)));
        assert!(!query.matches(&forecast(5, 10)));
    }

    #[test]
    fn test_all_entries_filtered_out_is_valid() {
        let query = ForecastQuery {
            min_temp: Some(100),
            ..Default::default()
        };

        assert!(!query.matches(&forecast(1, 18)));
    }
}
