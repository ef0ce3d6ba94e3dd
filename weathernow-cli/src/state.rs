use weathernow_core::{LookupOutcome, WeatherReport};

/// Presentation-layer snapshot of the most recent lookup.
///
/// Created empty, replaced wholesale per outcome, never merged across
/// lookups. A report and an error are never held at the same time.
#[derive(Debug, Default)]
pub struct DisplayState {
    report: Option<WeatherReport>,
    error: Option<String>,
}

impl DisplayState {
    pub fn report(&self) -> Option<&WeatherReport> {
        self.report.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Drop the error from a previous lookup. Called when a new search
    /// begins, before its outcome is known.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Replace the snapshot with a completed outcome.
    pub fn apply(&mut self, outcome: LookupOutcome) {
        match outcome {
            LookupOutcome::Success(report) => {
                self.report = Some(report);
                self.error = None;
            }
            LookupOutcome::Failure(message) => {
                self.error = Some(message);
                self.report = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn report(city: &str) -> WeatherReport {
        WeatherReport {
            location_name: city.to_string(),
            temperature_c: 15.4,
            feels_like_c: 14.0,
            humidity_pct: 60,
            wind_speed_mps: 3.2,
            condition: "clear sky".to_string(),
            icon: "01d".to_string(),
            observation_time: DateTime::<Utc>::from_timestamp(1_720_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn starts_empty() {
        let state = DisplayState::default();
        assert!(state.report().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn success_replaces_prior_error() {
        let mut state = DisplayState::default();
        state.apply(LookupOutcome::Failure("City \"Nowhere\" not found".to_string()));
        assert!(state.error().is_some());

        state.apply(LookupOutcome::Success(report("Paris")));

        assert_eq!(state.report().map(|r| r.location_name.as_str()), Some("Paris"));
        assert!(state.error().is_none());
    }

    #[test]
    fn failure_replaces_prior_report() {
        let mut state = DisplayState::default();
        state.apply(LookupOutcome::Success(report("Paris")));
        assert!(state.report().is_some());

        state.apply(LookupOutcome::Failure("Weather data is currently unavailable".to_string()));

        assert_eq!(state.error(), Some("Weather data is currently unavailable"));
        assert!(state.report().is_none());
    }

    #[test]
    fn report_and_error_are_never_both_populated() {
        let mut state = DisplayState::default();

        let outcomes = [
            LookupOutcome::Success(report("Paris")),
            LookupOutcome::Failure("City \"Nowhere\" not found".to_string()),
            LookupOutcome::Failure("Failed to fetch weather data".to_string()),
            LookupOutcome::Success(report("London")),
        ];

        for outcome in outcomes {
            state.apply(outcome);
            assert!(
                state.report().is_none() || state.error().is_none(),
                "snapshot held a report and an error at once"
            );
        }
    }

    #[test]
    fn clear_error_leaves_report_alone() {
        let mut state = DisplayState::default();
        state.apply(LookupOutcome::Success(report("Paris")));

        state.clear_error();

        assert!(state.report().is_some());
        assert!(state.error().is_none());
    }
}
