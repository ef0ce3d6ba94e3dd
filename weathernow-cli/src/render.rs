use chrono::{DateTime, Utc};
use weathernow_core::WeatherReport;

use crate::state::DisplayState;

/// Print the current snapshot: an error banner, a weather card, or nothing.
pub fn render(state: &DisplayState) {
    if let Some(message) = state.error() {
        println!("\n  ! {message}\n");
    } else if let Some(report) = state.report() {
        print!("{}", weather_card(report));
    }
}

/// Lay out a report the way the summary card shows it: heading, rounded
/// temperature with the condition, icon URL, then the three detail metrics.
pub fn weather_card(report: &WeatherReport) -> String {
    format!(
        "\n  {name}\n  {temp}  {condition}\n  {icon}\n\n  \
         Feels like  {feels}\n  Humidity    {humidity}\n  Wind        {wind}\n\n  \
         Updated {updated}\n",
        name = report.location_name,
        temp = format_temperature(report.temperature_c),
        condition = report.condition,
        icon = report.icon_url(),
        feels = format_temperature(report.feels_like_c),
        humidity = format_humidity(report.humidity_pct),
        wind = format_wind(report.wind_speed_mps),
        updated = format_updated(report.observation_time),
    )
}

/// Whole degrees, e.g. `15.4 -> "15°C"`.
pub fn format_temperature(celsius: f64) -> String {
    format!("{}°C", celsius.round())
}

pub fn format_humidity(pct: u8) -> String {
    format!("{pct}%")
}

/// Whole meters per second, e.g. `3.2 -> "3 m/s"`.
pub fn format_wind(mps: f64) -> String {
    format!("{} m/s", mps.round())
}

fn format_updated(at: DateTime<Utc>) -> String {
    at.format("%H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperatures_round_to_whole_degrees() {
        assert_eq!(format_temperature(15.4), "15°C");
        assert_eq!(format_temperature(14.0), "14°C");
        assert_eq!(format_temperature(-0.2), "-0°C");
    }

    #[test]
    fn humidity_and_wind_formats() {
        assert_eq!(format_humidity(60), "60%");
        assert_eq!(format_wind(3.2), "3 m/s");
        assert_eq!(format_wind(3.6), "4 m/s");
    }

    #[test]
    fn card_shows_all_metrics() {
        let report = WeatherReport {
            location_name: "Paris".to_string(),
            temperature_c: 15.4,
            feels_like_c: 14.0,
            humidity_pct: 60,
            wind_speed_mps: 3.2,
            condition: "clear sky".to_string(),
            icon: "01d".to_string(),
            observation_time: DateTime::<Utc>::from_timestamp(1_739_539_200, 0).unwrap(),
        };

        let card = weather_card(&report);

        assert!(card.contains("Paris"));
        assert!(card.contains("15°C"));
        assert!(card.contains("clear sky"));
        assert!(card.contains("https://openweathermap.org/img/wn/01d@2x.png"));
        assert!(card.contains("Feels like  14°C"));
        assert!(card.contains("Humidity    60%"));
        assert!(card.contains("Wind        3 m/s"));
        assert!(card.contains("Updated 13:20 UTC"));
    }
}
