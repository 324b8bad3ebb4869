use crate::errors::StreakError;
use crate::streak::parse_date;
use chrono::NaiveDate;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub sample_data: bool,
    /// Pins "today" instead of reading the local clock.
    pub today: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Result<Self, StreakError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StreakError> {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let sample_data = lookup("APP_SAMPLE_DATA")
            .map(|value| {
                let value = value.trim().to_ascii_lowercase();
                !matches!(value.as_str(), "0" | "false" | "no" | "off")
            })
            .unwrap_or(true);

        let today = lookup("APP_TODAY")
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse_date(&value))
            .transpose()?;

        Ok(Self {
            port,
            sample_data,
            today,
        })
    }
}
