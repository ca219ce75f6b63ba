use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Window for "top products". Anything unrecognized means `Week`, including
/// when deserializing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Day,
    #[default]
    Week,
    Month,
}

impl Timeframe {
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "day" => Self::Day,
            "month" => Self::Month,
            _ => Self::Week,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Earliest launch date still inside the window.
    ///
    /// `Month` keeps the day of month and steps the month back by one. Days
    /// past the end of the previous month roll forward into the current one
    /// (Mar 31 -> "Feb 31" -> Mar 3), so month-end windows are a few days short.
    pub fn cutoff(self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Day => now - Duration::days(1),
            Self::Week => now - Duration::days(7),
            Self::Month => month_back_rolling(now),
        }
    }
}

fn month_back_rolling(now: DateTime<Utc>) -> DateTime<Utc> {
    let (year, month) = if now.month() == 1 { (now.year() - 1, 12) } else { (now.year(), now.month() - 1) };
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => {
            let day = first + Duration::days(i64::from(now.day()) - 1);
            day.and_time(now.time()).and_utc()
        }
        None => now - Duration::days(30),
    }
}

impl From<&str> for Timeframe {
    fn from(raw: &str) -> Self {
        Self::parse_lenient(raw)
    }
}

impl<'de> Deserialize<'de> for Timeframe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}
