use crate::errors::ExtractError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The raw timestamp token of one backed-up SMS.
///
/// SMS Backup & Restore exports stamp each message with epoch milliseconds
/// rendered as a decimal string. The token is carried through to consumers
/// unchanged; anything that needs an actual instant asks for one explicitly
/// and handles the token not being numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmsDate(String);

impl<'de> Deserialize<'de> for SmsDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SmsDate)
    }
}

impl SmsDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse the token as epoch milliseconds, rejecting non-numeric values
    pub fn epoch_millis(&self) -> Result<i64, ExtractError> {
        self.0
            .trim()
            .parse::<i64>()
            .map_err(|_| ExtractError::TimestampInvalid)
    }
}

impl From<String> for SmsDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SmsDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<&SmsDate> for DateTime<Utc> {
    type Error = ExtractError;

    fn try_from(date: &SmsDate) -> Result<Self, Self::Error> {
        let millis = date.epoch_millis()?;
        DateTime::from_timestamp_millis(millis).ok_or(ExtractError::TimestampInvalid)
    }
}
