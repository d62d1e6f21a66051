use serde::{Deserialize, Serialize};

use super::types::SmsDate;

/// Document root of an SMS Backup & Restore export: `<smses>` wrapping
/// repeated `<sms>` elements. Everything except the two attributes the
/// extraction core reads is ignored.
#[derive(Debug, Deserialize)]
pub(super) struct SmsesXml {
    #[serde(rename = "sms", default)]
    pub(super) messages: Vec<SmsRaw>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SmsRaw {
    #[serde(rename = "@body", default)]
    body: Option<String>,
    #[serde(rename = "@date", default)]
    date: Option<String>,
}

/// One backed-up SMS record prior to classification.
///
/// Both fields are defaulted to the empty string when the backup omits the
/// attribute, so downstream code never deals with missing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    pub body: String,
    pub date: SmsDate,
}

impl RawMessage {
    pub(super) fn from_raw(raw: SmsRaw) -> Self {
        RawMessage {
            body: raw.body.unwrap_or_default(),
            date: SmsDate::from(raw.date.unwrap_or_default()),
        }
    }
}
