use log::debug;

use super::dto::{RawMessage, SmsesXml};
use crate::parsers::traits::Parser;

/// Parser for the SMS Backup & Restore XML dialect: a `<smses>` root wrapping
/// one `<sms>` element per backed-up message, all data in attributes.
pub struct SmsBackupParser;

impl Parser for SmsBackupParser {
    type Output = RawMessage;

    fn is_supported(filename: Option<&str>, content: &str) -> bool {
        if let Some(name) = filename {
            if name.to_lowercase().ends_with(".xml") {
                return true;
            }
        }

        content.contains("<smses")
    }

    fn parse(content: &str) -> Result<Vec<Self::Output>, String> {
        let doc: SmsesXml =
            serde_xml_rs::from_str(content).map_err(|e| format!("XML parse error: {}", e))?;

        debug!("parsed backup document, {} sms records", doc.messages.len());

        Ok(doc.messages.into_iter().map(RawMessage::from_raw).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE_BACKUP: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='yes' ?>
<smses count="3" backup_date="1731100000000">
    <sms protocol="0" address="VM-SBIINB" date="1731062400000" type="1" read="1"
         body="Rs.500 debited from A/c XX1234 via UPI to merchant@ybl on 08-11-24" />
    <sms protocol="0" address="AX-HDFCBK" date="1731066000000" type="1" read="1"
         body="You have received INR 2,000.00 in your account, ref no 12345" />
    <sms protocol="0" address="AM-NETFLX" date="1731069600000" type="1" read="1"
         body="Your OTP for login is 482910. Do not share it with anyone." />
</smses>"#;

    const SINGLE_SMS_BACKUP: &str = r#"<?xml version='1.0' encoding='UTF-8'?>
<smses count="1">
    <sms address="JM-PAYTMB" date="1731070000000" body="Your payment of Rs 99 via Paytm has failed" />
</smses>"#;

    #[rstest]
    #[case(Some("sms-20241108.xml"), "", true)]
    #[case(Some("sms-20241108.XML"), "", true)]
    #[case(Some("backup.txt"), "", false)]
    #[case(None, SAMPLE_BACKUP, true)]
    #[case(None, "<smses count=\"0\"></smses>", true)]
    #[case(None, "random content", false)]
    #[case(None, "<notes><note body=\"hi\"/></notes>", false)]
    fn test_is_supported(
        #[case] filename: Option<&str>,
        #[case] content: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(SmsBackupParser::is_supported(filename, content), expected);
    }

    #[test]
    fn test_parse_backup_document() {
        let messages = SmsBackupParser::parse(SAMPLE_BACKUP).unwrap();

        assert_eq!(messages.len(), 3);
        assert!(messages[0].body.starts_with("Rs.500 debited"));
        assert_eq!(messages[0].date.as_str(), "1731062400000");
        assert!(messages[2].body.contains("OTP"));
    }

    #[test]
    fn test_parse_single_record_yields_one_element_batch() {
        let messages = SmsBackupParser::parse(SINGLE_SMS_BACKUP).unwrap();

        assert_eq!(messages.len(), 1);
        assert!(messages[0].body.contains("Paytm"));
    }

    #[test]
    fn test_parse_missing_attributes_default_to_empty() {
        let content = r#"<smses count="1"><sms protocol="0" read="1" /></smses>"#;

        let messages = SmsBackupParser::parse(content).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body, "");
        assert!(messages[0].date.is_empty());
    }

    #[test]
    fn test_parse_empty_document() {
        let content = r#"<smses count="0"></smses>"#;

        let messages = SmsBackupParser::parse(content).unwrap();
        assert!(messages.is_empty());
    }

    #[test]
    fn test_parse_malformed_document() {
        let content = r#"<smses count="1"><sms body="Rs.500 debited"#;

        let result = SmsBackupParser::parse(content);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("XML parse error"));
    }
}
