use crate::parsers::smsbackup::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A classified financial event derived from one SMS message.
///
/// `date` carries the raw backup timestamp token through unchanged;
/// `body` is the whitespace-normalized message text the classifiers saw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: SmsDate,
    pub body: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub txn_type: TxnType,
    pub mode: PaymentMode,
    #[serde(default)]
    pub status: TxnStatus,
}

/// Direction of money movement from the account holder's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxnType {
    #[serde(rename = "credit")]
    Credit,
    #[serde(rename = "debit")]
    Debit,
}

impl TxnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxnType::Credit => "credit",
            TxnType::Debit => "debit",
        }
    }
}

impl std::fmt::Display for TxnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the transaction as reported by the message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TxnStatus {
    #[default]
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "failed")]
    Failed,
}

impl TxnStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxnStatus::Success => "success",
            TxnStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for TxnStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment rail or provider inferred from the message text.
///
/// The eleven named providers come from the channel classifier's ordered
/// pattern table; `Upi`, `Card`, `Bank` and `Other` are its fallback labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    #[serde(rename = "GPay")]
    GPay,
    #[serde(rename = "PhonePe")]
    PhonePe,
    #[serde(rename = "Paytm")]
    Paytm,
    #[serde(rename = "Amazon Pay")]
    AmazonPay,
    #[serde(rename = "BHIM")]
    Bhim,
    #[serde(rename = "Mobikwik")]
    Mobikwik,
    #[serde(rename = "Freecharge")]
    Freecharge,
    #[serde(rename = "Airtel Payments")]
    AirtelPayments,
    #[serde(rename = "ICICI")]
    Icici,
    #[serde(rename = "SBI")]
    Sbi,
    #[serde(rename = "HDFC")]
    Hdfc,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Card")]
    Card,
    #[serde(rename = "Bank")]
    Bank,
    #[serde(rename = "Other")]
    Other,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::GPay => "GPay",
            PaymentMode::PhonePe => "PhonePe",
            PaymentMode::Paytm => "Paytm",
            PaymentMode::AmazonPay => "Amazon Pay",
            PaymentMode::Bhim => "BHIM",
            PaymentMode::Mobikwik => "Mobikwik",
            PaymentMode::Freecharge => "Freecharge",
            PaymentMode::AirtelPayments => "Airtel Payments",
            PaymentMode::Icici => "ICICI",
            PaymentMode::Sbi => "SBI",
            PaymentMode::Hdfc => "HDFC",
            PaymentMode::Upi => "UPI",
            PaymentMode::Card => "Card",
            PaymentMode::Bank => "Bank",
            PaymentMode::Other => "Other",
        }
    }
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn create_test_transaction() -> Transaction {
        Transaction {
            date: "1731062400000".into(),
            body: "Rs.500 debited from A/c XX1234".to_string(),
            amount: Decimal::from_str("500").unwrap(),
            txn_type: TxnType::Debit,
            mode: PaymentMode::Bank,
            status: TxnStatus::Success,
        }
    }

    #[rstest]
    #[case(PaymentMode::GPay, "GPay")]
    #[case(PaymentMode::AmazonPay, "Amazon Pay")]
    #[case(PaymentMode::AirtelPayments, "Airtel Payments")]
    #[case(PaymentMode::Icici, "ICICI")]
    #[case(PaymentMode::Upi, "UPI")]
    #[case(PaymentMode::Other, "Other")]
    fn test_payment_mode_labels(#[case] mode: PaymentMode, #[case] label: &str) {
        assert_eq!(mode.as_str(), label);
        assert_eq!(mode.to_string(), label);
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, format!("\"{}\"", label));
    }

    #[test]
    fn test_status_defaults_to_success() {
        assert_eq!(TxnStatus::default(), TxnStatus::Success);
    }

    #[test]
    fn test_txn_type_serialization() {
        assert_eq!(serde_json::to_string(&TxnType::Credit).unwrap(), "\"credit\"");
        assert_eq!(serde_json::to_string(&TxnType::Debit).unwrap(), "\"debit\"");
    }

    #[test]
    fn test_transaction_serialization() {
        let transaction = create_test_transaction();

        let json = serde_json::to_string(&transaction).unwrap();
        assert!(json.contains("\"type\":\"debit\""));
        assert!(json.contains("\"mode\":\"Bank\""));
        assert!(json.contains("\"status\":\"success\""));
        assert!(json.contains("1731062400000"));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, transaction);
    }

    #[test]
    fn test_transaction_status_defaults_when_absent() {
        let json = r#"{
            "date": "1731062400000",
            "body": "Rs.500 debited",
            "amount": "500",
            "type": "debit",
            "mode": "UPI"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.status, TxnStatus::Success);
    }
}
