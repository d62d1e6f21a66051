//! Amount & vocabulary matcher.
//!
//! A message is financial only if it pairs an action keyword (credited,
//! debited, spent, ...) with a monetary numeral. Two anchored patterns cover
//! the two phrasings banks actually use:
//!
//! - keyword first: "debited by ₹1,234.50", "credited with INR 2,000.00"
//! - amount first: "Rs.500 debited from A/c XX1234", where the numeral is
//!   anchored on an explicit currency marker and the keyword may sit anywhere
//!   in the body
//!
//! The keyword-anchored pattern runs first and wins when both apply. Bare
//! numerals (OTPs, reference numbers, masked accounts) match neither pattern.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use rust_decimal::Decimal;

fn vocab_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"(?i)(?:credited(?:\s+with)?|debited(?:\s+by)?|spent|withdrawn|paid|received",
            r"|purchase(?:\s+of)?|deposited|transferred|sent|added|deducted|reversed",
            r"|refunded|failed|unsuccessful)",
            r"[^₹Rs\d]*(?:INR|Rs\.?|₹)?\s*(?P<int>[\d,]+)(?:\.(?P<frac>\d+))?",
        ))
        .expect("invalid vocab amount regex")
    })
}

fn currency_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:\b(?:INR|Rs)\.?|₹)\s*(?P<int>[\d,]+)(?:\.(?P<frac>\d+))?")
            .expect("invalid currency amount regex")
    })
}

fn vocab_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"(?i)\b(?:credited|debited|spent|withdrawn|paid|received|purchase|deposited",
            r"|transferred|sent|added|deducted|reversed|refunded|failed|unsuccessful)\b",
        ))
        .expect("invalid vocab word regex")
    })
}

fn amount_shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,8}(\.\d{1,2})?$").expect("invalid amount shape regex"))
}

/// A fractional part of 3+ digits means the capture ran into a longer number
/// (e.g. "123.456"); keep only the integer part, like a trailing
/// not-a-digit guard would.
fn assemble_numeral(caps: &Captures) -> String {
    let int = &caps["int"];
    match caps.name("frac") {
        Some(frac) if frac.as_str().len() <= 2 => format!("{}.{}", int, frac.as_str()),
        _ => int.to_string(),
    }
}

fn find_numeral(body: &str) -> Option<String> {
    if let Some(caps) = vocab_amount_re().captures(body) {
        return Some(assemble_numeral(&caps));
    }

    if vocab_word_re().is_match(body) {
        if let Some(caps) = currency_amount_re().captures(body) {
            return Some(assemble_numeral(&caps));
        }
    }

    None
}

/// Locate the monetary amount of a financial message.
///
/// Returns `None` when the body carries no action-keyword/amount pair, or
/// when the captured numeral fails the shape check (1-8 integer digits,
/// optional 1-2 decimals) after separator stripping. `None` is the normal
/// non-financial-message outcome, not an error.
pub fn match_amount(body: &str) -> Option<Decimal> {
    let numeral = find_numeral(body)?;
    let stripped = numeral.replace(',', "");

    if !amount_shape_re().is_match(&stripped) {
        return None;
    }

    Decimal::from_str(&stripped).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Your A/c is debited by ₹1,234.50 towards UPI", "1234.50")]
    #[case("You have received INR 2,000.00 in your account", "2000.00")]
    #[case("credited with Rs 100 on 08-11-24", "100")]
    #[case("Spent Rs. 250 at BigBazaar", "250")]
    #[case("purchase of ₹75.5 at Amazon", "75.5")]
    #[case("Rs.500 debited from A/c XX1234 via UPI", "500")]
    #[case("Your payment of Rs 99 via Paytm has failed", "99")]
    #[case("INR 49 deducted for pack renewal", "49")]
    #[case("withdrawn 3000 from ATM", "3000")]
    fn test_match_amount_accepts(#[case] body: &str, #[case] expected: &str) {
        let amount = match_amount(body).unwrap();
        assert_eq!(amount, Decimal::from_str(expected).unwrap());
    }

    #[rstest]
    #[case("Your OTP for login is 482910")]
    #[case("A/c balance is Rs 1,000")]
    #[case("Recharge offer: Rs 19 pack now live")]
    #[case("debited by Rs 123456789")]
    #[case("Meeting at 5, see you there")]
    #[case("")]
    fn test_match_amount_rejects(#[case] body: &str) {
        assert_eq!(match_amount(body), None);
    }

    #[test]
    fn test_separators_stripped_decimal_preserved() {
        let amount = match_amount("debited ₹1,234.50").unwrap();
        assert_eq!(amount, Decimal::from_str("1234.50").unwrap());
    }

    #[test]
    fn test_overlong_fraction_demoted_to_integer_part() {
        // emulates the reference behavior for "123.456": the fraction is
        // not a valid paise part, so only the integer capture survives
        let amount = match_amount("debited by 123.456").unwrap();
        assert_eq!(amount, Decimal::from_str("123").unwrap());
    }

    #[test]
    fn test_nine_integer_digits_rejected() {
        assert_eq!(match_amount("credited with 123456789"), None);
        assert_eq!(match_amount("credited with 12345678"), Some(Decimal::from_str("12345678").unwrap()));
    }

    #[test]
    fn test_keyword_anchored_wins_over_currency_anchored() {
        // both patterns apply; the keyword-anchored one (500) is taken
        let amount = match_amount("Rs 99 held. credited with 500 to wallet").unwrap();
        assert_eq!(amount, Decimal::from_str("500").unwrap());
    }

    #[test]
    fn test_currency_fallback_requires_vocabulary_keyword() {
        assert_eq!(match_amount("Rs.500 is your available balance"), None);
        assert!(match_amount("Rs.500 debited from A/c").is_some());
    }

    #[test]
    fn test_comma_only_capture_rejected() {
        assert_eq!(match_amount("debited by ,,"), None);
    }

    #[test]
    fn test_case_insensitive_vocabulary() {
        assert!(match_amount("DEBITED BY RS 40").is_some());
        assert!(match_amount("Credited With inr 88").is_some());
    }
}
