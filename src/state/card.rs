//! Primary card summary returned by the portal backend

use chrono::NaiveDate;
use serde::Deserialize;

/// Read-only projection of the stored primary payment method.
///
/// The backend returns the full card object; only `brand` and `last4` are
/// required. Expiry fields are used for the expired notice when present.
#[derive(Debug, Clone, Deserialize)]
pub struct CardSummary {
    pub brand: String,
    pub last4: String,
    #[serde(default)]
    pub exp_month: Option<u32>,
    #[serde(default)]
    pub exp_year: Option<i32>,
}

impl CardSummary {
    /// Whether the card counts as expired on `today`.
    ///
    /// A card is treated as expired once its expiry month has begun.
    /// Two-digit years are 2000-based. Returns `None` when the payload
    /// carried no usable expiry.
    pub fn is_expired(&self, today: NaiveDate) -> Option<bool> {
        let month = self.exp_month?;
        let mut year = self.exp_year?;
        if year < 100 {
            year += 2000;
        }
        let expiry = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(today > expiry)
    }

    /// Expired as of now; `false` when expiry is unknown
    pub fn expired_now(&self) -> bool {
        self.is_expired(chrono::Utc::now().date_naive())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod deserialization {
        use super::*;

        #[test]
        fn test_minimal_payload_parses() {
            let card: CardSummary =
                serde_json::from_str(r#"{"brand": "Visa", "last4": "4242"}"#).unwrap();
            assert_eq!(card.brand, "Visa");
            assert_eq!(card.last4, "4242");
            assert!(card.exp_month.is_none());
            assert!(card.exp_year.is_none());
        }

        #[test]
        fn test_extra_fields_are_ignored() {
            let json = r#"{
                "brand": "Mastercard",
                "last4": "1111",
                "exp_month": 4,
                "exp_year": 2030,
                "funding": "credit",
                "country": "US"
            }"#;
            let card: CardSummary = serde_json::from_str(json).unwrap();
            assert_eq!(card.brand, "Mastercard");
            assert_eq!(card.exp_month, Some(4));
            assert_eq!(card.exp_year, Some(2030));
        }

        #[test]
        fn test_missing_brand_fails() {
            let result: Result<CardSummary, _> = serde_json::from_str(r#"{"last4": "4242"}"#);
            assert!(result.is_err());
        }

        #[test]
        fn test_empty_object_fails() {
            // The backend answers "{}" when no card is stored; that must
            // land in the failure path, not produce a blank summary.
            let result: Result<CardSummary, _> = serde_json::from_str("{}");
            assert!(result.is_err());
        }
    }

    mod expiry {
        use super::*;

        fn card(month: u32, year: i32) -> CardSummary {
            CardSummary {
                brand: "Visa".to_string(),
                last4: "4242".to_string(),
                exp_month: Some(month),
                exp_year: Some(year),
            }
        }

        #[test]
        fn test_future_expiry_not_expired() {
            assert_eq!(card(12, 2099).is_expired(date(2026, 8, 30)), Some(false));
        }

        #[test]
        fn test_past_expiry_is_expired() {
            assert_eq!(card(1, 2020).is_expired(date(2026, 8, 30)), Some(true));
        }

        #[test]
        fn test_expired_once_expiry_month_begins() {
            let c = card(8, 2026);
            assert_eq!(c.is_expired(date(2026, 8, 1)), Some(false));
            assert_eq!(c.is_expired(date(2026, 8, 2)), Some(true));
        }

        #[test]
        fn test_two_digit_year_is_2000_based() {
            let c = card(6, 30);
            assert_eq!(c.is_expired(date(2026, 8, 30)), Some(false));
            assert_eq!(c.is_expired(date(2031, 1, 1)), Some(true));
        }

        #[test]
        fn test_unknown_expiry_is_none() {
            let c = CardSummary {
                brand: "Visa".to_string(),
                last4: "4242".to_string(),
                exp_month: None,
                exp_year: None,
            };
            assert_eq!(c.is_expired(date(2026, 8, 30)), None);
            assert!(!c.expired_now());
        }

        #[test]
        fn test_invalid_month_is_none() {
            assert_eq!(card(13, 2030).is_expired(date(2026, 8, 30)), None);
        }
    }
}
