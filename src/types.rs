//! Core types: exchange rate records and the parse context

use crate::currency::Currency;
use chrono::NaiveDate;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Calendar day a rate sheet was published for (UTC)
pub type RateDate = NaiveDate;

/// Parsed rate sheet, one record per currency
pub type RateSheet = HashMap<Currency, ExchangeRate>;

/// Delivery period of a quoted rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tenor {
    /// Spot rate (immediate delivery)
    Ready,
    OneWeek,
    TwoWeek,
    OneMonth,
    TwoMonth,
    ThreeMonth,
    FourMonth,
    FiveMonth,
    SixMonth,
    NineMonth,
    OneYear,
}

impl Tenor {
    /// All tenors in the order they appear on the sheet
    pub fn all() -> [Tenor; 11] {
        [
            Tenor::Ready,
            Tenor::OneWeek,
            Tenor::TwoWeek,
            Tenor::OneMonth,
            Tenor::TwoMonth,
            Tenor::ThreeMonth,
            Tenor::FourMonth,
            Tenor::FiveMonth,
            Tenor::SixMonth,
            Tenor::NineMonth,
            Tenor::OneYear,
        ]
    }

    /// Field name used in serialized records
    pub fn label(&self) -> &'static str {
        match self {
            Tenor::Ready => "ready",
            Tenor::OneWeek => "one_week",
            Tenor::TwoWeek => "two_week",
            Tenor::OneMonth => "one_month",
            Tenor::TwoMonth => "two_month",
            Tenor::ThreeMonth => "three_month",
            Tenor::FourMonth => "four_month",
            Tenor::FiveMonth => "five_month",
            Tenor::SixMonth => "six_month",
            Tenor::NineMonth => "nine_month",
            Tenor::OneYear => "one_year",
        }
    }
}

/// Exchange rates for one currency across delivery periods
///
/// Rates are kept as the exact strings printed on the sheet. Only `ready` is
/// filled in by the parser; the forward tenors are carried for completeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub currency: Currency,
    pub date: RateDate,
    /// Source PDF URL
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_week: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_week: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub four_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub five_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub six_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nine_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_year: Option<String>,
}

impl ExchangeRate {
    /// Create a record holding only the spot rate
    pub fn spot(
        currency: Currency,
        ready: impl Into<String>,
        date: RateDate,
        url: impl Into<String>,
    ) -> Self {
        Self {
            currency,
            date,
            url: url.into(),
            ready: Some(ready.into()),
            one_week: None,
            two_week: None,
            one_month: None,
            two_month: None,
            three_month: None,
            four_month: None,
            five_month: None,
            six_month: None,
            nine_month: None,
            one_year: None,
        }
    }

    /// Spot (ready) rate as printed
    pub fn spot_rate(&self) -> Option<&str> {
        self.ready.as_deref()
    }

    /// Rate for a given tenor, if quoted
    pub fn tenor(&self, tenor: Tenor) -> Option<&str> {
        let value = match tenor {
            Tenor::Ready => &self.ready,
            Tenor::OneWeek => &self.one_week,
            Tenor::TwoWeek => &self.two_week,
            Tenor::OneMonth => &self.one_month,
            Tenor::TwoMonth => &self.two_month,
            Tenor::ThreeMonth => &self.three_month,
            Tenor::FourMonth => &self.four_month,
            Tenor::FiveMonth => &self.five_month,
            Tenor::SixMonth => &self.six_month,
            Tenor::NineMonth => &self.nine_month,
            Tenor::OneYear => &self.one_year,
        };
        value.as_deref()
    }
}

/// Caller-supplied metadata stamped onto every parsed record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContext {
    pub date: RateDate,
    pub url: String,
}

impl ParseContext {
    pub fn new(date: RateDate, url: impl Into<String>) -> Self {
        Self {
            date,
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExchangeRate {
        let date = NaiveDate::from_ymd_opt(2025, 8, 27).unwrap();
        ExchangeRate::spot(Currency::USD, "281.4500", date, "https://example.test/a.pdf")
    }

    #[test]
    fn test_spot_only_record() {
        let rate = sample();
        assert_eq!(rate.spot_rate(), Some("281.4500"));
        assert_eq!(rate.tenor(Tenor::Ready), Some("281.4500"));
        for tenor in Tenor::all().iter().skip(1) {
            assert_eq!(rate.tenor(*tenor), None, "{} should be empty", tenor.label());
        }
    }

    #[test]
    fn test_json_omits_empty_tenors() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["currency"], "USD");
        assert_eq!(obj["date"], "2025-08-27");
        assert_eq!(obj["ready"], "281.4500");
        assert!(!obj.contains_key("one_week"));
        assert!(!obj.contains_key("one_year"));
    }

    #[test]
    fn test_json_round_trip_keeps_string() {
        let rate = sample();
        let json = serde_json::to_string(&rate).unwrap();
        let back: ExchangeRate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rate);
    }

    #[test]
    fn test_tenor_labels_unique() {
        let labels: std::collections::HashSet<_> =
            Tenor::all().iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), 11);
    }
}
