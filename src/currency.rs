//! Currencies quoted on the SBP mark-to-market rate sheet

use crate::error::{Result, SbpError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency whitelist (ISO 4217 codes, plus the sheet's own `GNH`)
///
/// Only these codes are recognised as currency lines when parsing a rate
/// sheet, and only these can be looked up through the client.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Currency {
    USD, // US Dollar
    EUR, // Euro
    GBP, // British Pound
    JPY, // Japanese Yen
    CHF, // Swiss Franc
    AUD, // Australian Dollar
    CAD, // Canadian Dollar
    SEK, // Swedish Krona
    NOK, // Norwegian Krone
    DKK, // Danish Krone
    SAR, // Saudi Riyal
    AED, // UAE Dirham
    KWD, // Kuwaiti Dinar
    BHD, // Bahraini Dinar
    QAR, // Qatari Riyal
    OMR, // Omani Rial
    CNY, // Chinese Yuan
    HKD, // Hong Kong Dollar
    SGD, // Singapore Dollar
    THB, // Thai Baht
    MYR, // Malaysian Ringgit
    INR, // Indian Rupee
    KRW, // South Korean Won
    NZD, // New Zealand Dollar
    ZAR, // South African Rand
    BDT, // Bangladeshi Taka
    BRL, // Brazilian Real
    ARS, // Argentine Peso
    LKR, // Sri Lankan Rupee
    TRY, // Turkish Lira
    IDR, // Indonesian Rupiah
    MXN, // Mexican Peso
    RUB, // Russian Ruble
    GNH, // Listed as-is on the sheet
}

const ALL_CURRENCIES: [Currency; 34] = [
    Currency::USD,
    Currency::EUR,
    Currency::GBP,
    Currency::JPY,
    Currency::CHF,
    Currency::AUD,
    Currency::CAD,
    Currency::SEK,
    Currency::NOK,
    Currency::DKK,
    Currency::SAR,
    Currency::AED,
    Currency::KWD,
    Currency::BHD,
    Currency::QAR,
    Currency::OMR,
    Currency::CNY,
    Currency::HKD,
    Currency::SGD,
    Currency::THB,
    Currency::MYR,
    Currency::INR,
    Currency::KRW,
    Currency::NZD,
    Currency::ZAR,
    Currency::BDT,
    Currency::BRL,
    Currency::ARS,
    Currency::LKR,
    Currency::TRY,
    Currency::IDR,
    Currency::MXN,
    Currency::RUB,
    Currency::GNH,
];

impl Currency {
    /// Get the 3-letter code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
            Currency::DKK => "DKK",
            Currency::SAR => "SAR",
            Currency::AED => "AED",
            Currency::KWD => "KWD",
            Currency::BHD => "BHD",
            Currency::QAR => "QAR",
            Currency::OMR => "OMR",
            Currency::CNY => "CNY",
            Currency::HKD => "HKD",
            Currency::SGD => "SGD",
            Currency::THB => "THB",
            Currency::MYR => "MYR",
            Currency::INR => "INR",
            Currency::KRW => "KRW",
            Currency::NZD => "NZD",
            Currency::ZAR => "ZAR",
            Currency::BDT => "BDT",
            Currency::BRL => "BRL",
            Currency::ARS => "ARS",
            Currency::LKR => "LKR",
            Currency::TRY => "TRY",
            Currency::IDR => "IDR",
            Currency::MXN => "MXN",
            Currency::RUB => "RUB",
            Currency::GNH => "GNH",
        }
    }

    /// Look up a code exactly as it appears on the rate sheet.
    ///
    /// Matching is case-sensitive: `"usd"` is not a currency line.
    pub fn from_code(code: &str) -> Option<Self> {
        ALL_CURRENCIES.iter().copied().find(|c| c.code() == code)
    }

    /// Check whether `code` is on the whitelist
    pub fn is_valid(code: &str) -> bool {
        Self::from_code(code).is_some()
    }

    /// Get all supported currencies
    pub fn all() -> Vec<Currency> {
        ALL_CURRENCIES.to_vec()
    }
}

impl FromStr for Currency {
    type Err = SbpError;

    /// Lenient parse for user input (trims and upper-cases first)
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_uppercase();
        Self::from_code(&normalized).ok_or_else(|| SbpError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
