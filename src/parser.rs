//! Rate sheet text parser
//!
//! Turns the flattened plain text of a rate sheet into [`ExchangeRate`]
//! records. The sheet is a two-column table (currency, ready rate) that text
//! extraction reduces to a line sequence in which each column appears as its
//! own run of lines:
//!
//! ```text
//! CURRENCY
//! USD
//! EUR
//! READY
//! 281.4500
//! 327.1020
//! Exchange Rates for Mark to Market ...
//! ```
//!
//! Parsing runs four stages in order: locate the two section markers,
//! collect currency codes after `CURRENCY`, collect rates after `READY`,
//! then pair the two lists by position.

use crate::currency::Currency;
use crate::error::{Result, SbpError};
use crate::types::{ExchangeRate, ParseContext, RateSheet};

/// Marker line opening the currency column
pub const CURRENCY_MARKER: &str = "CURRENCY";

/// Marker line opening the ready (spot) rate column
pub const READY_MARKER: &str = "READY";

/// Start of the explanatory notes below the table (matched case-insensitively)
pub const FOOTER_MARKER: &str = "EXCHANGE RATES FOR MARK";

/// Line indices of the two section markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderIndices {
    pub currency: usize,
    pub ready: usize,
}

/// Parse extracted rate sheet text into one record per currency
pub fn parse_exchange_rate_text(text: &str, ctx: &ParseContext) -> Result<RateSheet> {
    let lines: Vec<&str> = text.lines().collect();

    let headers = locate_headers(&lines)?;
    let currencies = collect_currencies(&lines, headers.currency + 1);
    let rates = collect_rates(&lines, headers.ready + 1);

    log::debug!(
        "Collected {} currencies and {} ready rates",
        currencies.len(),
        rates.len()
    );

    pair_rates(&currencies, &rates, ctx)
}

/// Find the first `CURRENCY` and first `READY` marker lines
///
/// Either marker may come first. Scanning stops once both are seen.
pub fn locate_headers(lines: &[&str]) -> Result<HeaderIndices> {
    let mut currency = None;
    let mut ready = None;

    for (i, line) in lines.iter().enumerate() {
        let line = line.trim();
        if currency.is_none() && line == CURRENCY_MARKER {
            currency = Some(i);
        }
        if ready.is_none() && line == READY_MARKER {
            ready = Some(i);
        }
        if currency.is_some() && ready.is_some() {
            break;
        }
    }

    match (currency, ready) {
        (Some(currency), Some(ready)) => Ok(HeaderIndices { currency, ready }),
        (currency, ready) => Err(SbpError::HeadersNotFound {
            currency: currency.is_some(),
            ready: ready.is_some(),
        }),
    }
}

/// Collect whitelisted currency codes from `start` up to the footer
pub fn collect_currencies(lines: &[&str], start: usize) -> Vec<Currency> {
    let mut currencies = Vec::new();

    for line in lines.iter().skip(start) {
        let line = line.trim();
        if line.is_empty() || line == READY_MARKER {
            continue;
        }
        if is_footer(line) {
            break;
        }
        if line.len() != 3 {
            continue;
        }
        if let Some(currency) = Currency::from_code(line) {
            currencies.push(currency);
        }
    }

    currencies
}

/// Collect positive numeric lines from `start` up to the footer
///
/// The trimmed source text is kept, not a re-formatted number.
pub fn collect_rates<'a>(lines: &[&'a str], start: usize) -> Vec<&'a str> {
    let mut rates = Vec::new();

    for line in lines.iter().skip(start) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_footer(line) {
            break;
        }
        if is_positive_number(line) {
            rates.push(line);
        }
    }

    rates
}

/// Pair currencies and rates by position into a rate sheet
///
/// Pairing assumes row alignment: the i-th currency belongs to the i-th rate.
/// Extra entries in the longer list are dropped. A repeated currency keeps
/// the rate paired with its last occurrence.
pub fn pair_rates(currencies: &[Currency], rates: &[&str], ctx: &ParseContext) -> Result<RateSheet> {
    if currencies.len() != rates.len() {
        log::warn!(
            "Currency and rate columns differ in length ({} vs {}); pairing the first {} by position",
            currencies.len(),
            rates.len(),
            currencies.len().min(rates.len())
        );
    }

    let mut sheet = RateSheet::new();
    for (currency, rate) in currencies.iter().zip(rates.iter()) {
        if !is_numeric(rate) {
            continue;
        }
        sheet.insert(
            *currency,
            ExchangeRate::spot(*currency, *rate, ctx.date, ctx.url.as_str()),
        );
    }

    if sheet.is_empty() {
        return Err(SbpError::NoRatesFound);
    }

    Ok(sheet)
}

fn is_footer(line: &str) -> bool {
    line.to_uppercase().contains(FOOTER_MARKER)
}

/// Parse a base-10 float, rejecting values that overflow `f64`
///
/// A literal `inf`/`infinity` is still accepted; only finite-looking text
/// that rounds to infinity (e.g. `1e400`) is out of range.
fn parse_float(s: &str) -> Option<f64> {
    let value = s.parse::<f64>().ok()?;
    if value.is_infinite() && !is_infinity_literal(s) {
        return None;
    }
    Some(value)
}

fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.trim_start_matches(&['+', '-'][..]);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn is_numeric(s: &str) -> bool {
    parse_float(s).is_some()
}

fn is_positive_number(s: &str) -> bool {
    matches!(parse_float(s), Some(v) if v > 0.0)
}
