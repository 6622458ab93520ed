//! # rusty-sbpfx
//!
//! Client and parser for the State Bank of Pakistan's daily mark-to-market
//! foreign exchange rate sheet.
//!
//! The rate sheet is published as a PDF. This crate downloads it, extracts
//! its plain text and parses the currency and ready-rate columns into
//! [`ExchangeRate`](types::ExchangeRate) records keyed by
//! [`Currency`](currency::Currency).
//!
//! ## Example
//!
//! ```rust,no_run
//! use rusty_sbpfx::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let client = SbpClient::new()?;
//! let query = RateQuery::for_date("2025-08-27")?;
//! let usd = client.get_exchange_rate(Currency::USD, &query).await?;
//! println!("{} ready: {:?}", usd.currency, usd.spot_rate());
//! # Ok(())
//! # }
//! ```
//!
//! Already-extracted text can be parsed directly:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rusty_sbpfx::prelude::*;
//!
//! let text = "CURRENCY\nUSD\nREADY\n281.4500\n";
//! let ctx = ParseContext::new(NaiveDate::from_ymd_opt(2025, 8, 27).unwrap(), "local");
//! let rates = parse_exchange_rate_text(text, &ctx).unwrap();
//! assert_eq!(rates[&Currency::USD].spot_rate(), Some("281.4500"));
//! ```

pub mod config;
pub mod currency;
pub mod data;
pub mod error;
pub mod parser;
pub mod query;
pub mod types;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::config::ClientConfig;
    pub use crate::currency::Currency;
    pub use crate::data::{parse_pdf_content, save_rate_sheet, PdfTextExtractor, TextExtractor};
    pub use crate::error::{Result, SbpError};
    pub use crate::parser::parse_exchange_rate_text;
    pub use crate::query::RateQuery;
    pub use crate::types::*;

    #[cfg(feature = "async")]
    pub use crate::data::sources::SbpClient;
}
