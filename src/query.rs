//! Rate sheet request options and URL construction

use crate::error::{Result, SbpError};
use crate::types::RateDate;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Base location of the SBP mark-to-market rate sheets
pub const DEFAULT_BASE_URL: &str = "https://www.sbp.org.pk/ecodata/rates/m2m";

/// Which rate sheet to request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateQuery {
    pub date: RateDate,
}

impl RateQuery {
    /// Query for the current UTC day
    pub fn today() -> Self {
        Self {
            date: Utc::now().date_naive(),
        }
    }

    /// Query for a `YYYY-MM-DD` date string
    pub fn for_date(date: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| SbpError::InvalidDate(date.to_string()))?;
        Ok(Self { date })
    }

    /// Query for the UTC calendar day containing `time`
    pub fn for_time<Tz: TimeZone>(time: DateTime<Tz>) -> Self {
        Self {
            date: time.with_timezone(&Utc).date_naive(),
        }
    }

    /// Query for an already-known day
    pub fn for_day(date: RateDate) -> Self {
        Self { date }
    }

    /// Path of this query's rate sheet relative to the base URL
    pub fn path(&self) -> String {
        rate_sheet_path(self.date)
    }

    /// Full URL of this query's rate sheet
    pub fn url(&self, base_url: &str) -> String {
        rate_sheet_url(base_url, self.date)
    }
}

impl Default for RateQuery {
    fn default() -> Self {
        Self::today()
    }
}

/// `/{year}/{Mon}/{DD}-{Mon}-{YY}.pdf`, e.g. `/2025/Aug/27-Aug-25.pdf`
pub fn rate_sheet_path(date: RateDate) -> String {
    date.format("/%Y/%b/%d-%b-%y.pdf").to_string()
}

/// Join a base URL and the per-date path
pub fn rate_sheet_url(base_url: &str, date: RateDate) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), rate_sheet_path(date))
}
