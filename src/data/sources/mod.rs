//! Remote rate sheet sources
//!
//! - SBP: daily mark-to-market PDF published by the State Bank of Pakistan

#[cfg(feature = "async")]
pub mod sbp;

#[cfg(feature = "async")]
pub use sbp::SbpClient;
