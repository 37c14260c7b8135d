//! Reporting period handling.

pub mod period;

pub use period::ReportingPeriod;
