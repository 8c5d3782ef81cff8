//! Derived dashboard and calendar views.
//!
//! # Responsibility
//! - Compute KPIs, the job status histogram and calendar month buckets.
//!
//! # Invariants
//! - Every function is pure over `(collections, reference date)`; nothing
//!   here reads storage or the system clock except [`today`].

use chrono::{Local, NaiveDate};

pub mod calendar;
pub mod kpi;

/// Current local calendar date, the usual reference date for views.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
