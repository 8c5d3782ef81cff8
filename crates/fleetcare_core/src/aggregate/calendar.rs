//! Calendar month bucketing and month navigation.
//!
//! # Invariants
//! - A job belongs to a day when its `scheduledDate` string equals the day
//!   formatted as `yyyy-MM-dd`; no range or overlap semantics.
//! - Weeks start on Sunday and have 7 columns; leading blanks align the 1st.
//! - "Today" is a display flag only and never changes bucketing.

use crate::model::component::DATE_FORMAT;
use crate::model::job::Job;
use chrono::{Datelike, NaiveDate};
use log::warn;
use serde::Serialize;

const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub jobs: Vec<Job>,
}

impl CalendarDay {
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.date == today
    }
}

/// One month laid out for a Sunday-first grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st (Sunday = 0).
    pub leading_blanks: usize,
    /// Every day of the month, 1st to last.
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Grid rows of 7 cells; `None` marks a leading blank. The last row may
    /// be shorter than 7.
    pub fn weeks(&self) -> Vec<Vec<Option<&CalendarDay>>> {
        let cells: Vec<Option<&CalendarDay>> = std::iter::repeat(None)
            .take(self.leading_blanks)
            .chain(self.days.iter().map(Some))
            .collect();
        cells
            .chunks(DAYS_PER_WEEK)
            .map(|week| week.to_vec())
            .collect()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days.iter().find(|day| day.date == date)
    }

    /// Whether `date` falls inside the displayed month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Buckets `jobs` into each day of the month containing `anchor`.
pub fn calendar_month(jobs: &[Job], anchor: NaiveDate) -> CalendarMonth {
    let first = first_of_month(anchor);
    let days = first
        .iter_days()
        .take_while(|date| date.month() == first.month())
        .map(|date| CalendarDay {
            jobs: jobs_on(jobs, date),
            date,
        })
        .collect();

    CalendarMonth {
        year: first.year(),
        month: first.month(),
        leading_blanks: first.weekday().num_days_from_sunday() as usize,
        days,
    }
}

/// Day-detail bucket: jobs scheduled exactly on `date`.
pub fn jobs_on(jobs: &[Job], date: NaiveDate) -> Vec<Job> {
    let key = date.format(DATE_FORMAT).to_string();
    jobs.iter()
        .filter(|job| job.scheduled_date == key)
        .cloned()
        .collect()
}

/// Displayed month as an offset from a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    reference: NaiveDate,
    offset: i32,
}

impl MonthCursor {
    pub fn new(reference: NaiveDate) -> Self {
        Self::with_offset(reference, 0)
    }

    /// Cursor already moved `offset` months away from `reference`.
    pub fn with_offset(reference: NaiveDate, offset: i32) -> Self {
        Self { reference, offset }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn next(&mut self) {
        self.offset = self.offset.saturating_add(1);
    }

    pub fn previous(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// First day of the displayed month, or `None` when the offset leaves
    /// the representable date range.
    pub fn month_start(&self) -> Option<NaiveDate> {
        let months = (self.reference.year() * 12 + self.reference.month0() as i32)
            .checked_add(self.offset)?;
        let month_start =
            NaiveDate::from_ymd_opt(months.div_euclid(12), months.rem_euclid(12) as u32 + 1, 1);
        if month_start.is_none() {
            warn!(
                "event=calendar_navigate module=aggregate status=error reference={} offset={} error_code=date_out_of_range",
                self.reference, self.offset
            );
        }
        month_start
    }

    /// Calendar of the displayed month; `None` when out of range.
    pub fn view(&self, jobs: &[Job]) -> Option<CalendarMonth> {
        self.month_start()
            .map(|month_start| calendar_month(jobs, month_start))
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - chrono::Days::new(u64::from(date.day0()))
}
