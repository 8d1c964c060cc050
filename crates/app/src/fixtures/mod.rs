//! In-memory seed data behind every page.
//!
//! Each module exposes a `Lazy` static with the records a page lists. Ids are
//! generated at startup; everything else is fixed.

pub mod clients;
pub mod financial_entries;
pub mod mix_formulas;
pub mod production_orders;
pub mod quality_tests;
pub mod reports;
pub mod suppliers;
pub mod users;

use chrono::{NaiveDate, NaiveDateTime};

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub(crate) fn datetime(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, min, 0)
        .expect("valid fixture time")
}
