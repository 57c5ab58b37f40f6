//! JSON payloads returned by the clinic API.
//!
//! Field names are camelCase and calendar dates are rendered `yyyy-MM-dd`.

use chrono::NaiveDate;

pub mod owners;
pub mod pets;
pub mod vets;

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
