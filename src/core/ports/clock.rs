//! Clock port

use chrono::NaiveDate;

/// Source of the current calendar date
pub trait Clock {
    /// Today's date in the process-local calendar
    fn today(&self) -> NaiveDate;
}
