use std::iter::repeat_n;
use thiserror::Error;
use time::{
    Date,
    Month::{self, December, January},
    format_description::BorrowedFormatItem,
    macros::format_description,
};

pub(crate) const DAYS_IN_WEEK: usize = 7;

static YMD_FMT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Error)]
pub(crate) enum DateError {
    #[error("month index {0} is out of range (expected 0 through 11)")]
    InvalidMonth(u8),
    #[error("date is out of range")]
    OutOfRange,
    #[error(transparent)]
    Component(#[from] time::error::ComponentRange),
    #[error("failed to format date")]
    Format(#[from] time::error::Format),
}

/// Converts a zero-based month index (0 = January) to a [`Month`]
pub(crate) fn month_from_index0(month0: u8) -> Result<Month, DateError> {
    month0
        .checked_add(1)
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(DateError::InvalidMonth(month0))
}

/// Converts a [`Month`] to its zero-based index (0 = January)
pub(crate) fn month_index0(month: Month) -> u8 {
    u8::from(month) - 1
}

/// Returns the number of days in the given month of the given year.
///
/// The result is found by taking the first day of the following month and
/// stepping back one day.
pub(crate) fn days_in_month(year: i32, month0: u8) -> Result<u8, DateError> {
    let month = month_from_index0(month0)?;
    let first_of_next = if month == December {
        Date::from_calendar_date(year.saturating_add(1), January, 1)?
    } else {
        Date::from_calendar_date(year, month.next(), 1)?
    };
    let last = first_of_next.previous_day().ok_or(DateError::OutOfRange)?;
    Ok(last.day())
}

/// Returns the weekday of the first day of the month, counted from Sunday
/// (0 = Sunday … 6 = Saturday)
pub(crate) fn first_weekday_of_month(year: i32, month0: u8) -> Result<u8, DateError> {
    let first = Date::from_calendar_date(year, month_from_index0(month0)?, 1)?;
    Ok(first.weekday().number_days_from_sunday())
}

/// Formats a date as `YYYY-MM-DD`.  `month0` is zero-based; the output month
/// is one-based.
pub(crate) fn format_date(year: i32, month0: u8, day: u8) -> Result<String, DateError> {
    let date = Date::from_calendar_date(year, month_from_index0(month0)?, day)?;
    Ok(date.format(&YMD_FMT)?)
}

/// The days of one month laid out in Sunday-first weeks
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    year: i32,
    month: Month,
    // Invariant: leading < 7
    leading: u8,
    days: u8,
}

impl MonthGrid {
    pub(crate) fn new(year: i32, month0: u8) -> Result<MonthGrid, DateError> {
        Ok(MonthGrid {
            year,
            month: month_from_index0(month0)?,
            leading: first_weekday_of_month(year, month0)?,
            days: days_in_month(year, month0)?,
        })
    }

    pub(crate) fn for_date(date: Date) -> Result<MonthGrid, DateError> {
        MonthGrid::new(date.year(), month_index0(date.month()))
    }

    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn month(&self) -> Month {
        self.month
    }

    pub(crate) fn month0(&self) -> u8 {
        month_index0(self.month)
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub(crate) fn first_day(&self) -> Option<Date> {
        self.date(1)
    }

    pub(crate) fn date(&self, day: u8) -> Option<Date> {
        if (1..=self.days).contains(&day) {
            Date::from_calendar_date(self.year, self.month, day).ok()
        } else {
            None
        }
    }

    /// Returns the cells of the grid in row-major order: one blank for each
    /// weekday before the 1st, then one cell per day of the month
    pub(crate) fn cells(&self) -> Vec<Option<Date>> {
        repeat_n(None, usize::from(self.leading))
            .chain((1..=self.days).map(|d| self.date(d)))
            .collect()
    }

    pub(crate) fn week_count(&self) -> usize {
        (usize::from(self.leading) + usize::from(self.days)).div_ceil(DAYS_IN_WEEK)
    }
}
