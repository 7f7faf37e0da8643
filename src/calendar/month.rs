use super::util::{DateError, MonthGrid};
use thiserror::Error;
use time::{Date, Duration};

/// The month shown on screen together with the selected date, if any
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthView {
    today: Date,
    grid: MonthGrid,
    // Invariant: if set, the selected date lies within `grid`
    selected: Option<Date>,
}

impl MonthView {
    pub(crate) fn new(today: Date) -> Result<MonthView, DateError> {
        Ok(MonthView {
            today,
            grid: MonthGrid::for_date(today)?,
            selected: None,
        })
    }

    /// Show the month containing `date` and select `date`
    pub(crate) fn start_date(mut self, date: Date) -> Result<MonthView, DateError> {
        self.grid = MonthGrid::for_date(date)?;
        self.selected = Some(date);
        Ok(self)
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub(crate) fn selected(&self) -> Option<Date> {
        self.selected
    }

    /// Select the given day of the displayed month
    pub(crate) fn select_day(&mut self, day: u8) -> Result<Date, OutOfMonthError> {
        let date = self.grid.date(day).ok_or(OutOfMonthError)?;
        self.selected = Some(date);
        Ok(date)
    }

    // The year stays fixed; moving past December wraps around to January of
    // the same year.
    pub(crate) fn next_month(&mut self) -> Result<(), DateError> {
        let month0 = (self.grid.month0() + 1) % 12;
        self.show_month(month0)
    }

    pub(crate) fn previous_month(&mut self) -> Result<(), DateError> {
        let month0 = (self.grid.month0() + 11) % 12;
        self.show_month(month0)
    }

    fn show_month(&mut self, month0: u8) -> Result<(), DateError> {
        self.grid = MonthGrid::new(self.grid.year(), month0)?;
        self.selected = None;
        Ok(())
    }

    /// Move the selection by `days` days without leaving the displayed month.
    /// With nothing selected, select today if it is on display, else the 1st.
    pub(crate) fn move_selection(&mut self, days: i64) -> Result<Date, OutOfMonthError> {
        let target = match self.selected {
            Some(date) => date
                .checked_add(Duration::days(days))
                .filter(|&d| self.grid.contains(d))
                .ok_or(OutOfMonthError)?,
            None if self.grid.contains(self.today) => self.today,
            None => self.grid.first_day().ok_or(OutOfMonthError)?,
        };
        self.selected = Some(target);
        Ok(target)
    }

    pub(crate) fn jump_to_today(&mut self) -> Result<(), DateError> {
        self.grid = MonthGrid::for_date(self.today)?;
        self.selected = Some(self.today);
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("date is outside the displayed month")]
pub(crate) struct OutOfMonthError;

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Month, macros::date};

    #[test]
    fn test_new_has_no_selection() {
        let view = MonthView::new(date!(2026 - 03 - 10)).unwrap();
        assert_eq!(view.grid().month(), Month::March);
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn test_start_date_selects() {
        let view = MonthView::new(date!(2026 - 03 - 10))
            .unwrap()
            .start_date(date!(2026 - 07 - 04))
            .unwrap();
        assert_eq!(view.grid().month(), Month::July);
        assert_eq!(view.selected(), Some(date!(2026 - 07 - 04)));
    }

    #[test]
    fn test_month_wraps_within_year() {
        let mut view = MonthView::new(date!(2026 - 01 - 15)).unwrap();
        view.move_selection(0).unwrap();
        view.previous_month().unwrap();
        assert_eq!(view.grid().year(), 2026);
        assert_eq!(view.grid().month(), Month::December);
        assert_eq!(view.selected(), None);
        view.next_month().unwrap();
        assert_eq!(view.grid().year(), 2026);
        assert_eq!(view.grid().month(), Month::January);
    }

    #[test]
    fn test_first_move_selects_today() {
        let mut view = MonthView::new(date!(2026 - 03 - 10)).unwrap();
        assert_eq!(view.move_selection(1), Ok(date!(2026 - 03 - 10)));
        assert_eq!(view.move_selection(1), Ok(date!(2026 - 03 - 11)));
        assert_eq!(view.move_selection(-7), Ok(date!(2026 - 03 - 04)));
    }

    #[test]
    fn test_first_move_selects_first_day() {
        let mut view = MonthView::new(date!(2026 - 03 - 10)).unwrap();
        view.next_month().unwrap();
        assert_eq!(view.move_selection(7), Ok(date!(2026 - 04 - 01)));
    }

    #[test]
    fn test_move_out_of_month() {
        let mut view = MonthView::new(date!(2026 - 03 - 10)).unwrap();
        view.select_day(30).unwrap();
        assert_eq!(view.move_selection(7), Err(OutOfMonthError));
        assert_eq!(view.selected(), Some(date!(2026 - 03 - 30)));
        assert_eq!(view.move_selection(1), Ok(date!(2026 - 03 - 31)));
        assert_eq!(view.move_selection(1), Err(OutOfMonthError));
    }

    #[test]
    fn test_select_day_bounds() {
        let mut view = MonthView::new(date!(2026 - 02 - 10)).unwrap();
        assert_eq!(view.select_day(29), Err(OutOfMonthError));
        assert_eq!(view.select_day(28), Ok(date!(2026 - 02 - 28)));
    }

    #[test]
    fn test_jump_to_today() {
        let mut view = MonthView::new(date!(2026 - 03 - 10)).unwrap();
        view.next_month().unwrap();
        view.next_month().unwrap();
        view.jump_to_today().unwrap();
        assert_eq!(view.grid().month(), Month::March);
        assert_eq!(view.selected(), Some(date!(2026 - 03 - 10)));
    }

    #[test]
    fn test_today_survives_navigation() {
        let mut view = MonthView::new(date!(2026 - 03 - 10))
            .unwrap()
            .start_date(date!(2026 - 08 - 01))
            .unwrap();
        view.previous_month().unwrap();
        assert_eq!(view.today(), date!(2026 - 03 - 10));
    }
}
