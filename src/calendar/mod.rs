mod month;
mod util;
mod widget;
pub(crate) use self::month::MonthView;
pub(crate) use self::util::{format_date, month_index0};
pub(crate) use self::widget::{GRID_WIDTH, MonthCalendar, grid_height};
use time::Date;

/// Per-day information shown as marker dots beneath each date of the grid
pub(crate) trait DayMarks {
    fn todo_count(&self, date: Date) -> usize;

    fn has_memo(&self, date: Date) -> bool;
}
