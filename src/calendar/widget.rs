use super::DayMarks;
use super::month::MonthView;
use super::util::DAYS_IN_WEEK;
use crate::theme::calendar::{
    MEMO_MARK_STYLE, MONTH_STYLE, SATURDAY_STYLE, SELECTED_STYLE, SUNDAY_STYLE, TODAY_STYLE,
    TODO_MARK_STYLE,
};
use crate::theme::{BASE_STYLE, HINT_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};
use time::Date;

static WEEKDAY_NAMES: [&str; DAYS_IN_WEEK] = ["일", "월", "화", "수", "목", "금", "토"];

/// Number of columns per day of week
const DAY_WIDTH: u16 = 7;

/// Number of columns taken up by a single day number, e.g. " 12 " or "[12]"
const CELL_WIDTH: u16 = 4;

/// Width of the whole grid in columns
pub(crate) const GRID_WIDTH: u16 = DAY_WIDTH * 6 + CELL_WIDTH;

/// Number of lines taken up by the title, the weekday names, and the rule
/// beneath them
const HEADER_LINES: u16 = 3;

/// Number of lines taken up by each week: the day numbers and their markers
const WEEK_LINES: u16 = 2;

/// Most to-do dots drawn beneath a single day
const MAX_TODO_MARKS: usize = 3;

const MARK: char = '•';

const ACS_HLINE: char = '─';

/// Height needed to draw a month spanning the given number of weeks
pub(crate) fn grid_height(weeks: usize) -> u16 {
    let weeks = u16::try_from(weeks).unwrap_or(u16::MAX);
    HEADER_LINES.saturating_add(WEEK_LINES.saturating_mul(weeks))
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct MonthCalendar<'a, M> {
    view: &'a MonthView,
    marks: &'a M,
}

impl<'a, M: DayMarks> MonthCalendar<'a, M> {
    pub(crate) fn new(view: &'a MonthView, marks: &'a M) -> Self {
        MonthCalendar { view, marks }
    }

    fn day_style(&self, date: Date, column: usize) -> Style {
        if self.view.selected() == Some(date) {
            SELECTED_STYLE
        } else if date == self.view.today() {
            TODAY_STYLE
        } else {
            weekday_style(column)
        }
    }

    fn marks_for(&self, date: Date) -> Vec<Span<'static>> {
        let todos = self.marks.todo_count(date).min(MAX_TODO_MARKS);
        let mut spans = vec![Span::styled(MARK.to_string(), TODO_MARK_STYLE); todos];
        if self.marks.has_memo(date) {
            spans.push(Span::styled(MARK.to_string(), MEMO_MARK_STYLE));
        }
        spans
    }
}

impl<M: DayMarks> Widget for MonthCalendar<'_, M> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = self.view.grid();
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.draw_title(grid.year(), u8::from(grid.month()));
        canvas.draw_header();
        for (i, cell) in grid.cells().into_iter().enumerate() {
            let Some(date) = cell else {
                continue;
            };
            let week = u16::try_from(i / DAYS_IN_WEEK).unwrap_or(u16::MAX);
            let column = i % DAYS_IN_WEEK;
            let label = if date == self.view.today() {
                format!("[{:2}]", date.day())
            } else {
                format!(" {:2} ", date.day())
            };
            let style = self.day_style(date, column);
            canvas.draw_day(week, column, Span::styled(label, style));
            canvas.draw_marks(week, column, self.marks_for(date));
        }
    }
}

fn weekday_style(column: usize) -> Style {
    match column {
        0 => SUNDAY_STYLE,
        6 => SATURDAY_STYLE,
        _ => BASE_STYLE,
    }
}

fn column_x(column: usize) -> u16 {
    DAY_WIDTH * u16::try_from(column).unwrap_or(0)
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, year: i32, month: u8) {
        let title = format!("{year}년 {month}월");
        let width = u16::try_from(Line::raw(title.as_str()).width()).unwrap_or(u16::MAX);
        self.mvprint(0, 0, "<", Some(HINT_STYLE));
        self.mvprint(0, GRID_WIDTH.saturating_sub(width) / 2, title, Some(MONTH_STYLE));
        self.mvprint(0, GRID_WIDTH - 1, ">", Some(HINT_STYLE));
    }

    fn draw_header(&mut self) {
        for (column, name) in WEEKDAY_NAMES.iter().enumerate() {
            let style = weekday_style(column).add_modifier(Modifier::BOLD);
            // Center the two-column-wide name over the four-column day number
            self.mvprint(1, column_x(column) + 1, name, Some(style));
        }
        self.hline(2, 0, ACS_HLINE, GRID_WIDTH);
    }

    fn draw_day(&mut self, week_no: u16, column: usize, s: Span<'_>) {
        self.mvprint(
            week_no * WEEK_LINES + HEADER_LINES,
            column_x(column),
            s.content,
            Some(s.style),
        );
    }

    fn draw_marks(&mut self, week_no: u16, column: usize, marks: Vec<Span<'static>>) {
        if marks.is_empty() {
            return;
        }
        let qty = u16::try_from(marks.len()).unwrap_or(CELL_WIDTH);
        let y = week_no * WEEK_LINES + HEADER_LINES + 1;
        let x = column_x(column) + CELL_WIDTH.saturating_sub(qty) / 2;
        self.mvprint_line(y, x, Line::from(marks));
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        self.mvprint_line(y, x, Line::styled(s.as_ref().to_owned(), style.unwrap_or_default()));
    }

    fn mvprint_line(&mut self, y: u16, x: u16, line: Line<'_>) {
        if y < self.area.height && x < self.area.width {
            let width = u16::try_from(line.width()).unwrap_or(u16::MAX);
            // A Paragraph truncates text that extends beyond the calendar's
            // area, though the Rect passed to it must be entirely within the
            // frame lest a panic result.
            Paragraph::new(Text::from(line)).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use ratatui::style::Color;
    use time::macros::date;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn march_view() -> MonthView {
        MonthView::new(date!(2026 - 03 - 18)).unwrap()
    }

    #[test]
    fn test_day_rows() {
        let view = march_view();
        let ledger = Ledger::new();
        let area = Rect::new(0, 0, GRID_WIDTH, grid_height(view.grid().week_count()));
        assert_eq!(area.height, 13);
        let mut buffer = Buffer::empty(area);
        MonthCalendar::new(&view, &ledger).render(area, &mut buffer);
        assert_eq!(row(&buffer, 2), "─".repeat(46));
        assert_eq!(
            row(&buffer, 3),
            "  1      2      3      4      5      6      7 "
        );
        assert_eq!(
            row(&buffer, 7),
            " 15     16     17    [18]    19     20     21 "
        );
        assert_eq!(
            row(&buffer, 11),
            " 29     30     31                             "
        );
        assert_eq!(buffer[(0, 0)].symbol(), "<");
        assert_eq!(buffer[(45, 0)].symbol(), ">");
    }

    #[test]
    fn test_marks() {
        let view = march_view();
        let mut ledger = Ledger::new();
        let d = date!(2026 - 03 - 10);
        ledger.add_todo(Some(d), "one");
        ledger.add_todo(Some(d), "two");
        ledger.update_memo(d, "memo");
        for text in ["a", "b", "c", "d", "e"] {
            ledger.add_todo(Some(date!(2026 - 03 - 13)), text);
        }
        ledger.update_memo(date!(2026 - 03 - 20), "   ");
        let area = Rect::new(0, 0, GRID_WIDTH, 13);
        let mut buffer = Buffer::empty(area);
        MonthCalendar::new(&view, &ledger).render(area, &mut buffer);
        // The 10th is a Tuesday in the second week
        assert_eq!(
            row(&buffer, 6),
            "              •••                  •••        "
        );
        assert_eq!(buffer[(14, 6)].fg, Color::Magenta);
        assert_eq!(buffer[(15, 6)].fg, Color::Magenta);
        assert_eq!(buffer[(16, 6)].fg, Color::Yellow);
        assert_eq!(buffer[(35, 6)].fg, Color::Magenta);
        // A blank memo gets no marker
        assert_eq!(row(&buffer, 8).trim(), "");
    }

    #[test]
    fn test_selected_style() {
        let mut view = march_view();
        view.select_day(5).unwrap();
        let ledger = Ledger::new();
        let area = Rect::new(0, 0, GRID_WIDTH, 13);
        let mut buffer = Buffer::empty(area);
        MonthCalendar::new(&view, &ledger).render(area, &mut buffer);
        assert_eq!(buffer[(28, 3)].bg, Color::Magenta);
        assert_eq!(buffer[(21, 3)].bg, Color::Black);
        // Sundays are red and Saturdays blue
        assert_eq!(buffer[(2, 3)].fg, Color::LightRed);
        assert_eq!(buffer[(44, 3)].fg, Color::LightBlue);
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let view = march_view();
        let ledger = Ledger::new();
        let area = Rect::new(0, 0, 10, 4);
        let mut buffer = Buffer::empty(area);
        MonthCalendar::new(&view, &ledger).render(area, &mut buffer);
        assert_eq!(row(&buffer, 3), "  1      2");
    }
}
