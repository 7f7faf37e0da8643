use crate::ledger::{Ledger, TodoItem};
use crate::share::todo_prefix;
use crate::theme::panel::{CURSOR_STYLE, DONE_TODO_STYLE, FOCUSED_BORDER_STYLE, OPEN_TODO_STYLE};
use crate::theme::{BASE_STYLE, HINT_STYLE, TITLE_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use time::Date;

const NO_DATE_HINT: &str = "날짜를 선택하세요";
const NO_TODOS_HINT: &str = "할 일이 없습니다";
const MEMO_PLACEHOLDER: &str = "이 날의 메모를 작성하세요...";

/// Lines given to the memo block, borders included
const MEMO_HEIGHT: u16 = 8;

/// The to-do list and memo for the selected date
#[derive(Clone, Copy, Debug)]
pub(crate) struct DayPanel<'a> {
    ledger: &'a Ledger,
    date: Option<Date>,
    cursor: Option<usize>,
}

impl<'a> DayPanel<'a> {
    pub(crate) fn new(ledger: &'a Ledger, date: Option<Date>) -> Self {
        DayPanel {
            ledger,
            date,
            cursor: None,
        }
    }

    /// Give the to-do list focus, highlighting the to-do at index `cursor`
    pub(crate) fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    fn todo_title(&self) -> String {
        match self.date {
            Some(d) => format!(" {}월 {}일 할 일 ", u8::from(d.month()), d.day()),
            None => String::from(" 할 일 "),
        }
    }

    fn todo_lines(&self, date: Date) -> Vec<Line<'a>> {
        let todos = self.ledger.todos_for_date(date).collect::<Vec<_>>();
        if todos.is_empty() {
            return vec![Line::styled(NO_TODOS_HINT, HINT_STYLE).centered()];
        }
        todos
            .into_iter()
            .enumerate()
            .map(|(i, todo)| self.todo_line(i, todo))
            .collect()
    }

    fn todo_line(&self, index: usize, todo: &'a TodoItem) -> Line<'a> {
        let style = if todo.is_completed() {
            DONE_TODO_STYLE
        } else {
            OPEN_TODO_STYLE
        };
        let line = Line::from(vec![
            Span::styled(format!("{} ", todo_prefix(todo)), BASE_STYLE),
            Span::styled(todo.text(), style),
        ]);
        if self.cursor == Some(index) {
            line.patch_style(CURSOR_STYLE)
        } else {
            line
        }
    }

    fn memo_text(&self, date: Date) -> Text<'a> {
        let memo = self.ledger.memo_for_date(date);
        if memo.is_empty() {
            Text::styled(MEMO_PLACEHOLDER, HINT_STYLE)
        } else {
            Text::styled(memo, BASE_STYLE)
        }
    }
}

impl Widget for DayPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [todo_area, memo_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(MEMO_HEIGHT)]).areas(area);
        let border_style = if self.cursor.is_some() {
            FOCUSED_BORDER_STYLE
        } else {
            BASE_STYLE
        };
        let todo_block = Block::bordered()
            .title(Span::styled(self.todo_title(), TITLE_STYLE))
            .border_style(border_style)
            .style(BASE_STYLE);
        let memo_block = Block::bordered()
            .title(Span::styled(" 메모 ", TITLE_STYLE))
            .style(BASE_STYLE);
        let (todo_text, memo_text) = match self.date {
            Some(date) => (Text::from(self.todo_lines(date)), self.memo_text(date)),
            None => (
                Text::from(Line::styled(NO_DATE_HINT, HINT_STYLE).centered()),
                Text::from(Line::styled(NO_DATE_HINT, HINT_STYLE).centered()),
            ),
        };
        let scroll = self
            .cursor
            .and_then(|c| {
                let visible = usize::from(todo_area.height.saturating_sub(2));
                c.checked_sub(visible.saturating_sub(1))
            })
            .map_or(0, |s| u16::try_from(s).unwrap_or(u16::MAX));
        Paragraph::new(todo_text)
            .block(todo_block)
            .scroll((scroll, 0))
            .render(todo_area, buf);
        Paragraph::new(memo_text)
            .block(memo_block)
            .wrap(Wrap { trim: false })
            .render(memo_area, buf);
    }
}
