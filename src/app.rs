use crate::background::Background;
use crate::calendar::{
    GRID_WIDTH, MonthCalendar, MonthView, format_date, grid_height, month_index0,
};
use crate::help::Help;
use crate::input::{InputOutcome, Prompt, TextInput, TextInputKey};
use crate::ledger::{Ledger, TodoItem};
use crate::panel::DayPanel;
use crate::share::{ShareDraft, SharePreview, open_uri};
use crate::theme::{BASE_STYLE, STATUS_STYLE, TITLE_STYLE};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, read};
use log::{info, warn};
use ratatui::{
    Terminal,
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};
use std::io::{self, Write};
use std::path::Path;
use time::Date;

/// Where "share via mail" sends its link
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ShareSettings {
    pub(crate) recipient: String,
    pub(crate) opener: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    view: MonthView,
    ledger: Ledger,
    background: Background,
    share: ShareSettings,
    state: AppState,
    status: Option<String>,
}

impl App {
    pub(crate) fn new(view: MonthView, share: ShareSettings) -> App {
        App {
            view,
            ledger: Ledger::new(),
            background: Background::default(),
            share,
            state: AppState::Calendar,
            status: None,
        }
    }

    pub(crate) fn background(mut self, background: Background) -> App {
        self.background = background;
        self
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()>
    where
        io::Error: From<B::Error>,
    {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        io::Error: From<B::Error>,
    {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            self.status = None;
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => self.handle_calendar_key(key),
            AppState::Todos { cursor } => self.handle_todos_key(cursor, key),
            AppState::AddingTodo { .. } => self.handle_adding_key(key),
            AppState::EditingMemo { .. } => self.handle_memo_key(key),
            AppState::ChangingBackground(_) => self.handle_background_key(key),
            AppState::Sharing { .. } => self.handle_sharing_key(key),
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn handle_calendar_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('h') | KeyCode::Left => self.view.move_selection(-1).is_ok(),
            KeyCode::Char('l') | KeyCode::Right => self.view.move_selection(1).is_ok(),
            KeyCode::Char('k') | KeyCode::Up => self.view.move_selection(-7).is_ok(),
            KeyCode::Char('j') | KeyCode::Down => self.view.move_selection(7).is_ok(),
            KeyCode::Char('p') | KeyCode::PageUp => self.view.previous_month().is_ok(),
            KeyCode::Char('n') | KeyCode::PageDown => self.view.next_month().is_ok(),
            KeyCode::Char('0') | KeyCode::Home => self.view.jump_to_today().is_ok(),
            KeyCode::Enter | KeyCode::Tab => {
                if self.selected_todos().is_empty() {
                    false
                } else {
                    self.state = AppState::Todos { cursor: 0 };
                    true
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.state = AppState::Quitting;
                true
            }
            KeyCode::Char('a') => self.start_adding(false),
            _ => self.handle_shared_key(key, None),
        }
    }

    fn handle_todos_key(&mut self, cursor: usize, key: KeyCode) -> bool {
        let todos = self
            .selected_todos()
            .into_iter()
            .map(TodoItem::id)
            .collect::<Vec<_>>();
        match key {
            KeyCode::Char('j') | KeyCode::Down if cursor + 1 < todos.len() => {
                self.state = AppState::Todos { cursor: cursor + 1 };
                true
            }
            KeyCode::Char('k') | KeyCode::Up if cursor > 0 => {
                self.state = AppState::Todos { cursor: cursor - 1 };
                true
            }
            KeyCode::Char(' ' | 'x') => todos
                .get(cursor)
                .is_some_and(|&id| self.ledger.toggle_todo(id)),
            KeyCode::Char('d') | KeyCode::Delete => {
                let Some(&id) = todos.get(cursor) else {
                    return false;
                };
                if let Some(todo) = self.ledger.delete_todo(id) {
                    info!("Deleted to-do {:?} on {}", todo.text(), todo.date());
                }
                let remaining = todos.len() - 1;
                self.state = if remaining == 0 {
                    AppState::Calendar
                } else {
                    AppState::Todos {
                        cursor: cursor.min(remaining - 1),
                    }
                };
                true
            }
            KeyCode::Char('a') => self.start_adding(true),
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Tab => {
                self.state = AppState::Calendar;
                true
            }
            _ => self.handle_shared_key(key, Some(cursor)),
        }
    }

    // Keys that act on the selected date the same way whether the calendar or
    // the to-do list has focus.  `list_cursor` is the to-do list's cursor when
    // the list has focus.
    fn handle_shared_key(&mut self, key: KeyCode, list_cursor: Option<usize>) -> bool {
        match key {
            KeyCode::Char('e') => {
                let Some(date) = self.view.selected() else {
                    return false;
                };
                let input = TextInput::multiline(self.ledger.memo_for_date(date));
                self.state = AppState::EditingMemo {
                    date,
                    input,
                    list_cursor,
                };
                true
            }
            KeyCode::Char('s') => {
                let Some(date) = self.view.selected() else {
                    return false;
                };
                let draft = ShareDraft::compose(
                    date,
                    &self.selected_todos(),
                    self.ledger.memo_for_date(date),
                );
                self.state = AppState::Sharing { draft, list_cursor };
                true
            }
            KeyCode::Char('b') => {
                self.state = AppState::ChangingBackground(TextInput::new());
                true
            }
            KeyCode::Char('?') => {
                self.state = AppState::Helping;
                true
            }
            _ => false,
        }
    }

    fn start_adding(&mut self, from_list: bool) -> bool {
        if self.view.selected().is_none() {
            return false;
        }
        self.state = AppState::AddingTodo {
            input: TextInput::new(),
            from_list,
        };
        true
    }

    fn handle_adding_key(&mut self, key: KeyCode) -> bool {
        let AppState::AddingTodo { input, from_list } = &mut self.state else {
            return false;
        };
        match key {
            KeyCode::Esc => {
                let from_list = *from_list;
                let count = self.selected_todos().len();
                self.state = if from_list && count > 0 {
                    AppState::Todos { cursor: count - 1 }
                } else {
                    AppState::Calendar
                };
                true
            }
            KeyCode::Enter => {
                // Blank input is ignored
                if let Some(todo) = self.ledger.add_todo(self.view.selected(), input.text()) {
                    info!("Added to-do {:?} on {}", todo.text(), todo.date());
                    input.clear();
                }
                true
            }
            _ => text_input_key(key)
                .is_some_and(|k| input.handle_input(k) != InputOutcome::Invalid),
        }
    }

    fn handle_memo_key(&mut self, key: KeyCode) -> bool {
        let AppState::EditingMemo {
            date,
            input,
            list_cursor,
        } = &mut self.state
        else {
            return false;
        };
        let outcome = match key {
            KeyCode::Esc => {
                let list_cursor = *list_cursor;
                self.state = self.refocus(list_cursor);
                return true;
            }
            KeyCode::Enter => input.handle_input(TextInputKey::Newline),
            _ => match text_input_key(key) {
                Some(k) => input.handle_input(k),
                None => return false,
            },
        };
        if outcome == InputOutcome::Changed {
            self.ledger.update_memo(*date, input.text());
        }
        outcome != InputOutcome::Invalid
    }

    fn handle_background_key(&mut self, key: KeyCode) -> bool {
        let AppState::ChangingBackground(input) = &mut self.state else {
            return false;
        };
        match key {
            KeyCode::Esc => {
                self.state = AppState::Calendar;
                true
            }
            KeyCode::Enter => {
                let path = input.text().trim().to_owned();
                if path.is_empty() {
                    return false;
                }
                self.set_background(Path::new(&path));
                true
            }
            _ => text_input_key(key)
                .is_some_and(|k| input.handle_input(k) != InputOutcome::Invalid),
        }
    }

    fn set_background(&mut self, path: &Path) {
        match Background::load(path) {
            Ok(background) => {
                info!(
                    "Background set to {background} ({} byte data URI)",
                    background.data_uri().map_or(0, str::len)
                );
                self.status = Some(format!("배경 변경: {background}"));
                self.background = background;
                self.state = AppState::Calendar;
            }
            Err(e) => {
                warn!("Could not load background from {}: {e:?}", path.display());
                self.status = Some(format!("배경을 불러오지 못했습니다: {e}"));
            }
        }
    }

    fn handle_sharing_key(&mut self, key: KeyCode) -> bool {
        let AppState::Sharing { draft, list_cursor } = &self.state else {
            return false;
        };
        let list_cursor = *list_cursor;
        match key {
            KeyCode::Enter => {
                let uri = draft.mailto_uri(&self.share.recipient);
                match open_uri(&self.share.opener, &uri) {
                    Ok(()) => {
                        info!("Opened {uri}");
                        self.status = Some(String::from("메일 앱을 열었습니다"));
                        self.state = self.refocus(list_cursor);
                    }
                    Err(e) => {
                        warn!("Failed to run {}: {e}", self.share.opener);
                        self.status = Some(format!("메일 앱을 열 수 없습니다: {e}"));
                    }
                }
                true
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.state = self.refocus(list_cursor);
                true
            }
            _ => false,
        }
    }

    // The state to return to when a popup closes: the to-do list if it had
    // focus and still has items, else the calendar
    fn refocus(&self, list_cursor: Option<usize>) -> AppState {
        let count = self.selected_todos().len();
        match list_cursor {
            Some(cursor) if count > 0 => AppState::Todos {
                cursor: cursor.min(count - 1),
            },
            _ => AppState::Calendar,
        }
    }

    fn selected_todos(&self) -> Vec<&TodoItem> {
        self.view
            .selected()
            .map(|d| self.ledger.todos_for_date(d).collect())
            .unwrap_or_default()
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn header(&self) -> (Line<'static>, Line<'static>) {
        let grid = self.view.grid();
        let todos = self
            .ledger
            .todos()
            .filter(|t| grid.contains(t.date()))
            .count();
        let memos = self
            .ledger
            .memo_entries()
            .filter(|m| grid.contains(m.date()) && !m.is_blank())
            .count();
        let mut left = vec![Span::styled(
            format!(" {} Calendar", grid.year()),
            TITLE_STYLE,
        )];
        if let Some(d) = self.view.selected() {
            let iso = format_date(d.year(), month_index0(d.month()), d.day())
                .unwrap_or_else(|e| {
                    warn!("Failed to format {d}: {e}");
                    d.to_string()
                });
            left.push(Span::styled(format!("  {iso}"), BASE_STYLE));
        }
        let right = Line::styled(
            format!("할 일 {todos} · 메모 {memos} · 배경: {} ", self.background),
            STATUS_STYLE,
        )
        .right_aligned();
        (Line::from(left), right)
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [header_area, _, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        let (left, right) = self.header();
        right.render(header_area, buf);
        left.render(header_area, buf);

        let [_, cal_area, _, panel_area] = Layout::horizontal([
            Constraint::Length(1),
            Constraint::Length(GRID_WIDTH),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(body_area);
        let cal_area = Rect {
            height: cal_area
                .height
                .min(grid_height(self.view.grid().week_count())),
            ..cal_area
        };
        MonthCalendar::new(&self.view, &self.ledger).render(cal_area, buf);
        let mut panel = DayPanel::new(&self.ledger, self.view.selected());
        if let AppState::Todos { cursor } = self.state {
            panel = panel.cursor(cursor);
        }
        panel.render(panel_area, buf);

        let status = match &self.status {
            Some(msg) => Line::styled(format!(" {msg}"), STATUS_STYLE),
            None => Line::styled(" ?: 도움말  q: 종료", STATUS_STYLE),
        };
        status.render(status_area, buf);

        match &mut self.state {
            AppState::Helping => Help(BASE_STYLE).render(area, buf),
            AppState::AddingTodo { input, .. } => {
                let title = self.view.selected().map_or_else(
                    || String::from("할 일 추가"),
                    |d| format!("{}월 {}일 할 일 추가", u8::from(d.month()), d.day()),
                );
                Prompt::new(&title, "Enter: 추가 · Esc: 닫기").render(area, buf, input);
            }
            AppState::EditingMemo { date, input, .. } => {
                let title = format!("{}월 {}일 메모", u8::from(date.month()), date.day());
                Prompt::new(&title, "Enter: 줄바꿈 · Esc: 닫기")
                    .height(6)
                    .render(area, buf, input);
            }
            AppState::ChangingBackground(input) => {
                Prompt::new("배경 이미지 경로", "Enter: 적용 · Esc: 취소").render(
                    area, buf, input,
                );
            }
            AppState::Sharing { draft, .. } => {
                SharePreview::new(draft, &self.share.recipient).render(area, buf);
            }
            AppState::Calendar | AppState::Todos { .. } | AppState::Quitting => (),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Todos { cursor: usize },
    AddingTodo { input: TextInput, from_list: bool },
    EditingMemo {
        date: Date,
        input: TextInput,
        list_cursor: Option<usize>,
    },
    ChangingBackground(TextInput),
    Sharing {
        draft: ShareDraft,
        list_cursor: Option<usize>,
    },
    Helping,
    Quitting,
}

fn text_input_key(key: KeyCode) -> Option<TextInputKey> {
    match key {
        KeyCode::Char(ch) => Some(TextInputKey::Char(ch)),
        KeyCode::Backspace => Some(TextInputKey::Backspace),
        KeyCode::Delete => Some(TextInputKey::Delete),
        KeyCode::Left => Some(TextInputKey::Left),
        KeyCode::Right => Some(TextInputKey::Right),
        KeyCode::Home => Some(TextInputKey::Home),
        KeyCode::End => Some(TextInputKey::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};
    use time::macros::date;

    fn app() -> App {
        let view = MonthView::new(date!(2026 - 03 - 10)).unwrap();
        App::new(
            view,
            ShareSettings {
                recipient: String::from("someone@example.com"),
                opener: String::from("/nonexistent/dayledger-opener"),
            },
        )
    }

    fn press(app: &mut App, keys: &str) {
        for ch in keys.chars() {
            assert!(app.handle_key(KeyCode::Char(ch)), "key {ch:?} rejected");
        }
    }

    // Wide characters occupy two cells; skip the cell hidden behind each one
    fn lines(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| {
                let mut s = String::new();
                let mut x = 0;
                while x < buf.area.width {
                    let symbol = buf[(x, y)].symbol();
                    s.push_str(symbol);
                    x += u16::try_from(Span::raw(symbol).width()).unwrap_or(1).max(1);
                }
                s
            })
            .collect()
    }

    #[test]
    fn test_add_toggle_delete() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Char('a')));
        assert!(app.handle_key(KeyCode::Right));
        assert_eq!(app.view.selected(), Some(date!(2026 - 03 - 10)));
        press(&mut app, "aBuy milk");
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(
            app.state,
            AppState::AddingTodo {
                input: TextInput::new(),
                from_list: false
            }
        );
        press(&mut app, "Call dentist");
        assert!(app.handle_key(KeyCode::Enter));
        assert!(app.handle_key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Calendar);
        let texts = app
            .selected_todos()
            .into_iter()
            .map(|t| t.text().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(texts, ["Buy milk", "Call dentist"]);

        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Todos { cursor: 0 });
        assert!(!app.handle_key(KeyCode::Up));
        press(&mut app, " ");
        assert!(app.selected_todos()[0].is_completed());
        press(&mut app, "jd");
        assert_eq!(app.state, AppState::Todos { cursor: 0 });
        press(&mut app, "d");
        assert_eq!(app.state, AppState::Calendar);
        assert!(app.selected_todos().is_empty());
        assert!(!app.handle_key(KeyCode::Enter));
    }

    #[test]
    fn test_blank_todo_ignored() {
        let mut app = app();
        app.view.select_day(3).unwrap();
        press(&mut app, "a  ");
        assert!(app.handle_key(KeyCode::Enter));
        assert!(app.selected_todos().is_empty());
    }

    #[test]
    fn test_add_from_list_returns_to_list() {
        let mut app = app();
        app.view.select_day(3).unwrap();
        press(&mut app, "aone");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Esc);
        app.handle_key(KeyCode::Tab);
        press(&mut app, "atwo");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.state, AppState::Todos { cursor: 1 });
    }

    #[test]
    fn test_edit_memo() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Char('e')));
        app.view.select_day(20).unwrap();
        press(&mut app, "eline 1");
        assert!(app.handle_key(KeyCode::Enter));
        press(&mut app, "line 2");
        assert_eq!(
            app.ledger.memo_for_date(date!(2026 - 03 - 20)),
            "line 1\nline 2"
        );
        assert!(app.handle_key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Calendar);
        press(&mut app, "e");
        assert!(app.handle_key(KeyCode::End));
        for _ in 0.."line 1\nline 2".len() {
            app.handle_key(KeyCode::Backspace);
        }
        assert!(!app.ledger.has_memo(date!(2026 - 03 - 20)));
    }

    #[test]
    fn test_month_change_clears_selection() {
        let mut app = app();
        app.view.select_day(5).unwrap();
        press(&mut app, "n");
        assert_eq!(app.view.selected(), None);
        assert!(!app.handle_key(KeyCode::Char('s')));
        press(&mut app, "0");
        assert_eq!(app.view.selected(), Some(date!(2026 - 03 - 10)));
    }

    #[test]
    fn test_share_failure_reported() {
        let mut app = app();
        app.view.select_day(10).unwrap();
        press(&mut app, "s");
        let AppState::Sharing { draft, .. } = &app.state else {
            panic!("expected share popup");
        };
        assert_eq!(draft.subject(), "2026년 3월 10일 일정");
        // The opener cannot be started
        assert!(app.handle_key(KeyCode::Enter));
        assert!(matches!(app.state, AppState::Sharing { .. }));
        assert!(app.status.is_some());
        assert!(app.handle_key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Calendar);
    }

    #[cfg(unix)]
    #[test]
    fn test_share_opens_without_waiting() {
        let mut app = app();
        app.share.opener = String::from("true");
        app.view.select_day(10).unwrap();
        press(&mut app, "aone");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Esc);
        app.handle_key(KeyCode::Enter);
        press(&mut app, "s");
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Todos { cursor: 0 });
        assert_eq!(app.status.as_deref(), Some("메일 앱을 열었습니다"));
    }

    #[test]
    fn test_popups_return_to_list() {
        let mut app = app();
        app.view.select_day(12).unwrap();
        press(&mut app, "aone");
        app.handle_key(KeyCode::Enter);
        press(&mut app, "two");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Esc);
        app.handle_key(KeyCode::Tab);
        press(&mut app, "j");
        assert_eq!(app.state, AppState::Todos { cursor: 1 });
        press(&mut app, "enote");
        assert!(app.handle_key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Todos { cursor: 1 });
        assert_eq!(app.ledger.memo_for_date(date!(2026 - 03 - 12)), "note");
        press(&mut app, "s");
        assert!(app.handle_key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Todos { cursor: 1 });
        // From the calendar, the memo editor closes back to the calendar
        assert!(app.handle_key(KeyCode::Esc));
        press(&mut app, "e");
        assert!(app.handle_key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Calendar);
    }

    #[test]
    fn test_change_background() {
        let mut file = tempfile::Builder::new().suffix(".gif").tempfile().unwrap();
        file.write_all(b"GIF89a").unwrap();
        let mut app = app();
        press(&mut app, "b");
        assert!(!app.handle_key(KeyCode::Enter));
        press(&mut app, "/nonexistent.png");
        assert!(app.handle_key(KeyCode::Enter));
        assert!(matches!(app.state, AppState::ChangingBackground(_)));
        assert_eq!(app.background, Background::Default);

        app.state = AppState::ChangingBackground(TextInput::new());
        press(&mut app, &file.path().display().to_string());
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Calendar);
        assert_eq!(
            app.background.data_uri(),
            Some("data:image/gif;base64,R0lGODlh")
        );
    }

    #[test]
    fn test_help_and_quit() {
        let mut app = app();
        press(&mut app, "?");
        assert_eq!(app.state, AppState::Helping);
        assert!(app.handle_key(KeyCode::Char('z')));
        assert_eq!(app.state, AppState::Calendar);
        assert!(!app.handle_key(KeyCode::Char('z')));
        press(&mut app, "q");
        assert!(app.quitting());
    }

    #[test]
    fn test_render() {
        let mut app = app();
        app.view.select_day(10).unwrap();
        app.ledger.add_todo(Some(date!(2026 - 03 - 10)), "Buy milk");
        app.ledger.add_todo(Some(date!(2026 - 04 - 01)), "Next month");
        app.ledger.update_memo(date!(2026 - 03 - 02), "memo");
        let area = Rect::new(0, 0, 90, 24);
        let mut buffer = Buffer::empty(area);
        (&mut app).render(area, &mut buffer);
        assert_eq!(
            lines(&buffer),
            [
                " 2026 Calendar  2026-03-10                                  할 일 1 · 메모 1 · 배경: 기본 ",
                "                                                                                          ",
                " <                 2026년 3월                 >  ┌ 3월 10일 할 일 ───────────────────────┐",
                "  일     월     화     수     목     금     토   │○ Buy milk                             │",
                " ──────────────────────────────────────────────  │                                       │",
                "   1      2      3      4      5      6      7   │                                       │",
                "         •                                       │                                       │",
                "   8      9    [10]    11     12     13     14   │                                       │",
                "                •                                │                                       │",
                "  15     16     17     18     19     20     21   │                                       │",
                "                                                 │                                       │",
                "  22     23     24     25     26     27     28   │                                       │",
                "                                                 │                                       │",
                "  29     30     31                               │                                       │",
                "                                                 └───────────────────────────────────────┘",
                "                                                 ┌ 메모 ─────────────────────────────────┐",
                "                                                 │이 날의 메모를 작성하세요...           │",
                "                                                 │                                       │",
                "                                                 │                                       │",
                "                                                 │                                       │",
                "                                                 │                                       │",
                "                                                 │                                       │",
                "                                                 └───────────────────────────────────────┘",
                " ?: 도움말  q: 종료                                                                       ",
            ]
        );
        assert!(buffer[(1, 0)].modifier.contains(Modifier::BOLD));
        for x in 15..19 {
            assert_eq!(buffer[(x, 7)].bg, Color::Magenta);
        }
        assert_eq!(buffer[(1, 23)].fg, Color::Gray);
    }
}
