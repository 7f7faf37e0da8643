use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const STATUS_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) const HINT_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) mod calendar {
    use super::*;

    pub(crate) const MONTH_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const SUNDAY_STYLE: Style = BASE_STYLE.fg(Color::LightRed);

    pub(crate) const SATURDAY_STYLE: Style = BASE_STYLE.fg(Color::LightBlue);

    pub(crate) const TODAY_STYLE: Style = BASE_STYLE
        .fg(Color::LightMagenta)
        .add_modifier(Modifier::BOLD);

    pub(crate) const SELECTED_STYLE: Style = Style::new()
        .fg(Color::White)
        .bg(Color::Magenta)
        .add_modifier(Modifier::BOLD);

    pub(crate) const TODO_MARK_STYLE: Style = BASE_STYLE.fg(Color::Magenta);

    pub(crate) const MEMO_MARK_STYLE: Style = BASE_STYLE.fg(Color::Yellow);
}

pub(crate) mod panel {
    use super::*;

    pub(crate) const OPEN_TODO_STYLE: Style = BASE_STYLE;

    pub(crate) const DONE_TODO_STYLE: Style = BASE_STYLE
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT);

    pub(crate) const CURSOR_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);

    pub(crate) const FOCUSED_BORDER_STYLE: Style = BASE_STYLE.fg(Color::Magenta);
}

pub(crate) mod input {
    use super::*;

    pub(crate) const CARET_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);
}
