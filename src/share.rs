use crate::ledger::TodoItem;
use crate::theme::{BASE_STYLE, HINT_STYLE, TITLE_STYLE};
use log::warn;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, HorizontalAlignment, Layout, Margin, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};
use std::io;
use std::process::{Command, Stdio};
use std::thread;
use time::Date;

const DONE_PREFIX: char = '✓';
const OPEN_PREFIX: char = '○';
const NOTHING: &str = "없음";

#[cfg(target_os = "macos")]
pub(crate) const DEFAULT_OPENER: &str = "open";
#[cfg(target_os = "windows")]
pub(crate) const DEFAULT_OPENER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub(crate) const DEFAULT_OPENER: &str = "xdg-open";

/// Returns the marker shown in front of a to-do's text
pub(crate) fn todo_prefix(todo: &TodoItem) -> char {
    if todo.is_completed() {
        DONE_PREFIX
    } else {
        OPEN_PREFIX
    }
}

/// Lists the given to-dos one per line in the given order, each prefixed with
/// its completion marker
pub(crate) fn todo_summary(todos: &[&TodoItem]) -> String {
    todos
        .iter()
        .map(|t| format!("{} {}", todo_prefix(t), t.text()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The subject and body of an e-mail describing one day
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ShareDraft {
    subject: String,
    body: String,
}

impl ShareDraft {
    pub(crate) fn compose(date: Date, todos: &[&TodoItem], memo: &str) -> ShareDraft {
        let day = format!(
            "{}년 {}월 {}일",
            date.year(),
            u8::from(date.month()),
            date.day()
        );
        let summary = todo_summary(todos);
        let todo_section = if summary.is_empty() {
            NOTHING
        } else {
            summary.as_str()
        };
        let memo_section = if memo.is_empty() { NOTHING } else { memo };
        ShareDraft {
            subject: format!("{day} 일정"),
            body: format!(
                "📅 {day}\n\n📝 할 일 목록:\n{todo_section}\n\n📒 메모:\n{memo_section}"
            ),
        }
    }

    pub(crate) fn subject(&self) -> &str {
        &self.subject
    }

    pub(crate) fn body(&self) -> &str {
        &self.body
    }

    pub(crate) fn mailto_uri(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient.trim(),
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

const PREVIEW_WIDTH: u16 = 60;

/// A popup showing the mail that sharing a day would compose
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SharePreview<'a> {
    draft: &'a ShareDraft,
    recipient: &'a str,
}

impl<'a> SharePreview<'a> {
    pub(crate) fn new(draft: &'a ShareDraft, recipient: &'a str) -> Self {
        SharePreview { draft, recipient }
    }
}

impl Widget for SharePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let recipient = if self.recipient.trim().is_empty() {
            NOTHING
        } else {
            self.recipient.trim()
        };
        let mut lines = vec![
            Line::styled(format!("받는 사람: {recipient}"), BASE_STYLE),
            Line::styled(format!("제목: {}", self.draft.subject), TITLE_STYLE),
            Line::default(),
        ];
        lines.extend(
            self.draft
                .body
                .lines()
                .map(|ln| Line::styled(ln.to_owned(), BASE_STYLE)),
        );
        lines.push(Line::default());
        lines.push(Line::styled("Enter: 메일 앱 열기 · Esc: 닫기", HINT_STYLE));
        let text = Text::from(lines);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.height);
        let [outer_area] = Layout::horizontal([PREVIEW_WIDTH.min(area.width)])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .title(" 메일로 공유 ")
                    .title_alignment(HorizontalAlignment::Center),
            )
            .render(block_area, buf);
    }
}

/// Hands `uri` to an external program such as `xdg-open` without waiting for
/// it.  Only a failure to start the program is reported.
pub(crate) fn open_uri(opener: &str, uri: &str) -> io::Result<()> {
    let mut child = Command::new(opener)
        .arg(uri)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let opener = opener.to_owned();
    thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => warn!("{opener} exited with {status}"),
        Ok(_) => (),
        Err(e) => warn!("Failed to wait for {opener}: {e}"),
    });
    Ok(())
}
