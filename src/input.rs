use crate::theme::{BASE_STYLE, HINT_STYLE, input::CARET_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, HorizontalAlignment, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, StatefulWidget, Widget, Wrap},
};

/// A single editable text buffer with a caret
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct TextInput {
    text: String,
    // Caret position, counted in chars
    caret: usize,
    multiline: bool,
}

impl TextInput {
    pub(crate) fn new() -> TextInput {
        TextInput::default()
    }

    /// An input in which Enter starts a new line
    pub(crate) fn multiline(text: &str) -> TextInput {
        TextInput {
            text: text.to_owned(),
            caret: text.chars().count(),
            multiline: true,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    fn byte_offset(&self, caret: usize) -> usize {
        self.text
            .char_indices()
            .nth(caret)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Apply one key to the buffer, reporting whether the text changed, only
    /// the caret moved, or the key could not be applied
    pub(crate) fn handle_input(&mut self, input: TextInputKey) -> InputOutcome {
        match input {
            TextInputKey::Char(ch) => {
                let i = self.byte_offset(self.caret);
                self.text.insert(i, ch);
                self.caret += 1;
                InputOutcome::Changed
            }
            TextInputKey::Newline if self.multiline => {
                self.handle_input(TextInputKey::Char('\n'))
            }
            TextInputKey::Newline => InputOutcome::Invalid,
            TextInputKey::Backspace if self.caret > 0 => {
                self.caret -= 1;
                let i = self.byte_offset(self.caret);
                self.text.remove(i);
                InputOutcome::Changed
            }
            TextInputKey::Delete if self.caret < self.len() => {
                let i = self.byte_offset(self.caret);
                self.text.remove(i);
                InputOutcome::Changed
            }
            TextInputKey::Left if self.caret > 0 => {
                self.caret -= 1;
                InputOutcome::Moved
            }
            TextInputKey::Right if self.caret < self.len() => {
                self.caret += 1;
                InputOutcome::Moved
            }
            TextInputKey::Home => {
                self.caret = 0;
                InputOutcome::Moved
            }
            TextInputKey::End => {
                self.caret = self.len();
                InputOutcome::Moved
            }
            _ => InputOutcome::Invalid,
        }
    }

    fn to_text(&self) -> Text<'static> {
        let mut lines = Vec::new();
        let mut spans = Vec::new();
        let mut run = String::new();
        for (i, ch) in self.text.chars().enumerate() {
            if i == self.caret {
                spans.push(Span::styled(std::mem::take(&mut run), BASE_STYLE));
                let shown = if ch == '\n' { ' ' } else { ch };
                spans.push(Span::styled(shown.to_string(), CARET_STYLE));
            } else if ch != '\n' {
                run.push(ch);
            }
            if ch == '\n' {
                spans.push(Span::styled(std::mem::take(&mut run), BASE_STYLE));
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
        }
        spans.push(Span::styled(run, BASE_STYLE));
        if self.caret >= self.len() {
            spans.push(Span::styled(" ", CARET_STYLE));
        }
        lines.push(Line::from(spans));
        Text::from(lines)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TextInputKey {
    Char(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum InputOutcome {
    Changed,
    Moved,
    Invalid,
}

const PROMPT_WIDTH: u16 = 50;

/// A centered popup holding a [`TextInput`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Prompt<'a> {
    title: &'a str,
    hint: &'a str,
    height: u16,
}

impl<'a> Prompt<'a> {
    pub(crate) fn new(title: &'a str, hint: &'a str) -> Self {
        Prompt {
            title,
            hint,
            height: 1,
        }
    }

    pub(crate) fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }
}

impl StatefulWidget for Prompt<'_> {
    type State = TextInput;

    /*
     * ..................................................
     * .┌─────────────── Title ────────────────────────┐.
     * .│text█                                         │.
     * .│                                              │.
     * .│hint                                          │.
     * .└──────────────────────────────────────────────┘.
     * ..................................................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let outer_height = self.height.saturating_add(6);
        let [outer_area] = Layout::horizontal([PROMPT_WIDTH.min(area.width)])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([outer_height.min(area.height)])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(format!(" {} ", self.title))
            .title_alignment(HorizontalAlignment::Center)
            .render(block_area, buf);
        let inner = block_area.inner(Margin::new(1, 1));
        let [text_area, _, hint_area] =
            Layout::vertical([self.height, 1, 1]).areas(inner);
        Paragraph::new(state.to_text())
            .wrap(Wrap { trim: false })
            .render(text_area, buf);
        Line::styled(self.hint, HINT_STYLE).render(hint_area, buf);
    }
}
