use crate::calendar::DayMarks;
use log::debug;
use std::collections::BTreeMap;
use std::fmt;
use time::Date;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct TodoId(u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "todo-{}", self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct TodoItem {
    id: TodoId,
    text: String,
    completed: bool,
    date: Date,
}

impl TodoItem {
    pub(crate) fn id(&self) -> TodoId {
        self.id
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn date(&self) -> Date {
        self.date
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MemoEntry {
    date: Date,
    content: String,
}

impl MemoEntry {
    pub(crate) fn date(&self) -> Date {
        self.date
    }

    pub(crate) fn content(&self) -> &str {
        &self.content
    }

    /// A memo consisting only of whitespace is displayed as no memo at all
    pub(crate) fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// In-memory to-do items and memos, keyed by calendar date
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Ledger {
    // Insertion-ordered
    todos: Vec<TodoItem>,
    // Invariant: each entry is stored under its own date
    memos: BTreeMap<Date, MemoEntry>,
    // Ids are never reused, even after deletion
    next_id: u64,
}

impl Ledger {
    pub(crate) fn new() -> Ledger {
        Ledger::default()
    }

    /// Add a to-do with the trimmed `text` on `date`.  Nothing is added if
    /// there is no date or the text is blank.
    pub(crate) fn add_todo(&mut self, date: Option<Date>, text: &str) -> Option<&TodoItem> {
        let date = date?;
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = TodoId(self.next_id);
        self.next_id += 1;
        debug!("Adding {id} on {date}: {text:?}");
        self.todos.push(TodoItem {
            id,
            text: text.to_owned(),
            completed: false,
            date,
        });
        self.todos.last()
    }

    /// Flip the completion state of the given to-do.  Returns `false` if
    /// there is no such to-do.
    pub(crate) fn toggle_todo(&mut self, id: TodoId) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                debug!("Marked {id} completed={}", todo.completed);
                true
            }
            None => false,
        }
    }

    pub(crate) fn delete_todo(&mut self, id: TodoId) -> Option<TodoItem> {
        let i = self.todos.iter().position(|t| t.id == id)?;
        debug!("Deleting {id}");
        Some(self.todos.remove(i))
    }

    /// Returns the to-dos on `date` in the order they were added
    pub(crate) fn todos_for_date(&self, date: Date) -> impl Iterator<Item = &TodoItem> + '_ {
        self.todos.iter().filter(move |t| t.date == date)
    }

    /// Returns the memo for `date`, or the empty string if there is none
    pub(crate) fn memo_for_date(&self, date: Date) -> &str {
        self.memos.get(&date).map_or("", MemoEntry::content)
    }

    pub(crate) fn has_memo(&self, date: Date) -> bool {
        self.memos.get(&date).is_some_and(|m| !m.is_blank())
    }

    /// Set the memo for `date`, replacing any existing one.  Empty content is
    /// stored as an empty entry rather than removing the entry.
    pub(crate) fn update_memo(&mut self, date: Date, content: &str) {
        debug!("Updating memo on {date} ({} bytes)", content.len());
        self.memos
            .entry(date)
            .and_modify(|m| content.clone_into(&mut m.content))
            .or_insert_with(|| MemoEntry {
                date,
                content: content.to_owned(),
            });
    }

    pub(crate) fn todos(&self) -> impl Iterator<Item = &TodoItem> + '_ {
        self.todos.iter()
    }

    pub(crate) fn memo_entries(&self) -> impl Iterator<Item = &MemoEntry> + '_ {
        self.memos.values()
    }
}

impl DayMarks for Ledger {
    fn todo_count(&self, date: Date) -> usize {
        self.todos_for_date(date).count()
    }

    fn has_memo(&self, date: Date) -> bool {
        Ledger::has_memo(self, date)
    }
}
