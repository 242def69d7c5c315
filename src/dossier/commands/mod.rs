//! Pure operations over a [`RecordStore`](crate::store::RecordStore).
//!
//! Commands take plain Rust values, return a [`CmdResult`], and never touch
//! the terminal. The view layer decides how to show their messages.

use crate::model::Record;

pub mod create;
pub mod list;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    fn with_level(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::with_level(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::with_level(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::with_level(MessageLevel::Error, content)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub records: Vec<Record>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }
}
