//! A [`Screen`] that replays scripted input and records what was drawn.

use super::{clip_to_width, Key, Screen, Style};
use crate::error::Result;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub row: u16,
    pub col: u16,
    pub text: String,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub label: String,
    pub initial: String,
}

/// Keys are consumed in order; once they run out every read returns
/// [`Key::Interrupt`] so a run loop always terminates. Prompts consume
/// `answers` in order and echo the initial text when none are left; a
/// `None` answer stands for Ctrl-C inside the prompt.
pub struct ScriptedScreen {
    rows: u16,
    cols: u16,
    keys: VecDeque<Key>,
    answers: VecDeque<Option<String>>,
    frame: Vec<Draw>,
    frames: Vec<Vec<Draw>>,
    pub prompts: Vec<Prompt>,
}

impl Default for ScriptedScreen {
    fn default() -> Self {
        Self::new(40, 120)
    }
}

impl ScriptedScreen {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            keys: VecDeque::new(),
            answers: VecDeque::new(),
            frame: Vec::new(),
            frames: Vec::new(),
            prompts: Vec::new(),
        }
    }

    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    pub fn with_answers<I, T>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.answers
            .extend(answers.into_iter().map(|a| Some(a.into())));
        self
    }

    /// The next prompt is abandoned with Ctrl-C.
    pub fn with_prompt_interrupt(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    pub fn push_key(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    /// What has been drawn since the last clear.
    pub fn current_frame(&self) -> &[Draw] {
        &self.frame
    }

    pub fn frame_contains(&self, needle: &str) -> bool {
        self.frame.iter().any(|d| d.text.contains(needle))
    }

    /// Every finished frame plus the current one.
    pub fn all_text(&self) -> String {
        self.frames
            .iter()
            .chain(std::iter::once(&self.frame))
            .flatten()
            .map(|d| d.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn highlighted(&self) -> Vec<&str> {
        self.frame
            .iter()
            .filter(|d| d.style == Style::Highlight)
            .map(|d| d.text.as_str())
            .collect()
    }
}

impl Screen for ScriptedScreen {
    fn clear(&mut self) -> Result<()> {
        let done = std::mem::take(&mut self.frame);
        self.frames.push(done);
        Ok(())
    }

    fn write_at(&mut self, row: u16, col: u16, text: &str, style: Style) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Ok(());
        }
        self.frame.push(Draw {
            row,
            col,
            text: clip_to_width(text, usize::from(self.cols - col)).to_string(),
            style,
        });
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        Ok(self.keys.pop_front().unwrap_or(Key::Interrupt))
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok((self.rows, self.cols))
    }

    fn prompt_line(
        &mut self,
        _row: u16,
        _col: u16,
        label: &str,
        initial: &str,
    ) -> Result<Option<String>> {
        self.prompts.push(Prompt {
            label: label.to_string(),
            initial: initial.to_string(),
        });
        Ok(self
            .answers
            .pop_front()
            .unwrap_or_else(|| Some(initial.to_string())))
    }
}
