//! # Screen Capability
//!
//! Everything above this module talks to the terminal only through [`Screen`]:
//! clear, write styled text at a position, block for a key, report the size,
//! and prompt for one line of text. That keeps the view state machine and the
//! form testable with [`scripted::ScriptedScreen`] instead of a real terminal.
//!
//! [`term::TermScreen`] is the crossterm implementation used by the binary.

use crate::error::Result;
use unicode_width::UnicodeWidthChar;

#[cfg(any(test, feature = "test_utils"))]
pub mod scripted;
pub mod term;

/// Keys the application reacts to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Esc,
    Char(char),
    /// Ctrl-C: leave the application immediately, saving nothing.
    Interrupt,
    Other,
}

/// Visual roles; the concrete colors belong to the implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Normal,
    Title,
    Highlight,
    Prompt,
    Label,
    Path,
    Separator,
    Button,
    Success,
    Warning,
    Error,
}

pub trait Screen {
    fn clear(&mut self) -> Result<()>;

    /// Draws `text` starting at `(row, col)`. Text running past the right
    /// edge is clipped; rows outside the screen are ignored.
    fn write_at(&mut self, row: u16, col: u16, text: &str, style: Style) -> Result<()>;

    /// Blocks until a key is pressed.
    fn read_key(&mut self) -> Result<Key>;

    /// `(rows, cols)`
    fn size(&self) -> Result<(u16, u16)>;

    /// Single line editor pre-filled with `initial`; returns the raw text,
    /// or `None` when the user pressed Ctrl-C.
    fn prompt_line(
        &mut self,
        row: u16,
        col: u16,
        label: &str,
        initial: &str,
    ) -> Result<Option<String>>;

    /// Pushes buffered output to the terminal.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Longest prefix of `text` that fits in `max_width` terminal columns.
pub fn clip_to_width(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (i, c) in text.char_indices() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            return &text[..i];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_keeps_short_text() {
        assert_eq!(clip_to_width("dossier", 20), "dossier");
    }

    #[test]
    fn clip_cuts_on_char_boundary() {
        assert_eq!(clip_to_width("fsociety", 3), "fso");
        assert_eq!(clip_to_width("‹──›", 2), "‹─");
        assert_eq!(clip_to_width("anything", 0), "");
    }
}
