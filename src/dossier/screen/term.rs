//! crossterm-backed [`Screen`].
//!
//! Raw mode and the alternate screen are owned by [`TerminalGuard`], so the
//! terminal is restored on every exit path: normal return, `?` propagation
//! and panics.

use super::{clip_to_width, Key, Screen, Style};
use crate::error::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use unicode_width::UnicodeWidthStr;

/// Width of the prompt box, borders included.
const PROMPT_BOX_WIDTH: u16 = 60;

pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

pub struct TermScreen {
    out: Stdout,
}

impl TermScreen {
    /// Takes over the terminal. Keep the guard alive for as long as the screen is used.
    pub fn open() -> Result<(TerminalGuard, TermScreen)> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide)?;

        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            hook(info);
        }));

        Ok((guard, TermScreen { out }))
    }

    fn apply_style(&mut self, style: Style) -> io::Result<()> {
        match style {
            Style::Normal => Ok(()),
            Style::Title => queue!(
                self.out,
                SetForegroundColor(Color::Red),
                SetAttribute(Attribute::Bold)
            ),
            Style::Highlight => queue!(
                self.out,
                SetForegroundColor(Color::Black),
                SetBackgroundColor(Color::White)
            ),
            Style::Prompt => queue!(self.out, SetForegroundColor(Color::Yellow)),
            Style::Label => queue!(
                self.out,
                SetForegroundColor(Color::Yellow),
                SetAttribute(Attribute::Bold)
            ),
            Style::Path => queue!(self.out, SetForegroundColor(Color::Cyan)),
            Style::Separator => queue!(self.out, SetForegroundColor(Color::White)),
            Style::Button => queue!(
                self.out,
                SetForegroundColor(Color::Green),
                SetAttribute(Attribute::Bold)
            ),
            Style::Success => queue!(self.out, SetForegroundColor(Color::Green)),
            Style::Warning => queue!(self.out, SetForegroundColor(Color::Yellow)),
            Style::Error => queue!(
                self.out,
                SetForegroundColor(Color::Red),
                SetAttribute(Attribute::Bold)
            ),
        }
    }

    fn draw_box(&mut self, top: u16, left: u16, width: u16) -> io::Result<()> {
        let inner = "─".repeat(usize::from(width.saturating_sub(2)));
        queue!(
            self.out,
            MoveTo(left, top),
            Print(format!("┌{}┐", inner)),
            MoveTo(left, top + 1),
            Print("│"),
            MoveTo(left + width - 1, top + 1),
            Print("│"),
            MoveTo(left, top + 2),
            Print(format!("└{}┘", inner)),
        )
    }
}

impl Screen for TermScreen {
    fn clear(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        Ok(())
    }

    fn write_at(&mut self, row: u16, col: u16, text: &str, style: Style) -> Result<()> {
        let (rows, cols) = self.size()?;
        if row >= rows || col >= cols {
            return Ok(());
        }
        let visible = clip_to_width(text, usize::from(cols - col));
        queue!(self.out, MoveTo(col, row))?;
        self.apply_style(style)?;
        queue!(
            self.out,
            Print(visible),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        self.flush()?;
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(map_key(key)),
                Event::Resize(..) => return Ok(Key::Other),
                _ => {}
            }
        }
    }

    fn size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }

    fn prompt_line(
        &mut self,
        row: u16,
        col: u16,
        label: &str,
        initial: &str,
    ) -> Result<Option<String>> {
        let (_, cols) = self.size()?;
        self.write_at(row, col, label, Style::Prompt)?;

        let label_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
        let box_left = col.saturating_add(label_width).saturating_add(1);
        let box_width = PROMPT_BOX_WIDTH.min(cols.saturating_sub(box_left)).max(3);
        let field_width = usize::from(box_width - 2);
        self.draw_box(row.saturating_sub(1), box_left, box_width)?;

        let mut buffer: Vec<char> = initial.chars().collect();
        let mut pos = buffer.len();
        queue!(self.out, Show)?;

        let outcome: Option<String> = loop {
            let offset = (pos + 1).saturating_sub(field_width);
            let visible: String = buffer.iter().skip(offset).take(field_width).collect();
            queue!(
                self.out,
                MoveTo(box_left + 1, row),
                Print(format!("{:<width$}", visible, width = field_width)),
                MoveTo(box_left + 1 + (pos - offset) as u16, row),
            )?;
            self.flush()?;

            let key = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => key,
                _ => continue,
            };
            match key.code {
                KeyCode::Enter => break Some(buffer.iter().collect()),
                KeyCode::Esc => break Some(initial.to_string()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break None,
                KeyCode::Backspace if pos > 0 => {
                    pos -= 1;
                    buffer.remove(pos);
                }
                KeyCode::Delete if pos < buffer.len() => {
                    buffer.remove(pos);
                }
                KeyCode::Left => pos = pos.saturating_sub(1),
                KeyCode::Right => pos = (pos + 1).min(buffer.len()),
                KeyCode::Home => pos = 0,
                KeyCode::End => pos = buffer.len(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    buffer.insert(pos, c);
                    pos += 1;
                }
                _ => {}
            }
        };

        queue!(self.out, Hide)?;
        self.clear()?;
        Ok(outcome)
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

fn map_key(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}
