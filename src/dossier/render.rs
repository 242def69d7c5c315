//! Drawing for each screen. Layout only; nothing here decides what happens next.

use crate::commands::{CmdMessage, MessageLevel};
use crate::cursor::Cursor;
use crate::error::Result;
use crate::form::FormModel;
use crate::model::{ProfileField, Record, UNSET};
use crate::screen::{Screen, Style};
use crate::view::MenuItem;
use unicode_width::UnicodeWidthStr;

pub const SEPARATOR: &str = "    ‹────────────────────────────◆────────────────────────────›";
const LEFT_MARGIN: u16 = 4;
const VALUE_COLUMN: u16 = 25;
const FORM_LABEL_WIDTH: usize = 25;

fn centered(cols: u16, text: &str) -> u16 {
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    (cols / 2).saturating_sub(width / 2)
}

fn write_centered(screen: &mut dyn Screen, row: u16, text: &str, style: Style) -> Result<()> {
    let (_, cols) = screen.size()?;
    screen.write_at(row, centered(cols, text), text, style)
}

/// Title and separator; returns the first free row below them.
fn banner(screen: &mut dyn Screen, title: &str) -> Result<u16> {
    write_centered(screen, 1, title, Style::Title)?;
    write_centered(screen, 2, SEPARATOR, Style::Separator)?;
    Ok(4)
}

fn status_line(screen: &mut dyn Screen, status: Option<&CmdMessage>) -> Result<()> {
    let Some(message) = status else {
        return Ok(());
    };
    let (rows, _) = screen.size()?;
    let style = match message.level {
        MessageLevel::Success => Style::Success,
        MessageLevel::Warning => Style::Warning,
        MessageLevel::Error => Style::Error,
    };
    screen.write_at(rows.saturating_sub(1), 2, &message.content, style)
}

pub fn main_menu(
    screen: &mut dyn Screen,
    cursor: Cursor,
    status: Option<&CmdMessage>,
) -> Result<()> {
    screen.clear()?;
    let top = banner(screen, "DOSSIER")?;
    for (i, item) in MenuItem::ALL.iter().enumerate() {
        let style = if i == cursor.index() {
            Style::Highlight
        } else {
            Style::Normal
        };
        write_centered(screen, top + 1 + i as u16, item.label(), style)?;
    }
    status_line(screen, status)
}

pub fn empty_list(screen: &mut dyn Screen, status: Option<&CmdMessage>) -> Result<()> {
    screen.clear()?;
    let (rows, _) = screen.size()?;
    write_centered(
        screen,
        rows / 2,
        "No dossiers found. Add one from the main menu.",
        Style::Prompt,
    )?;
    screen.write_at(rows.saturating_sub(2), 2, "Press 'q' to return...", Style::Normal)?;
    status_line(screen, status)
}

pub fn record_list(
    screen: &mut dyn Screen,
    records: &[Record],
    cursor: Cursor,
    status: Option<&CmdMessage>,
) -> Result<()> {
    screen.clear()?;
    let (rows, _) = screen.size()?;
    let top = banner(screen, "DATABASE")?;
    write_centered(
        screen,
        top,
        "Use UP/DOWN arrows. ENTER to view. 'q' to return.",
        Style::Prompt,
    )?;

    for (i, record) in records.iter().enumerate() {
        let row = top + 2 + i as u16;
        if row >= rows.saturating_sub(1) {
            break;
        }
        let style = if i == cursor.index() {
            Style::Highlight
        } else {
            Style::Normal
        };
        let line = format!(" {}. {} ", i + 1, record.name);
        screen.write_at(row, LEFT_MARGIN, &line, style)?;
    }
    status_line(screen, status)
}

pub fn detail(screen: &mut dyn Screen, record: &Record, status: Option<&CmdMessage>) -> Result<()> {
    screen.clear()?;
    let (rows, cols) = screen.size()?;
    let title = format!("DOSSIER: {}", record.name.to_uppercase());
    let mut row = banner(screen, &title)?;
    let last_row = rows.saturating_sub(3);

    let path = record.storage_path.display().to_string();
    let lines = ProfileField::ALL
        .iter()
        .filter(|f| **f != ProfileField::Notes)
        .map(|f| (f.label(), record.profile.display(*f), Style::Normal))
        .chain(std::iter::once(("Main Directory", path, Style::Path)));

    for (label, value, style) in lines {
        if row >= last_row {
            break;
        }
        screen.write_at(row, LEFT_MARGIN, &format!("{}:", label), Style::Label)?;
        screen.write_at(row, VALUE_COLUMN, &value, style)?;
        row += 1;
    }

    if row + 1 < last_row {
        row += 1;
        screen.write_at(row, LEFT_MARGIN, "Notes:", Style::Label)?;
        row += 1;
        let notes = record.profile.display(ProfileField::Notes);
        let width = usize::from(cols.saturating_sub(2 * LEFT_MARGIN));
        for line in wrap_words(&notes, width) {
            if row >= last_row {
                break;
            }
            screen.write_at(row, LEFT_MARGIN, &line, Style::Normal)?;
            row += 1;
        }
    }

    write_centered(
        screen,
        rows.saturating_sub(2),
        "Press 'e' to Edit | 'q' to Return",
        Style::Prompt,
    )?;
    status_line(screen, status)
}

pub fn form(screen: &mut dyn Screen, form: &FormModel, status: Option<&CmdMessage>) -> Result<()> {
    screen.clear()?;
    let (rows, cols) = screen.size()?;
    let top = banner(screen, form.title())?;

    for (i, field) in form.fields().iter().enumerate() {
        let row = top + i as u16;
        if row >= rows.saturating_sub(2) {
            break;
        }
        let focused = i == form.focus();
        let (line, style) = if field.is_submit() {
            let width = usize::from(cols.saturating_sub(2 * LEFT_MARGIN));
            let line = format!("{:^width$}", field.label, width = width);
            (line, if focused { Style::Highlight } else { Style::Button })
        } else {
            let line = format!(
                " {:<label$}: {}",
                field.label,
                field.display_value(),
                label = FORM_LABEL_WIDTH
            );
            (line, if focused { Style::Highlight } else { Style::Normal })
        };
        screen.write_at(row, LEFT_MARGIN, &line, style)?;
    }

    screen.write_at(
        rows.saturating_sub(2),
        2,
        "UP/DOWN to move | ENTER to edit or save | ESC to discard",
        Style::Prompt,
    )?;
    status_line(screen, status)
}

/// Background for the line prompt; returns the row the prompt should use.
pub fn prompt_backdrop(screen: &mut dyn Screen, title: &str) -> Result<u16> {
    screen.clear()?;
    banner(screen, title)?;
    let (rows, _) = screen.size()?;
    Ok(rows / 2)
}

/// Greedy word wrap; a word longer than `width` gets a line of its own.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(UNSET.to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Profile;
    use crate::screen::scripted::ScriptedScreen;
    use std::path::PathBuf;

    #[test]
    fn wrap_breaks_between_words() {
        let lines = wrap_words("hello friend hello friend", 12);
        assert_eq!(lines, vec!["hello friend", "hello friend"]);
    }

    #[test]
    fn wrap_keeps_long_words_whole() {
        let lines = wrap_words("a supercalifragilistic b", 5);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn wrap_empty_is_unset() {
        assert_eq!(wrap_words("   ", 10), vec![UNSET]);
    }

    #[test]
    fn detail_shows_unset_and_path() {
        let record = Record {
            name: "Leon".into(),
            profile: Profile {
                occupation: "Enforcer".into(),
                ..Profile::default()
            },
            storage_path: PathBuf::from("data/Leon"),
        };
        let mut screen = ScriptedScreen::default();
        detail(&mut screen, &record, None).unwrap();

        assert!(screen.frame_contains("DOSSIER: LEON"));
        assert!(screen.frame_contains("Enforcer"));
        assert!(screen.frame_contains(UNSET));
        assert!(screen
            .current_frame()
            .iter()
            .any(|d| d.style == Style::Path && d.text == "data/Leon"));
    }

    #[test]
    fn list_stops_at_screen_bottom() {
        let records: Vec<Record> = (0..50)
            .map(|i| Record {
                name: format!("Subject {}", i),
                profile: Profile::default(),
                storage_path: PathBuf::from(format!("data/Subject_{}", i)),
            })
            .collect();
        let mut screen = ScriptedScreen::new(12, 80);
        record_list(&mut screen, &records, Cursor::default(), None).unwrap();

        assert!(screen.frame_contains(" 1. Subject 0 "));
        assert!(!screen.frame_contains("Subject 49"));
        assert!(screen.current_frame().iter().all(|d| d.row < 12));
    }
}
