//! # Form Model
//!
//! One form serves both creating and editing a dossier. It is an ordered list
//! of fields, each holding raw text, terminated by a `submit` entry:
//!
//! ```text
//! 0  Full Name        ┐ identity, only editable when creating
//! 1  Subfolders       ┘
//! 2  Status
//! ...
//! 12 Notes
//! 13 [ Save & Exit ]
//! ```
//!
//! The form never persists anything itself. Activating `submit` reports
//! [`Activation::Submit`] and the caller decides what to do with the values.

use crate::error::Result;
use crate::model::{parse_list, Profile, ProfileField, Record, ValueKind};

/// Values longer than this are shortened when shown inline.
pub const DISPLAY_LIMIT: usize = 50;
const DISPLAY_KEEP: usize = 47;
const ELLIPSIS: &str = "...";

/// First index reachable while editing; name and subfolders sit below it.
const FIRST_EDITABLE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Name,
    Subfolders,
    Profile(ProfileField),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub key: FieldKey,
    pub kind: ValueKind,
    pub value: String,
}

impl FormField {
    fn new(label: &'static str, key: FieldKey, kind: ValueKind, value: String) -> Self {
        Self {
            label,
            key,
            kind,
            value,
        }
    }

    pub fn is_submit(&self) -> bool {
        self.key == FieldKey::Submit
    }

    /// The value as shown on the form line; the stored value is untouched.
    pub fn display_value(&self) -> String {
        truncate_for_display(&self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The focused field received new text.
    Edited,
    /// Focus was on the submit entry.
    Submit,
    /// The prompt was abandoned with Ctrl-C; the field is unchanged.
    Interrupted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModel {
    mode: FormMode,
    fields: Vec<FormField>,
    focus: usize,
}

impl FormModel {
    /// Blank creation form with the subfolder list pre-filled.
    pub fn create(default_subfolders: &str) -> Self {
        Self::build(
            FormMode::Create,
            String::new(),
            default_subfolders.to_string(),
            &Profile::default(),
        )
    }

    /// Edit form pre-populated from `record`, focused on the first editable field.
    pub fn edit(record: &Record) -> Self {
        Self::build(FormMode::Edit, record.name.clone(), String::new(), &record.profile)
    }

    fn build(mode: FormMode, name: String, subfolders: String, profile: &Profile) -> Self {
        let mut fields = Vec::with_capacity(ProfileField::ALL.len() + 3);
        fields.push(FormField::new(
            "Full Name",
            FieldKey::Name,
            ValueKind::Scalar,
            name,
        ));
        fields.push(FormField::new(
            "Subfolders",
            FieldKey::Subfolders,
            ValueKind::List,
            subfolders,
        ));
        for field in ProfileField::ALL {
            fields.push(FormField::new(
                field.form_label(),
                FieldKey::Profile(field),
                field.kind(),
                profile.text(field),
            ));
        }
        fields.push(FormField::new(
            "[ Save & Exit ]",
            FieldKey::Submit,
            ValueKind::Scalar,
            String::new(),
        ));

        let focus = match mode {
            FormMode::Create => 0,
            FormMode::Edit => FIRST_EDITABLE,
        };
        Self {
            mode,
            fields,
            focus,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "ADD NEW DOSSIER",
            FormMode::Edit => "EDITING",
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> &FormField {
        &self.fields[self.focus]
    }

    fn last(&self) -> usize {
        self.fields.len() - 1
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1).min(self.last());
        if self.mode == FormMode::Edit && self.focus < FIRST_EDITABLE {
            self.focus = FIRST_EDITABLE;
        }
    }

    /// In edit mode, moving up from the first editable field jumps to submit.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.saturating_sub(1);
        if self.mode == FormMode::Edit && self.focus < FIRST_EDITABLE {
            self.focus = self.last();
        }
    }

    /// Submits, or asks `prompt(label, current)` for the focused field's new text.
    pub fn activate_focused<F>(&mut self, prompt: F) -> Result<Activation>
    where
        F: FnOnce(&str, &str) -> Result<Option<String>>,
    {
        let field = &mut self.fields[self.focus];
        if field.is_submit() {
            return Ok(Activation::Submit);
        }
        match prompt(field.label, &field.value)? {
            Some(raw) => {
                field.value = raw.trim().to_string();
                Ok(Activation::Edited)
            }
            None => Ok(Activation::Interrupted),
        }
    }

    fn value(&self, key: FieldKey) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.value(FieldKey::Name)
    }

    pub fn subfolders(&self) -> Vec<String> {
        parse_list(self.value(FieldKey::Subfolders))
    }

    /// The document to persist; name, subfolders and submit are left out.
    pub fn to_profile(&self) -> Profile {
        let mut profile = Profile::default();
        for field in &self.fields {
            if let FieldKey::Profile(key) = field.key {
                profile.set_text(key, &field.value);
            }
        }
        profile
    }
}

pub fn truncate_for_display(value: &str) -> String {
    if value.chars().count() > DISPLAY_LIMIT {
        let kept: String = value.chars().take(DISPLAY_KEEP).collect();
        format!("{}{}", kept, ELLIPSIS)
    } else {
        value.to_string()
    }
}
