use crate::error::{DossierError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Rendered in place of an empty value.
pub const UNSET: &str = "unset";

/// How a field's raw text maps onto the profile document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    /// Edited as comma separated text, persisted as a JSON array.
    List,
}

/// The persisted fields of a dossier, in document order.
///
/// This table drives both the detail view and the form, so neither needs
/// string lookups into the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Status,
    Occupation,
    Dob,
    LastKnownAddress,
    PhoneNumbers,
    Emails,
    Aliases,
    LastKnownIp,
    ThreatLevel,
    Vulnerabilities,
    Notes,
}

impl ProfileField {
    pub const ALL: [ProfileField; 11] = [
        ProfileField::Status,
        ProfileField::Occupation,
        ProfileField::Dob,
        ProfileField::LastKnownAddress,
        ProfileField::PhoneNumbers,
        ProfileField::Emails,
        ProfileField::Aliases,
        ProfileField::LastKnownIp,
        ProfileField::ThreatLevel,
        ProfileField::Vulnerabilities,
        ProfileField::Notes,
    ];

    /// Key in the profile document.
    pub fn key(self) -> &'static str {
        match self {
            ProfileField::Status => "status",
            ProfileField::Occupation => "occupation",
            ProfileField::Dob => "dob",
            ProfileField::LastKnownAddress => "last_known_address",
            ProfileField::PhoneNumbers => "phone_numbers",
            ProfileField::Emails => "emails",
            ProfileField::Aliases => "aliases",
            ProfileField::LastKnownIp => "last_known_ip",
            ProfileField::ThreatLevel => "threat_level",
            ProfileField::Vulnerabilities => "vulnerabilities",
            ProfileField::Notes => "notes",
        }
    }

    /// Label used by the read-only detail view.
    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Status => "Status",
            ProfileField::Occupation => "Occupation",
            ProfileField::Dob => "Date of Birth",
            ProfileField::LastKnownAddress => "Last Known Address",
            ProfileField::PhoneNumbers => "Phone Numbers",
            ProfileField::Emails => "Emails",
            ProfileField::Aliases => "Aliases",
            ProfileField::LastKnownIp => "Last Known IP",
            ProfileField::ThreatLevel => "Threat Level",
            ProfileField::Vulnerabilities => "Vulnerabilities",
            ProfileField::Notes => "Notes",
        }
    }

    /// Label used by the create/edit form.
    pub fn form_label(self) -> &'static str {
        match self {
            ProfileField::Status => "Status",
            ProfileField::Occupation => "Occupation",
            ProfileField::Dob => "DOB",
            ProfileField::LastKnownAddress => "Address",
            ProfileField::PhoneNumbers => "Phones (CSV)",
            ProfileField::Emails => "Emails (CSV)",
            ProfileField::Aliases => "Aliases (CSV)",
            ProfileField::LastKnownIp => "IP Address",
            ProfileField::ThreatLevel => "Threat Level",
            ProfileField::Vulnerabilities => "Vulnerabilities (CSV)",
            ProfileField::Notes => "Notes",
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            ProfileField::PhoneNumbers
            | ProfileField::Emails
            | ProfileField::Aliases
            | ProfileField::Vulnerabilities => ValueKind::List,
            _ => ValueKind::Scalar,
        }
    }
}

/// The `profile.json` document. Every key is optional on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "lenient_text")]
    pub status: String,
    #[serde(deserialize_with = "lenient_text")]
    pub occupation: String,
    #[serde(deserialize_with = "lenient_text")]
    pub dob: String,
    #[serde(deserialize_with = "lenient_text")]
    pub last_known_address: String,
    #[serde(deserialize_with = "lenient_list")]
    pub phone_numbers: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub emails: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub aliases: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub last_known_ip: String,
    #[serde(deserialize_with = "lenient_text")]
    pub threat_level: String,
    #[serde(deserialize_with = "lenient_list")]
    pub vulnerabilities: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub notes: String,
}

// Hand-edited documents hold nulls, numbers and bare strings where lists
// belong. Any of those still reads; only broken JSON rejects a profile.

fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Array(items) => value_items(items).join(", "),
        other => other.to_string(),
    }
}

fn value_items(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .map(value_text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?))
}

fn lenient_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => value_items(items),
        other => parse_list(&value_text(other)),
    })
}

impl Profile {
    fn scalar(&self, field: ProfileField) -> Option<&String> {
        match field {
            ProfileField::Status => Some(&self.status),
            ProfileField::Occupation => Some(&self.occupation),
            ProfileField::Dob => Some(&self.dob),
            ProfileField::LastKnownAddress => Some(&self.last_known_address),
            ProfileField::LastKnownIp => Some(&self.last_known_ip),
            ProfileField::ThreatLevel => Some(&self.threat_level),
            ProfileField::Notes => Some(&self.notes),
            _ => None,
        }
    }

    fn scalar_mut(&mut self, field: ProfileField) -> Option<&mut String> {
        match field {
            ProfileField::Status => Some(&mut self.status),
            ProfileField::Occupation => Some(&mut self.occupation),
            ProfileField::Dob => Some(&mut self.dob),
            ProfileField::LastKnownAddress => Some(&mut self.last_known_address),
            ProfileField::LastKnownIp => Some(&mut self.last_known_ip),
            ProfileField::ThreatLevel => Some(&mut self.threat_level),
            ProfileField::Notes => Some(&mut self.notes),
            _ => None,
        }
    }

    fn list(&self, field: ProfileField) -> Option<&Vec<String>> {
        match field {
            ProfileField::PhoneNumbers => Some(&self.phone_numbers),
            ProfileField::Emails => Some(&self.emails),
            ProfileField::Aliases => Some(&self.aliases),
            ProfileField::Vulnerabilities => Some(&self.vulnerabilities),
            _ => None,
        }
    }

    fn list_mut(&mut self, field: ProfileField) -> Option<&mut Vec<String>> {
        match field {
            ProfileField::PhoneNumbers => Some(&mut self.phone_numbers),
            ProfileField::Emails => Some(&mut self.emails),
            ProfileField::Aliases => Some(&mut self.aliases),
            ProfileField::Vulnerabilities => Some(&mut self.vulnerabilities),
            _ => None,
        }
    }

    /// Editable text for a field; list entries are joined with ", ".
    pub fn text(&self, field: ProfileField) -> String {
        match field.kind() {
            ValueKind::Scalar => self.scalar(field).cloned().unwrap_or_default(),
            ValueKind::List => self.list(field).map(|l| l.join(", ")).unwrap_or_default(),
        }
    }

    /// Stores raw text into a field, splitting it when the field is a list.
    pub fn set_text(&mut self, field: ProfileField, raw: &str) {
        match field.kind() {
            ValueKind::Scalar => {
                if let Some(slot) = self.scalar_mut(field) {
                    *slot = raw.to_string();
                }
            }
            ValueKind::List => {
                if let Some(slot) = self.list_mut(field) {
                    *slot = parse_list(raw);
                }
            }
        }
    }

    /// Read-only rendering; empty values become [`UNSET`].
    pub fn display(&self, field: ProfileField) -> String {
        let text = self.text(field);
        if text.is_empty() {
            UNSET.to_string()
        } else {
            text
        }
    }
}

/// Splits comma separated text, trimming pieces and dropping empty ones.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// One dossier as seen by the UI: the document plus its derived identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Derived from the folder name at load time.
    pub name: String,
    pub profile: Profile,
    /// Backing folder; not persisted.
    pub storage_path: PathBuf,
}

impl Record {
    /// The storage key, which never changes after creation.
    pub fn folder_name(&self) -> String {
        self.storage_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| folder_name_for(&self.name))
    }
}

pub fn folder_name_for(name: &str) -> String {
    name.replace(' ', "_")
}

pub fn name_from_folder(folder: &str) -> String {
    folder.replace('_', " ")
}

/// Trims a dossier name and rejects anything that cannot be a single folder.
pub fn validate_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DossierError::EmptyName);
    }
    validate_segment(trimmed)
}

/// Subfolder names follow the folder rules but are never empty here;
/// `parse_list` already dropped blank entries.
pub fn validate_segment(segment: &str) -> Result<&str> {
    if segment == "." || segment == ".." || segment.contains(['/', '\\']) {
        return Err(DossierError::InvalidName(segment.to_string()));
    }
    Ok(segment)
}
