use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{validate_name, validate_segment, Profile};
use crate::store::RecordStore;

/// Validates everything up front so a rejected submission leaves no folder behind.
pub fn run<S: RecordStore>(
    store: &mut S,
    name: &str,
    subfolders: &[String],
    profile: Profile,
) -> Result<CmdResult> {
    let name = validate_name(name)?;
    for subfolder in subfolders {
        validate_segment(subfolder)?;
    }

    let record = store.create(name, subfolders, &profile)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Dossier created: {}",
        record.name
    )));
    Ok(result.with_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DossierError;
    use crate::store::memory::InMemoryStore;

    fn folders(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn creates_record_with_profile() {
        let mut store = InMemoryStore::new();
        let profile = Profile {
            occupation: "Security engineer".into(),
            ..Profile::default()
        };
        let result = run(&mut store, "Elliot Alderson", &folders(&["images", "logs"]), profile).unwrap();

        assert_eq!(result.records[0].name, "Elliot Alderson");
        assert_eq!(result.records[0].folder_name(), "Elliot_Alderson");
        assert_eq!(store.load_all().unwrap()[0].profile.occupation, "Security engineer");
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "   ", &[], Profile::default()).unwrap_err();
        assert!(matches!(err, DossierError::EmptyName));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn second_create_with_same_name_fails() {
        let mut store = InMemoryStore::new();
        let first = Profile {
            notes: "first".into(),
            ..Profile::default()
        };
        run(&mut store, "Angela Moss", &[], first).unwrap();

        let second = Profile {
            notes: "second".into(),
            ..Profile::default()
        };
        let err = run(&mut store, "Angela Moss", &[], second).unwrap_err();
        assert!(matches!(err, DossierError::AlreadyExists(_)));
        assert_eq!(store.load_all().unwrap()[0].profile.notes, "first");
    }

    #[test]
    fn bad_subfolder_is_rejected() {
        let mut store = InMemoryStore::new();
        let subfolders = folders(&["images", "../../tmp"]);
        let err = run(&mut store, "Whiterose", &subfolders, Profile::default()).unwrap_err();
        assert!(matches!(err, DossierError::InvalidName(_)));
        assert!(store.load_all().unwrap().is_empty());
    }
}
