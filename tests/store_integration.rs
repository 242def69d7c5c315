use dossier::error::DossierError;
use dossier::model::{Profile, ProfileField};
use dossier::store::fs::FileStore;
use dossier::store::{RecordStore, PROFILE_FILENAME};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("data"));
    (dir, store)
}

#[test]
fn created_records_load_in_folder_order() {
    let (_dir, mut store) = setup();
    store.create("Tyrell Wellick", &[], &Profile::default()).unwrap();
    store.create("Elliot Alderson", &[], &Profile::default()).unwrap();

    let records = store.load_all().unwrap();
    let folders: Vec<_> = records.iter().map(|r| r.folder_name()).collect();
    assert_eq!(folders, vec!["Elliot_Alderson", "Tyrell_Wellick"]);
    assert_eq!(records[0].name, "Elliot Alderson");

    let again: Vec<_> = store.load_all().unwrap().iter().map(|r| r.folder_name()).collect();
    assert_eq!(folders, again);
}

#[test]
fn underscores_in_names_read_back_as_spaces() {
    let (_dir, mut store) = setup();
    store.create("mr_robot", &[], &Profile::default()).unwrap();

    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "mr robot");
    assert_eq!(records[0].folder_name(), "mr_robot");
}

#[test]
fn save_round_trips_every_field() {
    let (_dir, mut store) = setup();
    let record = store
        .create("Whiterose", &["images".into()], &Profile::default())
        .unwrap();

    let mut profile = Profile::default();
    profile.set_text(ProfileField::PhoneNumbers, " 555-0100 ,, 555-0199 ");
    profile.status = "active".into();
    profile.occupation = "Minister of State Security".into();
    profile.dob = "unknown".into();
    profile.last_known_address = "Beijing".into();
    profile.emails = vec!["zhang@moss.gov".into()];
    profile.aliases = vec!["Zhi Zhang".into(), "Whiterose".into()];
    profile.last_known_ip = "10.0.0.1".into();
    profile.threat_level = "extreme".into();
    profile.vulnerabilities = vec!["time".into()];
    profile.notes = "Runs the Dark Army.".into();

    store.save(&record, &profile).unwrap();

    let reloaded = store.load_all().unwrap().remove(0);
    assert_eq!(reloaded.profile, profile);
    assert_eq!(reloaded.profile.phone_numbers, vec!["555-0100", "555-0199"]);
    assert_eq!(reloaded.storage_path, record.storage_path);
}

#[test]
fn profile_document_holds_only_persisted_fields() {
    let (_dir, mut store) = setup();
    let record = store.create("Angela Moss", &[], &Profile::default()).unwrap();

    let raw = fs::read_to_string(record.storage_path.join(PROFILE_FILENAME)).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();

    let mut expected: Vec<_> = ProfileField::ALL.iter().map(|f| f.key().to_string()).collect();
    expected.sort();
    let mut actual = keys;
    actual.sort();
    assert_eq!(actual, expected);
    assert!(doc.get("name").is_none());
    assert!(doc.get("storage_path").is_none());
}

#[test]
fn duplicate_create_leaves_first_document_intact() {
    let (_dir, mut store) = setup();
    let original = Profile {
        notes: "keep me".into(),
        ..Profile::default()
    };
    let record = store.create("Leon", &[], &original).unwrap();
    let before = fs::read(record.storage_path.join(PROFILE_FILENAME)).unwrap();

    let err = store
        .create("Leon", &["extra".into()], &Profile::default())
        .unwrap_err();
    assert!(matches!(err, DossierError::AlreadyExists(_)));

    let after = fs::read(record.storage_path.join(PROFILE_FILENAME)).unwrap();
    assert_eq!(before, after);
    assert!(!record.storage_path.join("extra").exists());
}

#[test]
fn broken_sibling_does_not_hide_valid_records() {
    let (_dir, mut store) = setup();
    store.create("Darlene", &[], &Profile::default()).unwrap();
    store.create("Mobley", &[], &Profile::default()).unwrap();

    let broken = store.root().join("Cisco");
    fs::create_dir_all(&broken).unwrap();
    fs::write(broken.join(PROFILE_FILENAME), r#"{"emails": ["half"#).unwrap();

    let names: Vec<_> = store.load_all().unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Darlene", "Mobley"]);
}

#[test]
fn hand_written_partial_profile_loads() {
    let (_dir, store) = setup();
    let folder = store.root().join("Gideon_Goddard");
    fs::create_dir_all(&folder).unwrap();
    fs::write(
        folder.join(PROFILE_FILENAME),
        r#"{"occupation": "Allsafe CEO", "aliases": ["Gid"], "unknown_key": 1}"#,
    )
    .unwrap();

    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Gideon Goddard");
    assert_eq!(records[0].profile.occupation, "Allsafe CEO");
    assert_eq!(records[0].profile.aliases, vec!["Gid"]);
    assert!(records[0].profile.status.is_empty());
}

#[test]
fn null_values_load_as_unset() {
    let (_dir, store) = setup();
    let folder = store.root().join("Irving");
    fs::create_dir_all(&folder).unwrap();
    fs::write(
        folder.join(PROFILE_FILENAME),
        r#"{"status": null, "occupation": "car salesman", "aliases": null, "dob": 1975}"#,
    )
    .unwrap();

    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 1);
    let irving = &records[0];
    assert_eq!(irving.name, "Irving");
    assert_eq!(irving.profile.display(ProfileField::Status), "unset");
    assert_eq!(irving.profile.display(ProfileField::Aliases), "unset");
    assert_eq!(irving.profile.occupation, "car salesman");
    assert_eq!(irving.profile.dob, "1975");
}
