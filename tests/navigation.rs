use dossier::api::DossierApi;
use dossier::model::Profile;
use dossier::screen::scripted::ScriptedScreen;
use dossier::screen::Key;
use dossier::store::fs::FileStore;
use dossier::store::RecordStore;
use dossier::view::{Flow, View, ViewController};
use std::iter::repeat;
use tempfile::TempDir;

fn setup() -> (TempDir, ViewController<FileStore>) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("data"));
    let ctl = ViewController::new(DossierApi::new(store), "images, logs");
    (dir, ctl)
}

/// Keys that move focus from the first editable field to the save entry.
fn to_submit_from_status() -> impl Iterator<Item = Key> {
    repeat(Key::Down).take(11)
}

#[test]
fn create_through_the_form_then_browse_it() {
    let (dir, mut ctl) = setup();

    let mut keys = vec![Key::Down, Key::Enter, Key::Enter, Key::Down, Key::Down, Key::Enter];
    keys.extend(to_submit_from_status());
    keys.extend([
        Key::Enter,     // save
        Key::Up,        // menu back to "View"
        Key::Enter,     // list
        Key::Enter,     // detail
        Key::Char('q'), // list
        Key::Char('q'), // menu
        Key::Down,
        Key::Down,
        Key::Enter, // exit
    ]);
    let mut screen = ScriptedScreen::default()
        .with_keys(keys)
        .with_answers(["Elliot Alderson", "active"]);

    ctl.run(&mut screen).unwrap();

    let text = screen.all_text();
    assert!(text.contains("Dossier created: Elliot Alderson"));
    assert!(text.contains("DOSSIER: ELLIOT ALDERSON"));
    assert!(text.contains(" 1. Elliot Alderson "));

    let folder = dir.path().join("data").join("Elliot_Alderson");
    assert!(folder.join("profile.json").is_file());
    assert!(folder.join("images").is_dir());
    assert!(folder.join("logs").is_dir());

    let labels: Vec<_> = screen.prompts.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Full Name: ", "Status: "]);
}

#[test]
fn edit_persists_and_returns_to_detail() {
    let (_dir, mut ctl) = setup();
    ctl.api_mut()
        .store_mut()
        .create("Tyrell Wellick", &[], &Profile::default())
        .unwrap();

    let mut keys = vec![Key::Enter, Key::Enter, Key::Char('e'), Key::Enter];
    keys.extend(to_submit_from_status());
    keys.push(Key::Enter);
    let mut screen = ScriptedScreen::default()
        .with_keys(keys)
        .with_answers(["missing"]);

    ctl.run(&mut screen).unwrap();

    assert!(matches!(ctl.state(), View::DetailView { record, .. } if record.profile.status == "missing"));
    assert!(screen.all_text().contains("Dossier updated: Tyrell Wellick"));

    let stored = ctl.api().store().load_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Tyrell Wellick");
    assert_eq!(stored[0].profile.status, "missing");
    assert_eq!(screen.prompts[0].initial, "");
}

#[test]
fn escape_leaves_the_document_untouched() {
    let (_dir, mut ctl) = setup();
    let original = Profile {
        occupation: "CTO".into(),
        ..Profile::default()
    };
    ctl.api_mut()
        .store_mut()
        .create("Tyrell Wellick", &[], &original)
        .unwrap();

    let mut screen = ScriptedScreen::default()
        .with_keys([Key::Enter, Key::Enter, Key::Char('e'), Key::Down, Key::Enter, Key::Esc])
        .with_answers(["janitor"]);

    ctl.run(&mut screen).unwrap();

    assert!(screen.frame_contains("Changes discarded"));
    assert!(screen.frame_contains("CTO"));
    let stored = ctl.api().store().load_all().unwrap();
    assert_eq!(stored[0].profile, original);
}

#[test]
fn list_picks_up_records_written_between_passes() {
    let (dir, mut ctl) = setup();
    let mut screen = ScriptedScreen::default().with_keys([Key::Enter, Key::Down]);

    assert_eq!(ctl.step(&mut screen).unwrap(), Flow::Continue);
    assert_eq!(ctl.step(&mut screen).unwrap(), Flow::Continue);
    assert!(screen.frame_contains("No dossiers found"));

    let mut other = FileStore::new(dir.path().join("data"));
    other.create("Darlene", &[], &Profile::default()).unwrap();

    screen.push_key(Key::Char('q'));
    assert_eq!(ctl.step(&mut screen).unwrap(), Flow::Continue);
    assert!(screen.frame_contains(" 1. Darlene "));
}

#[test]
fn duplicate_name_reports_error_and_keeps_first() {
    let (_dir, mut ctl) = setup();
    let original = Profile {
        notes: "first".into(),
        ..Profile::default()
    };
    ctl.api_mut()
        .store_mut()
        .create("Leon", &[], &original)
        .unwrap();

    let mut keys = vec![Key::Down, Key::Enter, Key::Enter];
    keys.extend(repeat(Key::Down).take(13));
    keys.push(Key::Enter);
    let mut screen = ScriptedScreen::default()
        .with_keys(keys)
        .with_answers(["Leon"]);

    ctl.run(&mut screen).unwrap();

    assert!(screen.frame_contains("already exists"));
    let stored = ctl.api().store().load_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].profile, original);
}
