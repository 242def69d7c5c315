use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Profile, Record};
use crate::store::RecordStore;

/// Rewrites the profile of `record`. The folder, and so the name, never change.
pub fn run<S: RecordStore>(store: &mut S, record: &Record, profile: Profile) -> Result<CmdResult> {
    let saved = store.save(record, &profile)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Dossier updated: {}", saved.name)));
    Ok(result.with_records(vec![saved]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_profile_in_place() {
        let mut fixture = StoreFixture::new().with_records(&["Tyrell Wellick"]);
        let record = fixture.store.load_all().unwrap().remove(0);

        let profile = Profile {
            status: "missing".into(),
            emails: vec!["tyrell@e.corp".into()],
            ..Profile::default()
        };
        let result = run(&mut fixture.store, &record, profile.clone()).unwrap();
        assert_eq!(result.records[0].profile, profile);
        assert_eq!(result.records[0].storage_path, record.storage_path);

        let reloaded = fixture.store.load_all().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].profile, profile);
    }

    #[test]
    fn write_failure_is_returned() {
        let mut fixture = StoreFixture::new().with_records(&["Tyrell Wellick"]);
        let record = fixture.store.load_all().unwrap().remove(0);
        fixture.store.set_fail_writes(true);

        assert!(run(&mut fixture.store, &record, Profile::default()).is_err());
    }
}
