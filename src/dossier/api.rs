//! # API Facade
//!
//! Thin dispatch over [`commands`]. It turns UI-shaped input (a filled-in
//! [`FormModel`]) into the plain values commands expect, and returns their
//! [`CmdResult`] untouched.
//!
//! Generic over [`RecordStore`]: `DossierApi<FileStore>` in the binary,
//! `DossierApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::Result;
use crate::form::FormModel;
use crate::model::Record;
use crate::store::RecordStore;

pub struct DossierApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> DossierApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn create_record(&mut self, form: &FormModel) -> Result<commands::CmdResult> {
        commands::create::run(
            &mut self.store,
            form.name(),
            &form.subfolders(),
            form.to_profile(),
        )
    }

    pub fn update_record(
        &mut self,
        record: &Record,
        form: &FormModel,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, record, form.to_profile())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn create_dispatches_form_values() {
        let mut api = DossierApi::new(InMemoryStore::new());
        let mut form = FormModel::create("images");
        form.activate_focused(|_, _| Ok(Some("Shayla Nico".into()))).unwrap();

        let result = api.create_record(&form).unwrap();
        assert_eq!(result.records[0].name, "Shayla Nico");
        assert_eq!(api.list_records().unwrap().records.len(), 1);
    }

    #[test]
    fn update_ignores_edited_name() {
        let mut api = DossierApi::new(InMemoryStore::new());
        let mut form = FormModel::create("");
        form.activate_focused(|_, _| Ok(Some("Fernando Vera".into()))).unwrap();
        let record = api.create_record(&form).unwrap().records.remove(0);

        let mut edit = FormModel::edit(&record);
        edit.activate_focused(|_, _| Ok(Some("released".into()))).unwrap();
        let saved = api.update_record(&record, &edit).unwrap().records.remove(0);

        assert_eq!(saved.name, "Fernando Vera");
        assert_eq!(saved.profile.status, "released");
    }
}
