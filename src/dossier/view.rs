//! # View State Machine
//!
//! The whole UI is one [`View`] value. Each call to
//! [`ViewController::step`] draws the current view, blocks for one key, and
//! computes the next view:
//!
//! ```text
//!              Enter(View)            Enter               'e'
//!   MainMenu ─────────────▶ ListBrowsing ─────▶ DetailView ─────▶ FormEditing(edit)
//!      ▲  │                  │    ▲      'q'       │   ▲               │
//!      │  │ Enter(Add)   'q' │    └────────────────┘   └─── submit/Esc─┘
//!      │  ▼                  │
//!   FormEditing(new) ◀───────┘ (to MainMenu)
//! ```
//!
//! Cursors live inside the view they belong to, so returning from the detail
//! view restores the list selection and returning from a form restores the
//! menu selection. Ctrl-C leaves from anywhere without saving.

use crate::api::DossierApi;
use crate::commands::CmdMessage;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::form::{Activation, FormModel};
use crate::model::Record;
use crate::render;
use crate::screen::{Key, Screen};
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    ViewList,
    AddNew,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::ViewList, MenuItem::AddNew, MenuItem::Exit];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::ViewList => "View Dossier Database",
            MenuItem::AddNew => "Add New Dossier",
            MenuItem::Exit => "Exit",
        }
    }
}

/// Where a form returns to once it is submitted or discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOrigin {
    New { menu: Cursor },
    Edit { record: Record, list: Cursor },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    MainMenu { cursor: Cursor },
    ListBrowsing { cursor: Cursor },
    DetailView { record: Record, list: Cursor },
    FormEditing { form: FormModel, origin: FormOrigin },
}

impl Default for View {
    fn default() -> Self {
        View::MainMenu {
            cursor: Cursor::default(),
        }
    }
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::MainMenu { .. } => "main_menu",
            View::ListBrowsing { .. } => "list",
            View::DetailView { .. } => "detail",
            View::FormEditing { .. } => "form",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct ViewController<S: RecordStore> {
    api: DossierApi<S>,
    state: View,
    /// Shown once on the next drawn screen.
    status: Option<CmdMessage>,
    default_subfolders: String,
}

impl<S: RecordStore> ViewController<S> {
    pub fn new(api: DossierApi<S>, default_subfolders: impl Into<String>) -> Self {
        Self {
            api,
            state: View::default(),
            status: None,
            default_subfolders: default_subfolders.into(),
        }
    }

    pub fn state(&self) -> &View {
        &self.state
    }

    pub fn api(&self) -> &DossierApi<S> {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut DossierApi<S> {
        &mut self.api
    }

    /// Runs until the user picks Exit or interrupts.
    pub fn run(&mut self, screen: &mut dyn Screen) -> Result<()> {
        while self.step(screen)? == Flow::Continue {}
        tracing::info!("leaving dossier");
        Ok(())
    }

    /// One draw + key cycle.
    pub fn step(&mut self, screen: &mut dyn Screen) -> Result<Flow> {
        let current = std::mem::take(&mut self.state);
        let from = current.name();
        let (next, flow) = match current {
            View::MainMenu { cursor } => self.main_menu(screen, cursor)?,
            View::ListBrowsing { cursor } => self.list_browsing(screen, cursor)?,
            View::DetailView { record, list } => self.detail_view(screen, record, list)?,
            View::FormEditing { form, origin } => self.form_editing(screen, form, origin)?,
        };
        if next.name() != from {
            tracing::debug!(from, to = next.name(), "view transition");
        }
        self.state = next;
        screen.flush()?;
        Ok(flow)
    }

    fn main_menu(&mut self, screen: &mut dyn Screen, mut cursor: Cursor) -> Result<(View, Flow)> {
        let status = self.status.take();
        render::main_menu(screen, cursor, status.as_ref())?;

        match screen.read_key()? {
            Key::Up => cursor.up(),
            Key::Down => cursor.down(MenuItem::ALL.len()),
            Key::Enter => match MenuItem::ALL[cursor.index()] {
                MenuItem::ViewList => {
                    return Ok((
                        View::ListBrowsing {
                            cursor: Cursor::default(),
                        },
                        Flow::Continue,
                    ))
                }
                MenuItem::AddNew => {
                    let form = FormModel::create(&self.default_subfolders);
                    let origin = FormOrigin::New { menu: cursor };
                    return Ok((View::FormEditing { form, origin }, Flow::Continue));
                }
                MenuItem::Exit => return Ok((View::MainMenu { cursor }, Flow::Exit)),
            },
            Key::Interrupt => return Ok((View::MainMenu { cursor }, Flow::Exit)),
            _ => {}
        }
        Ok((View::MainMenu { cursor }, Flow::Continue))
    }

    fn list_browsing(
        &mut self,
        screen: &mut dyn Screen,
        mut cursor: Cursor,
    ) -> Result<(View, Flow)> {
        // Reloaded on every pass so the list always mirrors the disk.
        let mut listed = self.api.list_records()?;
        let status = listed.messages.pop().or_else(|| self.status.take());
        let records = listed.records;
        let back = View::MainMenu {
            cursor: Cursor::default(),
        };

        if records.is_empty() {
            render::empty_list(screen, status.as_ref())?;
            return Ok(match screen.read_key()? {
                Key::Char('q') => (back, Flow::Continue),
                Key::Interrupt => (back, Flow::Exit),
                _ => (View::ListBrowsing { cursor }, Flow::Continue),
            });
        }

        cursor.clamp(records.len());
        render::record_list(screen, &records, cursor, status.as_ref())?;

        match screen.read_key()? {
            Key::Up => cursor.up(),
            Key::Down => cursor.down(records.len()),
            Key::Char('q') => return Ok((back, Flow::Continue)),
            Key::Enter => {
                let record = records[cursor.index()].clone();
                return Ok((
                    View::DetailView {
                        record,
                        list: cursor,
                    },
                    Flow::Continue,
                ));
            }
            Key::Interrupt => return Ok((back, Flow::Exit)),
            _ => {}
        }
        Ok((View::ListBrowsing { cursor }, Flow::Continue))
    }

    fn detail_view(
        &mut self,
        screen: &mut dyn Screen,
        record: Record,
        list: Cursor,
    ) -> Result<(View, Flow)> {
        let status = self.status.take();
        render::detail(screen, &record, status.as_ref())?;

        Ok(match screen.read_key()? {
            Key::Char('q') => (View::ListBrowsing { cursor: list }, Flow::Continue),
            Key::Char('e') => {
                let form = FormModel::edit(&record);
                let origin = FormOrigin::Edit { record, list };
                (View::FormEditing { form, origin }, Flow::Continue)
            }
            Key::Interrupt => (View::DetailView { record, list }, Flow::Exit),
            _ => (View::DetailView { record, list }, Flow::Continue),
        })
    }

    fn form_editing(
        &mut self,
        screen: &mut dyn Screen,
        mut form: FormModel,
        origin: FormOrigin,
    ) -> Result<(View, Flow)> {
        let status = self.status.take();
        render::form(screen, &form, status.as_ref())?;

        match screen.read_key()? {
            Key::Up => form.focus_prev(),
            Key::Down => form.focus_next(),
            Key::Enter => {
                let title = form.title();
                let activation = form.activate_focused(|label, current| {
                    let row = render::prompt_backdrop(screen, title)?;
                    screen.prompt_line(row, 4, &format!("{}: ", label), current)
                })?;
                match activation {
                    Activation::Submit => {
                        return Ok((self.submit(&form, origin), Flow::Continue));
                    }
                    Activation::Interrupted => {
                        return Ok((View::FormEditing { form, origin }, Flow::Exit));
                    }
                    Activation::Edited => {}
                }
            }
            Key::Esc => {
                self.status = Some(CmdMessage::warning("Changes discarded"));
                return Ok((Self::return_to(origin), Flow::Continue));
            }
            Key::Interrupt => {
                return Ok((View::FormEditing { form, origin }, Flow::Exit));
            }
            _ => {}
        }
        Ok((View::FormEditing { form, origin }, Flow::Continue))
    }

    /// Persists the form. Failures become a status message on the view the
    /// form came from; nothing is retried and a new form is not reopened.
    fn submit(&mut self, form: &FormModel, origin: FormOrigin) -> View {
        match origin {
            FormOrigin::New { menu } => {
                match self.api.create_record(form) {
                    Ok(mut result) => self.status = result.messages.pop(),
                    Err(e) => {
                        tracing::warn!(name = form.name(), error = %e, "create failed");
                        self.status = Some(CmdMessage::error(e.to_string()));
                    }
                }
                View::MainMenu { cursor: menu }
            }
            FormOrigin::Edit { record, list } => match self.api.update_record(&record, form) {
                Ok(mut result) => {
                    self.status = result.messages.pop();
                    // The saved values are shown as written, without reloading.
                    let saved = result.records.pop().unwrap_or(record);
                    View::DetailView { record: saved, list }
                }
                Err(e) => {
                    tracing::error!(folder = %record.folder_name(), error = %e, "save failed");
                    self.status = Some(CmdMessage::error(e.to_string()));
                    View::DetailView { record, list }
                }
            },
        }
    }

    fn return_to(origin: FormOrigin) -> View {
        match origin {
            FormOrigin::New { menu } => View::MainMenu { cursor: menu },
            FormOrigin::Edit { record, list } => View::DetailView { record, list },
        }
    }
}
