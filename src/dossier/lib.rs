//! # Dossier Architecture
//!
//! Dossier is a full-screen terminal database of subject profiles. Each
//! record is a folder under the data directory holding one `profile.json`.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (view.rs, render.rs, form.rs)                   │
//! │  - State machine: menu → list → detail → form               │
//! │  - Talks to the terminal only through the Screen trait      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: form values in, CmdResult out               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and persistence calls, no terminal I/O        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Policy
//!
//! Loading is best-effort: a folder whose profile is missing or malformed is
//! logged and skipped. Writes are never silently dropped: create and save
//! return their errors, and the view turns them into a status message while
//! staying on a safe screen.
//!
//! ## Testing
//!
//! [`screen::scripted::ScriptedScreen`] and [`store::memory::InMemoryStore`]
//! (both behind the `test_utils` feature) let the full state machine run
//! without a terminal or a filesystem.
//!
//! ## Module Overview
//!
//! - [`api`]: facade used by the view
//! - [`commands`]: list / create / update
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: `Record`, `Profile` and the shared field table
//! - [`form`]: the create/edit form
//! - [`cursor`]: clamped selection cursor
//! - [`view`] and [`render`]: state machine and drawing
//! - [`screen`]: terminal capability and its crossterm implementation
//! - [`config`], [`logging`], [`error`]: ambient plumbing

pub mod api;
pub mod commands;
pub mod config;
pub mod cursor;
pub mod error;
pub mod form;
pub mod logging;
pub mod model;
pub mod render;
pub mod screen;
pub mod store;
pub mod view;
