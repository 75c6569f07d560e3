// Library root
// -----------
// This crate exposes the phone book as a library. The binary (`main.rs`)
// wires configuration, logging and a terminal console into `ui::main_menu`.
//
// Module responsibilities:
// - `contact`, `phone`: the contact record, its field accessor table and
//   personal number normalization.
// - `store`, `storage`: the in-memory contact list and its JSON save files.
// - `search`, `pager`: exact-match scoring and the page window used by
//   `read` and `find`.
// - `command`, `console`, `ui`: command aliases, terminal access and the
//   interactive loop.
pub mod command;
pub mod config;
pub mod console;
pub mod contact;
pub mod error;
pub mod pager;
pub mod phone;
pub mod search;
pub mod storage;
pub mod store;
pub mod ui;

pub use config::Config;
pub use contact::{Contact, ContactField};
pub use error::{BookError, BookResult};
pub use store::ContactStore;
