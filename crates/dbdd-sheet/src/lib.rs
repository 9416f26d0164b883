//! Character sheet for the DBD&D tabletop variant.
//!
//! Holds a character's metadata, trait ratings and descriptive text, shares
//! the sheet and roll counter between sessions, persists both as JSON, and
//! provides a line-oriented session for rolling and editing.

pub mod config;
pub mod error;
pub mod session;
pub mod sheet;
pub mod state;
pub mod store;

pub use config::SheetConfig;
pub use error::{SheetError, SheetResult};
pub use session::SheetSession;
pub use sheet::{CharacterSheet, MetaField, RollOptions, TextField, Trait};
pub use state::SheetState;
pub use store::SavedSheet;
