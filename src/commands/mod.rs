//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod answer;
pub mod clear;
pub mod export;
pub mod import;
pub mod init;
pub mod output;
pub mod progress;
pub mod questions;
pub mod set;
pub mod show;
pub mod toggle;
pub mod validate;

pub use answer::{execute_answer, AnswerOptions};
pub use clear::{execute_clear, ClearOptions};
pub use export::{execute_export, ExportOptions, ExportTarget};
pub use import::{execute_import, ImportOptions};
pub use init::{execute_init, InitOptions};
pub use progress::execute_progress;
pub use questions::{execute_questions, QuestionsOptions};
pub use set::{execute_set, SetOptions};
pub use show::{execute_show, ShowOptions};
pub use toggle::{execute_toggle, ToggleOptions};
pub use validate::execute_validate;

use crate::config::Config;
use crate::session::SessionState;
use crate::storage::JsonFileStore;

/// Open the session persisted under the configured data directory
pub fn open_session(config: &Config) -> SessionState {
    let store = JsonFileStore::in_dir(config.data_dir());
    tracing::debug!("Using answer file {}", store.path().display());
    SessionState::open(Box::new(store), config.input_mode).with_page(config.pdf)
}
