#![forbid(unsafe_code)]

//! @acp:module "QUD Library"
//! @acp:summary "Capture, persist, export and re-import a business-planning questionnaire"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # Questions Up & Down
//!
//! Sixteen business topics, each answered twice: *What do you know?* and
//! *How do you know?*.
//!
//! ## Features
//!
//! - **Auto-save**: every edit is written to a local JSON file
//! - **Exports**: Markdown, plain Text and paginated PDF
//! - **Round trip**: Text exports (and JSON answer maps) import back in
//! - **Canned rationales**: how-fields can be answered with option toggles
//!
//! ## Example
//!
//! ```rust,no_run
//! use qud::{ExportFormat, ExportStamp, InputMode, JsonFileStore, SessionState};
//!
//! fn main() -> qud::Result<()> {
//!     let store = JsonFileStore::in_dir(qud::storage::default_data_dir());
//!     let mut session = SessionState::open(Box::new(store), InputMode::Text);
//!
//!     session.set_value("problem-what".parse()?, "Users waste time")?;
//!     session.toggle_option("problem-how".parse()?, "customer interviews")?;
//!
//!     let path = session.export(ExportFormat::Markdown, ".".as_ref(), &ExportStamp::now())?;
//!     println!("wrote {}", path.display());
//!     Ok(())
//! }
//! ```

pub mod checkbox;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod import;
pub mod registry;
pub mod session;
pub mod storage;

// Re-exports
pub use checkbox::{CheckboxOption, Toggles, CHECKBOX_OPTIONS};
pub use config::{Config, PdfConfig};
pub use error::{QudError, Result};
pub use export::{ExportFormat, ExportStamp, PdfLayout, PdfOp};
pub use form::{FieldSurface, FormData};
pub use import::{ImportKind, ImportSummary};
pub use registry::industry::Industry;
pub use registry::{FieldId, Question, Section, Topic, SECTIONS};
pub use session::{InputMode, SessionState};
pub use storage::{JsonFileStore, MemoryStore, Store};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
