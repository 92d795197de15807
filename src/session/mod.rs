//! @acp:module "Session"
//! @acp:summary "Current answers, input mode and the persisted copy they sync to"
//! @acp:domain cli
//! @acp:layer service
//!
//! Every mutating operation writes through to the [`Store`] before
//! returning, and the in-memory answers only change once that write
//! succeeds. A persisted copy that cannot be read is treated as absent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::checkbox::{self, Toggles};
use crate::config::PdfConfig;
use crate::error::{QudError, Result};
use crate::export::{self, ExportFormat, ExportStamp};
use crate::form::FormData;
use crate::import::{self, ImportSummary};
use crate::registry::FieldId;
use crate::storage::Store;

/// How how-fields are answered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Free text for every field
    #[default]
    Text,
    /// Canned option toggles for how-fields that have them
    Options,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Text => InputMode::Options,
            InputMode::Options => InputMode::Text,
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Text => write!(f, "text"),
            InputMode::Options => write!(f, "options"),
        }
    }
}

/// @acp:summary "Owns the form data for one run of the tool"
pub struct SessionState {
    data: FormData,
    input_mode: InputMode,
    page: PdfConfig,
    store: Box<dyn Store>,
}

impl SessionState {
    /// @acp:summary "Hydrate a session from its store"
    pub fn open(store: Box<dyn Store>, input_mode: InputMode) -> Self {
        let data = match store.load() {
            Ok(Some(data)) => {
                tracing::debug!("Loaded {} saved fields", data.len());
                data
            }
            Ok(None) => FormData::new(),
            Err(e) => {
                tracing::warn!("Ignoring saved answers: {}", e);
                FormData::new()
            }
        };

        Self {
            data,
            input_mode,
            page: PdfConfig::default(),
            store,
        }
    }

    /// Page geometry used by PDF exports
    pub fn with_page(mut self, page: PdfConfig) -> Self {
        self.page = page;
        self
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Save `next` and adopt it as the current answers once the store accepts it
    fn commit(&mut self, next: FormData) -> Result<()> {
        self.store.save(&next)?;
        self.data = next;
        Ok(())
    }

    /// Write one field and save
    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) -> Result<()> {
        let mut next = self.data.clone();
        next.set(id, value);
        self.commit(next)
    }

    /// Flip one canned option on a how-field, returning the field's new text
    ///
    /// The field text is rebuilt from the toggles, so free text in it is lost.
    pub fn toggle_option(&mut self, id: FieldId, option: &str) -> Result<String> {
        require_options(id)?;
        let index = checkbox::find_option(option)?;
        let text = checkbox::toggle(self.data.get(id), index);
        let mut next = self.data.clone();
        next.set(id, text.clone());
        self.commit(next)?;
        Ok(text)
    }

    /// Overwrite a how-field from an explicit option selection
    pub fn select_options(&mut self, id: FieldId, toggles: &Toggles) -> Result<String> {
        require_options(id)?;
        let text = checkbox::text_from_toggles(toggles);
        let mut next = self.data.clone();
        next.set(id, text.clone());
        self.commit(next)?;
        Ok(text)
    }

    pub fn toggle_input_mode(&mut self) -> InputMode {
        self.input_mode = self.input_mode.toggled();
        self.input_mode
    }

    /// Empty the form and remove the persisted copy
    pub fn clear(&mut self) -> Result<()> {
        self.store.clear()?;
        self.data.clear();
        tracing::info!("Cleared all answers");
        Ok(())
    }

    /// @acp:summary "Merge an import file into the form and save"
    ///
    /// On any error the form is left as it was.
    pub fn import_file(&mut self, path: &Path) -> Result<ImportSummary> {
        let imported = import::load_file(path)?;
        let mut next = self.data.clone();
        next.merge(&imported);
        self.commit(next)?;

        let summary = ImportSummary {
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            fields: imported.len(),
        };
        tracing::info!("Imported {} fields from {}", summary.fields, summary.file_name);
        Ok(summary)
    }

    /// Write the current answers into `dir` in one format
    pub fn export(&self, format: ExportFormat, dir: &Path, stamp: &ExportStamp) -> Result<PathBuf> {
        export::write_export(format, &self.data, stamp, &self.page, dir)
    }
}

fn require_options(id: FieldId) -> Result<()> {
    if checkbox::has_options(id) {
        Ok(())
    } else {
        Err(QudError::UnknownField(format!("{} has no answer options", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    struct BrokenStore;

    impl Store for BrokenStore {
        fn load(&self) -> Result<Option<FormData>> {
            Err(QudError::StorageCorrupt("bad json".into()))
        }
        fn save(&mut self, _data: &FormData) -> Result<()> {
            Ok(())
        }
        fn clear(&mut self) -> Result<()> {
            Ok(())
        }
    }

    /// Loads whatever it was seeded with but refuses every write
    struct ReadOnlyStore(Option<FormData>);

    impl Store for ReadOnlyStore {
        fn load(&self) -> Result<Option<FormData>> {
            Ok(self.0.clone())
        }
        fn save(&mut self, _data: &FormData) -> Result<()> {
            Err(denied())
        }
        fn clear(&mut self) -> Result<()> {
            Err(denied())
        }
    }

    fn denied() -> QudError {
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into()
    }

    fn read_only_session() -> SessionState {
        let mut data = FormData::new();
        data.set(field("problem-what"), "kept");
        data.set(field("problem-how"), "seems logical");
        SessionState::open(Box::new(ReadOnlyStore(Some(data))), InputMode::Text)
    }

    fn field(s: &str) -> FieldId {
        s.parse().unwrap()
    }

    fn session() -> SessionState {
        SessionState::open(Box::new(MemoryStore::new()), InputMode::Text)
    }

    fn saved(session: &SessionState) -> FormData {
        session.store().load().unwrap().unwrap_or_default()
    }

    #[test]
    fn test_open_restores_saved() {
        let mut data = FormData::new();
        data.set(field("exit-what"), "IPO");
        let session = SessionState::open(Box::new(MemoryStore::with_data(data.clone())), InputMode::Text);
        assert_eq!(session.data(), &data);
    }

    #[test]
    fn test_corrupt_store_opens_empty() {
        let session = SessionState::open(Box::new(BrokenStore), InputMode::Options);
        assert!(session.data().is_empty());
        assert_eq!(session.input_mode(), InputMode::Options);
    }

    #[test]
    fn test_set_value_autosaves() {
        let mut session = session();
        session.set_value(field("problem-what"), "Users waste time").unwrap();
        assert_eq!(saved(&session).get(field("problem-what")), "Users waste time");
    }

    #[test]
    fn test_toggle_option_overwrites_free_text() {
        let mut session = session();
        session.set_value(field("problem-how"), "my own notes; seems logical").unwrap();

        let text = session.toggle_option(field("problem-how"), "customer interviews").unwrap();
        assert_eq!(text, "seems logical; customer interviews");

        let text = session.toggle_option(field("problem-how"), "Seems Logical").unwrap();
        assert_eq!(text, "customer interviews");
        assert_eq!(saved(&session).get(field("problem-how")), "customer interviews");
    }

    #[test]
    fn test_options_rejected_on_plain_fields() {
        let mut session = session();
        assert!(matches!(
            session.toggle_option(field("world-impact-how"), "seems logical"),
            Err(QudError::UnknownField(_))
        ));
        assert!(matches!(
            session.select_options(field("problem-what"), &[true; 4]),
            Err(QudError::UnknownField(_))
        ));
        assert!(matches!(
            session.toggle_option(field("problem-how"), "gut feeling"),
            Err(QudError::UnknownOption(_))
        ));
    }

    #[test]
    fn test_select_options() {
        let mut session = session();
        let text = session
            .select_options(field("design-how"), &[false, true, false, true])
            .unwrap();
        assert_eq!(text, "based on my experience; based on industry research");
    }

    #[test]
    fn test_toggle_input_mode() {
        let mut session = session();
        assert_eq!(session.toggle_input_mode(), InputMode::Options);
        assert_eq!(session.toggle_input_mode(), InputMode::Text);
    }

    #[test]
    fn test_clear_purges_store() {
        let mut session = session();
        session.set_value(field("exit-what"), "IPO").unwrap();
        session.clear().unwrap();
        assert!(session.data().is_empty());
        assert!(session.store().load().unwrap().is_none());
    }

    #[test]
    fn test_import_merges_and_persists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("answers.json");
        std::fs::write(&path, r#"{"exit-what": "Acquisition", "unknown": "x"}"#).unwrap();

        let mut session = session();
        session.set_value(field("problem-what"), "kept").unwrap();
        let summary = session.import_file(&path).unwrap();

        assert_eq!(summary.file_name, "answers.json");
        assert_eq!(summary.fields, 1);
        assert_eq!(session.data().get(field("problem-what")), "kept");
        assert_eq!(saved(&session).get(field("exit-what")), "Acquisition");
    }

    #[test]
    fn test_failed_import_leaves_form_unchanged() {
        let temp = TempDir::new().unwrap();
        let bad = temp.path().join("bad.json");
        std::fs::write(&bad, "[1, 2, 3]").unwrap();
        let other = temp.path().join("notes.docx");
        std::fs::write(&other, "whatever").unwrap();

        let mut session = session();
        session.set_value(field("problem-what"), "kept").unwrap();
        let before = session.data().clone();

        assert!(matches!(session.import_file(&bad), Err(QudError::ImportParse(_))));
        assert!(matches!(session.import_file(&other), Err(QudError::UnsupportedImport(_))));
        assert_eq!(session.data(), &before);
    }

    #[test]
    fn test_failed_save_keeps_previous_answers() {
        let mut session = read_only_session();
        let before = session.data().clone();

        assert!(matches!(
            session.set_value(field("problem-what"), "changed"),
            Err(QudError::Io(_))
        ));
        assert!(session.toggle_option(field("problem-how"), "customer interviews").is_err());
        assert!(session.select_options(field("problem-how"), &[false; 4]).is_err());
        assert_eq!(session.data(), &before);
    }

    #[test]
    fn test_failed_save_discards_import() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("answers.json");
        std::fs::write(&path, r#"{"exit-what": "IPO"}"#).unwrap();

        let mut session = read_only_session();
        let before = session.data().clone();

        assert!(matches!(session.import_file(&path), Err(QudError::Io(_))));
        assert!(!session.data().contains(field("exit-what")));
        assert_eq!(session.data(), &before);
    }

    #[test]
    fn test_failed_clear_keeps_answers() {
        let mut session = read_only_session();
        assert!(session.clear().is_err());
        assert_eq!(session.data().get(field("problem-what")), "kept");
    }
}
