//! Boolean preference stores keyed per document type.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::PreferencesError;

type DocumentPreferences = BTreeMap<String, BTreeMap<String, bool>>;

/// Narrow boolean key-value capability used by the sidebar controller.
pub trait PreferenceStore {
    /// Return the stored flag, `false` when unset.
    fn get(&self, key: &str) -> bool;

    fn set(&mut self, key: &str, value: bool);
}

/// In-memory store for one document type.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, bool>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> bool {
        self.values.get(key).copied().unwrap_or(false)
    }

    fn set(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
    }
}

/// Status describing how the preference file was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferencesLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// JSON file store shared by all document types:
/// `{ "<doc type>": { "<key>": bool } }`.
///
/// Every `set` rewrites the file; write failures are logged and the
/// in-memory value is kept.
#[derive(Debug)]
pub struct JsonPreferences {
    path: PathBuf,
    doc_type: String,
    documents: DocumentPreferences,
    status: PreferencesLoadStatus,
}

impl JsonPreferences {
    /// Load the file at `path` and scope reads and writes to `doc_type`.
    pub fn open(
        path: impl Into<PathBuf>,
        doc_type: impl Into<String>,
    ) -> Result<Self, PreferencesError> {
        let path = path.into();
        let (documents, status) = load_documents(&path)?;
        Ok(Self {
            path,
            doc_type: doc_type.into(),
            documents,
            status,
        })
    }

    pub fn status(&self) -> &PreferencesLoadStatus {
        &self.status
    }

    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    /// Write all document types back to disk.
    pub fn save(&self) -> Result<(), PreferencesError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let payload = serde_json::to_string_pretty(&self.documents)?;
        write_atomic(&self.path, payload.as_bytes())?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferences {
    fn get(&self, key: &str) -> bool {
        self.documents
            .get(&self.doc_type)
            .and_then(|values| values.get(key))
            .copied()
            .unwrap_or(false)
    }

    fn set(&mut self, key: &str, value: bool) {
        self.documents
            .entry(self.doc_type.clone())
            .or_default()
            .insert(key.to_string(), value);

        if let Err(err) = self.save() {
            log::warn!(
                "failed to persist preference {key} to {}: {err}",
                self.path.display()
            );
        }
    }
}

fn load_documents(
    path: &Path,
) -> Result<(DocumentPreferences, PreferencesLoadStatus), PreferencesError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok((
                DocumentPreferences::new(),
                PreferencesLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<Value>(&data) {
        Ok(value) => value,
        Err(err) => {
            return Ok((
                DocumentPreferences::new(),
                PreferencesLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    let Some(root) = parsed.as_object() else {
        return Ok((
            DocumentPreferences::new(),
            PreferencesLoadStatus::Invalid(String::from(
                "preferences root is not an object",
            )),
        ));
    };

    let documents: DocumentPreferences = root
        .iter()
        .filter_map(|(doc_type, values)| {
            let values = values.as_object()?;
            let flags: BTreeMap<String, bool> = values
                .iter()
                .filter_map(|(key, value)| {
                    value.as_bool().map(|flag| (key.clone(), flag))
                })
                .collect();
            Some((doc_type.clone(), flags))
        })
        .collect();

    Ok((documents, PreferencesLoadStatus::Loaded))
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
