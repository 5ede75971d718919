//! Document persistence
//!
//! The store boundary converts every failure into a [`SaveOutcome`] carrying
//! the error text verbatim. Nothing is retried.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::error::Result;
use crate::model::DocumentModel;

/// What the caller hands over when saving
#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub name: String,
    /// Final composed HTML
    pub html: String,
    pub model: DocumentModel,
}

/// `{success, documentId}` or `{success: false, error}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveOutcome {
    pub fn saved(document_id: impl Into<String>) -> Self {
        Self {
            success: true,
            document_id: Some(document_id.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            document_id: None,
            error: Some(error.into()),
        }
    }
}

/// Anything that can persist a composed document
pub trait DocumentStore {
    fn save(&self, request: &SaveRequest) -> SaveOutcome;
}

/// Record written for each saved document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    pub id: String,
    pub name: String,
    pub saved_at: String,
    pub html: String,
    pub model: DocumentModel,
}

/// Stable id: first 16 hex digits of SHA-256 over name and html
pub fn document_id(name: &str, html: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(html.as_bytes());
    let digest = hasher.finalize();
    digest[..8].iter().map(|b| format!("{:02x}", b)).collect()
}

/// Stores one JSON file per document in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }

    /// Read a saved record back
    pub fn load(&self, id: &str) -> Result<StoredDocument> {
        let text = fs::read_to_string(self.path_for(id))?;
        Ok(serde_json::from_str(&text)?)
    }

    fn write(&self, record: &StoredDocument) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_for(&record.id);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(record)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn save(&self, request: &SaveRequest) -> SaveOutcome {
        let name = request.name.trim();
        if name.is_empty() {
            return SaveOutcome::failed("Document name is required");
        }

        let id = document_id(name, &request.html);
        let mut model = request.model.clone();
        model.name = Some(name.to_string());
        let record = StoredDocument {
            id: id.clone(),
            name: name.to_string(),
            saved_at: chrono::Utc::now().to_rfc3339(),
            html: request.html.clone(),
            model,
        };

        match self.write(&record) {
            Ok(()) => {
                info!(id = %id, name = %name, "document saved");
                SaveOutcome::saved(id)
            }
            Err(e) => {
                warn!(error = %e, "document save failed");
                SaveOutcome::failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InstrumentKind;
    use tempfile::TempDir;

    fn request(name: &str) -> SaveRequest {
        SaveRequest {
            name: name.to_string(),
            html: "<p>உள்ளடக்கம்</p>".to_string(),
            model: DocumentModel::blank(InstrumentKind::SaleAgreement),
        }
    }

    #[test]
    fn test_document_id_is_stable() {
        let a = document_id("n", "<p></p>");
        assert_eq!(a, document_id("n", "<p></p>"));
        assert_ne!(a, document_id("m", "<p></p>"));
        assert_eq!(a.len(), 16);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_save_writes_record() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("docs"));

        let outcome = store.save(&request("வீட்டு ஒப்பந்தம்"));
        assert!(outcome.success);
        let id = outcome.document_id.unwrap();
        assert!(store.path_for(&id).exists());

        let record = store.load(&id).unwrap();
        assert_eq!(record.name, "வீட்டு ஒப்பந்தம்");
        assert_eq!(record.model.name.as_deref(), Some("வீட்டு ஒப்பந்தம்"));
        assert_eq!(record.html, "<p>உள்ளடக்கம்</p>");
    }

    #[test]
    fn test_save_without_name_fails() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        let outcome = store.save(&request("   "));
        assert!(!outcome.success);
        assert!(outcome.document_id.is_none());
        assert_eq!(outcome.error.as_deref(), Some("Document name is required"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_write_failure_surfaces_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let store = FileStore::new(blocker.join("nested"));
        let outcome = store.save(&request("பெயர்"));
        assert!(!outcome.success);
        assert!(outcome.error.unwrap().starts_with("IO error"));
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_string(&SaveOutcome::saved("abc")).unwrap();
        assert_eq!(json, r#"{"success":true,"documentId":"abc"}"#);
        let json = serde_json::to_string(&SaveOutcome::failed("boom")).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"boom"}"#);
    }
}
