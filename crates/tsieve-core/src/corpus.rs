//! Corpus loading and the per-document accessor used by sieves.
//!
//! Input is a single JSON file:
//! ```json
//! {
//!   "documents": [
//!     {
//!       "name": "wsj_0001",
//!       "sentences": [
//!         {
//!           "tokens": ["Acme", "posted", "2004-Q3", "losses"],
//!           "events": [{"eiid": "ei1", "class": "REPORTING", "index": 1}],
//!           "timexes": [{"tid": "t1", "value": "2004-Q3", "offset": 2}]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::annotation::{Event, Timex};
use crate::document::{Document, Sentence};
use crate::error::{AnnotationError, CoreError, Result};
use crate::gate::{AnnotationGate, RawDocument};

#[derive(Deserialize)]
struct RawCorpus {
    documents: Vec<RawDocument>,
}

/// A set of validated documents, addressed by name.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    by_name: HashMap<String, usize>,
}

impl Corpus {
    /// Build a corpus from already-validated documents.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::DuplicateDocument`] if two documents share a name.
    pub fn new(documents: Vec<Document>) -> std::result::Result<Self, AnnotationError> {
        let mut by_name = HashMap::with_capacity(documents.len());
        for (i, doc) in documents.iter().enumerate() {
            if by_name.insert(doc.name().to_string(), i).is_some() {
                return Err(AnnotationError::DuplicateDocument(doc.name().to_string()));
            }
        }
        Ok(Self { documents, by_name })
    }

    /// Validate raw documents through the [`AnnotationGate`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Annotation`] for the first invalid document.
    pub fn from_raw(raw: Vec<RawDocument>) -> Result<Self> {
        let documents = raw
            .into_iter()
            .map(AnnotationGate::validate)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::new(documents)?)
    }

    /// Parse and validate a JSON corpus.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Serialization`] for malformed JSON and
    /// [`CoreError::Annotation`] for contract violations.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawCorpus =
            serde_json::from_str(json).map_err(|e| CoreError::Serialization(e.to_string()))?;
        Self::from_raw(raw.documents)
    }

    /// Read, parse and validate a JSON corpus file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_json_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Document names in input order.
    pub fn document_names(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(Document::name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// # Errors
    ///
    /// Returns [`CoreError::UnknownDocument`] if no document has this name.
    pub fn document(&self, name: &str) -> Result<&Document> {
        self.by_name
            .get(name)
            .map(|&i| &self.documents[i])
            .ok_or_else(|| CoreError::UnknownDocument(name.to_string()))
    }

    /// Sentences of a document, in order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownDocument`] if no document has this name.
    pub fn sentences(&self, name: &str) -> Result<&[Sentence]> {
        Ok(self.document(name)?.sentences())
    }

    /// One entry per sentence; each holds that sentence's events in textual order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownDocument`] if no document has this name.
    pub fn events_by_sentence(&self, name: &str) -> Result<Vec<&[Event]>> {
        Ok(self.sentences(name)?.iter().map(Sentence::events).collect())
    }

    /// One entry per sentence; each holds that sentence's timexes in textual order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownDocument`] if no document has this name.
    pub fn timexes_by_sentence(&self, name: &str) -> Result<Vec<&[Timex]>> {
        Ok(self.sentences(name)?.iter().map(Sentence::timexes).collect())
    }

    /// One serialized parse per sentence (`None` where the input had none).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownDocument`] if no document has this name.
    pub fn parses(&self, name: &str) -> Result<Vec<Option<&str>>> {
        Ok(self.sentences(name)?.iter().map(Sentence::parse).collect())
    }
}
