//! Error types for tsieve.

use thiserror::Error;
use tsieve_parser::ParseError;

/// Top-level result type for tsieve core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Top-level error type for the document model.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("annotation error: {0}")]
    Annotation(#[from] AnnotationError),

    #[error("unknown document: {0}")]
    UnknownDocument(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Upstream annotations that violate the document-model contract.
///
/// These are raised once, when raw input is turned into a [`crate::Document`];
/// nothing downstream re-checks them.
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("REJECTED: {doc} sentence {sentence}: event {eiid} at index {index} is outside {len} tokens")]
    EventOutOfBounds {
        doc: String,
        sentence: usize,
        eiid: String,
        index: usize,
        len: usize,
    },

    #[error("REJECTED: {doc} sentence {sentence}: timex {tid} at offset {offset} (length {length}) is outside {len} tokens")]
    TimexOutOfBounds {
        doc: String,
        sentence: usize,
        tid: String,
        offset: usize,
        length: usize,
        len: usize,
    },

    #[error("{doc} sentence {sentence}: event {eiid} is not in textual order")]
    EventsOutOfOrder {
        doc: String,
        sentence: usize,
        eiid: String,
    },

    #[error("{doc} sentence {sentence}: timex {tid} is not in textual order")]
    TimexesOutOfOrder {
        doc: String,
        sentence: usize,
        tid: String,
    },

    #[error("{doc} sentence {sentence}: parse tree is malformed: {source}")]
    Tree {
        doc: String,
        sentence: usize,
        #[source]
        source: ParseError,
    },

    #[error("{doc} sentence {sentence}: parse leaf {index} is '{leaf}' but token is '{token}'")]
    TreeTokenMismatch {
        doc: String,
        sentence: usize,
        index: usize,
        leaf: String,
        token: String,
    },

    #[error("{doc} sentence {sentence}: parse has {leaves} leaves but sentence has {tokens} tokens")]
    TreeLengthMismatch {
        doc: String,
        sentence: usize,
        leaves: usize,
        tokens: usize,
    },

    #[error("{doc}: duplicate annotation id '{id}'")]
    DuplicateId { doc: String, id: String },

    #[error("duplicate document name '{0}'")]
    DuplicateDocument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_human_readable_messages() {
        let err = AnnotationError::EventOutOfBounds {
            doc: "wsj_0001".to_string(),
            sentence: 2,
            eiid: "ei7".to_string(),
            index: 12,
            len: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("REJECTED"));
        assert!(msg.contains("wsj_0001"));
        assert!(msg.contains("ei7"));
        assert!(msg.contains("12"));

        let err = CoreError::UnknownDocument("apw_0042".to_string());
        assert!(err.to_string().contains("apw_0042"));
    }

    #[test]
    fn tree_error_keeps_parser_source() {
        let err = AnnotationError::Tree {
            doc: "d".to_string(),
            sentence: 0,
            source: ParseError::Empty,
        };
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("empty parse string"));
    }
}
