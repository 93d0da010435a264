//! # tsieve-core
//!
//! Core types for temporal relation extraction over annotated documents.
//!
//! This crate defines the foundational types used across all other tsieve crates:
//! - [`Corpus`] — the document accessor sieves read from
//! - [`Document`], [`Sentence`], [`Token`] — tokenized, parsed text
//! - [`Event`] and [`Timex`] — upstream annotations anchored by token index
//! - [`TLink`] and [`TLinkType`] — typed temporal relations
//! - [`AnnotationGate`] — raw input validation at the document-model boundary
//! - Error hierarchy ([`CoreError`], [`AnnotationError`])

pub mod annotation;
pub mod corpus;
pub mod document;
pub mod error;
pub mod gate;
pub mod link;

pub use annotation::{Event, EventClass, Timex, TimexType};
pub use corpus::Corpus;
pub use document::{Document, Sentence, Token};
pub use error::{AnnotationError, CoreError, Result};
pub use gate::{AnnotationGate, RawDocument, RawSentence};
pub use link::{LinkKind, TLink, TLinkType};
