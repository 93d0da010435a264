//! The Annotation Gate — validates raw annotations before they become a
//! [`Document`].
//!
//! Core invariant: **every event index and timex span lies inside its
//! sentence's tokens.** Sieves index tokens directly and rely on this.

use std::collections::HashSet;

use serde::Deserialize;
use tsieve_parser::unescape_ptb;

use crate::annotation::{Event, EventClass, Timex, TimexType};
use crate::document::{Document, Sentence, Token};
use crate::error::AnnotationError;
use crate::link::TLink;

/// A sentence as it appears in input, before gate validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSentence {
    pub tokens: Vec<String>,
    #[serde(default)]
    pub parse: Option<String>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub timexes: Vec<Timex>,
}

impl RawSentence {
    /// A sentence with the given tokens and no annotations.
    #[must_use]
    pub fn from_tokens(tokens: &[&str]) -> Self {
        Self {
            tokens: tokens.iter().map(|t| (*t).to_string()).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_parse(mut self, parse: impl Into<String>) -> Self {
        self.parse = Some(parse.into());
        self
    }

    /// Append an event whose surface text is taken from its token.
    #[must_use]
    pub fn with_event(mut self, eiid: &str, class: EventClass, index: usize) -> Self {
        let text = self.tokens.get(index).cloned().unwrap_or_default();
        self.events.push(Event {
            eiid: eiid.to_string(),
            id: None,
            text,
            class,
            index,
        });
        self
    }

    /// Append a single-token DATE timex whose surface text is taken from its token.
    #[must_use]
    pub fn with_timex(mut self, tid: &str, value: &str, offset: usize) -> Self {
        let text = self.tokens.get(offset).cloned().unwrap_or_default();
        self.timexes.push(Timex {
            tid: tid.to_string(),
            text,
            timex_type: TimexType::Date,
            value: value.to_string(),
            offset,
            length: 1,
        });
        self
    }
}

/// A document as it appears in input, before gate validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDocument {
    pub name: String,
    pub sentences: Vec<RawSentence>,
    #[serde(default)]
    pub tlinks: Vec<TLink>,
}

/// Validates raw annotations.
///
/// Invariants enforced:
/// - G1: every event index is `< tokens.len()`
/// - G2: every timex span `offset..offset + length` is non-empty and lies
///   within the tokens
/// - G3: events and timexes are in textual order
/// - G4: a parse, if present, reads cleanly and its leaves equal the tokens
///   once PTB bracket escapes (`-LRB-` and friends) are undone
/// - G5: event and timex ids are unique within the document
pub struct AnnotationGate;

impl AnnotationGate {
    /// Validate a raw document and produce a [`Document`].
    ///
    /// # Errors
    ///
    /// Returns the first [`AnnotationError`] found, naming the document,
    /// sentence, and offending annotation.
    pub fn validate(raw: RawDocument) -> Result<Document, AnnotationError> {
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut sentences = Vec::with_capacity(raw.sentences.len());

        for (sid, sent) in raw.sentences.into_iter().enumerate() {
            sentences.push(Self::validate_sentence(&raw.name, sid, sent, &mut seen_ids)?);
        }

        Ok(Document {
            name: raw.name,
            sentences,
            tlinks: raw.tlinks,
        })
    }

    fn validate_sentence(
        doc: &str,
        sid: usize,
        raw: RawSentence,
        seen_ids: &mut HashSet<String>,
    ) -> Result<Sentence, AnnotationError> {
        let len = raw.tokens.len();

        // G1 + G3 for events
        let mut prev = 0;
        for event in &raw.events {
            if event.index >= len {
                return Err(AnnotationError::EventOutOfBounds {
                    doc: doc.to_string(),
                    sentence: sid,
                    eiid: event.eiid.clone(),
                    index: event.index,
                    len,
                });
            }
            if event.index < prev {
                return Err(AnnotationError::EventsOutOfOrder {
                    doc: doc.to_string(),
                    sentence: sid,
                    eiid: event.eiid.clone(),
                });
            }
            prev = event.index;
            Self::claim_id(doc, &event.eiid, seen_ids)?;
        }

        // G2 + G3 for timexes
        let mut prev = 0;
        for timex in &raw.timexes {
            let end = timex.offset.saturating_add(timex.length);
            if timex.length == 0 || timex.offset >= len || end > len {
                return Err(AnnotationError::TimexOutOfBounds {
                    doc: doc.to_string(),
                    sentence: sid,
                    tid: timex.tid.clone(),
                    offset: timex.offset,
                    length: timex.length,
                    len,
                });
            }
            if timex.offset < prev {
                return Err(AnnotationError::TimexesOutOfOrder {
                    doc: doc.to_string(),
                    sentence: sid,
                    tid: timex.tid.clone(),
                });
            }
            prev = timex.offset;
            Self::claim_id(doc, &timex.tid, seen_ids)?;
        }

        // G4: tree indexing and token indexing must agree
        let tree = match raw.parse.as_deref() {
            Some(parse) => {
                let tree = tsieve_parser::parse_tree(parse).map_err(|source| AnnotationError::Tree {
                    doc: doc.to_string(),
                    sentence: sid,
                    source,
                })?;
                let leaves = tree.leaves();
                if leaves.len() != len {
                    return Err(AnnotationError::TreeLengthMismatch {
                        doc: doc.to_string(),
                        sentence: sid,
                        leaves: leaves.len(),
                        tokens: len,
                    });
                }
                if let Some((index, (leaf, token))) = leaves
                    .iter()
                    .zip(&raw.tokens)
                    .enumerate()
                    .find(|(_, (leaf, token))| unescape_ptb(leaf) != unescape_ptb(token))
                {
                    return Err(AnnotationError::TreeTokenMismatch {
                        doc: doc.to_string(),
                        sentence: sid,
                        index,
                        leaf: (*leaf).to_string(),
                        token: token.clone(),
                    });
                }
                Some(tree)
            }
            None => None,
        };

        let tokens = raw
            .tokens
            .into_iter()
            .enumerate()
            .map(|(index, text)| Token { index, text })
            .collect();

        Ok(Sentence {
            sid,
            tokens,
            parse: raw.parse,
            tree,
            events: raw.events,
            timexes: raw.timexes,
        })
    }

    // G5
    fn claim_id(doc: &str, id: &str, seen: &mut HashSet<String>) -> Result<(), AnnotationError> {
        if seen.insert(id.to_string()) {
            Ok(())
        } else {
            Err(AnnotationError::DuplicateId {
                doc: doc.to_string(),
                id: id.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn raw(sentences: Vec<RawSentence>) -> RawDocument {
        RawDocument {
            name: "wsj_0001".to_string(),
            sentences,
            tlinks: Vec::new(),
        }
    }

    fn reported() -> RawSentence {
        RawSentence::from_tokens(&["Acme", "reported", "in", "2004-Q3", "strong", "earnings"])
    }

    #[test]
    fn gate_accepts_in_bounds_annotations() {
        let sent = reported()
            .with_event("ei1", EventClass::Reporting, 1)
            .with_timex("t1", "2004-Q3", 3);
        let doc = AnnotationGate::validate(raw(vec![sent])).unwrap();

        let s = &doc.sentences()[0];
        assert_eq!(s.events()[0].text, "reported");
        assert_eq!(s.timexes()[0].text, "2004-Q3");
        assert_eq!(doc.event_count(), 1);
        assert_eq!(doc.timex_count(), 1);
    }

    #[test]
    fn gate_rejects_event_past_last_token() {
        let sent = reported().with_event("ei1", EventClass::Reporting, 6);
        let err = AnnotationGate::validate(raw(vec![sent])).unwrap_err();
        assert!(
            matches!(err, AnnotationError::EventOutOfBounds { index: 6, len: 6, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn gate_rejects_timex_span_past_last_token() {
        let mut sent = reported();
        sent = sent.with_timex("t1", "2004-Q3", 5);
        sent.timexes[0].length = 2;
        let err = AnnotationGate::validate(raw(vec![sent])).unwrap_err();
        assert!(matches!(err, AnnotationError::TimexOutOfBounds { offset: 5, .. }));
    }

    #[test]
    fn gate_rejects_empty_timex_span() {
        let mut sent = RawSentence::from_tokens(&["a", "b"]).with_timex("t1", "2004-Q3", 1);
        sent.timexes[0].length = 0;
        let err = AnnotationGate::validate(raw(vec![sent])).unwrap_err();
        assert!(
            matches!(err, AnnotationError::TimexOutOfBounds { offset: 1, length: 0, len: 2, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn gate_rejects_timexes_out_of_textual_order() {
        let sent = reported()
            .with_timex("t1", "2004-Q3", 3)
            .with_timex("t2", "2004-Q4", 1);
        let err = AnnotationGate::validate(raw(vec![sent])).unwrap_err();
        assert!(
            matches!(err, AnnotationError::TimexesOutOfOrder { ref tid, sentence: 0, .. } if tid == "t2"),
            "got {err:?}"
        );
    }

    #[test]
    fn gate_accepts_timexes_sharing_an_offset() {
        let sent = reported()
            .with_timex("t1", "2004-Q3", 3)
            .with_timex("t2", "2004", 3);
        assert!(AnnotationGate::validate(raw(vec![sent])).is_ok());
    }

    #[test]
    fn gate_rejects_events_out_of_textual_order() {
        let sent = reported()
            .with_event("ei1", EventClass::Reporting, 4)
            .with_event("ei2", EventClass::Occurrence, 1);
        let err = AnnotationGate::validate(raw(vec![sent])).unwrap_err();
        assert!(matches!(err, AnnotationError::EventsOutOfOrder { .. }));
    }

    #[test]
    fn gate_rejects_duplicate_ids_across_sentences() {
        let first = reported().with_event("ei1", EventClass::Reporting, 1);
        let second = reported().with_event("ei1", EventClass::Reporting, 1);
        let err = AnnotationGate::validate(raw(vec![first, second])).unwrap_err();
        assert!(matches!(err, AnnotationError::DuplicateId { ref id, .. } if id == "ei1"));
    }

    #[test]
    fn gate_reads_parse_that_matches_tokens() {
        let sent = RawSentence::from_tokens(&["Acme", "posted", "losses"])
            .with_parse("(ROOT (S (NP (NNP Acme)) (VP (VBD posted) (NP (NNS losses)))))");
        let doc = AnnotationGate::validate(raw(vec![sent])).unwrap();
        let tree = doc.sentences()[0].tree().unwrap();
        assert_eq!(tree.pos_tag(1), Some("VBD"));
    }

    #[test]
    fn gate_accepts_parse_with_escaped_brackets() {
        let sent = RawSentence::from_tokens(&["Acme", "(", "ACM", ")", "reported"]).with_parse(
            "(ROOT (S (NP (NNP Acme) (PRN (-LRB- -LRB-) (NNP ACM) (-RRB- -RRB-))) (VP (VBD reported))))",
        );
        let doc = AnnotationGate::validate(raw(vec![sent])).unwrap();
        let s = &doc.sentences()[0];
        let tree = s.tree().unwrap();
        assert_eq!(tree.leaf_text(1), Some("("));
        assert_eq!(tree.leaf_text(1), Some(s.token_text(1)));
        assert_eq!(tree.leaf_text(3), Some(s.token_text(3)));
        assert_eq!(tree.pos_tag(3), Some("-RRB-"));
    }

    #[test]
    fn gate_rejects_parse_with_different_leaves() {
        let sent = RawSentence::from_tokens(&["Acme", "posted", "losses"])
            .with_parse("(ROOT (S (NP (NNP Acme)) (VP (VBD reported) (NP (NNS losses)))))");
        let err = AnnotationGate::validate(raw(vec![sent])).unwrap_err();
        assert!(matches!(err, AnnotationError::TreeTokenMismatch { index: 1, .. }));
    }

    #[test]
    fn gate_rejects_parse_with_wrong_leaf_count() {
        let sent = RawSentence::from_tokens(&["Acme", "posted", "losses"])
            .with_parse("(ROOT (S (NP (NNP Acme)) (VP (VBD posted))))");
        let err = AnnotationGate::validate(raw(vec![sent])).unwrap_err();
        assert!(matches!(
            err,
            AnnotationError::TreeLengthMismatch { leaves: 2, tokens: 3, .. }
        ));
    }

    #[test]
    fn gate_rejects_malformed_parse() {
        let sent = RawSentence::from_tokens(&["Acme"]).with_parse("(ROOT (NNP Acme)");
        let err = AnnotationGate::validate(raw(vec![sent])).unwrap_err();
        assert!(matches!(err, AnnotationError::Tree { .. }));
    }

    proptest! {
        #[test]
        fn event_accepted_iff_in_bounds(len in 1usize..12, index in 0usize..16) {
            let tokens: Vec<String> = (0..len).map(|i| format!("w{i}")).collect();
            let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
            let sent = RawSentence::from_tokens(&refs).with_event("ei1", EventClass::Reporting, index);
            let result = AnnotationGate::validate(raw(vec![sent]));
            prop_assert_eq!(result.is_ok(), index < len);
        }
    }
}
