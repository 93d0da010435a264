//! Reporting verbs followed by a fiscal-quarter time expression.
//!
//! When a quarter expression directly follows a reporting verb it is usually
//! not the verb's temporal argument but a modifier of one of its arguments:
//! in "Acme reported third quarter losses", "third quarter" modifies "losses",
//! and the reporting happened after the quarter ended. "reported in the
//! third quarter" is the exception where the verb does fall inside it.
//!
//! Per sentence, every (quarter timex, REPORTING event) pair is linked when
//! the timex starts one token after the event (IS_INCLUDED) or two tokens
//! after it (IS_INCLUDED if the token in between is "in", AFTER otherwise).

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};
use tsieve_core::{Corpus, Document, Event, EventClass, Sentence, TLink, TLinkType, Timex};

use crate::config::QuarterReportingConfig;
use crate::{Result, Sieve};

// Normalized quarter value, e.g. "2003-Q3". ASCII digits only.
static QUARTER_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-Q[0-9]$").expect("valid regex"));

// Quarter surface form, e.g. "third quarter", "3rd-quarter".
static QUARTER_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(first|second|third|fourth|1st|2nd|3rd|4th)[\s-]quarter")
        .expect("valid regex")
});

/// Whether a timex value names a quarter (`YYYY-Qn`). The quarter digit is
/// not range-checked.
#[must_use]
pub fn is_quarter_value(value: &str) -> bool {
    QUARTER_VALUE.is_match(value)
}

/// Whether surface text contains an ordinal quarter phrase.
#[must_use]
pub fn is_quarter_text(text: &str) -> bool {
    QUARTER_TEXT.is_match(text)
}

/// Relation for a reporting event separated from a quarter by one token.
#[must_use]
pub fn classify_connector(connector: &str) -> TLinkType {
    if connector == "in" {
        TLinkType::IsIncluded
    } else {
        TLinkType::After
    }
}

/// Rule-based sieve linking reporting events to adjacent quarter timexes.
#[derive(Debug, Clone, Default)]
pub struct QuarterSieveReporting {
    check_surface_form: bool,
}

impl QuarterSieveReporting {
    pub const NAME: &'static str = "QuarterSieveReporting";

    /// Sieve that checks timex values only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &QuarterReportingConfig) -> Self {
        Self {
            check_surface_form: config.check_surface_form,
        }
    }

    /// Links for one document, in sentence order, then timex order, then
    /// event order.
    #[must_use]
    pub fn annotate_document(&self, doc: &Document) -> Vec<TLink> {
        let mut proposed = Vec::new();
        for sent in doc.sentences() {
            debug!(doc = doc.name(), sentence = sent.sid(), "adding tlinks from sentence");
            self.annotate_sentence(sent, &mut proposed);
        }
        debug!(doc = doc.name(), count = proposed.len(), "proposed tlinks");
        proposed
    }

    fn annotate_sentence(&self, sent: &Sentence, proposed: &mut Vec<TLink>) {
        for timex in sent.timexes() {
            if !self.validate_timex(timex) {
                continue;
            }
            for event in sent.events() {
                if !validate_event(event) {
                    continue;
                }
                let relation = match timex.offset.checked_sub(event.index) {
                    Some(1) => TLinkType::IsIncluded,
                    Some(2) => {
                        let connector = timex.offset - 1;
                        let text = sent.token_text(connector);
                        trace!(
                            connector = text,
                            pos = sent.tree().and_then(|t| t.pos_tag(connector)).unwrap_or("-"),
                            "classifying connector"
                        );
                        classify_connector(text)
                    }
                    _ => continue,
                };
                trace!(eiid = %event.eiid, tid = %timex.tid, %relation, "quarter link");
                proposed.push(
                    TLink::event_time(event.eiid.as_str(), timex.tid.as_str(), relation)
                        .with_origin(Self::NAME),
                );
            }
        }
    }

    fn validate_timex(&self, timex: &Timex) -> bool {
        is_quarter_value(&timex.value) && (!self.check_surface_form || is_quarter_text(&timex.text))
    }
}

fn validate_event(event: &Event) -> bool {
    event.class == EventClass::Reporting
}

impl Sieve for QuarterSieveReporting {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn annotate(&self, corpus: &Corpus, doc_name: &str, _current: &[TLink]) -> Result<Vec<TLink>> {
        let doc = corpus.document(doc_name)?;
        Ok(self.annotate_document(doc))
    }

    /// No training; the sieve is rule-based.
    fn train(&mut self, _corpus: &Corpus) -> Result<()> {
        Ok(())
    }
}
