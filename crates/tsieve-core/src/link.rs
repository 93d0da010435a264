//! Temporal links between annotated entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Relation vocabulary for temporal links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TLinkType {
    Before,
    After,
    #[serde(rename = "IBEFORE")]
    IBefore,
    #[serde(rename = "IAFTER")]
    IAfter,
    Includes,
    IsIncluded,
    Begins,
    BegunBy,
    Ends,
    EndedBy,
    Simultaneous,
    Vague,
    #[serde(rename = "NONE")]
    NoRelation,
}

impl TLinkType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Before => "BEFORE",
            Self::After => "AFTER",
            Self::IBefore => "IBEFORE",
            Self::IAfter => "IAFTER",
            Self::Includes => "INCLUDES",
            Self::IsIncluded => "IS_INCLUDED",
            Self::Begins => "BEGINS",
            Self::BegunBy => "BEGUN_BY",
            Self::Ends => "ENDS",
            Self::EndedBy => "ENDED_BY",
            Self::Simultaneous => "SIMULTANEOUS",
            Self::Vague => "VAGUE",
            Self::NoRelation => "NONE",
        }
    }
}

impl fmt::Display for TLinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of entities a link connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    EventTime,
    EventEvent,
    TimeTime,
}

/// A directed, typed temporal relation. Links are never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TLink {
    pub kind: LinkKind,

    /// Source endpoint id (an event `eiid` or a timex `tid`).
    pub source: String,

    /// Target endpoint id.
    pub target: String,

    pub relation: TLinkType,

    /// Name of the sieve that proposed this link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl TLink {
    /// Link an event instance to a time expression.
    #[must_use]
    pub fn event_time(eiid: impl Into<String>, tid: impl Into<String>, relation: TLinkType) -> Self {
        Self {
            kind: LinkKind::EventTime,
            source: eiid.into(),
            target: tid.into(),
            relation,
            origin: None,
        }
    }

    /// Record which sieve proposed the link.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

impl fmt::Display for TLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {}", self.source, self.target, self.relation)
    }
}
