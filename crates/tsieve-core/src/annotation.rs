//! Event and time-expression annotations.
//!
//! Both are produced upstream (event detection, timex normalization) and are
//! read-only here. Positions are zero-based token indices into the sentence
//! that owns the annotation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// TimeML event class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventClass {
    Reporting,
    Perception,
    Aspectual,
    IAction,
    IState,
    State,
    Occurrence,
}

impl EventClass {
    /// The TimeML label, e.g. `REPORTING` or `I_ACTION`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reporting => "REPORTING",
            Self::Perception => "PERCEPTION",
            Self::Aspectual => "ASPECTUAL",
            Self::IAction => "I_ACTION",
            Self::IState => "I_STATE",
            Self::State => "STATE",
            Self::Occurrence => "OCCURRENCE",
        }
    }
}

impl fmt::Display for EventClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event instance id, the endpoint used by links (e.g. "ei12").
    pub eiid: String,

    /// Event id (e.g. "e12"), when the source annotation has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Surface text of the event head.
    #[serde(default)]
    pub text: String,

    pub class: EventClass,

    /// Token index of the event head.
    pub index: usize,
}

/// TimeML timex type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimexType {
    #[default]
    Date,
    Time,
    Duration,
    Set,
}

/// A time expression mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timex {
    /// Timex id, the endpoint used by links (e.g. "t3").
    pub tid: String,

    /// Surface text, e.g. "the third quarter".
    #[serde(default)]
    pub text: String,

    #[serde(rename = "type", default)]
    pub timex_type: TimexType,

    /// Normalized value, e.g. "2003-Q3" or "1998-10-27".
    pub value: String,

    /// Token index of the first token of the expression.
    pub offset: usize,

    /// Number of tokens the expression spans.
    #[serde(default = "default_length")]
    pub length: usize,
}

fn default_length() -> usize {
    1
}
