//! Document type — tokenized, parsed, annotated text.
//!
//! Values of these types only come out of [`crate::AnnotationGate`], so every
//! event index and timex offset they hold is within the owning sentence's
//! token sequence.

use tsieve_parser::ParseTree;

use crate::annotation::{Event, Timex};
use crate::link::TLink;

/// A token's surface text and its position in the sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub index: usize,
    pub text: String,
}

/// One sentence with its annotations in textual order.
#[derive(Debug, Clone)]
pub struct Sentence {
    pub(crate) sid: usize,
    pub(crate) tokens: Vec<Token>,
    pub(crate) parse: Option<String>,
    pub(crate) tree: Option<ParseTree>,
    pub(crate) events: Vec<Event>,
    pub(crate) timexes: Vec<Timex>,
}

impl Sentence {
    /// Position of this sentence in its document.
    #[must_use]
    pub fn sid(&self) -> usize {
        self.sid
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. Annotation positions are checked at
    /// load time, so this only fires on a caller bug.
    #[must_use]
    pub fn token(&self, index: usize) -> &Token {
        &self.tokens[index]
    }

    /// Surface text of the token at `index`. Panics like [`Self::token`].
    #[must_use]
    pub fn token_text(&self, index: usize) -> &str {
        &self.token(index).text
    }

    /// Serialized constituency parse, if the sentence has one.
    #[must_use]
    pub fn parse(&self) -> Option<&str> {
        self.parse.as_deref()
    }

    /// The parse, already read. Its leaves equal the token texts.
    #[must_use]
    pub fn tree(&self) -> Option<&ParseTree> {
        self.tree.as_ref()
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn timexes(&self) -> &[Timex] {
        &self.timexes
    }

    /// Tokens joined with single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A named document: its sentences plus links proposed so far.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) name: String,
    pub(crate) sentences: Vec<Sentence>,
    pub(crate) tlinks: Vec<TLink>,
}

impl Document {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Links that came with the document (gold or earlier-stage output).
    #[must_use]
    pub fn tlinks(&self) -> &[TLink] {
        &self.tlinks
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        self.sentences.iter().map(|s| s.events.len()).sum()
    }

    #[must_use]
    pub fn timex_count(&self) -> usize {
        self.sentences.iter().map(|s| s.timexes.len()).sum()
    }
}
