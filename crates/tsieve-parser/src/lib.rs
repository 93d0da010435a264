//! # tsieve-parser
//!
//! Reads constituency parses in Penn Treebank bracket notation using a pest
//! PEG grammar (`src/tree.pest`).
//!
//! Sentence annotations address tokens by zero-based index; [`ParseTree`]
//! exposes the same indexing over its leaves so token text and POS tags can
//! be looked up through the tree.

pub mod tree;

use pest::error::LineColLocation;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

pub use tree::{unescape_ptb, ParseTree, TaggedLeaf};

#[derive(Parser)]
#[grammar = "tree.pest"]
struct TreeGrammar;

/// Errors produced while reading a bracketed tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty parse string")]
    Empty,

    #[error("malformed tree at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

/// Parse a single bracketed tree such as `(ROOT (S (NN growth)))`.
///
/// # Errors
///
/// Returns [`ParseError::Empty`] for blank input and [`ParseError::Syntax`]
/// for unbalanced brackets, trailing text, or a missing outer node.
pub fn parse_tree(input: &str) -> Result<ParseTree, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut pairs = TreeGrammar::parse(Rule::tree, input).map_err(syntax_error)?;
    let root = pairs
        .next()
        .and_then(|tree| tree.into_inner().find(|p| p.as_rule() == Rule::node))
        .ok_or(ParseError::Empty)?;

    Ok(build(root))
}

fn build(pair: Pair<'_, Rule>) -> ParseTree {
    if pair.as_rule() == Rule::leaf {
        return ParseTree::Leaf(pair.as_str().to_string());
    }

    let mut label = String::new();
    let mut children = Vec::new();
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::label => label = inner.as_str().to_string(),
            _ => children.push(build(inner)),
        }
    }
    ParseTree::Node { label, children }
}

fn syntax_error(err: pest::error::Error<Rule>) -> ParseError {
    let (line, column) = match err.line_col {
        LineColLocation::Pos(pos) | LineColLocation::Span(pos, _) => pos,
    };
    ParseError::Syntax {
        line,
        column,
        message: err.variant.message().into_owned(),
    }
}
