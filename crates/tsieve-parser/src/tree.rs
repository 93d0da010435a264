//! Constituency tree type and token-index lookups.
//!
//! Leaves are numbered left to right from zero, matching the token indices
//! used by sentence annotations.

use std::fmt;

/// A node in a constituency parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTree {
    /// An internal node, e.g. `(NP ...)`. The root label may be empty.
    Node {
        label: String,
        children: Vec<ParseTree>,
    },
    /// A terminal word.
    Leaf(String),
}

/// A word together with the label of the node directly above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedLeaf<'a> {
    pub word: &'a str,
    pub tag: &'a str,
}

impl ParseTree {
    /// Label of this node, or the word for a leaf.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Node { label, .. } => label,
            Self::Leaf(word) => word,
        }
    }

    /// All terminal words, left to right.
    #[must_use]
    pub fn leaves(&self) -> Vec<&str> {
        self.tagged_leaves().into_iter().map(|t| t.word).collect()
    }

    /// Number of terminal words.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Node { children, .. } => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Every leaf paired with its pre-terminal label.
    ///
    /// A bare leaf at the root gets an empty tag.
    #[must_use]
    pub fn tagged_leaves(&self) -> Vec<TaggedLeaf<'_>> {
        let mut out = Vec::with_capacity(self.leaf_count());
        collect_tagged(self, "", &mut out);
        out
    }

    /// Surface text of the leaf at `index`, with PTB bracket escapes undone
    /// (`-LRB-` reads as `(`). [`Self::leaves`] keeps the escaped form.
    #[must_use]
    pub fn leaf_text(&self, index: usize) -> Option<&str> {
        self.tagged_leaves().get(index).map(|t| unescape_ptb(t.word))
    }

    /// POS tag (pre-terminal label) of the leaf at `index`.
    #[must_use]
    pub fn pos_tag(&self, index: usize) -> Option<&str> {
        self.tagged_leaves().get(index).map(|t| t.tag)
    }
}

/// Undo Penn Treebank bracket escaping. Other words are returned unchanged.
#[must_use]
pub fn unescape_ptb(word: &str) -> &str {
    match word {
        "-LRB-" => "(",
        "-RRB-" => ")",
        "-LCB-" => "{",
        "-RCB-" => "}",
        "-LSB-" => "[",
        "-RSB-" => "]",
        _ => word,
    }
}

fn collect_tagged<'a>(tree: &'a ParseTree, parent: &'a str, out: &mut Vec<TaggedLeaf<'a>>) {
    match tree {
        ParseTree::Leaf(word) => out.push(TaggedLeaf { word, tag: parent }),
        ParseTree::Node { label, children } => {
            for child in children {
                collect_tagged(child, label, out);
            }
        }
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(word) => write!(f, "{word}"),
            Self::Node { label, children } => {
                write!(f, "({label}")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                write!(f, ")")
            }
        }
    }
}
