//! Query abstract syntax tree.
//!
//! Represents parsed boolean queries before evaluation against an index.

use std::fmt;

/// A node in a parsed boolean query.
///
/// Queries are binary trees: leaves carry a search term, internal nodes
/// combine exactly two subtrees with a boolean operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    /// A single search term.
    Word(String),

    /// Disjunction: documents matching either subtree.
    Or(Box<Self>, Box<Self>),

    /// Conjunction: documents matching both subtrees.
    And(Box<Self>, Box<Self>),

    /// Difference: documents matching the left subtree but not the right.
    AndNot(Box<Self>, Box<Self>),
}

impl QueryNode {
    /// Creates a word leaf.
    pub fn word(term: impl Into<String>) -> Self {
        Self::Word(term.into())
    }

    /// Creates a disjunction node.
    pub fn or(left: Self, right: Self) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    /// Creates a conjunction node.
    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    /// Creates a difference node.
    pub fn and_not(left: Self, right: Self) -> Self {
        Self::AndNot(Box::new(left), Box::new(right))
    }

    /// Re-serializes the tree as a lexeme sequence with explicit
    /// parentheses around every operator.
    ///
    /// Parsing the returned sequence reproduces the same tree:
    ///
    /// ```
    /// use sift_query::{QueryNode, parse};
    ///
    /// let node = QueryNode::and_not(
    ///     QueryNode::word("cat"),
    ///     QueryNode::or(QueryNode::word("dog"), QueryNode::word("fish")),
    /// );
    /// assert_eq!(parse(&node.to_lexemes()).unwrap(), node);
    /// ```
    pub fn to_lexemes(&self) -> Vec<String> {
        let mut lexemes = Vec::new();
        self.push_lexemes(&mut lexemes);
        lexemes
    }

    /// Appends this subtree's lexemes to `lexemes`.
    fn push_lexemes(&self, lexemes: &mut Vec<String>) {
        match self {
            Self::Word(term) => lexemes.push(term.clone()),
            Self::Or(left, right) => Self::push_group(lexemes, left, "OR", right),
            Self::And(left, right) => Self::push_group(lexemes, left, "AND", right),
            Self::AndNot(left, right) => Self::push_group(lexemes, left, "ANDNOT", right),
        }
    }

    /// Appends a parenthesized `left operator right` group.
    fn push_group(lexemes: &mut Vec<String>, left: &Self, operator: &str, right: &Self) {
        lexemes.push("(".to_string());
        left.push_lexemes(lexemes);
        lexemes.push(operator.to_string());
        right.push_lexemes(lexemes);
        lexemes.push(")".to_string());
    }
}

impl fmt::Display for QueryNode {
    /// Renders the fully parenthesized infix form, e.g. `((a OR b) ANDNOT c)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(term) => write!(f, "{term}"),
            Self::Or(left, right) => write!(f, "({left} OR {right})"),
            Self::And(left, right) => write!(f, "({left} AND {right})"),
            Self::AndNot(left, right) => write!(f, "({left} ANDNOT {right})"),
        }
    }
}
