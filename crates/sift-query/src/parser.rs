//! Query parser.
//!
//! Parses a lexeme sequence into a query AST using recursive descent with
//! one-lexeme lookahead and no backtracking.
//!
//! # Grammar
//!
//! ```text
//! andnotterm → andterm ( "ANDNOT" andnotterm )?
//! andterm    → orterm  ( "AND"    andterm    )?
//! orterm     → term    ( "OR"     orterm     )?
//! term       → "(" andnotterm ")" | WORD
//! ```
//!
//! All operators are right-associative. `ANDNOT` binds loosest and `OR`
//! tightest, so `a OR b AND c` reads as `(a OR b) AND c`; parentheses
//! override. Right-associativity is invisible for `OR` and `AND` (both are
//! associative) but defines `ANDNOT` chains: `a ANDNOT b ANDNOT c` is
//! `a ANDNOT (b ANDNOT c)`.
//!
//! Operators are case-sensitive uppercase; any other lexeme in term
//! position is consumed as a word.

use crate::{ast::QueryNode, error::ParseError};

/// Recursive descent parser over a query lexeme sequence.
struct Parser<'a, S> {
    /// Lexeme sequence being parsed.
    lexemes: &'a [S],
    /// Current position in the sequence.
    position: usize,
}

impl<'a, S: AsRef<str>> Parser<'a, S> {
    /// Creates a parser positioned at the first lexeme.
    fn new(lexemes: &'a [S]) -> Self {
        Self {
            lexemes,
            position: 0,
        }
    }

    /// Parses exactly one top-level `andnotterm`.
    fn parse(mut self) -> Result<QueryNode, ParseError> {
        if self.lexemes.is_empty() {
            return Err(ParseError::EmptyQuery);
        }

        let node = self.and_not_term()?;

        if self.peek().is_some() {
            return Err(ParseError::TrailingLexemes);
        }

        Ok(node)
    }

    /// Parses: andnotterm → andterm ( "ANDNOT" andnotterm )?
    fn and_not_term(&mut self) -> Result<QueryNode, ParseError> {
        let left = self.and_term()?;

        if self.peek() == Some("ANDNOT") {
            let right = self.operand("ANDNOT", Self::and_not_term)?;
            return Ok(QueryNode::and_not(left, right));
        }

        Ok(left)
    }

    /// Parses: andterm → orterm ( "AND" andterm )?
    fn and_term(&mut self) -> Result<QueryNode, ParseError> {
        let left = self.or_term()?;

        if self.peek() == Some("AND") {
            let right = self.operand("AND", Self::and_term)?;
            return Ok(QueryNode::and(left, right));
        }

        Ok(left)
    }

    /// Parses: orterm → term ( "OR" orterm )?
    fn or_term(&mut self) -> Result<QueryNode, ParseError> {
        let left = self.term()?;

        if self.peek() == Some("OR") {
            let right = self.operand("OR", Self::or_term)?;
            return Ok(QueryNode::or(left, right));
        }

        Ok(left)
    }

    /// Consumes the operator at the cursor and parses its right-hand side
    /// with `parse_rhs`, reporting the operator by name when the input ends
    /// immediately after it.
    fn operand(
        &mut self,
        operator: &'static str,
        parse_rhs: fn(&mut Self) -> Result<QueryNode, ParseError>,
    ) -> Result<QueryNode, ParseError> {
        self.advance();
        if self.peek().is_none() {
            return Err(ParseError::ExpectedAfterOperator { operator });
        }
        parse_rhs(self)
    }

    /// Parses: term → "(" andnotterm ")" | WORD
    fn term(&mut self) -> Result<QueryNode, ParseError> {
        let Some(lexeme) = self.peek() else {
            return Err(ParseError::UnexpectedEnd);
        };

        if lexeme == "(" {
            self.advance();
            if self.peek().is_none() {
                return Err(ParseError::ExpectedAfterParen);
            }

            let inner = self.and_not_term()?;

            if self.peek() != Some(")") {
                return Err(ParseError::MissingCloseParen);
            }
            self.advance();

            Ok(inner)
        } else {
            let word = lexeme.to_string();
            self.advance();
            Ok(QueryNode::Word(word))
        }
    }

    /// Returns the lexeme at the cursor without consuming it.
    fn peek(&self) -> Option<&str> {
        self.lexemes.get(self.position).map(AsRef::as_ref)
    }

    /// Moves the cursor to the next lexeme.
    fn advance(&mut self) {
        self.position += 1;
    }
}

/// Parses a query lexeme sequence into an AST.
///
/// The sequence must already be split per the tokenization contract (see
/// [`crate::lex`]): parentheses standalone, operators as whole lexemes.
/// Exactly one top-level expression is consumed; leftover lexemes are an
/// error.
///
/// ```
/// use sift_query::{QueryNode, parse};
///
/// let node = parse(&["cat", "OR", "dog"]).unwrap();
/// assert_eq!(node, QueryNode::or(QueryNode::word("cat"), QueryNode::word("dog")));
/// ```
pub fn parse<S: AsRef<str>>(lexemes: &[S]) -> Result<QueryNode, ParseError> {
    Parser::new(lexemes).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(term: &str) -> QueryNode {
        QueryNode::word(term)
    }

    fn or(left: QueryNode, right: QueryNode) -> QueryNode {
        QueryNode::or(left, right)
    }

    fn and(left: QueryNode, right: QueryNode) -> QueryNode {
        QueryNode::and(left, right)
    }

    fn and_not(left: QueryNode, right: QueryNode) -> QueryNode {
        QueryNode::and_not(left, right)
    }

    #[test]
    fn empty_query() {
        let lexemes: [&str; 0] = [];
        assert_eq!(parse(&lexemes), Err(ParseError::EmptyQuery));
    }

    #[test]
    fn single_word() {
        assert_eq!(parse(&["cat"]), Ok(word("cat")));
    }

    #[test]
    fn simple_or() {
        assert_eq!(parse(&["cat", "OR", "dog"]), Ok(or(word("cat"), word("dog"))));
    }

    #[test]
    fn simple_and() {
        assert_eq!(
            parse(&["cat", "AND", "dog"]),
            Ok(and(word("cat"), word("dog")))
        );
    }

    #[test]
    fn simple_and_not() {
        assert_eq!(
            parse(&["cat", "ANDNOT", "dog"]),
            Ok(and_not(word("cat"), word("dog")))
        );
    }

    #[test]
    fn or_is_right_associative() {
        assert_eq!(
            parse(&["a", "OR", "b", "OR", "c"]),
            Ok(or(word("a"), or(word("b"), word("c"))))
        );
    }

    #[test]
    fn and_not_is_right_associative() {
        // a ANDNOT (b ANDNOT c); the grouping is observable because ANDNOT
        // is not associative.
        assert_eq!(
            parse(&["a", "ANDNOT", "b", "ANDNOT", "c"]),
            Ok(and_not(word("a"), and_not(word("b"), word("c"))))
        );
    }

    #[test]
    fn or_binds_tighter_than_and() {
        assert_eq!(
            parse(&["x", "OR", "y", "AND", "z"]),
            Ok(and(or(word("x"), word("y")), word("z")))
        );
    }

    #[test]
    fn and_binds_tighter_than_and_not() {
        assert_eq!(
            parse(&["a", "ANDNOT", "b", "AND", "c"]),
            Ok(and_not(word("a"), and(word("b"), word("c"))))
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(
            parse(&["(", "a", "ANDNOT", "b", ")", "AND", "c"]),
            Ok(and(and_not(word("a"), word("b")), word("c")))
        );
    }

    #[test]
    fn nested_parentheses() {
        assert_eq!(
            parse(&["(", "(", "a", "OR", "b", ")", "AND", "c", ")"]),
            Ok(and(or(word("a"), word("b")), word("c")))
        );
    }

    #[test]
    fn operators_are_case_sensitive() {
        // Lowercase "or" is an ordinary word, which leaves "y" dangling.
        assert_eq!(parse(&["x", "or", "y"]), Err(ParseError::TrailingLexemes));
    }

    #[test]
    fn reserved_lexeme_in_term_position_is_a_word() {
        // The grammar only recognizes operators after a complete term, so a
        // leading operator lexeme is consumed as a word.
        assert_eq!(parse(&["ANDNOT"]), Ok(word("ANDNOT")));
        assert_eq!(parse(&["OR", "x"]), Err(ParseError::TrailingLexemes));
    }

    #[test]
    fn error_operator_at_end() {
        assert_eq!(
            parse(&["x", "AND"]),
            Err(ParseError::ExpectedAfterOperator { operator: "AND" })
        );
        assert_eq!(
            parse(&["x", "OR"]),
            Err(ParseError::ExpectedAfterOperator { operator: "OR" })
        );
        assert_eq!(
            parse(&["x", "ANDNOT"]),
            Err(ParseError::ExpectedAfterOperator { operator: "ANDNOT" })
        );
    }

    #[test]
    fn error_operator_at_end_inside_group() {
        assert_eq!(
            parse(&["(", "x", "OR"]),
            Err(ParseError::ExpectedAfterOperator { operator: "OR" })
        );
    }

    #[test]
    fn error_missing_closing_parenthesis() {
        assert_eq!(parse(&["(", "x"]), Err(ParseError::MissingCloseParen));
        assert_eq!(
            parse(&["(", "x", "OR", "y"]),
            Err(ParseError::MissingCloseParen)
        );
    }

    #[test]
    fn error_open_parenthesis_at_end() {
        assert_eq!(parse(&["x", "AND", "("]), Err(ParseError::ExpectedAfterParen));
    }

    #[test]
    fn error_trailing_lexemes() {
        assert_eq!(parse(&["x", "y"]), Err(ParseError::TrailingLexemes));
        assert_eq!(
            parse(&["(", "x", ")", "y"]),
            Err(ParseError::TrailingLexemes)
        );
    }

    #[test]
    fn lexeme_round_trip() {
        // Re-serializing with explicit parentheses reproduces the tree.
        let node = and_not(
            or(word("a"), and(word("b"), word("c"))),
            and_not(word("d"), word("e")),
        );
        assert_eq!(parse(&node.to_lexemes()), Ok(node));
    }

    #[test]
    fn owned_and_borrowed_lexemes() {
        let owned: Vec<String> = vec!["cat".into(), "AND".into(), "dog".into()];
        assert_eq!(parse(&owned), parse(&["cat", "AND", "dog"]));
    }
}
