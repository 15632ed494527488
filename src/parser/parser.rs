//! Parser state and the lookahead/consume/expect engine.
//!
//! The parser holds exactly one token of lookahead over a [`TokenSource`],
//! with whitespace already skipped, and the diagnostics found so far.

use std::fmt::Display;

use tracing::{trace, warn};

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenSource},
    Position,
};

use super::stmt::parse_program;

/// The main parser structure that maintains parsing state.
pub struct Parser<S: TokenSource> {
    /// Where tokens come from
    source: S,
    /// The next unconsumed, non-whitespace token
    lookahead: Token,
    /// Grammar mismatches found during the current parse
    diagnostics: Vec<Error>,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new Parser and primes the lookahead with the first
    /// non-whitespace token of `source`.
    pub fn new(mut source: S) -> Self {
        let lookahead = next_significant_token(&mut source);

        Parser {
            source,
            lookahead,
            diagnostics: vec![],
        }
    }

    /// Returns the lookahead token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.lookahead
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// Returns the position of the lookahead token.
    pub fn get_position(&self) -> Position {
        self.lookahead.span.start.clone()
    }

    /// Replaces the lookahead with the next non-whitespace token.
    pub fn consume(&mut self) {
        self.lookahead = next_significant_token(&mut self.source);
    }

    /// Expects the lookahead to be of `expected_kind`.
    ///
    /// A mismatch is recorded but never aborts: the lookahead is consumed
    /// either way, so the parse always moves forward.
    pub fn expect(&mut self, expected_kind: TokenKind) {
        if self.current_token_kind() != expected_kind {
            self.report(expected_kind);
        }

        self.consume();
    }

    /// Records a mismatch between `expected` and the lookahead.
    pub fn report(&mut self, expected: impl Display) {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                found: self.lookahead.value.clone(),
            },
            self.get_position(),
        );

        warn!(position = self.lookahead.span.start.0, "{}", error);
        self.diagnostics.push(error);
    }

    /// Forgets all diagnostics, starting a fresh count.
    pub fn reset_errors(&mut self) {
        self.diagnostics.clear();
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// The diagnostics of the current parse, in the order they were found.
    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn summary(&self) -> String {
        format!("There were {} parse errors found.", self.error_count())
    }
}

fn next_significant_token<S: TokenSource>(source: &mut S) -> Token {
    let mut token = source.next_token();
    while token.kind == TokenKind::Whitespace {
        token = source.next_token();
    }

    trace!(kind = %token.kind, value = %token.value, "Lookahead");
    token
}

/// Parses a whole program from `source`.
///
/// This is the main entry point for parsing. Returns the parser (holding the
/// diagnostics and error count) alongside the root `program` node, which is
/// produced even when errors were found.
pub fn parse<S: TokenSource>(source: S) -> (Parser<S>, Node) {
    let mut parser = Parser::new(source);
    let program = parse_program(&mut parser);

    (parser, program)
}
