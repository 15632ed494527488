//! Arithmetic expressions.
//!
//! `EXP --> TERM ETAIL` and `TERM --> FACTOR TTAIL` avoid left recursion by
//! parsing the operator chain as a tail. The tree is built in two phases:
//! a tail node collects its own right operand and any further tail first,
//! and only then does the caller append the left operand as the last child.
//! For `a+b-c` this gives `(+ b (- c) a)`.

use tracing::trace;

use crate::{
    ast::ast::{Node, NodeKind},
    lexer::tokens::{TokenKind, TokenSource},
};

use super::parser::Parser;

/// `EXP --> TERM ETAIL`
pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>) -> Node {
    trace!(lookahead = %parser.current_token_kind(), "Parsing expression");

    let term = parse_term(parser);

    match parse_expr_tail(parser) {
        Some(mut tail) => {
            tail.push(term);
            tail
        }
        None => term,
    }
}

/// `ETAIL --> "+" TERM ETAIL | "-" TERM ETAIL | EPSILON`
///
/// Returns `None` for the empty tail.
pub fn parse_expr_tail<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    let kind = parser.current_token_kind();
    if !matches!(kind, TokenKind::Plus | TokenKind::Dash) {
        return None;
    }

    trace!(operator = %kind, "Parsing expression tail");

    let mut tail = Node::from_token(parser.current_token().clone());
    parser.expect(kind);
    tail.push(parse_term(parser));

    if let Some(rest) = parse_expr_tail(parser) {
        tail.push(rest);
    }

    Some(tail)
}

/// `TERM --> FACTOR TTAIL`
pub fn parse_term<S: TokenSource>(parser: &mut Parser<S>) -> Node {
    let factor = parse_factor(parser);

    match parse_term_tail(parser) {
        Some(mut tail) => {
            tail.push(factor);
            tail
        }
        None => factor,
    }
}

/// `TTAIL --> "*" FACTOR TTAIL | "/" FACTOR TTAIL | EPSILON`
///
/// Returns `None` for the empty tail.
pub fn parse_term_tail<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    let kind = parser.current_token_kind();
    if !matches!(kind, TokenKind::Star | TokenKind::Slash) {
        return None;
    }

    trace!(operator = %kind, "Parsing term tail");

    let mut tail = Node::from_token(parser.current_token().clone());
    parser.expect(kind);
    tail.push(parse_factor(parser));

    if let Some(rest) = parse_term_tail(parser) {
        tail.push(rest);
    }

    Some(tail)
}

/// `FACTOR --> "(" EXP ")" | INT | ID`
///
/// Always consumes at least one token. Anything else is reported, skipped,
/// and replaced by a childless `factor` placeholder.
pub fn parse_factor<S: TokenSource>(parser: &mut Parser<S>) -> Node {
    match parser.current_token_kind() {
        TokenKind::OpenParen => {
            parser.expect(TokenKind::OpenParen);
            let inner = parse_expr(parser);
            parser.expect(TokenKind::CloseParen);

            inner
        }
        TokenKind::Number | TokenKind::Identifier => {
            let leaf = Node::from_token(parser.current_token().clone());
            parser.consume();

            leaf
        }
        _ => {
            parser.report("( or INT or ID");
            parser.consume();

            Node::synthetic(NodeKind::Factor)
        }
    }
}
