use tracing::{info, trace};

use crate::{
    ast::ast::{Node, NodeKind},
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{expr::parse_expr, parser::Parser};

/// `PGM --> STMT+`
///
/// Parses statements until the end of input and returns the `program` root,
/// one child per statement. The error count is reset first, so it only
/// reflects this parse.
pub fn parse_program<S: TokenSource>(parser: &mut Parser<S>) -> Node {
    parser.reset_errors();

    let mut program = Node::synthetic(NodeKind::Program);

    while parser.current_token_kind() != TokenKind::EOF {
        program.push(parse_stmt(parser));
    }

    info!(errors = parser.error_count(), "{}", parser.summary());

    program
}

/// `STMT --> "print" EXP | ASSIGN`
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Node {
    trace!(lookahead = %parser.current_token_kind(), "Parsing statement");

    if parser.current_token_kind() != TokenKind::Print {
        return parse_assign(parser);
    }

    let mut print = Node::from_token(parser.current_token().clone());
    parser.expect(TokenKind::Print);
    print.push(parse_expr(parser));

    print
}

/// `ASSIGN --> ID "=" EXP`
///
/// Yields `=` with children `[ID, EXP]`. Every failure path goes through
/// [`Parser::expect`], so at least one token is consumed and a childless
/// `assignment` placeholder is returned.
pub fn parse_assign<S: TokenSource>(parser: &mut Parser<S>) -> Node {
    trace!(lookahead = %parser.current_token_kind(), "Parsing assignment");

    if parser.current_token_kind() != TokenKind::Identifier {
        parser.expect(TokenKind::Identifier);
        return Node::synthetic(NodeKind::Assignment);
    }

    let identifier = Node::from_token(parser.current_token().clone());
    parser.expect(TokenKind::Identifier);

    if parser.current_token_kind() != TokenKind::Assignment {
        parser.expect(TokenKind::Assignment);
        return Node::synthetic(NodeKind::Assignment);
    }

    let mut assignment = Node::from_token(parser.current_token().clone());
    assignment.push(identifier);
    parser.expect(TokenKind::Assignment);
    assignment.push(parse_expr(parser));

    assignment
}
