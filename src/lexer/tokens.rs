use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("print", TokenKind::Print);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenParen,
    CloseParen,

    Assignment, // =

    Plus,
    Dash,
    Slash,
    Star,

    Whitespace,
    /// A character no pattern recognises.
    Unknown,

    // Reserved
    Print,
}

impl TokenKind {
    /// The name used for this kind in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Number => "INT",
            TokenKind::Identifier => "ID",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Whitespace => "WS",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::Print => "print",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Number, TokenKind::Unknown]) {
            write!(f, "{:?} ({})", self.kind, self.value)
        } else {
            write!(f, "{:?} ()", self.kind)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// The end-of-input token handed out once a source is exhausted.
    pub fn eof(span: Span) -> Self {
        Token {
            kind: TokenKind::EOF,
            value: String::from("EOF"),
            span,
        }
    }
}

/// Anything that can hand the parser one token at a time.
///
/// Once a source reaches the end of its input it must keep returning
/// [`TokenKind::EOF`] tokens.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl TokenSource for std::vec::IntoIter<Token> {
    fn next_token(&mut self) -> Token {
        self.next().unwrap_or_else(|| Token::eof(Span::null()))
    }
}
