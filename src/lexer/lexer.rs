use std::{collections::VecDeque, fs, io, path::Path, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenSource, RESERVED_LOOKUP};

/// Receives the text matched by a pattern and pushes the resulting token.
pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored; the first one that matches at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[a-zA-Z]+").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: whitespace_handler },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

/// An on-demand lexer over TINY source text.
///
/// Tokens are scanned one at a time as [`TokenSource::next_token`] is called;
/// the source is read strictly forward. Whitespace is returned as
/// [`TokenKind::Whitespace`] tokens rather than skipped.
pub struct Lexer {
    pending: VecDeque<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pending: VecDeque::new(),
            source,
            pos: 0,
            file: file_name,
        }
    }

    /// Reads `path` and creates a lexer named after its file name.
    pub fn open(path: &Path) -> io::Result<Lexer> {
        let source = fs::read_to_string(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        Ok(Lexer::new(source, file_name))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.pending.push_back(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// The span of the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    /// Scans exactly one token into the pending queue.
    fn scan(&mut self) {
        if self.at_eof() {
            let span = self.span_of(0);
            self.push(Token::eof(span));
            return;
        }

        for pattern in PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(self.remainder()) {
                let matched = matched.as_str().to_string();
                (pattern.handler)(self, &matched);
                return;
            }
        }

        unknown_handler(self);
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        if self.pending.is_empty() {
            self.scan();
        }

        match self.pending.pop_front() {
            Some(token) => {
                trace!(kind = %token.kind, value = %token.value, "Scanned token");
                token
            }
            None => Token::eof(self.span_of(0)),
        }
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched.to_string(), span));
    lexer.advance_n(matched.len());
}

fn whitespace_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Whitespace, matched.to_string(), span));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(kind, matched.to_string(), span));
    lexer.advance_n(matched.len());
}

fn unknown_handler(lexer: &mut Lexer) {
    // at_eof() was checked by the caller, so there is at least one char left
    let Some(ch) = lexer.remainder().chars().next() else {
        return;
    };

    let span = lexer.span_of(ch.len_utf8());
    lexer.push(MK_TOKEN!(TokenKind::Unknown, ch.to_string(), span));
    lexer.advance_n(ch.len_utf8());
}

/// Eagerly scans all of `source`, dropping whitespace.
///
/// The returned vector always ends with a single [`TokenKind::EOF`] token.
/// Unlike the on-demand [`Lexer`], an unrecognised character is an error here.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();

        match token.kind {
            TokenKind::Whitespace => continue,
            TokenKind::Unknown => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token: token.value },
                    token.span.start,
                ));
            }
            TokenKind::EOF => {
                tokens.push(token);
                return Ok(tokens);
            }
            _ => tokens.push(token),
        }
    }
}
