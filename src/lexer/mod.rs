//! Lexical analysis module for TINY.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens for parsing. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Recognition of the `print` keyword, identifiers, integers and operators
//! - Token position tracking for error reporting
//! - Whitespace runs, which are emitted as tokens and filtered by the parser

pub mod lexer;
pub mod tokens;
