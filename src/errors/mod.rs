//! Error types and error handling for the TINY front end.
//!
//! This module defines the error types shared by the lexer and parser:
//!
//! - Error structures with source position information
//! - The grammar-mismatch diagnostic collected (not raised) by the parser
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
