//! Parser module for building the syntax tree of a TINY program.
//!
//! This module contains a recursive-descent parser with one token of
//! lookahead. Each grammar rule is a function:
//!
//! ```text
//! PGM    -->  STMT+
//! STMT   -->  "print" EXP | ASSIGN
//! ASSIGN -->  ID "=" EXP
//! EXP    -->  TERM ETAIL
//! ETAIL  -->  "+" TERM ETAIL | "-" TERM ETAIL | EPSILON
//! TERM   -->  FACTOR TTAIL
//! TTAIL  -->  "*" FACTOR TTAIL | "/" FACTOR TTAIL | EPSILON
//! FACTOR -->  "(" EXP ")" | INT | ID
//! ```
//!
//! Errors never stop the parse. A mismatch is recorded as a diagnostic and
//! the offending token is consumed, so every input yields a tree plus an
//! error count.

pub mod expr;
pub mod parser;
pub mod stmt;
