//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Character-by-character tokenization of source code
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Whitespace handling
//!
//! Unrecognised characters never abort the scan; they are emitted as
//! `Illegal` tokens and left for the parser to report.

pub mod lexer;
pub mod tokens;
