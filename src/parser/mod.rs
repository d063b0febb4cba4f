//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (let bindings, returns, expression statements)
//! - Expression parsing (binary ops, prefix ops, literals, conditionals,
//!   function literals, calls)
//! - Error recovery and reporting: diagnostics accumulate and parsing
//!   always runs to completion
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
