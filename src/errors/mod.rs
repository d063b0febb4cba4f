//! Error types and error handling for the front end.
//!
//! This module defines the diagnostic types produced while parsing. It
//! includes:
//!
//! - Error structures with source span information
//! - Specific error variants for the lexical and structural anomalies the
//!   parser can encounter
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions
//!
//! Diagnostics are never thrown across the parse; they are collected by the
//! parser and surfaced to the caller once parsing completes.

pub mod errors;

#[cfg(test)]
mod tests;
