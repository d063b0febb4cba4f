//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level parse loop.
//! The parser pulls tokens from the lexer one at a time, keeping a window of
//! the current token and one token of lookahead, and uses a Pratt approach
//! with NUD/LED handlers for expression parsing and specialized functions
//! for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LedHandler, LedLookup, NudHandler,
        NudLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the token source and maintains lookup tables for
/// parsing statements and expressions. It tracks the current token and one
/// token of lookahead; a single instance is not safe for concurrent use,
/// but independent instances share no state.
pub struct Parser {
    /// The token source being consumed
    lexer: Lexer,
    /// The token every parsing decision starts from
    curr_token: Token,
    /// One token of lookahead beyond the current token
    peek_token: Token,
    /// Diagnostics accumulated during the parse, in source order
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NudLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LedLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser over the given lexer.
    ///
    /// Registers the handler lookup tables and pulls two tokens so that
    /// both the current token and the lookahead token are populated.
    pub fn new(mut lexer: Lexer) -> Self {
        let curr_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            curr_token,
            peek_token,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn curr_token(&self) -> &Token {
        &self.curr_token
    }

    /// Returns the kind of the current token.
    pub fn curr_token_kind(&self) -> TokenKind {
        self.curr_token.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn curr_token_is(&self, kind: TokenKind) -> bool {
        self.curr_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Shifts the token window: the lookahead token becomes current and a
    /// fresh token is pulled from the lexer. This is the single advancement
    /// primitive; there is no backtracking.
    pub fn advance(&mut self) {
        self.curr_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    /// Advances onto the lookahead token if it has the expected kind.
    ///
    /// # Returns
    ///
    /// `Ok(())` after advancing when the lookahead matches, otherwise an
    /// `ExpectedToken` error naming the expected and found kinds. The
    /// window is left untouched on failure.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek_token.kind == expected_kind {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind,
                    found: self.peek_token.kind,
                },
                self.peek_token.span,
            ))
        }
    }

    /// Returns the binding power registered for the lookahead token, or
    /// `Lowest` when it has none.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek_token.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NudLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LedLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LedHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix rule
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NudHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses statements until end-of-input and returns the root node.
    ///
    /// Never fails: a malformed statement records one diagnostic, the
    /// cursor resynchronizes at the next statement boundary, and parsing
    /// continues. On unparseable input the result is a best-effort partial
    /// tree paired with a non-empty diagnostics list.
    pub fn parse(&mut self) -> Program {
        let mut program = Program::default();

        while !self.curr_token_is(TokenKind::Eof) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                }
            }
            // every iteration moves the window forward
            self.advance();
        }

        program
    }

    /// Returns the diagnostics accumulated during the parse, in source
    /// order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Skips to the next statement boundary after a diagnostic, so one
    /// malformed statement yields exactly one diagnostic.
    fn synchronize(&mut self) {
        while !self.curr_token_is(TokenKind::Semicolon) && !self.curr_token_is(TokenKind::Eof) {
            self.advance();
        }
    }
}
