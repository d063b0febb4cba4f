use crate::{Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Character-cursor tokenizer over in-memory source text.
///
/// The lexer keeps a current-character cursor plus a one-byte read-ahead
/// cursor. Each call to [`Lexer::next_token`] skips whitespace, classifies
/// the current character and returns exactly one token; once the input is
/// exhausted every further call returns an `Eof` token.
pub struct Lexer {
    source: Vec<u8>,
    /// Offset of the current character
    position: usize,
    /// Offset of the next character to be read
    read_position: usize,
    /// Current character, 0 once past the end of the input
    ch: u8,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        let mut lexer = Lexer {
            source: source.into_bytes(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Scans and returns the next token, advancing the cursor past it.
    pub fn next_token(&mut self) -> Token {
        self.eat_whitespace();

        let start = self.position as u32;

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    self.make_token(TokenKind::Equals, "==", start)
                } else {
                    self.make_token(TokenKind::Assignment, "=", start)
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    self.make_token(TokenKind::NotEquals, "!=", start)
                } else {
                    self.make_token(TokenKind::Not, "!", start)
                }
            }
            b'+' => self.make_token(TokenKind::Plus, "+", start),
            b'-' => self.make_token(TokenKind::Dash, "-", start),
            b'*' => self.make_token(TokenKind::Star, "*", start),
            b'/' => self.make_token(TokenKind::Slash, "/", start),
            b'<' => self.make_token(TokenKind::Less, "<", start),
            b'>' => self.make_token(TokenKind::Greater, ">", start),
            b',' => self.make_token(TokenKind::Comma, ",", start),
            b';' => self.make_token(TokenKind::Semicolon, ";", start),
            b'(' => self.make_token(TokenKind::OpenParen, "(", start),
            b')' => self.make_token(TokenKind::CloseParen, ")", start),
            b'{' => self.make_token(TokenKind::OpenCurly, "{", start),
            b'}' => self.make_token(TokenKind::CloseCurly, "}", start),
            0 => {
                // Idempotent tail: never advances, so repeated calls at the
                // end of input keep yielding Eof
                return MK_TOKEN!(TokenKind::Eof, String::new(), Span::new(start, start));
            }
            ch if is_letter(ch) => {
                let value = self.read_identifier();
                let kind = RESERVED_LOOKUP
                    .get(value.as_str())
                    .copied()
                    .unwrap_or(TokenKind::Identifier);
                // The scan already left the cursor on the first
                // non-identifier character
                return MK_TOKEN!(kind, value, Span::new(start, self.position as u32));
            }
            ch if is_digit(ch) => {
                let value = self.read_number();
                return MK_TOKEN!(TokenKind::Number, value, Span::new(start, self.position as u32));
            }
            ch => self.make_token(TokenKind::Illegal, &(ch as char).to_string(), start),
        };

        self.read_char();
        token
    }

    fn make_token(&self, kind: TokenKind, value: &str, start: u32) -> Token {
        MK_TOKEN!(
            kind,
            String::from(value),
            Span::new(start, self.position as u32 + 1)
        )
    }

    fn read_char(&mut self) {
        if self.read_position >= self.source.len() {
            self.ch = 0;
        } else {
            self.ch = self.source[self.read_position];
        }
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_position >= self.source.len() {
            0
        } else {
            self.source[self.read_position]
        }
    }

    fn read_identifier(&mut self) -> String {
        let position = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.source[position..self.position]).to_string()
    }

    fn read_number(&mut self) -> String {
        let position = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.source[position..self.position]).to_string()
    }

    fn eat_whitespace(&mut self) {
        while is_whitespace(self.ch) {
            self.read_char();
        }
    }
}

fn is_whitespace(ch: u8) -> bool {
    ch == b' ' || ch == b'\t' || ch == b'\n'
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_uppercase() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Drains a fresh lexer over `source`, returning every token up to and
/// including the first Eof.
pub fn tokenize(source: String) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
