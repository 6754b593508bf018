// lexer.rs

use crate::error::Error;
use crate::token::{Line, Token, TokenKind};
use std::str::Chars;

/// Splits source text into one token group per non-blank line.
///
/// Characters are scanned one at a time. Identifier and number characters
/// accumulate in a buffer that is flushed by whitespace, punctuation or a
/// line break. A flushed buffer is typed by the token before it: after `$`
/// it must be 4 hex digits, after `%` it must be 2 hex digits, otherwise it
/// is a symbol. Every token is checked against the kind that precedes it.
pub struct Lexer<'a> {
    iter: Chars<'a>,
    line_no: usize,
    buf: String,
    prev: TokenKind,
    group: Vec<Token>,
    lines: Vec<Line>,
}

impl<'a> Lexer<'a> {
    pub fn new(code: &'a str) -> Self {
        Self {
            iter: code.chars(),
            line_no: 1,
            buf: String::new(),
            prev: TokenKind::LineEnd,
            group: Vec::new(),
            lines: Vec::new(),
        }
    }

    pub fn parse(mut self) -> Result<Vec<Line>, Error> {
        while let Some(c) = self.iter.next() {
            match c {
                ' ' | '\t' | '\r' => self.flush()?,
                '\n' => self.end_line()?,
                _ => {
                    if let Some(kind) = single_char_token(c) {
                        self.flush()?;
                        self.push(Token::new(kind, c))?;
                    } else if is_word_char(c) {
                        self.buf.push(c);
                    } else {
                        return Err(Error::UnrecognizedChar(self.line_no, c));
                    }
                }
            }
        }

        // Last line without a trailing newline
        if !self.buf.is_empty() || !self.group.is_empty() {
            self.end_line()?;
        }

        Ok(self.lines)
    }

    fn flush(&mut self) -> Result<(), Error> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.buf);
        let kind = match self.prev {
            TokenKind::Dollar => number(&text, 4, TokenKind::Address),
            TokenKind::Percent => number(&text, 2, TokenKind::Literal),
            _ => Some(TokenKind::Symbol),
        }
        .ok_or_else(|| Error::UnrecognizedNumber(self.line_no, text.clone()))?;
        self.push(Token::new(kind, text))
    }

    fn push(&mut self, token: Token) -> Result<(), Error> {
        if !self.prev.follows().contains(&token.kind) {
            return Err(Error::UnexpectedToken(self.line_no, token.kind));
        }
        self.prev = token.kind;
        self.group.push(token);
        Ok(())
    }

    fn end_line(&mut self) -> Result<(), Error> {
        self.flush()?;
        self.push(Token::new(TokenKind::LineEnd, "\n"))?;
        let tokens = std::mem::take(&mut self.group);
        // A lone LineEnd is a blank line
        if tokens.len() > 1 {
            self.lines.push(Line {
                tokens,
                line_no: self.line_no,
            });
        }
        self.line_no += 1;
        Ok(())
    }
}

fn single_char_token(c: char) -> Option<TokenKind> {
    match c {
        '%' => Some(TokenKind::Percent),
        '$' => Some(TokenKind::Dollar),
        '=' => Some(TokenKind::Equal),
        ':' => Some(TokenKind::Colon),
        ',' => Some(TokenKind::Comma),
        _ => None,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'
}

fn number(text: &str, digits: usize, kind: TokenKind) -> Option<TokenKind> {
    if text.len() == digits && text.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(kind)
    } else {
        None
    }
}
