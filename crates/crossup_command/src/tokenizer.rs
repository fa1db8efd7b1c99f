//! Notation tokenization.
//!
//! Converts a compact command string into a flat token stream. The
//! alphabet is small and fixed, so this is a hand-written scanner rather
//! than a grammar library.

use crossup_foundation::GameInput;

use crate::token::{BaseToken, Token};

/// Tokenizes a notation string.
///
/// Recognizes base inputs (an optional `*` hold marker followed by one
/// symbol from the direction/button alphabet), the `+` and `|` operators,
/// and parentheses. Anything else is silently skipped, including a `*`
/// that is not followed by a legal symbol. Empty or unrecognized input
/// yields an empty stream.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '+' => tokens.push(Token::And),
            '|' => tokens.push(Token::Or),
            '(' => tokens.push(Token::LParen),
            ')' => tokens.push(Token::RParen),
            '*' => {
                if let Some(&symbol) = chars.peek() {
                    if GameInput::is_symbol(symbol) {
                        chars.next();
                        tokens.push(Token::Base(BaseToken::held(symbol)));
                    }
                }
            }
            c if GameInput::is_symbol(c) => {
                tokens.push(Token::Base(BaseToken::pressed(c)));
            }
            _ => {}
        }
    }

    tokens
}
