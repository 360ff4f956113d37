// ABOUTME: Splits source text into a flat token stream: parens, quote sugar, and atoms

use crate::error::LispError;

/// A single lexical token. Parens and quote sugar are structural; everything
/// else is an `Atom` whose text is handed to the reader for classification
/// (number, string, or symbol).
///
/// `Atom` text for a string literal retains its surrounding double quotes.
/// The only escape, `\"`, is unescaped to `"` right here as the literal is
/// accumulated; every other backslash sequence is passed through
/// unchanged. `atom_from_token` in the reader only strips the surrounding
/// quotes — it does not unescape anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    LParen,
    RParen,
    Quote,
    Atom(String),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InString,
    InSymbol,
    InComment,
}

/// Tokenizes `source` in a single left-to-right pass, four-state machine:
/// `Normal` dispatches on the next character, `InString` accumulates a
/// string literal (honoring `\"` as its only escape), `InSymbol`
/// accumulates a run of non-delimiter characters, and `InComment` discards
/// everything up to the next newline.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LispError> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();
    let mut state = State::Normal;
    let mut buf = String::new();

    loop {
        match state {
            State::Normal => match chars.peek().copied() {
                None => break,
                Some(c) if c.is_whitespace() => {
                    chars.next();
                }
                Some('(') => {
                    chars.next();
                    tokens.push(Token::LParen);
                }
                Some(')') => {
                    chars.next();
                    tokens.push(Token::RParen);
                }
                Some('\'') => {
                    chars.next();
                    tokens.push(Token::Quote);
                }
                Some(';') => {
                    chars.next();
                    state = State::InComment;
                }
                Some('"') => {
                    chars.next();
                    buf.clear();
                    buf.push('"');
                    state = State::InString;
                }
                Some(_) => {
                    buf.clear();
                    state = State::InSymbol;
                }
            },
            State::InComment => match chars.next() {
                None => {
                    state = State::Normal;
                    break;
                }
                Some('\n') => state = State::Normal,
                Some(_) => {}
            },
            State::InString => match chars.next() {
                None => {
                    return Err(LispError::read_error("unterminated string literal"));
                }
                Some('\\') => match chars.next() {
                    Some('"') => buf.push('"'),
                    Some(other) => {
                        buf.push('\\');
                        buf.push(other);
                    }
                    None => return Err(LispError::read_error("unterminated string literal")),
                },
                Some('"') => {
                    buf.push('"');
                    tokens.push(Token::Atom(std::mem::take(&mut buf)));
                    state = State::Normal;
                }
                Some(c) => buf.push(c),
            },
            State::InSymbol => match chars.peek().copied() {
                None => {
                    tokens.push(Token::Atom(std::mem::take(&mut buf)));
                    state = State::Normal;
                }
                Some(c) if c.is_whitespace() || matches!(c, '(' | ')' | ';') => {
                    tokens.push(Token::Atom(std::mem::take(&mut buf)));
                    state = State::Normal;
                }
                Some(c) => {
                    buf.push(c);
                    chars.next();
                }
            },
        }
    }

    Ok(tokens)
}
