// ABOUTME: Recursive-descent reader: turns a token stream into Value trees

use crate::error::LispError;
use crate::symbol::Symbol;
use crate::tokenizer::{tokenize, Token};
use crate::value::Value;
use std::collections::VecDeque;

/// A consumable buffer of tokens, shared across repeated top-level reads in
/// `crate::loader::load`.
pub struct TokenStream {
    tokens: VecDeque<Token>,
}

impl TokenStream {
    pub fn new(source: &str) -> Result<Self, LispError> {
        Ok(TokenStream {
            tokens: tokenize(source)?.into(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Reads exactly one top-level expression, consuming the tokens it
    /// needs and leaving the rest for the next call.
    pub fn read_next(&mut self) -> Result<Value, LispError> {
        read_from_tokens(&mut self.tokens)
    }
}

/// Reads the single expression in `source`. Errors if there is no
/// expression, or more than one.
pub fn read_one(source: &str) -> Result<Value, LispError> {
    let mut stream = TokenStream::new(source)?;
    if stream.is_empty() {
        return Err(LispError::read_error("no expression to read"));
    }
    let value = stream.read_next()?;
    if !stream.is_empty() {
        return Err(LispError::read_error(
            "unexpected trailing input after expression",
        ));
    }
    Ok(value)
}

fn read_from_tokens(tokens: &mut VecDeque<Token>) -> Result<Value, LispError> {
    let token = tokens
        .pop_front()
        .ok_or_else(|| LispError::read_error("unexpected end of input"))?;

    match token {
        Token::LParen => {
            let mut items = Vec::new();
            loop {
                match tokens.front() {
                    None => return Err(LispError::read_error("unexpected end of input in list")),
                    Some(Token::RParen) => {
                        tokens.pop_front();
                        break;
                    }
                    _ => items.push(read_from_tokens(tokens)?),
                }
            }
            Ok(Value::List(items))
        }
        Token::RParen => Err(LispError::read_error("unexpected ')'")),
        Token::Quote => {
            let inner = read_from_tokens(tokens)?;
            Ok(Value::List(vec![Value::symbol("quote"), inner]))
        }
        Token::Atom(text) => atom_from_token(&text),
    }
}

/// True for tokens built only from digits, a sign, a decimal point, and an
/// exponent marker, with at least one digit. Rust's `f64::from_str` also
/// accepts `inf`/`infinity`/`nan` (case-insensitively), which are not a
/// base-10 integer or decimal per spec — this grammar check keeps them
/// (and any other alphabetic token) out of `f64::parse`, so they fall
/// through to the symbol case below.
fn looks_numeric(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
        && token.chars().any(|c| c.is_ascii_digit())
}

fn atom_from_token(token: &str) -> Result<Value, LispError> {
    if looks_numeric(token) {
        if let Ok(n) = token.parse::<f64>() {
            return Ok(Value::Number(n));
        }
    }

    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        return Ok(Value::String(token[1..token.len() - 1].to_string()));
    }

    Ok(Value::Symbol(Symbol::new(token.to_string())))
}
