// ABOUTME: Whole-source loading with the REPL echo protocol: read, eval, echo, repeat

use crate::env::Environment;
use crate::error::LispError;
use crate::eval::eval;
use crate::reader::TokenStream;
use crate::value::Value;
use std::fmt;
use std::rc::Rc;

/// One top-level expression's outcome: the expression as read (its
/// printable form is the REPL's echo of the input) paired with either its
/// result or the error evaluating it raised.
pub struct LoadEntry {
    pub input: Value,
    pub outcome: Result<Value, LispError>,
}

/// The result of loading a whole source text. Tokenization happens once,
/// up front; each top-level expression is then read and evaluated in turn.
///
/// A read error (malformed syntax) aborts the remainder of the source
/// immediately — nothing after the bad token is attempted. An evaluation
/// error on one top-level expression is recorded in that expression's
/// entry and loading continues with the next one.
pub struct LoadReport {
    pub entries: Vec<LoadEntry>,
    pub read_error: Option<LispError>,
}

impl LoadReport {
    pub fn is_ok(&self) -> bool {
        self.read_error.is_none() && self.entries.iter().all(|e| e.outcome.is_ok())
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry.input)?;
            match &entry.outcome {
                Ok(value) => writeln!(f, "=> {}", value)?,
                Err(e) => writeln!(f, "=> error: {}", e)?,
            }
        }
        if let Some(e) = &self.read_error {
            writeln!(f, "read error: {}", e)?;
        }
        Ok(())
    }
}

/// Tokenizes `source` once, then repeatedly reads and evaluates top-level
/// expressions against `env` until the token buffer is exhausted.
pub fn load(source: &str, env: &Rc<Environment>) -> LoadReport {
    let mut stream = match TokenStream::new(source) {
        Ok(stream) => stream,
        Err(e) => {
            return LoadReport {
                entries: Vec::new(),
                read_error: Some(e),
            }
        }
    };

    let mut entries = Vec::new();
    let mut read_error = None;

    while !stream.is_empty() {
        match stream.read_next() {
            Ok(expr) => {
                let outcome = eval(&expr, env);
                entries.push(LoadEntry {
                    input: expr,
                    outcome,
                });
            }
            Err(e) => {
                read_error = Some(e);
                break;
            }
        }
    }

    LoadReport {
        entries,
        read_error,
    }
}
