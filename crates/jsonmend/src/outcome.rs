//! Result types returned by the two public entry points.

use crate::parser::Diagnostic;
use crate::value::Value;

/// The result of [`parse_smart`](crate::parse_smart).
///
/// `ok` is `true` iff no recovery was taken. `results` holds zero or one
/// repaired value: empty input and a refused top-level closer both yield an
/// empty `results`. `errors` holds each diagnostic formatted as
/// `[pos <N>] <message>`, in the order the recoveries occurred.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub ok: bool,
    pub results: Vec<Value>,
    pub error_count: usize,
    pub errors: Vec<String>,
    /// Reserved for multi-document input; always `false`.
    pub multiple: bool,
}

impl Outcome {
    pub(crate) fn empty() -> Self {
        Self {
            ok: true,
            results: Vec::new(),
            error_count: 0,
            errors: Vec::new(),
            multiple: false,
        }
    }

    /// The repaired value, if the parse produced one.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.results.first()
    }

    /// Consumes the outcome and returns the repaired value, if any.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        self.results.into_iter().next()
    }
}

/// The result of [`Parser::parse`](crate::Parser::parse).
///
/// Unlike [`Outcome`], this surface keeps the structured diagnostics; the
/// formatted form is available through each diagnostic's `Display`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport {
    pub ok: bool,
    /// The repaired value; `Null` for empty input.
    pub result: Value,
    pub errors: Vec<Diagnostic>,
}
