//! The fault-tolerant reader implementation.
//!
//! A recursive-descent parser over a borrowed input string. Malformed input
//! does not abort the parse: each fault is repaired by a local policy at the
//! offending byte and recorded in the diagnostic log. The value dispatcher
//! and the two container readers are mutually recursive; all of them consume
//! the scanner and append to the log.

mod diagnostics;
mod numbers;
mod scanner;
mod strings;


pub use diagnostics::Diagnostic;
use diagnostics::{DiagnosticLog, FatalError};
use scanner::{is_word_char, is_word_start, key_ahead, Scanner};

use crate::options::ParserOptions;
use crate::outcome::{Outcome, ParseReport};
use crate::value::{Map, Value};

/// How many consecutive bytes the dispatcher may skip while failing to
/// classify a value before it gives up and substitutes `Null`. Bounds the
/// recursion on adversarial input composed entirely of garbage.
const DISPATCH_RETRY_LIMIT: u32 = 10;

/// What the dispatcher produced.
///
/// `Absent` means the dispatcher refused to consume a container-closing byte
/// that belongs to the enclosing container. It is private to this module and
/// never appears in a returned tree: object readers store `Null` in its
/// place, array readers drop it.
enum Dispatch {
    Value(Value),
    Absent,
}

/// Parses `input`, repairing malformations as they are found.
///
/// This is the primary entry point. The outcome carries the repaired value
/// (if any), and one formatted diagnostic per recovery taken; `ok` is `true`
/// iff no recovery was needed. Empty or whitespace-only input yields an
/// empty `ok` outcome with no results.
///
/// # Examples
///
/// ```rust
/// use jsonmend::{parse_smart, ParserOptions};
///
/// let outcome = parse_smart("[1, 2, 3", ParserOptions::default());
/// assert!(!outcome.ok);
/// assert_eq!(outcome.errors, ["[pos 8] Unclosed array, auto-closing"]);
/// ```
#[must_use]
pub fn parse_smart(input: &str, options: ParserOptions) -> Outcome {
    if input.trim().is_empty() {
        return Outcome::empty();
    }
    let mut parser = Parser::new(input, options);
    match parser.run() {
        Ok(Dispatch::Value(value)) => Outcome {
            ok: parser.log.is_empty(),
            error_count: parser.log.len(),
            errors: parser.log.formatted(),
            results: vec![value],
            multiple: false,
        },
        Ok(Dispatch::Absent) => Outcome {
            ok: parser.log.is_empty(),
            error_count: parser.log.len(),
            errors: parser.log.formatted(),
            results: Vec::new(),
            multiple: false,
        },
        Err(fatal) => Outcome {
            ok: false,
            results: Vec::new(),
            error_count: 1,
            errors: vec![fatal.to_string()],
            multiple: false,
        },
    }
}

/// The fault-tolerant reader over one borrowed input.
///
/// A parser is single-use: [`parse`](Parser::parse) consumes it, reflecting
/// that its state is spent in one pass. For the common case prefer
/// [`parse_smart`].
///
/// # Examples
///
/// ```rust
/// use jsonmend::{Parser, ParserOptions, Value};
///
/// let report = Parser::new("{\"a\": truth}", ParserOptions::default()).parse();
/// assert!(!report.ok);
/// assert_eq!(report.result.get("a"), Some(&Value::Boolean(true)));
/// ```
#[derive(Debug)]
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    log: DiagnosticLog,
    depth: usize,
    retries: u32,
    options: ParserOptions,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(input: &'a str, options: ParserOptions) -> Self {
        Self {
            scanner: Scanner::new(input, options.allow_comments),
            log: DiagnosticLog::new(options.strict),
            depth: 0,
            retries: 0,
            options,
        }
    }

    /// Runs the parse and returns the repaired value with its structured
    /// diagnostics. Empty input yields a `Null` result.
    #[must_use]
    pub fn parse(mut self) -> ParseReport {
        if self.scanner.rest().trim().is_empty() {
            return ParseReport {
                ok: true,
                result: Value::Null,
                errors: Vec::new(),
            };
        }
        match self.run() {
            Ok(Dispatch::Value(value)) => ParseReport {
                ok: self.log.is_empty(),
                result: value,
                errors: self.log.into_entries(),
            },
            Ok(Dispatch::Absent) => ParseReport {
                ok: self.log.is_empty(),
                result: Value::Null,
                errors: self.log.into_entries(),
            },
            Err(fatal) => ParseReport {
                ok: false,
                result: Value::Null,
                errors: vec![fatal.0],
            },
        }
    }

    fn run(&mut self) -> Result<Dispatch, FatalError> {
        self.scanner.skip_bom();
        self.scanner.skip_whitespace();
        if self.scanner.eof() {
            return Ok(Dispatch::Value(Value::Null));
        }
        self.read_value()
    }

    // --------------------------------------------------------------------
    // Value dispatcher
    // --------------------------------------------------------------------

    /// Classifies and reads the next value. Returns `Absent` without
    /// consuming when the cursor sits on a container closer that belongs to
    /// the caller.
    fn read_value(&mut self) -> Result<Dispatch, FatalError> {
        self.scanner.skip_whitespace();
        let Some(c) = self.scanner.peek() else {
            return Ok(self.accept(Value::Null));
        };
        match c {
            '{' => {
                let object = self.read_object()?;
                Ok(self.accept(object))
            }
            '[' => {
                let array = self.read_array()?;
                Ok(self.accept(array))
            }
            '"' | '\'' => {
                let text = strings::read_string(&mut self.scanner, &mut self.log)?;
                Ok(self.accept(Value::String(text)))
            }
            '-' | '0'..='9' => {
                let number = numbers::read_number(&mut self.scanner, &mut self.log)?;
                Ok(self.accept(Value::Number(number)))
            }
            '}' | ']' => Ok(Dispatch::Absent),
            _ => self.read_keyword_or_recover(c),
        }
    }

    /// Keyword literals, alien-token substitutions, and the recovery paths
    /// for stray separators and unknown bytes.
    fn read_keyword_or_recover(&mut self, c: char) -> Result<Dispatch, FatalError> {
        let pos = self.scanner.pos();

        if self.scanner.consume_word("true") {
            return Ok(self.accept(Value::Boolean(true)));
        }
        if self.scanner.consume_word("false") {
            return Ok(self.accept(Value::Boolean(false)));
        }
        if self.scanner.consume_word("null") {
            return Ok(self.accept(Value::Null));
        }
        if self.options.convert_python_tokens {
            if self.scanner.consume_word("True") {
                self.log.push(pos, "Python literal 'True', reading as true")?;
                return Ok(self.accept(Value::Boolean(true)));
            }
            if self.scanner.consume_word("False") {
                self.log.push(pos, "Python literal 'False', reading as false")?;
                return Ok(self.accept(Value::Boolean(false)));
            }
            if self.scanner.consume_word("None") {
                self.log.push(pos, "Python literal 'None', reading as null")?;
                return Ok(self.accept(Value::Null));
            }
        }
        if self.options.convert_undefined && self.scanner.consume_word("undefined") {
            self.log.push(pos, "'undefined', reading as null")?;
            return Ok(self.accept(Value::Null));
        }
        if self.scanner.consume_word("NaN") {
            self.log.push(pos, "'NaN' is not valid JSON, reading as null")?;
            return Ok(self.accept(Value::Null));
        }
        if self.scanner.consume_word("Infinity") {
            self.log
                .push(pos, "'Infinity' is not valid JSON, reading as null")?;
            return Ok(self.accept(Value::Null));
        }

        // Local recovery: skip one byte and retry, bounded by the guard.
        if c == ',' || c == ':' {
            self.log.push(pos, format!("Stray '{c}' before value"))?;
        } else {
            self.log.push(pos, format!("Unexpected character '{c}'"))?;
        }
        self.scanner.advance();
        self.retries += 1;
        if self.retries > DISPATCH_RETRY_LIMIT {
            self.retries = 0;
            return Ok(Dispatch::Value(Value::Null));
        }
        self.read_value()
    }

    /// Wraps a successfully read value, resetting the dispatch retry guard.
    fn accept(&mut self, value: Value) -> Dispatch {
        self.retries = 0;
        Dispatch::Value(value)
    }

    // --------------------------------------------------------------------
    // Container readers
    // --------------------------------------------------------------------

    /// Reads an object. The cursor must be on `{`.
    fn read_object(&mut self) -> Result<Value, FatalError> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            self.log
                .push(self.scanner.pos(), "Max depth exceeded, skipping subtree")?;
            self.skip_balanced('{', '}');
            self.depth -= 1;
            return Ok(Value::Object(Map::new()));
        }
        self.scanner.advance();

        let mut map = Map::new();
        loop {
            self.scanner.skip_whitespace();
            let Some(c) = self.scanner.peek() else { break };
            match c {
                ',' => {
                    self.read_separator('}')?;
                    continue;
                }
                '}' => break,
                ']' => {
                    self.log
                        .push(self.scanner.pos(), "Unexpected ']' inside object")?;
                    self.scanner.advance();
                    continue;
                }
                _ => {}
            }

            let key_pos = self.scanner.pos();
            let mut key = match c {
                '"' | '\'' => strings::read_string(&mut self.scanner, &mut self.log)?,
                c if is_word_start(c) => {
                    let word = self.read_bare_word();
                    self.log.push(key_pos, format!("Unquoted key '{word}'"))?;
                    word
                }
                _ => {
                    self.log.push(key_pos, "Expected key")?;
                    self.scanner.advance();
                    continue;
                }
            };
            self.scanner.skip_whitespace();

            // Key sanitation: separators that leaked into the key text.
            if key.starts_with(',') {
                self.log
                    .push(key_pos, format!("Key '{key}' begins with ',', trimming"))?;
                key = key.trim_start_matches(',').trim_start().to_string();
            }

            if self.scanner.peek() == Some(':') {
                self.scanner.advance();
            } else {
                self.log
                    .push(self.scanner.pos(), format!("Expected ':' after key '{key}'"))?;
                match self.scanner.peek() {
                    // The key has no value at all; bind null and move on.
                    None | Some(',' | '}') => {
                        map.insert(key, Value::Null);
                        continue;
                    }
                    // A value with a missing colon; read it anyway.
                    Some(_) => {}
                }
            }

            self.scanner.skip_whitespace();
            if self.scanner.eof() {
                self.log
                    .push(self.scanner.pos(), format!("Truncated value for key '{key}'"))?;
                map.insert(key, Value::Null);
                break;
            }
            let value = match self.read_value()? {
                Dispatch::Value(v) => v,
                Dispatch::Absent => Value::Null,
            };
            map.insert(key, value);

            self.scanner.skip_whitespace();
            match self.scanner.peek() {
                Some(',') => self.read_separator('}')?,
                Some('}') | None => {}
                Some(c) => {
                    // No advance: the next loop pass re-reads this byte as a
                    // key or recovers on it.
                    self.log.push(
                        self.scanner.pos(),
                        format!("Expected ',' or '}}' after value, found '{c}'"),
                    )?;
                }
            }
        }

        if self.scanner.peek() == Some('}') {
            self.scanner.advance();
        } else {
            self.log
                .push(self.scanner.pos(), "Unclosed object, auto-closing")?;
        }
        self.depth -= 1;
        Ok(Value::Object(map))
    }

    /// Reads an array. The cursor must be on `[`.
    fn read_array(&mut self) -> Result<Value, FatalError> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            self.log
                .push(self.scanner.pos(), "Max depth exceeded, skipping subtree")?;
            self.skip_balanced('[', ']');
            self.depth -= 1;
            return Ok(Value::Array(Vec::new()));
        }
        self.scanner.advance();

        let mut items = Vec::new();
        loop {
            self.scanner.skip_whitespace();
            let Some(c) = self.scanner.peek() else { break };
            match c {
                ',' => {
                    self.read_separator(']')?;
                    continue;
                }
                ']' => break,
                '}' => {
                    self.log
                        .push(self.scanner.pos(), "Unexpected '}' inside array")?;
                    self.scanner.advance();
                    continue;
                }
                _ => {}
            }

            // An object key leaking into an array means the array was never
            // closed; close it here and let the enclosing object recover the
            // tail. The would-be key stays unconsumed.
            if key_ahead(self.scanner.rest()) {
                self.log.push(
                    self.scanner.pos(),
                    "Detected object key inside array, closing array",
                )?;
                break;
            }

            match self.read_value()? {
                Dispatch::Value(v) => items.push(v),
                Dispatch::Absent => {}
            }

            self.scanner.skip_whitespace();
            match self.scanner.peek() {
                Some(',') => self.read_separator(']')?,
                Some(']') | None => {}
                Some(c) => {
                    self.log.push(
                        self.scanner.pos(),
                        format!("Expected ',' or ']' after value, found '{c}'"),
                    )?;
                }
            }
        }

        if self.scanner.peek() == Some(']') {
            self.scanner.advance();
        } else {
            self.log
                .push(self.scanner.pos(), "Unclosed array, auto-closing")?;
        }
        self.depth -= 1;
        Ok(Value::Array(items))
    }

    // --------------------------------------------------------------------
    // Shared helpers
    // --------------------------------------------------------------------

    /// Consumes a `,` separator. When trailing commas are not allowed, a
    /// separator immediately preceding the container's closer is logged.
    fn read_separator(&mut self, close: char) -> Result<(), FatalError> {
        let pos = self.scanner.pos();
        self.scanner.advance();
        if !self.options.allow_trailing_comma
            && self.scanner.peek_past_whitespace(0) == Some(close)
        {
            self.log.push(pos, format!("Trailing ',' before '{close}'"))?;
        }
        Ok(())
    }

    /// Reads a bare-word identifier used as an unquoted object key.
    fn read_bare_word(&mut self) -> String {
        let start = self.scanner.pos();
        while matches!(self.scanner.peek(), Some(c) if is_word_char(c)) {
            self.scanner.advance();
        }
        self.scanner.slice_from(start).to_string()
    }

    /// Skips a balanced `open`…`close` span, cursor on `open`. Used to drop
    /// a whole subtree once the depth cap is hit. Stops at end of input.
    fn skip_balanced(&mut self, open: char, close: char) {
        let mut level = 0usize;
        while let Some(c) = self.scanner.peek() {
            self.scanner.advance();
            if c == open {
                level += 1;
            } else if c == close {
                level -= 1;
                if level == 0 {
                    break;
                }
            }
        }
    }
}
