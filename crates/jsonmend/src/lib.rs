//! A fault-tolerant JSON reader.
//!
//! `jsonmend` parses strict JSON and a wide superset of the malformed JSON
//! found in the wild: truncated payloads, unquoted keys, single-quoted
//! strings, comments, trailing commas, Python literals (`True`, `False`,
//! `None`), `undefined`, `NaN`, `Infinity`, unescaped embedded quotes, and
//! stray punctuation. Instead of abandoning the parse at the first bad byte,
//! the reader applies a local recovery policy at the offending position and
//! records what it did in a diagnostic log.
//!
//! # Examples
//!
//! ```rust
//! use jsonmend::{parse_smart, ParserOptions, Value};
//!
//! let outcome = parse_smart("{name: 'Ada', age: 36,}", ParserOptions::default());
//! assert!(!outcome.ok);
//! assert_eq!(outcome.error_count, 2); // two unquoted keys
//!
//! let value = outcome.value().unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("Ada"));
//! assert_eq!(value.get("age").and_then(Value::as_f64), Some(36.0));
//! ```
//!
//! Valid JSON always parses clean:
//!
//! ```rust
//! use jsonmend::{parse_smart, ParserOptions};
//!
//! let outcome = parse_smart(r#"{"a": [1, 2, 3]}"#, ParserOptions::default());
//! assert!(outcome.ok);
//! assert!(outcome.errors.is_empty());
//! ```

mod options;
mod outcome;
mod parser;
mod value;

pub use options::ParserOptions;
pub use outcome::{Outcome, ParseReport};
pub use parser::{parse_smart, Diagnostic, Parser};
pub use value::{Array, Map, Value};
