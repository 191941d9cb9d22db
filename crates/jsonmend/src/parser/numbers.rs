//! Numeric lexeme reader.

use super::diagnostics::{DiagnosticLog, FatalError};
use super::scanner::Scanner;

/// Greedily consumes a numeric lexeme at the cursor and converts it to a
/// double: an optional `-`, then a single `0` or a digit run, an optional
/// fraction, and an optional exponent. Garbage after a complete lexeme is
/// left for the enclosing context; a failed conversion (e.g. a bare sign)
/// logs `Invalid number` and yields `0`.
pub(crate) fn read_number(
    scanner: &mut Scanner<'_>,
    log: &mut DiagnosticLog,
) -> Result<f64, FatalError> {
    let start = scanner.pos();

    if scanner.peek() == Some('-') {
        scanner.advance();
    }
    if scanner.peek() == Some('0') {
        scanner.advance();
    } else {
        while matches!(scanner.peek(), Some(c) if c.is_ascii_digit()) {
            scanner.advance();
        }
    }
    if scanner.peek() == Some('.') {
        scanner.advance();
        while matches!(scanner.peek(), Some(c) if c.is_ascii_digit()) {
            scanner.advance();
        }
    }
    if matches!(scanner.peek(), Some('e' | 'E')) {
        scanner.advance();
        if matches!(scanner.peek(), Some('+' | '-')) {
            scanner.advance();
        }
        while matches!(scanner.peek(), Some(c) if c.is_ascii_digit()) {
            scanner.advance();
        }
    }

    match scanner.slice_from(start).parse::<f64>() {
        Ok(n) => Ok(n),
        Err(_) => {
            log.push(start, "Invalid number")?;
            Ok(0.0)
        }
    }
}
