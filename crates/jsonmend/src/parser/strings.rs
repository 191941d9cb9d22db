//! Quoted-string reader.
//!
//! Handles both `"` and `'` sentinels, the JSON escape table, `\u` escapes
//! including surrogate pairs, and the unescaped-quote heuristic that decides
//! whether a sentinel character terminates the string or is an embedded
//! literal.

use super::diagnostics::{DiagnosticLog, FatalError};
use super::scanner::Scanner;

/// Reads a quoted string. The cursor must be on the opening quote; that
/// quote becomes the closing sentinel for this invocation, so `"…"` and
/// `'…'` behave identically.
pub(crate) fn read_string(
    scanner: &mut Scanner<'_>,
    log: &mut DiagnosticLog,
) -> Result<String, FatalError> {
    let Some(quote) = scanner.peek() else {
        return Ok(String::new());
    };
    scanner.advance();

    let mut out = String::new();
    loop {
        match scanner.peek() {
            None => {
                log.push(scanner.pos(), "Unterminated string")?;
                break;
            }
            Some('\\') => {
                scanner.advance();
                match scanner.peek() {
                    None => {
                        log.push(scanner.pos(), "Truncated escape, closing string")?;
                        break;
                    }
                    Some(escape) => {
                        scanner.advance();
                        read_escape(scanner, log, &mut out, escape)?;
                    }
                }
            }
            Some(c) if c == quote => {
                // Unescaped-quote heuristic: a sentinel followed (after
                // whitespace) by end of input or structural punctuation
                // terminates the string; anything else means the quote was
                // an embedded literal.
                match scanner.peek_past_whitespace(1) {
                    None | Some(',' | ':' | '}' | ']' | '{' | '[') => {
                        scanner.advance();
                        break;
                    }
                    Some(_) => {
                        log.push(scanner.pos(), "Unescaped quote in string")?;
                        out.push(c);
                        scanner.advance();
                    }
                }
            }
            Some('\n' | '\r') => {
                // The newline stays unconsumed for the enclosing context.
                log.push(scanner.pos(), "Newline in string, closing string")?;
                break;
            }
            Some(c) => {
                out.push(c);
                scanner.advance();
            }
        }
    }
    Ok(out)
}

/// Applies one escape; the cursor is just past the escape letter.
fn read_escape(
    scanner: &mut Scanner<'_>,
    log: &mut DiagnosticLog,
    out: &mut String,
    escape: char,
) -> Result<(), FatalError> {
    match escape {
        '"' | '\'' | '\\' | '/' => out.push(escape),
        'b' => out.push('\u{0008}'),
        'f' => out.push('\u{000C}'),
        'n' => out.push('\n'),
        'r' => out.push('\r'),
        't' => out.push('\t'),
        'u' => read_unicode_escape(scanner, log, out)?,
        other => {
            log.push(scanner.pos(), format!("Invalid escape character '{other}'"))?;
            out.push(other);
        }
    }
    Ok(())
}

/// Reads the `XXXX` of a `\u` escape: up to four hex digits, never more.
/// Short or unrepresentable sequences are logged and emitted as the raw
/// `\uXXXX` text instead of a decoded character.
fn read_unicode_escape(
    scanner: &mut Scanner<'_>,
    log: &mut DiagnosticLog,
    out: &mut String,
) -> Result<(), FatalError> {
    let mut hex = String::new();
    while hex.len() < 4 {
        match scanner.peek() {
            Some(c) if c.is_ascii_hexdigit() => {
                hex.push(c);
                scanner.advance();
            }
            _ => break,
        }
    }
    if hex.len() < 4 {
        log.push(scanner.pos(), "Invalid \\uXXXX escape")?;
        out.push_str("\\u");
        out.push_str(&hex);
        return Ok(());
    }

    let code = u32::from_str_radix(&hex, 16).ok();
    if let Some(high @ 0xD800..=0xDBFF) = code {
        // High surrogate: decode only as the first half of a pair.
        if let Some(low) = low_surrogate_ahead(scanner.rest()) {
            for _ in 0..6 {
                scanner.advance(); // `\uXXXX` of the low half, all ASCII
            }
            let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            match char::from_u32(combined) {
                Some(c) => out.push(c),
                None => {
                    log.push(scanner.pos(), "Invalid \\uXXXX escape")?;
                    out.push_str("\\u");
                    out.push_str(&hex);
                }
            }
            return Ok(());
        }
    }
    match code.and_then(char::from_u32) {
        Some(c) => out.push(c),
        None => {
            // Lone surrogate half; not representable as a char.
            log.push(scanner.pos(), "Invalid \\uXXXX escape")?;
            out.push_str("\\u");
            out.push_str(&hex);
        }
    }
    Ok(())
}

/// Parses a `\uXXXX` low-surrogate prefix of `rest` without consuming it.
fn low_surrogate_ahead(rest: &str) -> Option<u32> {
    let digits = rest.strip_prefix("\\u")?.get(0..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let code = u32::from_str_radix(digits, 16).ok()?;
    (0xDC00..=0xDFFF).contains(&code).then_some(code)
}
