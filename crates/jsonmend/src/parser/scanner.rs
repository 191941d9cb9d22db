//! Scanner: the byte cursor over the borrowed input.
//!
//! The scanner owns position bookkeeping and nothing else: peeking,
//! advancing, literal prefix tests, BOM consumption, and the whitespace
//! skipper that doubles as the comment skipper. The cursor is a byte offset
//! into the input and only ever moves forward; every offset it produces lies
//! on a `char` boundary.

/// Characters that may appear in a bare-word object key after the first.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Characters that may begin a bare-word object key.
pub(crate) fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    allow_comments: bool,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str, allow_comments: bool) -> Self {
        Self {
            input,
            pos: 0,
            allow_comments,
        }
    }

    /// Current byte offset. Diagnostics record this value.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The current character, or `None` at end of input. Does not consume.
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Steps the cursor past the current character. No-op at end of input.
    pub(crate) fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Tests literal prefix equality at the cursor without consuming.
    pub(crate) fn match_word(&self, word: &str) -> bool {
        self.input[self.pos..].starts_with(word)
    }

    /// Consumes `word` if it is the literal prefix at the cursor.
    pub(crate) fn consume_word(&mut self, word: &str) -> bool {
        if self.match_word(word) {
            self.pos += word.len();
            true
        } else {
            false
        }
    }

    /// The unconsumed remainder of the input. Used by the non-mutating
    /// look-ahead heuristics.
    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// The input slice from `start` to the cursor.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Consumes a leading byte-order mark, if present. Called once by the
    /// entry point before any other work.
    pub(crate) fn skip_bom(&mut self) {
        if self.match_word("\u{FEFF}") {
            self.pos += '\u{FEFF}'.len_utf8();
        }
    }

    /// First non-whitespace character at byte offset `offset` past the
    /// cursor, without moving the cursor.
    pub(crate) fn peek_past_whitespace(&self, offset: usize) -> Option<char> {
        self.input
            .get(self.pos + offset..)
            .and_then(|rest| rest.chars().find(|c| !c.is_whitespace()))
    }

    /// Consumes any run of Unicode whitespace and, when comments are
    /// enabled, any `//` line comment or `/*…*/` block comment. The two are
    /// interleaved in one loop so any mixture in any order is handled.
    pub(crate) fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => self.advance(),
                Some('/') if self.allow_comments && self.match_word("//") => {
                    self.skip_line_comment();
                }
                Some('/') if self.allow_comments && self.match_word("/*") => {
                    self.skip_block_comment();
                }
                _ => break,
            }
        }
    }

    /// Consumes `//` up to (not including) the next newline.
    fn skip_line_comment(&mut self) {
        self.pos += 2;
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Consumes `/*` through the matching `*/`. An unterminated comment
    /// closes silently at end of input, with no diagnostic.
    fn skip_block_comment(&mut self) {
        self.pos += 2;
        loop {
            if self.eof() {
                break;
            }
            if self.consume_word("*/") {
                break;
            }
            self.advance();
        }
    }
}

/// Non-mutating look-ahead for the premature-array-end heuristic: does the
/// remaining input begin (after whitespace) with a string or identifier
/// followed by a colon, i.e. an object key that leaked into an array?
///
/// The tentative string scan treats `\X` as a two-character escape and stops
/// at the matching quote, a newline, or end of input.
pub(crate) fn key_ahead(rest: &str) -> bool {
    let mut chars = rest.chars().peekable();
    while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
        chars.next();
    }
    match chars.peek() {
        Some(&quote) if quote == '"' || quote == '\'' => {
            chars.next();
            loop {
                match chars.next() {
                    None => break,
                    Some('\\') => {
                        chars.next();
                    }
                    Some(c) if c == quote => break,
                    Some('\n' | '\r') => break,
                    Some(_) => {}
                }
            }
        }
        Some(&c) if is_word_start(c) => {
            while matches!(chars.peek(), Some(&c) if is_word_char(c)) {
                chars.next();
            }
        }
        _ => return false,
    }
    while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
        chars.next();
    }
    chars.peek() == Some(&':')
}
