/// Configuration options for the fault-tolerant reader.
///
/// Every option has a fixed default; `ParserOptions::default()` is the
/// inspectable record of those defaults. With the `serde` feature enabled the
/// struct deserializes with `#[serde(default)]`, so configuration sources may
/// omit fields — and unknown fields are ignored, which keeps old readers
/// compatible with newer configuration files.
///
/// # Examples
///
/// ```rust
/// use jsonmend::{parse_smart, ParserOptions};
///
/// let outcome = parse_smart(
///     r#"{"x": 1}"#,
///     ParserOptions {
///         strict: true,
///         ..Default::default()
///     },
/// );
/// assert!(outcome.ok);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserOptions {
    /// Abort on the first recovery instead of continuing.
    ///
    /// In strict mode the first diagnostic becomes a fatal error: the outcome
    /// carries `ok = false`, no results, and that single formatted error.
    ///
    /// # Default
    ///
    /// `false`
    pub strict: bool,

    /// Hard cap on nested container depth.
    ///
    /// A container that would exceed the cap is skipped wholesale (its
    /// balanced span is consumed) and replaced with an empty container, with
    /// a diagnostic.
    ///
    /// # Default
    ///
    /// `100`
    pub max_depth: usize,

    /// Whether the whitespace skipper also consumes `//…` line comments and
    /// `/*…*/` block comments.
    ///
    /// An unterminated block comment closes silently at end of input.
    ///
    /// # Default
    ///
    /// `true`
    pub allow_comments: bool,

    /// Whether a separator immediately before a closing `}` or `]` is
    /// accepted without a diagnostic.
    ///
    /// # Default
    ///
    /// `true`
    pub allow_trailing_comma: bool,

    /// Whether `True`, `False`, and `None` are accepted as `true`, `false`,
    /// and `null`, each with a diagnostic.
    ///
    /// # Default
    ///
    /// `true`
    pub convert_python_tokens: bool,

    /// Whether `undefined` is accepted as `null`, with a diagnostic.
    ///
    /// # Default
    ///
    /// `true`
    pub convert_undefined: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: 100,
            allow_comments: true,
            allow_trailing_comma: true,
            convert_python_tokens: true,
            convert_undefined: true,
        }
    }
}
