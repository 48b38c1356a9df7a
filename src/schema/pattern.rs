//! Compiled `regex` rules
//!
//! Patterns are written either as bare regex syntax (`^[a-z]+$`) or in the
//! delimited form common to request-validation schemas (`/^[a-z]+$/i`). The
//! delimited form is recognized when the text opens with one of `/ # ~ ! @ %`,
//! closes with the same character, and only ASCII letters follow the closing
//! delimiter. Anything else, including a missing closing delimiter, is a bare
//! pattern. The trailing letters are flags:
//!
//! | flag | effect |
//! |------|--------|
//! | `i`  | case-insensitive |
//! | `m`  | `^`/`$` match at line boundaries |
//! | `s`  | `.` matches `\n` |
//! | `x`  | ignore whitespace, allow `#` comments |
//! | `U`  | swap greedy and lazy quantifiers |
//! | `u`, `D` | accepted, no effect |
//!
//! Matching is unanchored: a pattern without `^`/`$` passes when it matches
//! anywhere in the value.
//!
//! Without `m`, `$` matches only at the very end of the value. PCRE also lets
//! it match before a final `\n` unless `D` is given, so `"user123\n"` fails
//! `/^[a-z0-9]+$/` here where PCRE would accept it. `D` is accepted because
//! this engine already behaves as if it were set.

use std::fmt;

use regex::Regex;

use crate::error::SchemaError;
use crate::predicate::Predicate;

const DELIMITERS: [char; 6] = ['/', '#', '~', '!', '@', '%'];

/// A regular expression compiled when the schema is built.
///
/// Equality compares the pattern as written.
///
/// # Example
///
/// ```rust
/// use fieldrules::Pattern;
///
/// let p = Pattern::new("/^[a-z]+$/i").unwrap();
/// assert!(p.is_match("Hello"));
/// assert!(!p.is_match("hello world"));
/// assert_eq!(p.as_str(), "/^[a-z]+$/i");
/// ```
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `pattern`, bare or delimited.
    pub fn new(pattern: &str) -> Result<Self, SchemaError> {
        let expression = match split_delimited(pattern) {
            Some((body, flags)) => with_inline_flags(pattern, body, flags)?,
            None => pattern.to_string(),
        };

        let regex = Regex::new(&expression).map_err(|source| SchemaError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Pattern {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The compiled expression, delimiters and flags already applied.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether `value` matches.
    #[inline]
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl Predicate<str> for Pattern {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.is_match(value)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Split `/body/flags` into `(body, flags)`, or `None` for a bare pattern.
fn split_delimited(pattern: &str) -> Option<(&str, &str)> {
    let delimiter = pattern.chars().next().filter(|c| DELIMITERS.contains(c))?;
    let rest = &pattern[delimiter.len_utf8()..];
    let close = rest.rfind(delimiter)?;
    let flags = &rest[close + delimiter.len_utf8()..];

    if flags.chars().all(|c| c.is_ascii_alphabetic()) {
        Some((&rest[..close], flags))
    } else {
        None
    }
}

fn with_inline_flags(pattern: &str, body: &str, flags: &str) -> Result<String, SchemaError> {
    let mut inline = String::new();
    for flag in flags.chars() {
        match flag {
            'i' | 'm' | 's' | 'x' | 'U' => {
                if !inline.contains(flag) {
                    inline.push(flag);
                }
            }
            'u' | 'D' => {}
            other => {
                return Err(SchemaError::UnsupportedFlag {
                    pattern: pattern.to_string(),
                    flag: other,
                })
            }
        }
    }

    if inline.is_empty() {
        Ok(body.to_string())
    } else {
        Ok(format!("(?{}){}", inline, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_pattern() {
        let p = Pattern::new(r"^[a-zA-Z0-9_]+$").unwrap();
        assert!(p.is_match("user_123"));
        assert!(!p.is_match("user-123"));
    }

    #[test]
    fn test_delimited_pattern() {
        let p = Pattern::new("/^[a-zA-Z0-9_]+$/").unwrap();
        assert_eq!(p.regex().as_str(), "^[a-zA-Z0-9_]+$");
        assert!(p.is_match("user123"));
        assert!(!p.is_match("us er"));
    }

    #[test]
    fn test_case_insensitive_flag() {
        let p = Pattern::new("/^abc$/i").unwrap();
        assert!(p.is_match("ABC"));
        assert_eq!(p.regex().as_str(), "(?i)^abc$");
    }

    #[test]
    fn test_tilde_delimiter_and_noop_flags() {
        let p = Pattern::new("~^a/b$~uD").unwrap();
        assert!(p.is_match("a/b"));
        assert_eq!(p.regex().as_str(), "^a/b$");
    }

    #[test]
    fn test_every_delimiter() {
        for (plain, flagged) in [
            ("#^[a-z]+$#", "#^[a-z]+$#i"),
            ("!^[a-z]+$!", "!^[a-z]+$!i"),
            ("@^[a-z]+$@", "@^[a-z]+$@i"),
            ("%^[a-z]+$%", "%^[a-z]+$%i"),
        ] {
            let p = Pattern::new(plain).unwrap();
            assert_eq!(p.regex().as_str(), "^[a-z]+$", "{}", plain);
            assert!(p.is_match("abc"), "{}", plain);
            assert!(!p.is_match("ABC"), "{}", plain);

            let p = Pattern::new(flagged).unwrap();
            assert_eq!(p.regex().as_str(), "(?i)^[a-z]+$", "{}", flagged);
            assert!(p.is_match("ABC"), "{}", flagged);
        }
    }

    #[test]
    fn test_hash_delimiter_keeps_slashes_literal() {
        let p = Pattern::new("#^/api/v[0-9]+$#").unwrap();
        assert!(p.is_match("/api/v2"));
        assert!(!p.is_match("/api/latest"));
    }

    #[test]
    fn test_dollar_does_not_skip_trailing_newline() {
        let p = Pattern::new("/^[a-z0-9]+$/").unwrap();
        assert!(p.is_match("user123"));
        assert!(!p.is_match("user123\n"));
    }

    #[test]
    fn test_unsupported_flag() {
        let err = Pattern::new("/abc/ie").unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedFlag { flag: 'e', .. }));
    }

    #[test]
    fn test_slash_without_flags_suffix_is_bare() {
        // Trailing text after the last slash is not all letters
        let p = Pattern::new("/api/v1").unwrap();
        assert!(p.is_match("/api/v1/users"));

        // No closing delimiter at all
        let p = Pattern::new("/health").unwrap();
        assert!(p.is_match("/health"));
    }

    #[test]
    fn test_unanchored_match() {
        let p = Pattern::new("[0-9]").unwrap();
        assert!(p.is_match("abc1"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Pattern::new("/([a-z]/").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidPattern { ref pattern, .. } if pattern == "/([a-z]/"));
    }

    #[test]
    fn test_equality_by_source() {
        assert_eq!(Pattern::new("a+").unwrap(), Pattern::new("a+").unwrap());
        assert_ne!(Pattern::new("/a+/").unwrap(), Pattern::new("a+").unwrap());
        assert_eq!(format!("{:?}", Pattern::new("a+").unwrap()), "Pattern(\"a+\")");
    }
}
