//! Streaming tokenizer behind [`ParsedPath::parse`](crate::ParsedPath::parse).

use crate::{ParseError, PathElement};

/// Separates a token from its explicit singular form, e.g. `people|person`.
pub const SINGULAR_SEPARATOR: char = '|';

// -----------------------------------------------------------------------------
// PathTokens

/// A lazy tokenizer over a property path string.
///
/// Yields each element together with the byte offset it starts at. After the
/// first error the iterator is fused and returns `None`.
///
/// # Examples
///
/// ```
/// use vc_path::PathTokens;
///
/// let offsets: Vec<usize> = PathTokens::new("a[0].b")
///     .map(|res| res.unwrap().0)
///     .collect();
/// assert_eq!(offsets, [0, 1, 4]);
///
/// let err = PathTokens::new("a..b").find_map(Result::err).unwrap();
/// assert_eq!(err.offset(), 1);
/// assert_eq!(err.token(), Some('.'));
/// ```
#[derive(Debug, Clone)]
pub struct PathTokens<'a> {
    path: &'a str,
    offset: usize,
    first: bool,
    done: bool,
}

impl<'a> PathTokens<'a> {
    /// Creates a tokenizer over `path`.
    #[inline]
    pub const fn new(path: &'a str) -> Self {
        Self {
            path,
            offset: 0,
            first: true,
            done: false,
        }
    }

    /// Returns the number of bytes consumed so far.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for PathTokens<'_> {
    type Item = Result<(usize, PathElement), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.path.is_empty() {
            self.done = true;
            return Some(Err(ParseError::Empty));
        }

        let rest = &self.path[self.offset..];
        let Some(token) = rest.chars().next() else {
            self.done = true;
            return None;
        };

        let matched = if self.first {
            match_first(rest)
        } else {
            match_continuation(rest)
        };

        match matched {
            Some((len, element)) => {
                let start = self.offset;
                self.offset += len;
                self.first = false;
                Some(Ok((start, element)))
            }
            None => {
                self.done = true;
                Some(Err(ParseError::UnexpectedToken {
                    path: self.path.into(),
                    token,
                    offset: self.offset,
                }))
            }
        }
    }
}

impl core::iter::FusedIterator for PathTokens<'_> {}

// -----------------------------------------------------------------------------
// Matchers
//
// Each matcher returns the number of consumed bytes and the element. All
// delimiters are ASCII, so every slice boundary is a char boundary.

#[inline]
fn is_word(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[inline]
fn word_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| is_word(b)).count()
}

/// `first := [^.[]+ | '[' [^\]]+ ']'`
fn match_first(rest: &str) -> Option<(usize, PathElement)> {
    if rest.starts_with('[') {
        return match_index(rest);
    }

    let len = rest.find(['.', '[']).unwrap_or(rest.len());
    if len == 0 {
        return None;
    }
    Some((len, PathElement::from_token(&rest[..len], false)))
}

/// `continuation := '.' word ('|' word?)? | '[' [^\]]+ ']'`
fn match_continuation(rest: &str) -> Option<(usize, PathElement)> {
    let bytes = rest.as_bytes();
    match bytes.first() {
        Some(b'[') => match_index(rest),
        Some(b'.') => {
            let name_len = word_len(&bytes[1..]);
            if name_len == 0 {
                return None;
            }
            let mut end = 1 + name_len;
            if bytes.get(end) == Some(&(SINGULAR_SEPARATOR as u8)) {
                end += 1 + word_len(&bytes[end + 1..]);
            }
            Some((end, PathElement::from_token(&rest[1..end], false)))
        }
        _ => None,
    }
}

/// `'[' [^\]]+ ']'`
fn match_index(rest: &str) -> Option<(usize, PathElement)> {
    let close = rest.find(']')?;
    if close <= 1 {
        return None;
    }
    Some((close + 1, PathElement::from_token(&rest[1..close], true)))
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::PathTokens;
    use crate::{ParseError, PathElement};
    use alloc::vec::Vec;

    fn tokens(path: &str) -> Result<Vec<(usize, PathElement)>, ParseError> {
        PathTokens::new(path).collect()
    }

    #[test]
    fn first_element_accepts_any_non_delimiter() {
        let res = tokens("foo-bar baz").unwrap();
        assert_eq!(res, [(0, PathElement::property("foo-bar baz"))]);

        let res = tokens("a]b.c").unwrap();
        assert_eq!(res[0].1, PathElement::property("a]b"));
        assert_eq!(res[1], (3, PathElement::property("c")));
    }

    #[test]
    fn continuation_requires_word_characters() {
        let err = tokens("foo.bar-baz").unwrap_err();
        assert_eq!(err.offset(), 7);
        assert_eq!(err.token(), Some('-'));
    }

    #[test]
    fn index_tokens_keep_any_content() {
        let res = tokens("[a.b c][0]").unwrap();
        assert_eq!(res[0], (0, PathElement::index("a.b c")));
        assert_eq!(res[1], (7, PathElement::index("0")));
    }

    #[test]
    fn empty_brackets_are_rejected() {
        let err = tokens("foo[]").unwrap_err();
        assert_eq!(err.offset(), 3);
        assert_eq!(err.token(), Some('['));
    }

    #[test]
    fn unterminated_bracket_is_rejected() {
        let err = tokens("foo[bar").unwrap_err();
        assert_eq!(err.offset(), 3);
    }

    #[test]
    fn singular_is_split_off() {
        let res = tokens("[people|person].tags|tag").unwrap();
        assert_eq!(res[0].1, PathElement::index("people").with_singular("person"));
        assert_eq!(res[1].1, PathElement::property("tags").with_singular("tag"));

        let res = tokens("a.tags|").unwrap();
        assert_eq!(res[1].1, PathElement::property("tags"));
    }

    #[test]
    fn multibyte_token_is_reported_whole() {
        let err = tokens("a.é").unwrap_err();
        assert_eq!(err.offset(), 1);
        assert_eq!(err.token(), Some('.'));

        let err = tokens("a[0]é").unwrap_err();
        assert_eq!(err.offset(), 4);
        assert_eq!(err.token(), Some('é'));
    }

    #[test]
    fn iterator_is_fused_after_error() {
        let mut it = PathTokens::new("a..b");
        assert!(it.next().unwrap().is_ok());
        assert!(it.next().unwrap().is_err());
        assert!(it.next().is_none());
    }
}
