use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use fastvec::FastVec;

use crate::{ParseError, PathElement, PathTokens};

// -----------------------------------------------------------------------------
// ParsedPath

/// An immutable, parsed property path.
///
/// Holds the raw string, its elements and the byte offset each element
/// starts at. Parsing happens once; the path can then be reused for any
/// number of reads and writes.
///
/// Deriving the [`parent`] yields a new independent path, the original is
/// never modified.
///
/// # Examples
///
/// ```
/// use vc_path::ParsedPath;
///
/// let path: ParsedPath = "child[names].first".parse().unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.positions(), &[0, 5, 12]);
/// assert!(path.is_property(0));
/// assert!(path.is_index(1));
///
/// let segments: String = (0..path.len()).map(|i| path.segment(i).unwrap()).collect();
/// assert_eq!(segments, path.as_str());
/// ```
///
/// [`parent`]: ParsedPath::parent
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedPath {
    raw: Box<str>,
    elements: Box<[PathElement]>,
    positions: Box<[usize]>,
}

impl ParsedPath {
    /// Parses a property path.
    ///
    /// Returns [`ParseError`] if `path` is empty or contains a token that
    /// matches neither the first-element nor the continuation grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_path::{ParsedPath, ParseError};
    ///
    /// assert!(ParsedPath::parse("a.b[c]").is_ok());
    /// assert_eq!(ParsedPath::parse(""), Err(ParseError::Empty));
    ///
    /// let err = ParsedPath::parse("a..b").unwrap_err();
    /// assert_eq!(err.offset(), 1);
    /// ```
    pub fn parse(path: &str) -> Result<Self, ParseError> {
        let mut elements: FastVec<PathElement, 8> = FastVec::new();
        let mut positions: FastVec<usize, 8> = FastVec::new();
        let element_data = elements.data();
        let position_data = positions.data();

        for res in PathTokens::new(path) {
            let (offset, element) = res?;
            position_data.push(offset);
            element_data.push(element);
        }

        Ok(Self {
            raw: path.into(),
            elements: elements.into_boxed_slice(),
            positions: positions.into_boxed_slice(),
        })
    }

    /// Returns the raw path string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the number of elements, which is at least `1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns all elements in order.
    #[inline]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Returns the byte offset of every element in the raw string.
    #[inline]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Returns the element at `index`.
    #[inline]
    pub fn element(&self, index: usize) -> Option<&PathElement> {
        self.elements.get(index)
    }

    /// Returns the last element.
    #[inline]
    pub fn last(&self) -> &PathElement {
        // `len() >= 1` is guaranteed by `parse`.
        &self.elements[self.elements.len() - 1]
    }

    /// Returns `true` if the element at `index` exists and is an index.
    #[inline]
    pub fn is_index(&self, index: usize) -> bool {
        self.element(index).is_some_and(PathElement::is_index)
    }

    /// Returns `true` if the element at `index` exists and is a property.
    #[inline]
    pub fn is_property(&self, index: usize) -> bool {
        self.element(index).is_some_and(PathElement::is_property)
    }

    /// Returns the explicit singular of the element at `index`.
    #[inline]
    pub fn singular(&self, index: usize) -> Option<&str> {
        self.element(index).and_then(PathElement::singular)
    }

    /// Returns the byte offset at which the element at `index` starts.
    #[inline]
    pub fn position(&self, index: usize) -> Option<usize> {
        self.positions.get(index).copied()
    }

    /// Returns the slice of the raw string that element `index` was parsed
    /// from, including its `.` or brackets.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_path::ParsedPath;
    ///
    /// let path = ParsedPath::parse("a[0].b|c").unwrap();
    /// assert_eq!(path.segment(0), Some("a"));
    /// assert_eq!(path.segment(1), Some("[0]"));
    /// assert_eq!(path.segment(2), Some(".b|c"));
    /// assert_eq!(path.segment(3), None);
    /// ```
    pub fn segment(&self, index: usize) -> Option<&str> {
        let start = self.position(index)?;
        let end = self.position(index + 1).unwrap_or(self.raw.len());
        Some(&self.raw[start..end])
    }

    /// Returns the raw path up to, but excluding, element `index`.
    ///
    /// Used to describe where a traversal failed.
    #[inline]
    pub fn prefix(&self, index: usize) -> &str {
        match self.position(index) {
            Some(end) => &self.raw[..end],
            None => &self.raw,
        }
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, PathElement> {
        self.elements.iter()
    }

    /// Returns the path without its last element.
    ///
    /// Returns `None` for a path with a single element. The returned path is
    /// a new value, `self` stays untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_path::ParsedPath;
    ///
    /// let path = ParsedPath::parse("a.b.c").unwrap();
    /// let parent = path.parent().unwrap();
    /// assert_eq!(parent.as_str(), "a.b");
    /// assert_eq!(path.as_str(), "a.b.c");
    ///
    /// assert!(ParsedPath::parse("a").unwrap().parent().is_none());
    /// ```
    pub fn parent(&self) -> Option<Self> {
        let last = self.elements.len().checked_sub(1).filter(|&last| last > 0)?;
        let cut = self.positions[last];

        Some(Self {
            raw: self.raw[..cut].into(),
            elements: self.elements[..last].into(),
            positions: self.positions[..last].into(),
        })
    }
}

impl<'a> IntoIterator for &'a ParsedPath {
    type Item = &'a PathElement;
    type IntoIter = core::slice::Iter<'a, PathElement>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for ParsedPath {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ParsedPath {
    type Error = ParseError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for ParsedPath {
    type Error = ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl AsRef<str> for ParsedPath {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParsedPath {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ParsedPath;
    use crate::{ParseError, PathElement};
    use alloc::string::String;

    #[test]
    fn parse_dotted_and_bracketed() {
        let path = ParsedPath::parse("items[3].tags|tag").unwrap();

        assert_eq!(
            path.elements(),
            &[
                PathElement::property("items"),
                PathElement::index("3"),
                PathElement::property("tags").with_singular("tag"),
            ]
        );
        assert_eq!(path.positions(), &[0, 5, 8]);
        assert_eq!(path.last().name(), "tags");
    }

    #[test]
    fn positions_start_at_zero_and_increase() {
        let path = ParsedPath::parse("[a][b].c.d[e]").unwrap();
        assert_eq!(path.position(0), Some(0));
        assert!(path.positions().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(path.positions().len(), path.len());
    }

    #[test]
    fn segments_round_trip_raw() {
        for raw in ["a", "a.b", "[x]", "child[names].first|f", "a b[ c ].d_e"] {
            let path = ParsedPath::parse(raw).unwrap();
            let joined: String = (0..path.len()).filter_map(|i| path.segment(i)).collect();
            assert_eq!(joined, raw);
        }
    }

    #[test]
    fn malformed_paths() {
        assert_eq!(ParsedPath::parse(""), Err(ParseError::Empty));

        let err = ParsedPath::parse("a..b").unwrap_err();
        assert_eq!(err.token(), Some('.'));
        assert_eq!(err.offset(), 1);

        assert!(ParsedPath::parse(".a").is_err());
        assert!(ParsedPath::parse("a.").is_err());
        assert!(ParsedPath::parse("a[0]b").is_err());
    }

    #[test]
    fn error_message_names_token_and_position() {
        let err = ParsedPath::parse("foo.bar-baz").unwrap_err();
        assert_eq!(
            alloc::format!("{err}"),
            "Could not parse property path \"foo.bar-baz\". Unexpected token \"-\" at position 7"
        );
    }

    #[test]
    fn parent_is_independent() {
        let path = ParsedPath::parse("a[b].c|d").unwrap();
        let parent = path.parent().unwrap();

        assert_eq!(parent.as_str(), "a[b]");
        assert_eq!(parent.len(), 2);
        assert_eq!(parent.positions(), &[0, 1]);
        assert!(parent.is_index(1));

        let grand = parent.parent().unwrap();
        assert_eq!(grand.as_str(), "a");
        assert!(grand.parent().is_none());

        assert_eq!(path.as_str(), "a[b].c|d");
        assert_eq!(path.singular(2), Some("d"));
    }

    #[test]
    fn out_of_range_queries() {
        let path = ParsedPath::parse("a").unwrap();
        assert!(!path.is_index(5));
        assert!(!path.is_property(5));
        assert_eq!(path.singular(5), None);
        assert_eq!(path.position(5), None);
        assert_eq!(path.prefix(0), "");
        assert_eq!(path.prefix(1), "a");
    }

    #[test]
    fn clone_and_conversions() {
        let path: ParsedPath = "a.b".parse().unwrap();
        let copy = path.clone();
        assert_eq!(copy, path);
        assert_eq!(ParsedPath::try_from(String::from("a.b")), Ok(path));
        assert_eq!(alloc::format!("{copy}"), "a.b");
    }
}
