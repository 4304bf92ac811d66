//! Derive accessor method names from property names.

use alloc::string::String;

/// Converts a property name into the camel-cased stem of its accessors.
///
/// Splits on `_` and `.`, drops the separators and upper-cases the character
/// following each run of separators (and the first character). A run that
/// ends in `.` leaves a single `_` behind, so embedded dots stay visible in
/// the method name. In a trailing run the last separator stands in for the
/// boundary character.
///
/// # Examples
///
/// ```
/// use vc_access::camelize;
///
/// assert_eq!(camelize("name"), "Name");
/// assert_eq!(camelize("first_name"), "FirstName");
/// assert_eq!(camelize("foo.bar"), "Foo_Bar");
/// assert_eq!(camelize("__meta"), "Meta");
/// ```
pub fn camelize(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 1);
    // Separators seen since the last emitted character. The start of the
    // string counts as a boundary of its own.
    let mut run = String::new();
    let mut boundary = true;

    for c in property.chars() {
        if c == '_' || c == '.' {
            run.push(c);
            boundary = true;
            continue;
        }
        if boundary {
            if run.ends_with('.') {
                out.push('_');
            }
            out.push(c.to_ascii_uppercase());
            run.clear();
            boundary = false;
        } else {
            out.push(c);
        }
    }

    // A trailing run has no character after it, its last separator takes
    // the place of the boundary character.
    if let Some(last) = run.pop() {
        if run.ends_with('.') {
            out.push('_');
        }
        out.push(last);
    }

    out
}

/// Upper-cases the first character, leaving the rest untouched.
///
/// Used for explicit singulars, which are already spelled the way the
/// author wants them.
///
/// # Examples
///
/// ```
/// use vc_access::capitalize;
///
/// assert_eq!(capitalize("person"), "Person");
/// assert_eq!(capitalize("child_node"), "Child_node");
/// ```
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let mut out = String::with_capacity(word.len());
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.push_str(chars.as_str());
    }
    out
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{camelize, capitalize};

    #[test]
    fn camelize_words() {
        assert_eq!(camelize("child"), "Child");
        assert_eq!(camelize("first_name"), "FirstName");
        assert_eq!(camelize("foo__bar"), "FooBar");
        assert_eq!(camelize("alreadyCamel"), "AlreadyCamel");
        assert_eq!(camelize("a1_b2"), "A1B2");
    }

    #[test]
    fn camelize_dots_leave_underscore() {
        assert_eq!(camelize("foo.bar"), "Foo_Bar");
        assert_eq!(camelize(".foo"), "_Foo");
        assert_eq!(camelize("foo_.bar"), "Foo_Bar");
        assert_eq!(camelize("foo._bar"), "FooBar");
    }

    #[test]
    fn camelize_trailing_separators() {
        assert_eq!(camelize("foo_"), "Foo_");
        assert_eq!(camelize("a._"), "A__");
        assert_eq!(camelize("a_."), "A.");
        assert_eq!(camelize("_"), "_");
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn capitalize_first_only() {
        assert_eq!(capitalize("tag"), "Tag");
        assert_eq!(capitalize("Tag"), "Tag");
        assert_eq!(capitalize(""), "");
    }
}
