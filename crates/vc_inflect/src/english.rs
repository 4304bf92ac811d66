use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::Inflector;

// -----------------------------------------------------------------------------
// Rules

/// `(plural suffix, singular replacements)`, matched case-insensitively.
///
/// The longest matching suffix wins. Replacements are listed
/// most-likely-first.
const RULES: &[(&str, &[&str])] = &[
    // Invariant words.
    ("news", &["news"]),
    ("series", &["series"]),
    ("species", &["species"]),
    ("sheep", &["sheep"]),
    ("ss", &["ss"]),
    ("us", &["us", "u"]),
    ("is", &["is", "i"]),
    // Irregular forms.
    ("children", &["child"]),
    ("people", &["person"]),
    ("men", &["man"]),
    ("feet", &["foot"]),
    ("teeth", &["tooth"]),
    ("geese", &["goose"]),
    ("mice", &["mouse"]),
    ("oxen", &["ox"]),
    // Latin and Greek endings.
    ("indices", &["index"]),
    ("matrices", &["matrix"]),
    ("vertices", &["vertex"]),
    ("appendices", &["appendix"]),
    ("criteria", &["criterion"]),
    ("phenomena", &["phenomenon"]),
    ("data", &["datum"]),
    ("media", &["medium"]),
    ("bacteria", &["bacterium"]),
    ("cacti", &["cactus"]),
    ("fungi", &["fungus"]),
    ("radii", &["radius"]),
    ("alumni", &["alumnus"]),
    ("theses", &["thesis"]),
    ("analyses", &["analysis"]),
    ("crises", &["crisis"]),
    // Regular endings.
    ("sses", &["ss"]),
    ("ches", &["ch", "che"]),
    ("shes", &["sh", "she"]),
    ("xes", &["x", "xe"]),
    ("zes", &["z", "ze"]),
    ("ies", &["y", "ie"]),
    ("ves", &["f", "fe", "ve"]),
    ("oes", &["o", "oe"]),
    ("ses", &["se", "s"]),
    ("s", &[""]),
];

// -----------------------------------------------------------------------------
// EnglishInflector

/// A table-driven English singularizer.
///
/// Works on identifiers as well as plain words: the case of the first
/// replaced character is kept, so `"UserGroups"` yields `"UserGroup"`.
/// Words without a known plural ending are returned unchanged.
///
/// # Examples
///
/// ```
/// use vc_inflect::{EnglishInflector, Inflector};
///
/// let inflector = EnglishInflector::new();
/// assert_eq!(inflector.singular_forms("Categories"), ["Category", "Categorie"]);
/// assert_eq!(inflector.singular_forms("Leaves"), ["Leaf", "Leafe", "Leave"]);
/// assert_eq!(inflector.singular_forms("Status"), ["Status", "Statu"]);
/// assert_eq!(inflector.singular_forms("Data"), ["Datum"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishInflector;

impl EnglishInflector {
    /// Creates an `EnglishInflector`.
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl Inflector for EnglishInflector {
    fn singular_forms(&self, plural: &str) -> Vec<String> {
        let lower = plural.to_ascii_lowercase();

        let Some((suffix, singulars)) = RULES
            .iter()
            .filter(|(suffix, _)| lower.ends_with(suffix))
            .max_by_key(|(suffix, _)| suffix.len())
        else {
            return vec![plural.into()];
        };

        // ASCII lowercasing keeps byte offsets, so `stem_len` is a char boundary.
        let stem_len = plural.len() - suffix.len();
        let stem = &plural[..stem_len];
        let upper = plural[stem_len..].starts_with(|c: char| c.is_ascii_uppercase());

        let mut forms: Vec<String> = Vec::with_capacity(singulars.len());
        for singular in singulars.iter() {
            let mut form = String::with_capacity(stem_len + singular.len());
            form.push_str(stem);
            let mut chars = singular.chars();
            if let Some(first) = chars.next() {
                form.push(if upper { first.to_ascii_uppercase() } else { first });
                form.push_str(chars.as_str());
            }
            if !form.is_empty() && !forms.contains(&form) {
                forms.push(form);
            }
        }

        if forms.is_empty() {
            forms.push(plural.into());
        }
        forms
    }
}

// -----------------------------------------------------------------------------
// Tests
