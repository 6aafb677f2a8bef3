use deunicode::deunicode;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

const SYMBOL_RE: &str = r"\{[^}]+\}";
const SAGA_HEADER_RE: &str = r"^([IVX]+(?:\s*,\s*[IVX]+)*)\s*[—–-]\s*(.+)$";
const LOYALTY_HEADER_RE: &str = r"^([+−]?)([0-9]+)[:—]\s*(.+)$";
const CHAPTER_SEPARATOR_RE: &str = r"\s*,\s*";

pub static REGEX_COLLECTION: LazyLock<RegexCollection> = LazyLock::new(|| {
    let symbols = Regex::new(SYMBOL_RE).expect("Invalid regex");
    let saga_header = Regex::new(SAGA_HEADER_RE).expect("Invalid regex");
    let loyalty_header = Regex::new(LOYALTY_HEADER_RE).expect("Invalid regex");
    let chapter_separator = Regex::new(CHAPTER_SEPARATOR_RE).expect("Invalid regex");
    RegexCollection {
        symbols,
        saga_header,
        loyalty_header,
        chapter_separator,
    }
});

pub struct RegexCollection {
    pub symbols: Regex,
    pub saga_header: Regex,
    pub loyalty_header: Regex,
    pub chapter_separator: Regex,
}

/// Transliterates to ASCII and folds case so names collate the way a reader
/// expects ("Æther" next to "Aether", "Éowyn" before "Faramir").
#[must_use]
pub fn collation_key(text: &str) -> String {
    deunicode(text).to_lowercase()
}

/// Accent and case insensitive first, then unaccented before accented, then
/// lower case before upper case so the ordering stays total.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
