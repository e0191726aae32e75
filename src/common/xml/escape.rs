use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::borrow::Cow;

// Built once, shared across threads
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["&", "<", ">", "\"", "'"]).expect("static XML escape patterns are valid")
});

const REPLACEMENTS: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

/// Escape XML special characters for use in text content or attribute values.
///
/// Borrows the input when nothing needs escaping, which is the common case
/// for slide text.
///
/// # Examples
///
/// ```
/// use opd_deck::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("• plain ✅"), "• plain ✅");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if XML_ESCAPER.find(s).is_none() {
        return Cow::Borrowed(s);
    }
    Cow::Owned(XML_ESCAPER.replace_all(s, &REPLACEMENTS))
}

/// Characters XML 1.0 cannot carry at all, even escaped.
///
/// Tab, LF and CR are legal; the remaining C0 controls are not.
pub fn is_xml_char(ch: char) -> bool {
    matches!(ch,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}
