//! Locale-aware folding of text into a canonical comparable form.
//!
//! Search on a site serving both English and Turkish readers has to treat
//! `"İĞDIR"`, `"ığdır"`, and `"igdir"` as the same string. Generic Unicode
//! lowercasing gets this wrong: Turkish has a dotted/dotless I pair
//! (`İ`/`i` and `I`/`ı`), so `'I'.to_lowercase()` produces `'i'` in generic
//! rules but `'ı'` under Turkish ones — two different code points for what a
//! reader considers one letter.
//!
//! The fold here is table-driven: an explicit case-mapping table is
//! consulted before generic Unicode lowercasing, collapsing the whole I
//! family onto ASCII `i`. Adding another locale's special cases means adding
//! table rows, not touching call sites.
//!
//! After case folding, diacritics are stripped via canonical decomposition
//! (NFD) followed by removal of combining marks, every run of
//! non-alphanumeric characters collapses to a single ASCII space, and the
//! result is trimmed.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Locale-specific case folds consulted before generic Unicode lowercasing.
///
/// The Turkish I family all collapse to ASCII `i`: `İ` (U+0130) would
/// otherwise lowercase to `i` + combining dot above, and `I` would lowercase
/// to `i` under generic rules but `ı` under Turkish ones.
const CASE_FOLD_OVERRIDES: &[(char, char)] = &[('İ', 'i'), ('I', 'i'), ('ı', 'i')];

/// Fold `text` into a canonical lowercase form for comparison.
///
/// Total over arbitrary input (always returns a string, possibly empty) and
/// idempotent: `normalize(normalize(x)) == normalize(x)`.
///
/// ```
/// use post_discovery::normalize::normalize;
///
/// assert_eq!(normalize("İĞDIR, Çeşme!"), "igdir cesme");
/// ```
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match CASE_FOLD_OVERRIDES.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => folded.push(*to),
            None => folded.extend(c.to_lowercase()),
        }
    }

    let mut out = String::with_capacity(folded.len());
    let mut pending_space = false;
    for c in folded.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}
