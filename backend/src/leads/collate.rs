//! Locale-aware string ordering for sorted lead columns and distinct-value lists.
//!
//! Strings are compared first on a folded form (canonical decomposition, combining
//! marks dropped, lowercased), so `"émile"`, `"Emile"` and `"emile"` sort together
//! and `"b"` sorts before `"C"`. Strings that fold identically are then ordered
//! with lowercase ahead of uppercase (`"mit"` before `"MIT"`), and finally by
//! their raw code points so the ordering stays total.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Precomputed sort key for one string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    folded: String,
    case_inverted: String,
    raw: String,
}

impl CollationKey {
    pub fn new(value: &str) -> Self {
        let folded = value
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect();
        CollationKey {
            folded,
            case_inverted: invert_case(value),
            raw: value.to_string(),
        }
    }

    /// The original, unfolded string.
    pub fn into_raw(self) -> String {
        self.raw
    }
}

/// Swaps letter case so that, under code point order, lowercase wins ties.
fn invert_case(value: &str) -> String {
    let mut inverted = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_lowercase() {
            inverted.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            inverted.extend(c.to_lowercase());
        } else {
            inverted.push(c);
        }
    }
    inverted
}
