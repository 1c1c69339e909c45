// SPDX-License-Identifier: MPL-2.0
//! Locale-aware name comparison for remote listings.
//!
//! Implements the Spanish collation convention at base sensitivity:
//! case and accents are ignored, while `ñ` remains a distinct letter
//! ordered strictly after `n`. Backends name their folders and videos
//! in Spanish, so a plain byte-wise comparison would scatter accented
//! titles across the grid.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Combining tilde, the mark that turns `n` into `ñ` under NFD.
const COMBINING_TILDE: char = '\u{0303}';

/// A single collation unit: the lowercased base character plus a
/// secondary weight. The weight is zero for every plain letter and one
/// for `ñ`, which places `ñ`-words strictly after all `n`-words while
/// keeping them before `o`.
type CollationUnit = (char, u8);

/// Builds the collation key for a name.
///
/// The string is NFD-decomposed, combining marks are dropped (accent
/// insensitivity) and every base character is lowercased (case
/// insensitivity). A tilde following `n` is the one mark that survives,
/// encoded as a secondary weight.
fn collation_key(name: &str) -> Vec<CollationUnit> {
    let mut key: Vec<CollationUnit> = Vec::with_capacity(name.len());

    for c in name.nfd() {
        if is_combining_mark(c) {
            if c == COMBINING_TILDE {
                if let Some(last) = key.last_mut() {
                    if last.0 == 'n' {
                        last.1 = 1;
                    }
                }
            }
            continue;
        }

        for lowered in c.to_lowercase() {
            key.push((lowered, 0));
        }
    }

    key
}

/// Compares two names under the Spanish convention.
///
/// Names differing only in case or accents compare equal; callers that
/// need a deterministic order for such ties must rely on a stable sort,
/// not on this comparator.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}
