//! Locale-style string ordering for display sorting.
//!
//! Plain byte ordering puts `Z` before `a` and `é` after `z`, which is not
//! what a reader expects from an alphabetical list. This module implements a
//! small three-level comparison in the spirit of the Unicode root collation:
//!
//! 1. primary: case- and accent-folded characters, where punctuation sorts
//!    before digits and digits sort before letters
//! 2. secondary: unaccented before accented
//! 3. tertiary: lowercase before uppercase
//!
//! Strings that are still equal fall back to byte order so the result is a
//! total order.

use std::cmp::Ordering;

use crate::errors::{CoreError, CoreResult};

/// Compare two strings the way an alphabetical listing would.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

/// Stable in-place sort by a string key using [`locale_compare`].
///
/// Items with equal keys keep their relative order.
pub fn stable_sort_by_locale<T, F>(items: &mut [T], mut key_fn: F)
where
    F: FnMut(&T) -> &str,
{
    items.sort_by(|a, b| locale_compare(key_fn(a), key_fn(b)));
}

/// Ensure a slice is already in locale order.
pub fn ensure_locale_sorted<T, F>(items: &[T], mut key_fn: F) -> CoreResult<()>
where
    F: FnMut(&T) -> &str,
{
    for w in items.windows(2) {
        if locale_compare(key_fn(&w[0]), key_fn(&w[1])) == Ordering::Greater {
            return Err(CoreError::invariant("collection is not in locale order"));
        }
    }
    Ok(())
}

fn primary_key(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.chars().map(|c| {
        let folded = fold_accent(c.to_lowercase().next().unwrap_or(c));
        let class = if folded.is_alphabetic() {
            2
        } else if folded.is_numeric() {
            1
        } else {
            0
        };
        (class, folded)
    })
}

fn secondary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(|c| {
        let lower = c.to_lowercase().next().unwrap_or(c);
        fold_accent(lower) != lower
    })
}

fn tertiary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

/// Map common Latin accented letters to their base letter.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
