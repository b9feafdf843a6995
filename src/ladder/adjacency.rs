/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Adjacency of words.
//!
//! Two words are adjacent if one can be transformed into the other by at most
//! one insertion, deletion or substitution of a character.

use std::cmp::Ordering;

/// Return `true` iff the edit distance of `a` and `b` is at most 1.
///
/// Characters are compared as Unicode scalar values. The test is a single
/// pass over both words without any allocation.
///
/// Note that the greedy scan is only correct for distance 1, it does not
/// compute the edit distance in general.
///
/// # Example
///
/// ```
/// use rs_paths::ladder::is_adjacent;
///
/// assert!(is_adjacent("code", "cade"));
/// assert!(is_adjacent("cade", "cate"));
/// assert!(is_adjacent("cat", "cart"));
/// assert!(!is_adjacent("code", "data"));
/// ```
pub fn is_adjacent(a: &str, b: &str) -> bool {
    let (alen, blen) = (a.chars().count(), b.chars().count());
    let order = alen.cmp(&blen);
    let diff = match order {
        Ordering::Less => blen - alen,
        _ => alen - blen,
    };
    if diff > 1 {
        return false;
    }

    let mut ait = a.chars().peekable();
    let mut bit = b.chars().peekable();
    let mut edits = 0;
    loop {
        let (x, y) = match (ait.peek(), bit.peek()) {
            (Some(&x), Some(&y)) => (x, y),
            _ => break,
        };
        if x != y {
            edits += 1;
            if edits > 1 {
                return false;
            }
            // skip the extra character of the longer word, or substitute
            match order {
                Ordering::Greater => {
                    ait.next();
                }
                Ordering::Less => {
                    bit.next();
                }
                Ordering::Equal => {
                    ait.next();
                    bit.next();
                }
            }
        } else {
            ait.next();
            bit.next();
        }
    }

    edits + ait.count() + bit.count() <= 1
}

#[cfg(test)]
mod tests {
    use super::is_adjacent;

    #[test]
    fn test_substitution() {
        assert!(is_adjacent("code", "cade"));
        assert!(is_adjacent("cade", "cate"));
        assert!(is_adjacent("date", "data"));
        assert!(!is_adjacent("code", "data"));
        assert!(!is_adjacent("abc", "bca"));
    }

    #[test]
    fn test_insert_delete() {
        assert!(is_adjacent("cat", "cast"));
        assert!(is_adjacent("cast", "cat"));
        assert!(is_adjacent("at", "cat"));
        assert!(is_adjacent("cat", "cats"));
        assert!(!is_adjacent("cat", "dogs"));
        assert!(!is_adjacent("ab", "ba"));
        assert!(!is_adjacent("cat", "catsup"));
    }

    #[test]
    fn test_trivial() {
        assert!(is_adjacent("", ""));
        assert!(is_adjacent("", "a"));
        assert!(!is_adjacent("", "ab"));
        assert!(is_adjacent("same", "same"));
    }

    #[test]
    fn test_unicode() {
        assert!(is_adjacent("über", "uber"));
        assert!(is_adjacent("naïve", "naive"));
        assert!(!is_adjacent("日本語", "中国"));
        assert!(is_adjacent("日本語", "日本"));
    }
}
