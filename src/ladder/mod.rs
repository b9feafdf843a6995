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

//! Word ladders.
//!
//! A word ladder is a sequence of words from a start word to an end word such
//! that each word differs from its predecessor by a single insertion,
//! deletion or substitution of a character (see [`is_adjacent`]). All words
//! except the start word must be taken from a dictionary.
//!
//! The ladder is found by a breadth-first-search on the implicit graph whose
//! nodes are the words and whose edges are given by the adjacency predicate.
//! The graph is never stored, the neighbors of a word are found by scanning
//! the dictionary.
//!
//! # Example
//!
//! ```
//! use rs_paths::ladder::{self, Dictionary};
//!
//! let dict: Dictionary = vec!["code", "cade", "cate", "date", "data"].into_iter().collect();
//! let ladder = ladder::shortest_ladder("code", "data", &dict);
//! assert_eq!(ladder, vec!["code", "cade", "cate", "date", "data"]);
//! assert_eq!(
//!     ladder::display(&ladder).to_string(),
//!     "Word ladder found: code cade cate date data"
//! );
//!
//! assert!(ladder::shortest_ladder("code", "tree", &dict).is_empty());
//! ```

mod adjacency;
pub use self::adjacency::is_adjacent;

mod dictionary;
pub use self::dictionary::{Dictionary, Iter};

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::io;

use thiserror::Error;
use tracing::{debug, trace};

/// A sequence of words, each adjacent to its predecessor.
///
/// An empty ladder means that no ladder exists.
pub type Ladder = Vec<String>;

/// Error when searching a word ladder with [`find_ladder`].
#[derive(Debug, Error)]
pub enum LadderError {
    /// The dictionary could not be read.
    #[error("could not read dictionary: {0}")]
    Io(#[from] io::Error),

    #[error("start and end words must be different ({begin}, {end})")]
    SameWord { begin: String, end: String },

    #[error("end word is not in the dictionary ({begin}, {end})")]
    NotInDictionary { begin: String, end: String },

    #[error("no word ladder found ({begin}, {end})")]
    NoLadder { begin: String, end: String },
}

/// Return a shortest word ladder from `begin` to `end`.
///
/// The ladder starts with `begin` (which need not be contained in the
/// dictionary) and all other words are taken from `dict`. If there is no
/// such ladder, the returned ladder is empty.
///
/// Note that `begin == end` is not handled specially: `begin` is never
/// revisited, so no ladder is found in this case. Use [`find_ladder`] to get
/// such cases reported as errors.
pub fn shortest_ladder(begin: &str, end: &str, dict: &Dictionary) -> Ladder {
    shortest_ladder_by(begin, end, dict, is_adjacent)
}

/// Return a shortest word ladder using a custom adjacency predicate.
///
/// This is the breadth-first-search used by [`shortest_ladder`]. The
/// iterator `words` is cloned each time the neighbors of a word are needed,
/// the first adjacent word in iteration order wins among ladders of the
/// same length.
///
/// # Parameters
/// - `begin`: the first word of the ladder
/// - `end`: the last word of the ladder
/// - `words`: the words that may be used in the ladder
/// - `adjacent`: `adjacent(u, v)` is `true` if `v` may follow `u` in a ladder
///
/// # Example
///
/// ```
/// use rs_paths::ladder::shortest_ladder_by;
///
/// // words are adjacent if they differ in the last character only
/// let words = ["aa", "ab", "bb", "ba"];
/// let ladder = shortest_ladder_by("aa", "bb", words.iter().copied(), |u, v| {
///     u.len() == v.len() && u[..u.len() - 1] == v[..v.len() - 1]
/// });
/// assert!(ladder.is_empty());
///
/// let ladder = shortest_ladder_by("aa", "ab", words.iter().copied(), |u, v| {
///     u.len() == v.len() && u[..u.len() - 1] == v[..v.len() - 1]
/// });
/// assert_eq!(ladder, vec!["aa", "ab"]);
/// ```
pub fn shortest_ladder_by<'a, I, F>(begin: &'a str, end: &str, words: I, adjacent: F) -> Ladder
where
    I: IntoIterator<Item = &'a str> + Clone,
    F: Fn(&str, &str) -> bool,
{
    debug!(begin, end, "start ladder search");

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(begin);
    queue.push_back(vec![begin]);

    while let Some(ladder) = queue.pop_front() {
        let last = match ladder.last() {
            Some(&last) => last,
            None => continue,
        };
        trace!(word = last, len = ladder.len(), "expand ladder");

        for word in words.clone() {
            if visited.contains(word) || !adjacent(last, word) {
                continue;
            }
            let mut next = ladder.clone();
            next.push(word);
            if word == end {
                debug!(len = next.len(), "ladder found");
                return next.into_iter().map(String::from).collect();
            }
            visited.insert(word);
            queue.push_back(next);
        }
    }

    debug!(visited = visited.len(), "no ladder found");
    vec![]
}

/// Return a shortest word ladder from `begin` to `end` or an error.
///
/// In contrast to [`shortest_ladder`] this checks the input first: `begin`
/// and `end` must be different and `end` must be contained in the
/// dictionary. If no ladder exists, [`LadderError::NoLadder`] is returned.
///
/// # Example
///
/// ```
/// use rs_paths::ladder::{find_ladder, Dictionary, LadderError};
///
/// let dict: Dictionary = vec!["cat", "cot", "cog", "dog"].into_iter().collect();
/// assert_eq!(find_ladder("cat", "dog", &dict).unwrap(), vec!["cat", "cot", "cog", "dog"]);
///
/// match find_ladder("cat", "cat", &dict) {
///     Err(LadderError::SameWord { .. }) => {}
///     _ => panic!("expected an error"),
/// }
/// ```
pub fn find_ladder(begin: &str, end: &str, dict: &Dictionary) -> Result<Ladder, LadderError> {
    if begin == end {
        return Err(LadderError::SameWord {
            begin: begin.to_string(),
            end: end.to_string(),
        });
    }
    if !dict.contains(end) {
        return Err(LadderError::NotInDictionary {
            begin: begin.to_string(),
            end: end.to_string(),
        });
    }

    let ladder = shortest_ladder(begin, end, dict);
    if ladder.is_empty() {
        Err(LadderError::NoLadder {
            begin: begin.to_string(),
            end: end.to_string(),
        })
    } else {
        Ok(ladder)
    }
}

/// Return a printable representation of a ladder.
pub fn display<S: AsRef<str>>(ladder: &[S]) -> LadderDisplay<'_, S> {
    LadderDisplay(ladder)
}

/// Formats a ladder for humans, see [`display`].
pub struct LadderDisplay<'a, S>(&'a [S]);

impl<'a, S: AsRef<str>> fmt::Display for LadderDisplay<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No word ladder found.");
        }
        write!(f, "Word ladder found:")?;
        for word in self.0 {
            write!(f, " {}", word.as_ref())?;
        }
        Ok(())
    }
}
