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

use super::LadderError;

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fs;
use std::io::{BufRead, BufReader};
use std::iter::FromIterator;
use std::path::Path;

use tracing::debug;

/// A set of distinct words.
///
/// The words are iterated in lexicographic order, which makes ladder
/// searches deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Default::default()
    }

    /// Read a dictionary from a file.
    ///
    /// The file contains whitespace separated words, duplicates are ignored.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, LadderError> {
        let path = path.as_ref();
        let dict = Self::read_from_buf(&mut BufReader::new(fs::File::open(path)?))?;
        debug!(path = %path.display(), words = dict.len(), "dictionary loaded");
        Ok(dict)
    }

    /// Read a dictionary from a buffered reader.
    pub fn read_from_buf<R: BufRead>(buf: &mut R) -> Result<Self, LadderError> {
        let mut dict = Dictionary::new();
        let mut line = String::new();
        while buf.read_line(&mut line)? > 0 {
            dict.extend(line.split_whitespace());
            line.clear();
        }
        Ok(dict)
    }

    /// Add a word.
    ///
    /// Returns `true` if the word had not been contained before.
    pub fn insert<S: Into<String>>(&mut self, word: S) -> bool {
        self.words.insert(word.into())
    }

    /// Return `true` if `word` is contained in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Return the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Return `true` if the dictionary contains no word.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Return an iterator over all words in lexicographic order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.words.iter())
    }
}

/// Iterator over the words of a [`Dictionary`].
pub struct Iter<'a>(btree_set::Iter<'a, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.0.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        Dictionary {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        self.words.extend(words.into_iter().map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::Dictionary;
    use crate::ladder::LadderError;
    use std::io::Cursor;

    #[test]
    fn test_read() {
        let file = "cat dog\n  bird\n\ncat\tfish \n";
        let dict = Dictionary::read_from_buf(&mut Cursor::new(file)).unwrap();
        assert_eq!(dict.len(), 4);
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["bird", "cat", "dog", "fish"]);
        assert!(dict.contains("dog"));
        assert!(!dict.contains("do"));
    }

    #[test]
    fn test_missing_file() {
        match Dictionary::read("this/file/does/not/exist.txt") {
            Err(LadderError::Io(_)) => {}
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_collect() {
        let mut dict: Dictionary = vec!["b", "a", "b"].into_iter().collect();
        assert_eq!(dict.len(), 2);
        assert!(dict.insert("c"));
        assert!(!dict.insert(String::from("a")));
        assert_eq!((&dict).into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert!(Dictionary::new().is_empty());
    }
}
