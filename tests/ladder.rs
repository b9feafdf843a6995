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


use rs_paths::ladder::{self, is_adjacent, Dictionary, LadderError};

use std::error::Error;

const WORDS: &str = "tests/data/words.txt";

#[test]
fn test_dictionary_file() -> Result<(), Box<dyn Error>> {
    let dict = Dictionary::read(WORDS)?;
    assert_eq!(dict.len(), 36);
    assert!(dict.contains("planet"));
    assert!(dict.contains("chop"));
    assert!(!dict.contains("moon"));
    Ok(())
}

#[test]
fn test_ladders() -> Result<(), Box<dyn Error>> {
    let dict = Dictionary::read(WORDS)?;

    let ladder = ladder::find_ladder("sleep", "chop", &dict)?;
    assert_eq!(ladder, vec!["sleep", "steep", "step", "stop", "shop", "chop"]);

    let ladder = ladder::find_ladder("code", "data", &dict)?;
    assert_eq!(ladder, vec!["code", "cade", "cate", "date", "data"]);

    for &(begin, end, len) in &[("cat", "dog", 4), ("a", "planet", 7), ("hit", "log", 4), ("car", "cart", 2)] {
        let ladder = ladder::find_ladder(begin, end, &dict)?;
        assert_eq!(ladder.len(), len, "ladder {} -> {}: {:?}", begin, end, ladder);
        assert_eq!(ladder.first().map(String::as_str), Some(begin));
        assert_eq!(ladder.last().map(String::as_str), Some(end));
        assert!(ladder.windows(2).all(|w| is_adjacent(&w[0], &w[1])));
    }

    Ok(())
}

#[test]
fn test_begin_not_in_dictionary() -> Result<(), Box<dyn Error>> {
    let dict = Dictionary::read(WORDS)?;
    let ladder = ladder::find_ladder("hog", "dog", &dict)?;
    assert_eq!(ladder, vec!["hog", "dog"]);
    Ok(())
}

#[test]
fn test_no_ladder() -> Result<(), Box<dyn Error>> {
    let dict = Dictionary::read(WORDS)?;
    // the words around "sleep" are not connected to the others
    assert!(ladder::shortest_ladder("sleep", "planet", &dict).is_empty());
    assert!(!ladder::shortest_ladder("code", "planet", &dict).is_empty());
    match ladder::find_ladder("sleep", "planet", &dict) {
        Err(e @ LadderError::NoLadder { .. }) => assert_eq!(e.to_string(), "no word ladder found (sleep, planet)"),
        r => panic!("unexpected result: {:?}", r),
    }
    match ladder::find_ladder("code", "moon", &dict) {
        Err(LadderError::NotInDictionary { .. }) => {}
        r => panic!("unexpected result: {:?}", r),
    }
    Ok(())
}
