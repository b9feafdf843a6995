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


use rustop::opts;
use tracing_subscriber::EnvFilter;

use rs_paths::ladder::{self, Dictionary};

use std::error::Error;
use std::io::{self, BufRead, Write};

/// Print `prompt` and read the next word from `input`.
fn read_word<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.split_whitespace().next().map(String::from))
}

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Find a shortest word ladder between two words.";
        opt dict:Option<String>, desc:"Dictionary file name (default: words.txt).";
    }
    .parse_or_exit();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let dict = Dictionary::read(args.dict.as_deref().unwrap_or("words.txt"))?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let begin = read_word(&mut input, "Enter start word: ")?.unwrap_or_default();
    let end = read_word(&mut input, "Enter end word: ")?.unwrap_or_default();

    match ladder::find_ladder(&begin, &end, &dict) {
        Ok(ladder) => println!("{}", ladder::display(&ladder)),
        Err(ladder::LadderError::NoLadder { .. }) => println!("{}", ladder::display::<String>(&[])),
        Err(err) => eprintln!("Error: {}", err),
    }

    Ok(())
}
