// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Reading weighted graphs from edge lists.
//!
//! The file consists of whitespace separated tokens. The first token is the
//! number of vertices `n`, followed by one triple `src snk weight` for each
//! edge, vertices are numbered `0..n`. Usually each edge is written on its own
//! line but line breaks are not significant. A `#` starts a comment that
//! extends to the end of the line.
//!
//! ```text
//! # a small graph
//! 4
//! 0 1 5
//! 0 2 3
//! 2 1 1
//! 1 3 2
//! ```
//!
//! # Example
//!
//! ```
//! use rs_paths::edgelist;
//! use rs_paths::WeightedGraph;
//! use std::io::Cursor;
//!
//! let file = "3\n0 1 4\n1 2 3 # last edge\n";
//! let g: WeightedGraph<u32> = edgelist::read_from_buf(&mut Cursor::new(file)).unwrap();
//! assert_eq!(g.num_nodes(), 3);
//! assert_eq!(g.num_edges(), 2);
//! assert_eq!(g.edge_weight(1, 2), Some(3));
//! ```

use crate::graph::WeightedGraph;

use num_traits::Zero;
use thiserror::Error;
use tracing::debug;

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Error when reading an edge list.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Format error on line {line}: {msg}")]
    Format { line: usize, msg: String },
    #[error("Data error on line {line}: {msg}")]
    Data { line: usize, msg: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// The next token expected by the reader.
enum Expect {
    NumNodes,
    Src,
    Snk(usize),
    Weight(usize, usize),
}

/// Read a graph from the edge list file `path`.
pub fn read<P, W>(path: P) -> Result<WeightedGraph<W>>
where
    P: AsRef<Path>,
    W: FromStr + PartialOrd + Zero,
{
    let path = path.as_ref();
    let g = read_from_buf(&mut BufReader::new(fs::File::open(path)?))?;
    debug!(
        path = %path.display(),
        nodes = g.num_nodes(),
        edges = g.num_edges(),
        "graph loaded"
    );
    Ok(g)
}

/// Read a graph in edge list format from a buffered reader.
pub fn read_from_buf<R, W>(buf: &mut R) -> Result<WeightedGraph<W>>
where
    R: BufRead,
    W: FromStr + PartialOrd + Zero,
{
    let mut g = WeightedGraph::new();
    let mut expect = Expect::NumNodes;
    let mut line = String::new();
    let mut line_number = 0;

    loop {
        line.clear();
        if buf.read_line(&mut line)? == 0 {
            break;
        }
        line_number += 1;

        let content = match line.find('#') {
            Some(pos) => &line[..pos],
            None => &line[..],
        };

        for tok in content.split_whitespace() {
            expect = match expect {
                Expect::NumNodes => {
                    let n = tok.parse::<usize>().map_err(|_| Error::Format {
                        line: line_number,
                        msg: format!("expected number of vertices, got '{}'", tok),
                    })?;
                    g.resize(n);
                    Expect::Src
                }
                Expect::Src => Expect::Snk(parse_node(tok, line_number, g.num_nodes())?),
                Expect::Snk(u) => Expect::Weight(u, parse_node(tok, line_number, g.num_nodes())?),
                Expect::Weight(u, v) => {
                    let w = tok.parse::<W>().map_err(|_| Error::Format {
                        line: line_number,
                        msg: format!("invalid weight '{}'", tok),
                    })?;
                    if w < W::zero() {
                        return Err(Error::Data {
                            line: line_number,
                            msg: format!("negative weight '{}' on edge {} -> {}", tok, u, v),
                        });
                    }
                    g.add_edge(u, v, w);
                    Expect::Src
                }
            };
        }
    }

    match expect {
        Expect::Src => Ok(g),
        Expect::NumNodes => Err(Error::Format {
            line: line_number,
            msg: "unexpected end of file, expected number of vertices".to_string(),
        }),
        Expect::Snk(_) | Expect::Weight(..) => Err(Error::Format {
            line: line_number,
            msg: "unexpected end of file, incomplete edge".to_string(),
        }),
    }
}

fn parse_node(tok: &str, line: usize, num_nodes: usize) -> Result<usize> {
    let u = tok.parse::<usize>().map_err(|_| Error::Format {
        line,
        msg: format!("expected vertex, got '{}'", tok),
    })?;
    if u >= num_nodes {
        return Err(Error::Data {
            line,
            msg: format!("invalid vertex {} (must be < {})", u, num_nodes),
        });
    }
    Ok(u)
}

#[cfg(test)]
mod tests {
    use super::{read, read_from_buf, Error};
    use crate::graph::WeightedGraph;
    use std::io::Cursor;

    fn parse(file: &str) -> super::Result<WeightedGraph<i64>> {
        read_from_buf(&mut Cursor::new(file))
    }

    #[test]
    fn parse_file_test() {
        let file = "# test graph

5
0 1 2
0 3 6   # the direct edge
1 2 3  1 3 8
2 4
5
3 4 9
";
        let g = parse(file).unwrap();
        assert_eq!(g.num_nodes(), 5);
        assert_eq!(g.num_edges(), 6);
        assert_eq!(
            g.edges().map(|e| (e.src, e.snk, e.weight)).collect::<Vec<_>>(),
            vec![(0, 1, 2), (0, 3, 6), (1, 2, 3), (1, 3, 8), (2, 4, 5), (3, 4, 9)]
        );
    }

    #[test]
    fn test_float_weights() {
        let g: WeightedGraph<f64> = read_from_buf(&mut Cursor::new("2\n0 1 0.25\n")).unwrap();
        assert_eq!(g.edge_weight(0, 1), Some(0.25));
    }

    #[test]
    fn test_empty_graph() {
        let g = parse("0\n").unwrap();
        assert_eq!(g.num_nodes(), 0);
        match parse("# nothing here\n") {
            Err(Error::Format { line: 1, .. }) => {}
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_invalid_vertex() {
        match parse("3\n0 1 1\n1 3 1\n") {
            Err(Error::Data { line: 3, .. }) => {}
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_negative_weight() {
        match parse("3\n0 1 -1\n") {
            Err(e @ Error::Data { line: 2, .. }) => {
                assert_eq!(e.to_string(), "Data error on line 2: negative weight '-1' on edge 0 -> 1")
            }
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_format_errors() {
        match parse("x\n") {
            Err(Error::Format { line: 1, .. }) => {}
            r => panic!("unexpected result: {:?}", r),
        }
        match parse("2\n0 1 abc\n") {
            Err(Error::Format { line: 2, .. }) => {}
            r => panic!("unexpected result: {:?}", r),
        }
        match parse("2\n0 1 4\n1 0\n") {
            Err(Error::Format { line: 3, .. }) => {}
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_missing_file() {
        match read::<_, u32>("this/file/does/not/exist.txt") {
            Err(Error::Io(_)) => {}
            r => panic!("unexpected result: {:?}", r),
        }
    }
}
