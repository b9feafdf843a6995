// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Shortest path algorithms.
//!
//! The result of a single-source search is a [`ShortestPaths`] structure
//! holding the distance and the predecessor of each node. Paths are
//! reconstructed from the predecessors with [`extract_path`].

pub mod dijkstra;
pub use self::dijkstra::{find_path, shortest_paths, shortest_paths_with_data};

use crate::error::{Error, Result};

use std::fmt;
use std::iter::FusedIterator;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Result of a single-source shortest path search.
///
/// For each node `v` it contains the length of a shortest path from the
/// source to `v` and the predecessor of `v` on this path. Both are `None` if
/// `v` is not reachable. The source has distance zero and no predecessor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ShortestPaths<W> {
    src: usize,
    dist: Vec<Option<W>>,
    pred: Vec<Option<usize>>,
}

impl<W> ShortestPaths<W>
where
    W: Copy,
{
    pub(crate) fn new(src: usize, dist: Vec<Option<W>>, pred: Vec<Option<usize>>) -> Self {
        debug_assert_eq!(dist.len(), pred.len());
        ShortestPaths { src, dist, pred }
    }

    /// The source node of the search.
    pub fn source(&self) -> usize {
        self.src
    }

    /// Return the number of nodes of the searched graph.
    pub fn num_nodes(&self) -> usize {
        self.dist.len()
    }

    /// Return the distance of node `v`, `None` if it is unreachable.
    ///
    /// # Panics
    ///
    /// If `v` is not a node.
    pub fn dist(&self, v: usize) -> Option<W> {
        self.dist[v]
    }

    /// Return the predecessor of node `v` on a shortest path.
    ///
    /// This is `None` for the source and for unreachable nodes.
    ///
    /// # Panics
    ///
    /// If `v` is not a node.
    pub fn pred(&self, v: usize) -> Option<usize> {
        self.pred[v]
    }

    /// The distances of all nodes.
    pub fn distances(&self) -> &[Option<W>] {
        &self.dist
    }

    /// The predecessors of all nodes.
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.pred
    }

    /// Return `true` if `v` is reachable from the source.
    pub fn is_reachable(&self, v: usize) -> bool {
        self.dist.get(v).map_or(false, Option::is_some)
    }

    /// Return the nodes on a shortest path from the source to `dst`.
    ///
    /// In contrast to [`extract_path`] this fails with
    /// [`Error::Unreachable`] if there is no such path.
    pub fn path(&self, dst: usize) -> Result<Vec<usize>> {
        self.route(dst).map(|r| r.path)
    }

    /// Return a shortest path from the source to `dst` together with its length.
    pub fn route(&self, dst: usize) -> Result<Route<W>> {
        match self.dist.get(dst) {
            None => Err(Error::InvalidVertex {
                vertex: dst,
                num_nodes: self.num_nodes(),
            }),
            Some(None) => Err(Error::Unreachable { vertex: dst }),
            Some(&Some(cost)) => Ok(Route {
                path: extract_path(&self.pred, dst),
                cost,
            }),
        }
    }
}

/// A path given as sequence of nodes together with its length.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Route<W> {
    /// The nodes on the path, from source to destination.
    pub path: Vec<usize>,
    /// The total weight of the path.
    pub cost: W,
}

impl<W> fmt::Display for Route<W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, u) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", u)?;
        }
        write!(f, "\nTotal cost is {}", self.cost)
    }
}

/// Reconstruct the path to `dst` from the predecessor of each node.
///
/// The predecessors are followed from `dst` until a node without
/// predecessor is found. The returned nodes are ordered from that node to
/// `dst`. If `dst` is not reachable the result is just `[dst]`, so check
/// reachability first (or use [`ShortestPaths::path`]).
///
/// # Example
///
/// ```
/// use rs_paths::shortestpath::extract_path;
///
/// let pred = vec![None, Some(0), Some(1), Some(0), Some(2)];
/// assert_eq!(extract_path(&pred, 4), vec![0, 1, 2, 4]);
/// assert_eq!(extract_path(&pred, 0), vec![0]);
/// ```
///
/// # Panics
///
/// If `dst` or a node on the path is out of range of `pred`.
pub fn extract_path(pred: &[Option<usize>], dst: usize) -> Vec<usize> {
    let mut path: Vec<_> = path_from_preds(pred, dst).collect();
    path.reverse();
    path
}

/// Return an iterator over the nodes of a path, starting at `dst`.
///
/// The iterator yields `dst`, its predecessor, the predecessor of that node
/// and so on. It stops after `pred.len()` nodes, even if the predecessors
/// contain a cycle.
pub fn path_from_preds(pred: &[Option<usize>], dst: usize) -> PathIter<'_> {
    PathIter {
        pred,
        u: Some(dst),
        remaining: pred.len(),
    }
}

/// Iterator over the nodes of a path, see [`path_from_preds`].
pub struct PathIter<'a> {
    pred: &'a [Option<usize>],
    u: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for PathIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let u = self.u?;
        self.remaining -= 1;
        self.u = self.pred[u];
        Some(u)
    }
}

impl<'a> FusedIterator for PathIter<'a> {}
