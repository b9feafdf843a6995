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

//! A directed graph with weighted edges stored as adjacency lists.
//!
//! Nodes are simply the numbers `0..n`. Each node has a list of outgoing
//! edges, the only way to modify a graph is to append a new edge to such a
//! list (or to change the number of nodes).
//!
//! # Example
//!
//! ```
//! use rs_paths::WeightedGraph;
//!
//! let mut g = WeightedGraph::with_nodes(3);
//! g.add_edge(0, 1, 4);
//! g.add_edge(0, 2, 7);
//! g.add_edge(1, 2, 2);
//!
//! assert_eq!(g.num_nodes(), 3);
//! assert_eq!(g.num_edges(), 3);
//! assert_eq!(g.outedges(0).iter().map(|e| e.snk).collect::<Vec<_>>(), vec![1, 2]);
//! assert_eq!(g.edge_weight(1, 2), Some(2));
//! assert_eq!(g.edge_weight(2, 1), None);
//! ```

use crate::error::{Error, Result};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A directed edge `src -> snk` with a weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge<W = u32> {
    /// The source node.
    pub src: usize,
    /// The sink node.
    pub snk: usize,
    /// The (non-negative) weight.
    pub weight: W,
}

/// A directed graph with weighted edges.
///
/// The edges of node `u` are stored in the `u`-th adjacency list, each
/// of them has `src == u`. No validation is done when edges are added, using
/// a node outside `0..num_nodes()` as source panics, using it as sink
/// is a logic error that the algorithms will detect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct WeightedGraph<W = u32> {
    adj: Vec<Vec<Edge<W>>>,
}

impl<W> Default for WeightedGraph<W> {
    fn default() -> Self {
        WeightedGraph { adj: vec![] }
    }
}

impl<W> WeightedGraph<W> {
    /// Create a new graph without nodes.
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a new graph with `n` nodes and no edges.
    pub fn with_nodes(n: usize) -> Self {
        let mut g = Self::new();
        g.resize(n);
        g
    }

    /// Create a graph with `n` nodes from a list of `(src, snk, weight)` triples.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_paths::WeightedGraph;
    ///
    /// let g = WeightedGraph::from_edges(3, vec![(0, 1, 4), (1, 2, 3)]);
    /// assert_eq!(g.num_edges(), 2);
    /// assert_eq!(g.outedges(1)[0].weight, 3);
    /// ```
    pub fn from_edges<I>(n: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut g = Self::with_nodes(n);
        for (u, v, w) in edges {
            g.add_edge(u, v, w);
        }
        g
    }

    /// Set the number of nodes to `n`.
    ///
    /// New nodes have no outgoing edges. If the graph shrinks, the adjacency
    /// lists of the removed nodes are dropped.
    pub fn resize(&mut self, n: usize) {
        self.adj.resize_with(n, Vec::new);
    }

    /// Append the edge `u -> v` with weight `weight` to the list of `u`.
    ///
    /// # Panics
    ///
    /// If `u` is not a node of this graph.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) {
        self.adj[u].push(Edge { src: u, snk: v, weight });
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Return the number of edges.
    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Return the outgoing edges of node `u`.
    ///
    /// # Panics
    ///
    /// If `u` is not a node of this graph.
    pub fn outedges(&self, u: usize) -> &[Edge<W>] {
        &self.adj[u]
    }

    /// Return an iterator over all edges, ordered by source node.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adj.iter().flatten()
    }

    /// Return `Ok(())` if `u` is a node of this graph.
    pub fn check_node(&self, u: usize) -> Result<()> {
        if u < self.num_nodes() {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex: u,
                num_nodes: self.num_nodes(),
            })
        }
    }
}

impl<W> WeightedGraph<W>
where
    W: Copy + PartialOrd,
{
    /// Return the smallest weight of an edge `u -> v`.
    ///
    /// Returns `None` if there is no such edge (or `u` is not a node).
    pub fn edge_weight(&self, u: usize, v: usize) -> Option<W> {
        self.adj
            .get(u)?
            .iter()
            .filter(|e| e.snk == v)
            .map(|e| e.weight)
            .fold(None, |best, w| match best {
                Some(b) if b <= w => Some(b),
                _ => Some(w),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::WeightedGraph;
    use crate::error::Error;

    #[test]
    fn test_resize() {
        let mut g = WeightedGraph::<u32>::new();
        assert_eq!(g.num_nodes(), 0);
        g.resize(4);
        assert_eq!(g.num_nodes(), 4);
        assert!((0..4).all(|u| g.outedges(u).is_empty()));

        g.add_edge(3, 0, 1);
        g.add_edge(1, 2, 5);
        g.resize(2);
        assert_eq!(g.num_nodes(), 2);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_edges_have_source() {
        let g = WeightedGraph::from_edges(5, vec![(0, 1, 2), (0, 3, 6), (1, 2, 3), (1, 3, 8), (2, 4, 5), (3, 4, 9)]);
        for u in 0..g.num_nodes() {
            assert!(g.outedges(u).iter().all(|e| e.src == u));
        }
        assert_eq!(
            g.edges().map(|e| (e.src, e.snk)).collect::<Vec<_>>(),
            vec![(0, 1), (0, 3), (1, 2), (1, 3), (2, 4), (3, 4)]
        );
    }

    #[test]
    fn test_parallel_edges() {
        let g = WeightedGraph::from_edges(2, vec![(0, 1, 7), (0, 1, 3), (0, 1, 5)]);
        assert_eq!(g.edge_weight(0, 1), Some(3));
        assert_eq!(g.edge_weight(1, 0), None);
        assert_eq!(g.edge_weight(5, 0), None);
    }

    #[test]
    fn test_check_node() {
        let g = WeightedGraph::<u32>::with_nodes(3);
        assert_eq!(g.check_node(2), Ok(()));
        assert_eq!(
            g.check_node(3),
            Err(Error::InvalidVertex {
                vertex: 3,
                num_nodes: 3
            })
        );
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use super::WeightedGraph;
        use serde_json;

        #[test]
        fn test_serde() {
            let g = WeightedGraph::from_edges(3, vec![(0, 1, 4u32), (1, 2, 3)]);
            let serialized = serde_json::to_string(&g).unwrap();
            let h: WeightedGraph<u32> = serde_json::from_str(&serialized).unwrap();
            assert_eq!(g, h);
        }
    }
}
