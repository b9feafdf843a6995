/*
 * Copyright (c) 2017, 2018, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start node `s`
//! to all other nodes in a directed graph. Each edge is assigned a
//! non-negative weight (or length).
//!
//! The nodes are handled in the order of non-decreasing distance using a
//! binary heap. Improved distances are pushed again instead of decreasing
//! the key of the queued element; outdated queue entries are skipped when
//! they are popped. The running time is `O((|V| + |E|) log |V|)`.
//!
//! # Example
//!
//! ```
//! use rs_paths::WeightedGraph;
//! use rs_paths::shortestpath::{dijkstra, extract_path};
//!
//! let g = WeightedGraph::from_edges(5, vec![
//!     (0, 1, 2), (0, 3, 6), (1, 2, 3), (1, 3, 8), (2, 4, 5), (3, 4, 9),
//! ]);
//!
//! let sp = dijkstra::shortest_paths(&g, 0).unwrap();
//! assert_eq!(sp.distances(), &[Some(0), Some(2), Some(5), Some(6), Some(10)]);
//! assert_eq!(extract_path(sp.predecessors(), 4), vec![0, 1, 2, 4]);
//!
//! let route = dijkstra::find_path(&g, 0, 3).unwrap();
//! assert_eq!(route.path, vec![0, 3]);
//! assert_eq!(route.cost, 6);
//! ```

use super::{Route, ShortestPaths};
use crate::collections::{BinHeap, ItemPriQueue};
use crate::error::Result;
use crate::graph::WeightedGraph;

use num_traits::Zero;
use tracing::{debug, trace};

/// Run Dijkstra's algorithm from `src` using a default binary heap.
///
/// This is a convenience wrapper around [`shortest_paths_with_data`].
///
/// # Parameters
///
/// - `g`: the graph, all weights must be non-negative
/// - `src`: the source node at which the search should start.
///
/// Fails with [`Error::InvalidVertex`][crate::Error::InvalidVertex] if `src`
/// (or the sink of a reachable edge) is not a node of `g`.
pub fn shortest_paths<W>(g: &WeightedGraph<W>, src: usize) -> Result<ShortestPaths<W>>
where
    W: Copy + PartialOrd + Zero,
{
    shortest_paths_with_data(g, src, BinHeap::with_capacity(g.num_nodes()))
}

/// Run Dijkstra's algorithm from `src` with a custom priority queue.
///
/// The queue is cleared before the search starts. Passing `&mut heap`
/// allows the queue (and its memory) to be reused for several searches.
///
/// # Example
///
/// ```
/// use rs_paths::WeightedGraph;
/// use rs_paths::collections::BinHeap;
/// use rs_paths::shortestpath::dijkstra;
///
/// let g = WeightedGraph::from_edges(3, vec![(0, 1, 1.5), (1, 2, 0.5), (2, 0, 1.0)]);
/// let mut heap = BinHeap::new();
/// for s in 0..3 {
///     let sp = dijkstra::shortest_paths_with_data(&g, s, &mut heap).unwrap();
///     assert_eq!(sp.dist(s), Some(0.0));
///     assert!((0..3).all(|v| sp.is_reachable(v)));
/// }
/// ```
pub fn shortest_paths_with_data<W, P>(g: &WeightedGraph<W>, src: usize, mut heap: P) -> Result<ShortestPaths<W>>
where
    W: Copy + PartialOrd + Zero,
    P: ItemPriQueue<usize, W>,
{
    g.check_node(src)?;

    let n = g.num_nodes();
    debug!(nodes = n, edges = g.num_edges(), src, "start dijkstra");

    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut pred = vec![None; n];
    let mut visited = vec![false; n];

    heap.clear();
    dist[src] = Some(W::zero());
    heap.push(src, W::zero());

    let mut nvisited = 0;
    while let Some((u, d)) = heap.pop_min() {
        // outdated entry, u has been finished with a smaller distance
        if visited[u] {
            continue;
        }
        visited[u] = true;
        nvisited += 1;
        trace!(node = u, "finish node");

        for e in g.outedges(u) {
            let v = e.snk;
            g.check_node(v)?;
            if visited[v] {
                continue;
            }
            let newdist = d + e.weight;
            let improves = match dist[v] {
                Some(old) => newdist < old,
                None => true,
            };
            if improves {
                dist[v] = Some(newdist);
                pred[v] = Some(u);
                heap.push(v, newdist);
            }
        }
    }

    debug!(reached = nvisited, "finish dijkstra");
    Ok(ShortestPaths::new(src, dist, pred))
}

/// Run Dijkstra's algorithm and return a shortest path from `src` to `dst`.
///
/// Fails with [`Error::Unreachable`][crate::Error::Unreachable] if there is
/// no path.
pub fn find_path<W>(g: &WeightedGraph<W>, src: usize, dst: usize) -> Result<Route<W>>
where
    W: Copy + PartialOrd + Zero,
{
    g.check_node(dst)?;
    shortest_paths(g, src)?.route(dst)
}

#[cfg(test)]
mod tests {
    use super::{find_path, shortest_paths};
    use crate::error::Error;
    use crate::graph::WeightedGraph;

    fn test_graph() -> WeightedGraph {
        WeightedGraph::from_edges(5, vec![(0, 1, 2), (0, 3, 6), (1, 2, 3), (1, 3, 8), (2, 4, 5), (3, 4, 9)])
    }

    #[test]
    fn test_distances() {
        let sp = shortest_paths(&test_graph(), 0).unwrap();
        assert_eq!(sp.distances(), &[Some(0), Some(2), Some(5), Some(6), Some(10)]);
        assert_eq!(sp.predecessors(), &[None, Some(0), Some(1), Some(0), Some(2)]);
    }

    #[test]
    fn test_no_path() {
        let g = WeightedGraph::from_edges(3, vec![(0, 1, 4)]);
        let sp = shortest_paths(&g, 0).unwrap();
        assert_eq!(sp.dist(1), Some(4));
        assert_eq!(sp.dist(2), None);
        assert_eq!(sp.pred(2), None);
        assert_eq!(find_path(&g, 0, 2), Err(Error::Unreachable { vertex: 2 }));
    }

    #[test]
    fn test_single_node() {
        let g = WeightedGraph::<u32>::with_nodes(1);
        let sp = shortest_paths(&g, 0).unwrap();
        assert_eq!(sp.dist(0), Some(0));
        assert_eq!(sp.pred(0), None);
    }

    #[test]
    fn test_invalid_source() {
        let g = test_graph();
        assert_eq!(
            shortest_paths(&g, 5),
            Err(Error::InvalidVertex {
                vertex: 5,
                num_nodes: 5
            })
        );
        let empty = WeightedGraph::<u32>::new();
        assert!(shortest_paths(&empty, 0).is_err());
    }

    #[test]
    fn test_invalid_sink() {
        let g = WeightedGraph::from_edges(2, vec![(0, 1, 1), (1, 7, 1)]);
        assert_eq!(
            shortest_paths(&g, 0),
            Err(Error::InvalidVertex {
                vertex: 7,
                num_nodes: 2
            })
        );
    }

    #[test]
    fn test_longer_path_with_fewer_weight() {
        let g = WeightedGraph::from_edges(4, vec![(0, 3, 10), (0, 1, 1), (1, 2, 1), (2, 3, 1)]);
        let route = find_path(&g, 0, 3).unwrap();
        assert_eq!(route.path, vec![0, 1, 2, 3]);
        assert_eq!(route.cost, 3);
    }

    #[test]
    fn test_zero_weights_and_self_loops() {
        let g = WeightedGraph::from_edges(3, vec![(0, 0, 0), (0, 1, 0), (1, 1, 3), (1, 2, 0)]);
        let sp = shortest_paths(&g, 0).unwrap();
        assert_eq!(sp.distances(), &[Some(0), Some(0), Some(0)]);
        assert_eq!(sp.path(2), Ok(vec![0, 1, 2]));
    }

    #[test]
    fn test_idempotent() {
        let g = test_graph();
        let a = shortest_paths(&g, 1).unwrap();
        let b = shortest_paths(&g, 1).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.dist(0), None);
    }
}
