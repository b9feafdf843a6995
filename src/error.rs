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

//! Errors reported by the shortest path algorithms.

use thiserror::Error;

/// Error of a shortest path computation.
///
/// Note that "not found" is usually *not* an error: the algorithms report
/// unreachable nodes structurally (as `None` distances). Only the checked
/// accessors like [`ShortestPaths::path`][crate::shortestpath::ShortestPaths::path]
/// turn an unreachable destination into [`Error::Unreachable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A node id is not in `0..num_nodes`.
    #[error("invalid vertex {vertex} (graph has {num_nodes} vertices)")]
    InvalidVertex { vertex: usize, num_nodes: usize },

    /// The destination cannot be reached from the source.
    #[error("vertex {vertex} is not reachable from the source")]
    Unreachable { vertex: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
