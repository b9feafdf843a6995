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

#![forbid(unsafe_code)]

//! Shortest paths in weighted graphs and shortest word ladders.
//!
//! The crate contains two searches:
//!
//! - [`shortestpath::dijkstra`] computes the shortest paths from a single
//!   source in a [`WeightedGraph`] with non-negative weights,
//! - [`ladder`] finds a shortest sequence of words transforming one word
//!   into another, changing a single character in each step.
//!
//! Both searches are synchronous and keep all working data local to a
//! call, the inputs are only borrowed.
//!
//! Diagnostics are emitted through [`tracing`], the crate does not install a
//! subscriber.

// # Data structures

pub mod graph;
pub use self::graph::{Edge, WeightedGraph};

pub mod collections;

pub mod error;
pub use self::error::Error;

// # Algorithms

pub mod ladder;
pub mod shortestpath;
pub use self::shortestpath::{Route, ShortestPaths};

// # Input

pub mod edgelist;
