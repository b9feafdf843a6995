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


use time::OffsetDateTime;

use rustop::opts;
use tracing_subscriber::EnvFilter;

use rs_paths::edgelist;
use rs_paths::shortestpath::dijkstra;
use rs_paths::WeightedGraph;

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Compute shortest paths from a source vertex with Dijkstra's algorithm.";
        opt source:usize=0, desc:"The source vertex.";
        opt num:usize=1, desc:"Number of times the algorithm is repeated.";
        param file:String, desc:"Edge list file name";
    }
    .parse_or_exit();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let tstart = OffsetDateTime::now_utc();
    let g: WeightedGraph<u64> = edgelist::read(&args.file)?;
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("  number of nodes: {}", g.num_nodes());
    println!("  number of edges: {}", g.num_edges());

    let tstart = OffsetDateTime::now_utc();
    let mut sp = dijkstra::shortest_paths(&g, args.source)?;
    for _ in 1..args.num {
        sp = dijkstra::shortest_paths(&g, args.source)?;
    }
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());

    for v in 0..g.num_nodes() {
        match sp.route(v) {
            Ok(route) => println!("{}", route),
            Err(err) => println!("{}", err),
        }
    }

    Ok(())
}
