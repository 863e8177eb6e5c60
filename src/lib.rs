/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

#[macro_use]
extern crate log;

pub use crate::constants::*;
pub use crate::dijkstra::ShortestPathCalculator;
pub use crate::error::{GraphError, Result};
pub use crate::graph::{Edge, Graph, Vertex, VertexId};
pub use crate::params::{Params, Selection};
pub use crate::shortest_path::ShortestPath;

mod constants;
mod dijkstra;
mod error;
#[cfg(test)]
mod floyd_warshall;
mod graph;
mod heap_item;
mod params;
mod shortest_path;
mod valid_flags;

/// Creates a graph without any vertices.
pub fn create_empty_graph() -> Graph {
    Graph::new()
}

/// Creates a vertex that does not belong to any graph yet. Use `Graph::add_vertex` to register
/// it, only then it can be joined with other vertices and used for path calculations.
pub fn create_vertex(name: impl Into<String>) -> Vertex {
    Vertex::new(name)
}

/// Creates a vertex with the given name and adds it to `graph`. Names do not need to be unique.
pub fn create_vertex_in_graph(graph: &mut Graph, name: impl Into<String>) -> VertexId {
    graph.create_vertex(name)
}

/// Connects `v1` and `v2` with an undirected edge of the given weight.
pub fn join(graph: &mut Graph, v1: VertexId, v2: VertexId, weight: Weight) -> Result<()> {
    graph.join(v1, v2, weight)
}

/// Calculates the shortest path from `source` to `destination`. Fails with
/// `GraphError::Unreachable` if there is no such path and with `GraphError::UnknownVertex` if
/// one of the vertices does not belong to `graph`.
pub fn get_shortest_path_between(
    source: VertexId,
    destination: VertexId,
    graph: &Graph,
) -> Result<ShortestPath> {
    get_shortest_path_between_with_params(source, destination, graph, &Params::default())
}

/// Like `get_shortest_path_between()`, but allows choosing how the search selects the next
/// vertex.
pub fn get_shortest_path_between_with_params(
    source: VertexId,
    destination: VertexId,
    graph: &Graph,
    params: &Params,
) -> Result<ShortestPath> {
    let mut calc = ShortestPathCalculator::with_params(graph.get_num_vertices(), params);
    calc.calc_path(graph, source, destination)
}

/// Creates a `ShortestPathCalculator` that can be used to run many shortest path calculations
/// in a row without allocating new search data every time. Use one calculator for each thread.
pub fn create_calculator(graph: &Graph) -> ShortestPathCalculator {
    ShortestPathCalculator::new(graph.get_num_vertices())
}

pub fn create_calculator_with_params(graph: &Graph, params: &Params) -> ShortestPathCalculator {
    ShortestPathCalculator::with_params(graph.get_num_vertices(), params)
}
