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

use priority_queue::PriorityQueue;

use crate::constants::{Weight, INVALID_INDEX, WEIGHT_MAX, WEIGHT_ZERO};
use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use crate::heap_item::HeapItem;
use crate::params::{Params, Selection};
use crate::shortest_path::ShortestPath;
use crate::valid_flags::ValidFlags;

/// Runs Dijkstra queries on a `Graph`. All search data lives in the calculator and is reset at
/// the start of each query, so one calculator per thread can be reused for many queries and
/// graphs without the queries affecting each other.
pub struct ShortestPathCalculator {
    params: Params,
    data: Vec<Data>,
    valid_flags: ValidFlags,
    queue: PriorityQueue<usize, HeapItem>,
}

impl ShortestPathCalculator {
    pub fn new(num_vertices: usize) -> Self {
        ShortestPathCalculator::with_params(num_vertices, &Params::default())
    }

    pub fn with_params(num_vertices: usize, params: &Params) -> Self {
        ShortestPathCalculator {
            params: *params,
            data: (0..num_vertices).map(|_i| Data::new()).collect(),
            valid_flags: ValidFlags::new(num_vertices),
            queue: PriorityQueue::new(),
        }
    }

    pub fn get_params(&self) -> &Params {
        &self.params
    }

    pub fn calc_path(
        &mut self,
        graph: &Graph,
        source: VertexId,
        destination: VertexId,
    ) -> Result<ShortestPath> {
        self.do_calc_path(graph, source, destination)?;
        let path = self.build_path(graph, source, destination)?;
        debug!("{}", graph.render_path(&path));
        Ok(path)
    }

    pub fn calc_distance(
        &mut self,
        graph: &Graph,
        source: VertexId,
        destination: VertexId,
    ) -> Result<Weight> {
        self.do_calc_path(graph, source, destination)?;
        if source == destination {
            return Ok(WEIGHT_ZERO);
        }
        match self.get_weight(destination.index()) {
            WEIGHT_MAX => Err(unreachable(graph, source, destination)),
            weight => Ok(weight),
        }
    }

    fn do_calc_path(
        &mut self,
        graph: &Graph,
        source: VertexId,
        destination: VertexId,
    ) -> Result<()> {
        graph.check_vertex(source)?;
        graph.check_vertex(destination)?;
        let num_vertices = graph.get_num_vertices();
        self.reset(num_vertices);

        let start = source.index();
        let end = destination.index();
        self.update_vertex(start, WEIGHT_ZERO, INVALID_INDEX);
        if start == end {
            return Ok(());
        }
        if self.params.selection == Selection::PriorityQueue {
            self.queue.push(start, HeapItem::new(WEIGHT_ZERO, start));
        }

        while let Some(current) = self.select_next(num_vertices) {
            self.data[current].settled = true;
            self.relax_neighbours(graph, current);
            if log_enabled!(log::Level::Trace) {
                self.trace_vertices(graph);
            }
            if current == end {
                break;
            }
        }
        Ok(())
    }

    /// Resets the search data for all vertices of the graph that is about to be queried.
    fn reset(&mut self, num_vertices: usize) {
        if self.data.len() < num_vertices {
            self.data.resize_with(num_vertices, Data::new);
        }
        self.valid_flags.grow(num_vertices);
        self.valid_flags.invalidate_all();
        self.queue.clear();
    }

    /// Returns the unsettled vertex with the smallest distance or None if all reachable
    /// vertices are settled. Ties go to the vertex with the smallest index.
    fn select_next(&mut self, num_vertices: usize) -> Option<usize> {
        match self.params.selection {
            Selection::LinearScan => self.scan_for_next(num_vertices),
            Selection::PriorityQueue => self.queue.pop().map(|(index, _)| index),
        }
    }

    fn scan_for_next(&self, num_vertices: usize) -> Option<usize> {
        let mut best = INVALID_INDEX;
        let mut best_weight = WEIGHT_MAX;
        for index in 0..num_vertices {
            if self.is_settled(index) {
                continue;
            }
            let weight = self.get_weight(index);
            if weight < best_weight {
                best = index;
                best_weight = weight;
            }
        }
        if best == INVALID_INDEX {
            None
        } else {
            Some(best)
        }
    }

    fn relax_neighbours(&mut self, graph: &Graph, current: usize) {
        let current_weight = self.data[current].weight;
        for (adj, edge_weight) in graph.neighbours(current) {
            if self.is_settled(adj) {
                continue;
            }
            // a saturated sum equals WEIGHT_MAX and therefore never counts as an improvement
            let weight = current_weight.saturating_add(edge_weight);
            if weight < self.get_weight(adj) {
                self.update_vertex(adj, weight, current);
                if self.params.selection == Selection::PriorityQueue {
                    self.queue.push(adj, HeapItem::new(weight, adj));
                }
            }
        }
    }

    fn build_path(
        &self,
        graph: &Graph,
        source: VertexId,
        destination: VertexId,
    ) -> Result<ShortestPath> {
        if source == destination {
            return Ok(ShortestPath::singular(source));
        }
        let distance = self.get_weight(destination.index());
        if distance == WEIGHT_MAX {
            return Err(unreachable(graph, source, destination));
        }
        let mut path = Vec::new();
        let mut index = destination.index();
        while self.data[index].parent != INVALID_INDEX {
            path.push(graph.vertex_id(index));
            index = self.data[index].parent;
        }
        path.push(source);
        path.reverse();
        Ok(ShortestPath::new(source, destination, distance, path))
    }

    fn trace_vertices(&self, graph: &Graph) {
        for index in 0..graph.get_num_vertices() {
            if !self.valid_flags.is_valid(index) {
                continue;
            }
            let data = &self.data[index];
            if data.parent == INVALID_INDEX {
                trace!(
                    "{}, distance from source: {}, settled: {}",
                    graph.get_name(index),
                    data.weight,
                    data.settled
                );
            } else {
                trace!(
                    "{}, distance from source: {}, settled: {}, neighbour on shortest path: {}",
                    graph.get_name(index),
                    data.weight,
                    data.settled,
                    graph.get_name(data.parent)
                );
            }
        }
    }

    fn update_vertex(&mut self, index: usize, weight: Weight, parent: usize) {
        self.valid_flags.set_valid(index);
        self.data[index].settled = false;
        self.data[index].weight = weight;
        self.data[index].parent = parent;
    }

    fn is_settled(&self, index: usize) -> bool {
        self.valid_flags.is_valid(index) && self.data[index].settled
    }

    fn get_weight(&self, index: usize) -> Weight {
        if self.valid_flags.is_valid(index) {
            self.data[index].weight
        } else {
            WEIGHT_MAX
        }
    }
}

fn unreachable(graph: &Graph, source: VertexId, destination: VertexId) -> GraphError {
    GraphError::Unreachable {
        from: source,
        to: destination,
        from_name: graph.get_name(source.index()).to_string(),
        to_name: graph.get_name(destination.index()).to_string(),
    }
}

struct Data {
    settled: bool,
    weight: Weight,
    parent: usize,
}

impl Data {
    fn new() -> Self {
        Data {
            settled: false,
            weight: WEIGHT_MAX,
            parent: INVALID_INDEX,
        }
    }
}
