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

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::constants::{Weight, WEIGHT_MAX};
use crate::error::{GraphError, Result};
use crate::shortest_path::ShortestPath;

static NEXT_GRAPH_ID: AtomicUsize = AtomicUsize::new(0);

/// Handle of a vertex inside the graph that created it. Two vertices with the same name are
/// still different vertices, equality only depends on the handle.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    graph: usize,
    index: usize,
}

impl VertexId {
    pub(crate) fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}/{}", self.graph, self.index)
    }
}

/// A named vertex along with its (undirected) adjacency. `neighbours[i]` is connected to this
/// vertex by an edge with weight `neighbour_weights[i]`.
#[derive(Debug)]
pub struct Vertex {
    name: String,
    neighbours: Vec<VertexId>,
    neighbour_weights: Vec<Weight>,
}

impl Vertex {
    /// Creates a vertex that is not part of any graph yet, see `Graph::add_vertex`.
    pub fn new(name: impl Into<String>) -> Self {
        Vertex {
            name: name.into(),
            neighbours: Vec::new(),
            neighbour_weights: Vec::new(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_neighbours(&self) -> &[VertexId] {
        &self.neighbours
    }

    pub fn get_neighbour_weights(&self) -> &[Weight] {
        &self.neighbour_weights
    }

    pub fn get_degree(&self) -> usize {
        self.neighbours.len()
    }

    fn add_neighbour(&mut self, neighbour: VertexId, weight: Weight) {
        self.neighbours.push(neighbour);
        self.neighbour_weights.push(weight);
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId, weight: Weight) -> Edge {
        Edge { a, b, weight }
    }

    pub fn unit_test_output_string(&self) -> String {
        format!("g.join(v[{}], v[{}], {})?;", self.a.index, self.b.index, self.weight)
    }
}

/// An undirected graph with non-negative edge weights. Vertices and edges can only be added,
/// never removed, so handles stay valid for the lifetime of the graph.
pub struct Graph {
    id: usize,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Registers a vertex created with `Vertex::new` and returns its handle.
    pub fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        let id = self.vertex_id(self.vertices.len());
        self.vertices.push(vertex);
        id
    }

    pub fn create_vertex(&mut self, name: impl Into<String>) -> VertexId {
        self.add_vertex(Vertex::new(name))
    }

    /// Connects `a` and `b` with an undirected edge. Loops are skipped since they can never be
    /// part of a shortest path. Parallel edges are kept.
    pub fn join(&mut self, a: VertexId, b: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        if weight == WEIGHT_MAX {
            return Err(GraphError::InvalidWeight(weight));
        }
        if a == b {
            warn!(
                "Loop edges are not allowed. Skipped edge! vertex: {}, weight: {}",
                self.vertices[a.index].name, weight
            );
            return Ok(());
        }
        self.vertices[a.index].add_neighbour(b, weight);
        self.vertices[b.index].add_neighbour(a, weight);
        self.edges.push(Edge::new(a, b, weight));
        Ok(())
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex.graph == self.id && vertex.index < self.vertices.len()
    }

    pub fn vertex(&self, vertex: VertexId) -> Result<&Vertex> {
        self.check_vertex(vertex)?;
        Ok(&self.vertices[vertex.index])
    }

    pub fn get_num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn get_num_edges(&self) -> usize {
        self.edges.len()
    }

    /// All edges in the order they were joined, each undirected edge listed once.
    pub fn get_edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Handles of all vertices in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(move |index| self.vertex_id(index))
    }

    pub fn vertices_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = VertexId> + 'a {
        self.vertex_ids().filter(move |v| self.vertices[v.index].name == name)
    }

    /// The smallest weight among the edges connecting `a` and `b`, if there are any.
    pub fn edge_weight(&self, a: VertexId, b: VertexId) -> Option<Weight> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        let vertex = &self.vertices[a.index];
        vertex
            .neighbours
            .iter()
            .zip(vertex.neighbour_weights.iter())
            .filter(|(n, _)| **n == b)
            .map(|(_, w)| *w)
            .min()
    }

    /// Human readable form of a vertex and its neighbours, like
    /// `v1, neighbours with distances: v2:7, v3:2`
    pub fn render_vertex(&self, vertex: VertexId) -> Result<String> {
        let v = self.vertex(vertex)?;
        if v.neighbours.is_empty() {
            return Ok(v.name.clone());
        }
        let neighbours = v
            .neighbours
            .iter()
            .zip(v.neighbour_weights.iter())
            .map(|(n, w)| format!("{}:{}", self.vertices[n.index].name, w))
            .collect::<Vec<String>>()
            .join(", ");
        Ok(format!("{}, neighbours with distances: {}", v.name, neighbours))
    }

    pub fn render_path(&self, path: &ShortestPath) -> String {
        let names = path
            .get_vertices()
            .iter()
            .map(|v| match self.vertex(*v) {
                Ok(vertex) => vertex.name.clone(),
                Err(_) => v.to_string(),
            })
            .collect::<Vec<String>>()
            .join("-->");
        format!(
            "Shortest path (distance: {}) is: {}",
            path.get_distance(),
            names
        )
    }

    pub(crate) fn vertex_id(&self, index: usize) -> VertexId {
        VertexId {
            graph: self.id,
            index,
        }
    }

    pub(crate) fn get_name(&self, index: usize) -> &str {
        &self.vertices[index].name
    }

    pub(crate) fn neighbours(&self, index: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        let vertex = &self.vertices[index];
        vertex
            .neighbours
            .iter()
            .zip(vertex.neighbour_weights.iter())
            .map(|(n, w)| (n.index, *w))
    }

    pub(crate) fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(vertex))
        }
    }

    pub fn unit_test_output_string(&self) -> String {
        let mut lines = vec![format!(
            "let v: Vec<VertexId> = (0..{}).map(|i| g.create_vertex(i.to_string())).collect();",
            self.vertices.len()
        )];
        lines.extend(self.edges.iter().map(|e| e.unit_test_output_string()));
        lines.join("\n") + "\n"
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.unit_test_output_string())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
