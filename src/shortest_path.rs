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

use serde::{Deserialize, Serialize};

use crate::constants::{Weight, WEIGHT_ZERO};
use crate::graph::VertexId;

/// The result of a successful shortest path query: the vertices from source to destination
/// (both included) and the sum of the edge weights along the way.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    source: VertexId,
    destination: VertexId,
    distance: Weight,
    vertices: Vec<VertexId>,
}

impl ShortestPath {
    pub fn new(
        source: VertexId,
        destination: VertexId,
        distance: Weight,
        vertices: Vec<VertexId>,
    ) -> Self {
        ShortestPath {
            source,
            destination,
            distance,
            vertices,
        }
    }

    pub fn singular(vertex: VertexId) -> Self {
        ShortestPath {
            source: vertex,
            destination: vertex,
            distance: WEIGHT_ZERO,
            vertices: vec![vertex],
        }
    }

    pub fn get_source(&self) -> VertexId {
        self.source
    }

    pub fn get_destination(&self) -> VertexId {
        self.destination
    }

    pub fn get_distance(&self) -> Weight {
        self.distance
    }

    pub fn get_vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn get_num_hops(&self) -> usize {
        self.vertices.len() - 1
    }
}
