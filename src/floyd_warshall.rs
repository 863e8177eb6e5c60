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

use std::cmp;

use crate::constants::{Weight, WEIGHT_MAX};
use crate::graph::{Graph, VertexId};

/// All-pairs distances of a whole graph, only used to check Dijkstra results in tests.
pub struct FloydWarshall {
    num_vertices: usize,
    matrix: Vec<Weight>,
}

impl FloydWarshall {
    pub fn new(graph: &Graph) -> Self {
        let n = graph.get_num_vertices();
        let mut fw = FloydWarshall {
            num_vertices: n,
            matrix: vec![WEIGHT_MAX; n * n],
        };
        fw.prepare(graph);
        fw
    }

    fn prepare(&mut self, graph: &Graph) {
        let n = self.num_vertices;
        for i in 0..n {
            self.matrix[i * n + i] = 0;
        }
        for e in graph.get_edges() {
            let (a, b) = (e.a.index(), e.b.index());
            self.matrix[a * n + b] = cmp::min(self.matrix[a * n + b], e.weight);
            self.matrix[b * n + a] = cmp::min(self.matrix[b * n + a], e.weight);
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let weight_ik = self.matrix[i * n + k];
                    let weight_kj = self.matrix[k * n + j];
                    if weight_ik == WEIGHT_MAX || weight_kj == WEIGHT_MAX {
                        continue;
                    }
                    let idx = i * n + j;
                    self.matrix[idx] = cmp::min(self.matrix[idx], weight_ik + weight_kj)
                }
            }
        }
    }

    pub fn calc_weight(&self, source: VertexId, target: VertexId) -> Weight {
        self.matrix[source.index() * self.num_vertices + target.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_weights() {
        // 0 -- 1 -- 3
        // |         |
        // 4 -- 5 -- 6
        //      |    |
        //      7 -- 8    2
        let mut g = Graph::new();
        let v: Vec<VertexId> = (0..9).map(|i| g.create_vertex(format!("v{}", i))).collect();
        let edges = [
            (0, 1, 6),
            (0, 4, 1),
            (4, 5, 1),
            (5, 7, 1),
            (7, 8, 1),
            (8, 6, 1),
            (6, 3, 1),
            (3, 1, 1),
            (1, 3, 3),
            (5, 6, 4),
        ];
        for (a, b, w) in edges.iter() {
            g.join(v[*a], v[*b], *w).unwrap();
        }
        let fw = FloydWarshall::new(&g);
        assert_eq!(fw.calc_weight(v[0], v[3]), 6);
        assert_eq!(fw.calc_weight(v[3], v[0]), 6);
        assert_eq!(fw.calc_weight(v[5], v[3]), 4);
        assert_eq!(fw.calc_weight(v[1], v[3]), 1);
        assert_eq!(fw.calc_weight(v[1], v[1]), 0);
        assert_eq!(fw.calc_weight(v[6], v[4]), 4);
        assert_eq!(fw.calc_weight(v[2], v[2]), 0);
        assert_eq!(fw.calc_weight(v[2], v[0]), WEIGHT_MAX);
    }
}
