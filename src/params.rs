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

/// How the next vertex to settle is picked. Both strategies pick the unsettled vertex with the
/// smallest distance and resolve ties by insertion order, so they return identical paths.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Scans all vertices in every step, O(V^2 + E). Fine for small graphs.
    LinearScan,
    /// Indexed min priority queue with decrease-key, O((V + E) log V).
    PriorityQueue,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Params {
    pub selection: Selection,
}

impl Params {
    pub fn new(selection: Selection) -> Self {
        Params { selection }
    }
}

impl Default for Params {
    fn default() -> Self {
        Params::new(Selection::LinearScan)
    }
}
