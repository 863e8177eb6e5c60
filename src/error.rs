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

use thiserror::Error;

use crate::constants::Weight;
use crate::graph::VertexId;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The handle was not created by the graph it is used with.
    #[error("vertex {0} is not part of this graph")]
    UnknownVertex(VertexId),

    #[error("there is no path from '{from_name}' ({from}) to '{to_name}' ({to})")]
    Unreachable {
        from: VertexId,
        to: VertexId,
        from_name: String,
        to_name: String,
    },

    /// Edge weights must stay below the distance used for unreached vertices.
    #[error("invalid edge weight {0}, must be smaller than {}", crate::constants::WEIGHT_MAX)]
    InvalidWeight(Weight),
}
