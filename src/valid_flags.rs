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

/// Maintains a collection of N boolean flags that can efficiently be reset by incrementing a
/// single integer. Used to reset the per-vertex search data between queries without touching
/// every entry.
pub struct ValidFlags {
    valid_flags: Vec<u32>,
    valid_flag: u32,
}

impl ValidFlags {
    pub fn new(num_vertices: usize) -> Self {
        ValidFlags {
            valid_flags: vec![0; num_vertices],
            valid_flag: 1,
        }
    }

    /// Grows to `num_vertices` flags, new flags start out invalid.
    pub fn grow(&mut self, num_vertices: usize) {
        if num_vertices > self.valid_flags.len() {
            self.valid_flags.resize(num_vertices, 0);
        }
    }

    pub fn is_valid(&self, index: usize) -> bool {
        self.valid_flags[index] == self.valid_flag
    }

    pub fn set_valid(&mut self, index: usize) {
        self.valid_flags[index] = self.valid_flag;
    }

    pub fn invalidate_all(&mut self) {
        if self.valid_flag == u32::MAX {
            self.valid_flags.iter_mut().for_each(|f| *f = 0);
            self.valid_flag = 1;
        } else {
            self.valid_flag += 1;
        }
    }
}
