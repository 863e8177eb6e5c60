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

use std::cmp::Ordering;

use crate::constants::Weight;

/// Priority of a vertex in the Dijkstra queue. The queue pops the *greatest* item, so the
/// ordering is reversed: smaller distances come first and equal distances are resolved by
/// the smaller vertex index, which is the same vertex the linear scan picks.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct HeapItem {
    pub weight: Weight,
    pub index: usize,
}

impl HeapItem {
    pub fn new(weight: Weight, index: usize) -> HeapItem {
        HeapItem { weight, index }
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &HeapItem) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.index.cmp(&other.index))
            .reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smaller_weight_first() {
        assert!(HeapItem::new(3, 7) > HeapItem::new(4, 0));
    }

    #[test]
    fn ties_by_index() {
        assert!(HeapItem::new(3, 1) > HeapItem::new(3, 2));
        assert_eq!(
            Some(HeapItem::new(5, 0)),
            vec![HeapItem::new(5, 4), HeapItem::new(5, 0), HeapItem::new(6, 0)]
                .into_iter()
                .max()
        );
    }
}
