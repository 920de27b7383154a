// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::comparer::KeyComparer;
use crate::index::KeyIndexMap;
use crate::table::Axis;

/// State behind a record view. `target_index` is rewritten in place by the
/// structural algorithms whenever the record's position moves.
#[derive(Debug, Clone)]
pub(crate) struct RecordState<K> {
    pub name: K,
    pub target_index: usize,
}

/// Keys, positions and records of one axis.
///
/// `records` is as long as the axis capacity; slots `0..len` are occupied and slot
/// `i` holds the record whose `target_index` is `i`.
#[derive(Debug, Clone)]
pub(crate) struct AxisIndex<K, S> {
    pub axis: Axis,
    pub map: KeyIndexMap<K, S>,
    pub records: Vec<Option<RecordState<K>>>,
}

impl<K, S: KeyComparer<K>> AxisIndex<K, S> {
    pub fn new(axis: Axis, map: KeyIndexMap<K, S>) -> Self {
        Self {
            axis,
            map,
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    pub fn record(&self, position: usize) -> Option<&RecordState<K>> {
        if position < self.len() {
            self.records[position].as_ref()
        } else {
            None
        }
    }

    pub fn find(&self, key: &K) -> Option<&RecordState<K>> {
        self.map.get(key).and_then(|position| self.record(position))
    }

    /// Occupied records in position order.
    pub fn live(&self) -> &[Option<RecordState<K>>] {
        &self.records[..self.len()]
    }
}
