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

/// Parallel key and position sequences searched linearly.
#[derive(Debug, Clone)]
pub(super) struct CompactMap<K> {
    keys: Vec<K>,
    positions: Vec<usize>,
}

impl<K> CompactMap<K> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
        }
    }

    /// Build from pairs already known to hold distinct keys.
    pub fn from_entries(entries: Vec<(K, usize)>) -> Self {
        let (keys, positions) = entries.into_iter().unzip();
        Self { keys, positions }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Slot of `key` in the sequences, if present.
    pub fn find<S: KeyComparer<K>>(&self, comparer: &S, key: &K) -> Option<usize> {
        self.keys.iter().position(|existing| comparer.equals(existing, key))
    }

    pub fn get<S: KeyComparer<K>>(&self, comparer: &S, key: &K) -> Option<usize> {
        self.find(comparer, key).map(|slot| self.positions[slot])
    }

    pub fn get_mut<S: KeyComparer<K>>(&mut self, comparer: &S, key: &K) -> Option<&mut usize> {
        self.find(comparer, key).map(|slot| &mut self.positions[slot])
    }

    /// Append without checking for duplicates; callers look the key up first.
    pub fn push(&mut self, key: K, position: usize) {
        self.keys.push(key);
        self.positions.push(position);
    }

    pub fn remove<S: KeyComparer<K>>(&mut self, comparer: &S, key: &K) -> Option<usize> {
        let slot = self.find(comparer, key)?;
        self.keys.remove(slot);
        Some(self.positions.remove(slot))
    }

    pub fn into_entries(self) -> impl Iterator<Item = (K, usize)> {
        self.keys.into_iter().zip(self.positions)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.keys.iter().zip(self.positions.iter().copied())
    }

    pub fn positions_mut(&mut self) -> impl Iterator<Item = &mut usize> {
        self.positions.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::NaturalComparer;

    #[test]
    fn test_find_uses_insertion_slots() {
        let mut map = CompactMap::with_capacity(4);
        map.push("a", 2);
        map.push("b", 0);
        map.push("c", 1);

        assert_eq!(map.find(&NaturalComparer, &"b"), Some(1));
        assert_eq!(map.get(&NaturalComparer, &"c"), Some(1));
        assert_eq!(map.get(&NaturalComparer, &"z"), None);
    }

    #[test]
    fn test_remove_keeps_sequences_parallel() {
        let mut map = CompactMap::with_capacity(4);
        map.push(10u32, 0);
        map.push(20u32, 1);
        map.push(30u32, 2);

        assert_eq!(map.remove(&NaturalComparer, &20), Some(1));
        assert_eq!(map.remove(&NaturalComparer, &20), None);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&NaturalComparer, &30), Some(2));

        let entries: Vec<_> = map.into_entries().collect();
        assert_eq!(entries, vec![(10, 0), (30, 2)]);
    }
}
