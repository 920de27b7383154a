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

//! Open-addressing key to position table.

use crate::comparer::KeyComparer;

const LOAD_FACTOR: f64 = 0.75;
const LG_MIN_LENGTH: u32 = 4;

/// Linear probing table. `states[i]` holds the probe distance of slot `i` plus one,
/// or zero when the slot is empty.
#[derive(Debug, Clone)]
pub(super) struct HashedMap<K> {
    keys: Vec<Option<K>>,
    positions: Vec<usize>,
    states: Vec<usize>,
    num_active: usize,
    load_threshold: usize,
}

impl<K> HashedMap<K> {
    /// Create a table able to hold `capacity` entries without resizing.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut length = 1usize << LG_MIN_LENGTH;
        while load_threshold(length) < capacity {
            length <<= 1;
        }
        Self::with_length(length)
    }

    fn with_length(length: usize) -> Self {
        debug_assert!(length.is_power_of_two(), "length must be power of 2");
        Self {
            keys: (0..length).map(|_| None).collect(),
            positions: vec![0; length],
            states: vec![0; length],
            num_active: 0,
            load_threshold: load_threshold(length),
        }
    }

    pub fn len(&self) -> usize {
        self.num_active
    }

    pub fn get<S: KeyComparer<K>>(&self, comparer: &S, key: &K) -> Option<usize> {
        self.find(comparer, key).map(|probe| self.positions[probe])
    }

    pub fn get_mut<S: KeyComparer<K>>(&mut self, comparer: &S, key: &K) -> Option<&mut usize> {
        self.find(comparer, key).map(|probe| &mut self.positions[probe])
    }

    /// Insert `key`, returning false and leaving the table untouched if it is present.
    pub fn insert<S: KeyComparer<K>>(&mut self, comparer: &S, key: K, position: usize) -> bool {
        if self.find(comparer, &key).is_some() {
            return false;
        }
        if self.num_active >= self.load_threshold {
            self.resize(comparer, self.keys.len() * 2);
        }
        self.put(comparer, key, position);
        true
    }

    pub fn remove<S: KeyComparer<K>>(&mut self, comparer: &S, key: &K) -> Option<usize> {
        let probe = self.find(comparer, key)?;
        let position = self.positions[probe];
        self.hash_delete(probe);
        self.num_active -= 1;
        Some(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.keys
            .iter()
            .zip(self.positions.iter().copied())
            .filter_map(|(key, position)| key.as_ref().map(|key| (key, position)))
    }

    pub fn positions_mut(&mut self) -> impl Iterator<Item = &mut usize> {
        self.states
            .iter()
            .zip(self.positions.iter_mut())
            .filter(|(state, _)| **state > 0)
            .map(|(_, position)| position)
    }

    pub fn into_entries(self) -> impl Iterator<Item = (K, usize)> {
        self.keys
            .into_iter()
            .zip(self.positions)
            .filter_map(|(key, position)| key.map(|key| (key, position)))
    }

    fn find<S: KeyComparer<K>>(&self, comparer: &S, key: &K) -> Option<usize> {
        let mask = self.keys.len() - 1;
        let mut probe = home_slot(comparer.hash(key), mask);
        while self.states[probe] > 0 {
            let matches = self.keys[probe]
                .as_ref()
                .is_some_and(|existing| comparer.equals(existing, key));
            if matches {
                return Some(probe);
            }
            probe = (probe + 1) & mask;
        }
        None
    }

    fn put<S: KeyComparer<K>>(&mut self, comparer: &S, key: K, position: usize) {
        let mask = self.keys.len() - 1;
        let mut probe = home_slot(comparer.hash(&key), mask);
        let mut drift: usize = 1;
        while self.states[probe] != 0 {
            probe = (probe + 1) & mask;
            drift += 1;
        }
        self.keys[probe] = Some(key);
        self.positions[probe] = position;
        self.states[probe] = drift;
        self.num_active += 1;
    }

    fn resize<S: KeyComparer<K>>(&mut self, comparer: &S, new_length: usize) {
        let old_keys = std::mem::take(&mut self.keys);
        let old_positions = std::mem::take(&mut self.positions);
        *self = Self::with_length(new_length);
        for (key, position) in old_keys.into_iter().zip(old_positions) {
            if let Some(key) = key {
                self.put(comparer, key, position);
            }
        }
    }

    /// Empty `delete_probe` and pull later entries of the same cluster back so that
    /// no lookup walks past a hole.
    fn hash_delete(&mut self, mut delete_probe: usize) {
        self.states[delete_probe] = 0;
        self.keys[delete_probe] = None;
        let mut drift: usize = 1;
        let mask = self.keys.len() - 1;
        let mut probe = (delete_probe + drift) & mask;
        while self.states[probe] != 0 {
            if self.states[probe] > drift {
                self.keys[delete_probe] = self.keys[probe].take();
                self.positions[delete_probe] = self.positions[probe];
                self.states[delete_probe] = self.states[probe] - drift;
                self.states[probe] = 0;
                drift = 0;
                delete_probe = probe;
            }
            probe = (probe + 1) & mask;
            drift += 1;
        }
    }
}

/// Comparers may leave the low bits of their hash constant, so the hash is
/// finalized before it is masked down to a slot.
fn home_slot(hash: u64, mask: usize) -> usize {
    (fmix64(hash) as usize) & mask
}

fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^ (k >> 33)
}

fn load_threshold(length: usize) -> usize {
    (length as f64 * LOAD_FACTOR) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::NaturalComparer;

    /// Sends every key to the same home slot.
    struct CollidingComparer;

    impl KeyComparer<u32> for CollidingComparer {
        fn equals(&self, a: &u32, b: &u32) -> bool {
            a == b
        }

        fn hash(&self, _key: &u32) -> u64 {
            7
        }
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut map = HashedMap::with_capacity(4);
        assert!(map.insert(&NaturalComparer, "a", 0));
        assert!(!map.insert(&NaturalComparer, "a", 5));
        assert_eq!(map.get(&NaturalComparer, &"a"), Some(0));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_grows_past_load_factor() {
        let mut map = HashedMap::with_capacity(1);
        for i in 0..1000u64 {
            assert!(map.insert(&NaturalComparer, i, i as usize));
        }
        assert_eq!(map.len(), 1000);
        for i in 0..1000u64 {
            assert_eq!(map.get(&NaturalComparer, &i), Some(i as usize));
        }
    }

    #[test]
    fn test_delete_within_collision_cluster() {
        let mut map = HashedMap::with_capacity(8);
        for i in 0..8u32 {
            assert!(map.insert(&CollidingComparer, i, i as usize * 10));
        }

        assert_eq!(map.remove(&CollidingComparer, &0), Some(0));
        assert_eq!(map.remove(&CollidingComparer, &5), Some(50));
        assert_eq!(map.remove(&CollidingComparer, &5), None);

        for i in [1u32, 2, 3, 4, 6, 7] {
            assert_eq!(map.get(&CollidingComparer, &i), Some(i as usize * 10));
        }
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn test_long_collision_cluster() {
        let mut map = HashedMap::with_capacity(16);
        for i in 0..1500u32 {
            assert!(map.insert(&CollidingComparer, i, i as usize));
        }
        assert_eq!(map.states.iter().max(), Some(&1500));

        for i in (0..1500u32).filter(|i| i % 3 == 0) {
            assert_eq!(map.remove(&CollidingComparer, &i), Some(i as usize));
        }
        assert_eq!(map.len(), 1000);
        for i in 0..1500u32 {
            let expected = (i % 3 != 0).then_some(i as usize);
            assert_eq!(map.get(&CollidingComparer, &i), expected);
        }
    }

    #[test]
    fn test_home_slot_mixes_high_bits() {
        let mask = (1usize << 10) - 1;
        let mut slots: Vec<usize> = (0..64u64).map(|i| home_slot(i << 40, mask)).collect();
        slots.sort_unstable();
        slots.dedup();
        assert!(slots.len() > 32);
    }

    #[test]
    fn test_positions_mut_touches_live_entries_only() {
        let mut map = HashedMap::with_capacity(4);
        map.insert(&NaturalComparer, 'x', 1);
        map.insert(&NaturalComparer, 'y', 2);
        for position in map.positions_mut() {
            *position += 10;
        }

        let mut entries: Vec<_> = map.into_entries().collect();
        entries.sort();
        assert_eq!(entries, vec![('x', 11), ('y', 12)]);
    }
}
