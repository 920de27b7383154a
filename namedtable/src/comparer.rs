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

//! Key comparison strategies.
//!
//! Every [`KeyIndexMap`](crate::index::KeyIndexMap) owns the comparer it was built
//! with. The compact representation only calls [`KeyComparer::equals`]; the hashed
//! representation calls both methods, so implementations must return the same hash
//! for any two keys they consider equal.

use std::hash::Hash;

const DEFAULT_SEED: u32 = 9001;

/// Equality and hashing over keys of type `K`.
pub trait KeyComparer<K> {
    /// Returns true if `a` and `b` identify the same slot.
    fn equals(&self, a: &K, b: &K) -> bool;

    /// Returns a 64-bit hash of `key`.
    fn hash(&self, key: &K) -> u64;
}

/// Comparer using the key's own [`Eq`] and [`Hash`] implementations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalComparer;

impl<K: Eq + Hash> KeyComparer<K> for NaturalComparer {
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }

    fn hash(&self, key: &K) -> u64 {
        let mut hasher = mur3::Hasher128::with_seed(DEFAULT_SEED);
        Hash::hash(key, &mut hasher);
        let (lo, _) = hasher.finish128();
        lo
    }
}

impl<K, C: KeyComparer<K> + ?Sized> KeyComparer<K> for &C {
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        (**self).equals(a, b)
    }

    #[inline]
    fn hash(&self, key: &K) -> u64 {
        (**self).hash(key)
    }
}
