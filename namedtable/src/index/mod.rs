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

//! Key to position maps with a small-size linear representation.
//!
//! A [`KeyIndexMap`] starts out *compact*: keys and positions live in two parallel
//! vectors that are scanned linearly, which beats hashing while the map is small.
//! Once an insert would take the map past its threshold it is *promoted* to an
//! open-addressing hash table; a removal that brings the count back down to the
//! threshold *demotes* it again. Exactly one representation is active at a time.
//!
//! # Usage
//!
//! ```rust
//! # use namedtable::index::KeyIndexMap;
//! # use namedtable::index::Representation;
//! let mut map = KeyIndexMap::with_threshold(2).unwrap();
//! map.add("a", 0).unwrap();
//! map.add("b", 1).unwrap();
//! assert_eq!(map.representation(), Representation::Compact);
//!
//! map.add("c", 2).unwrap();
//! assert_eq!(map.representation(), Representation::Hashed);
//! assert_eq!(map.get(&"b"), Some(1));
//!
//! map.remove(&"a");
//! assert_eq!(map.representation(), Representation::Compact);
//! ```

mod compact;
mod hashed;

use std::fmt;
use std::hash::Hash;

use self::compact::CompactMap;
use self::hashed::HashedMap;
use crate::comparer::KeyComparer;
use crate::comparer::NaturalComparer;
use crate::error::Error;
use crate::error::ErrorKind;

/// Number of entries a map keeps in its compact representation by default.
pub const DEFAULT_THRESHOLD: usize = 13;

const AXIS: &str = "key";

/// The active storage of a [`KeyIndexMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// Parallel key and position vectors with linear lookup.
    Compact,
    /// Open-addressing hash table.
    Hashed,
}

#[derive(Clone)]
enum Repr<K> {
    Compact(CompactMap<K>),
    Hashed(HashedMap<K>),
}

/// Map from unique keys to dense positions.
#[derive(Clone)]
pub struct KeyIndexMap<K, S = NaturalComparer> {
    threshold: usize,
    comparer: S,
    repr: Repr<K>,
}

impl<K: Eq + Hash> KeyIndexMap<K> {
    /// Create an empty map with natural key equality and the default threshold.
    pub fn new() -> Self {
        Self::with_comparer(NaturalComparer)
    }

    /// Create an empty map with natural key equality.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`] if `threshold` is zero.
    pub fn with_threshold(threshold: usize) -> Result<Self, Error> {
        Self::with_threshold_and_comparer(threshold, NaturalComparer)
    }
}

impl<K: Eq + Hash> Default for KeyIndexMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S: KeyComparer<K>> KeyIndexMap<K, S> {
    /// Create an empty map using `comparer` and the default threshold.
    pub fn with_comparer(comparer: S) -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            comparer,
            repr: Repr::Compact(CompactMap::with_capacity(DEFAULT_THRESHOLD)),
        }
    }

    /// Create an empty map using `comparer` that stays compact up to `threshold` keys.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`] if `threshold` is zero.
    pub fn with_threshold_and_comparer(threshold: usize, comparer: S) -> Result<Self, Error> {
        check_threshold(threshold)?;
        Ok(Self {
            threshold,
            comparer,
            repr: Repr::Compact(CompactMap::with_capacity(threshold.min(DEFAULT_THRESHOLD))),
        })
    }

    /// Maximum number of keys held in the compact representation.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// The comparer deciding key equality and hashing.
    pub fn comparer(&self) -> &S {
        &self.comparer
    }

    /// The representation currently in use.
    pub fn representation(&self) -> Representation {
        match &self.repr {
            Repr::Compact(_) => Representation::Compact,
            Repr::Hashed(_) => Representation::Hashed,
        }
    }

    /// Number of keys in the map.
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Compact(map) => map.len(),
            Repr::Hashed(map) => map.len(),
        }
    }

    /// Returns true if the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Return the position mapped to `key`, if any.
    pub fn get(&self, key: &K) -> Option<usize> {
        match &self.repr {
            Repr::Compact(map) => map.get(&self.comparer, key),
            Repr::Hashed(map) => map.get(&self.comparer, key),
        }
    }

    /// Return the position mapped to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::KeyNotFound`] if the key is absent.
    pub fn try_get(&self, key: &K) -> Result<usize, Error> {
        self.get(key).ok_or_else(|| Error::key_not_found(AXIS))
    }

    /// Map `key` to `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateKey`] if the key is already present; the map is
    /// left unchanged.
    pub fn add(&mut self, key: K, position: usize) -> Result<(), Error> {
        if self.contains_key(&key) {
            return Err(Error::duplicate_key(AXIS));
        }
        let promote = matches!(&self.repr, Repr::Compact(map) if map.len() + 1 > self.threshold);
        if promote {
            self.promote();
        }
        match &mut self.repr {
            Repr::Compact(map) => map.push(key, position),
            Repr::Hashed(map) => {
                let inserted = map.insert(&self.comparer, key, position);
                debug_assert!(inserted, "duplicate checked above");
            }
        }
        Ok(())
    }

    /// Overwrite the position of an existing key.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::KeyNotFound`] if the key is absent.
    pub fn set(&mut self, key: &K, position: usize) -> Result<(), Error> {
        let slot = match &mut self.repr {
            Repr::Compact(map) => map.get_mut(&self.comparer, key),
            Repr::Hashed(map) => map.get_mut(&self.comparer, key),
        };
        match slot {
            Some(slot) => {
                *slot = position;
                Ok(())
            }
            None => Err(Error::key_not_found(AXIS)),
        }
    }

    /// Remove `key`, returning the position it was mapped to.
    pub fn remove(&mut self, key: &K) -> Option<usize> {
        let removed = match &mut self.repr {
            Repr::Compact(map) => map.remove(&self.comparer, key),
            Repr::Hashed(map) => map.remove(&self.comparer, key),
        };
        if removed.is_some()
            && self.representation() == Representation::Hashed
            && self.len() == self.threshold
        {
            self.demote();
        }
        removed
    }

    /// Remove every key and fall back to the compact representation.
    pub fn clear(&mut self) {
        self.repr = Repr::Compact(CompactMap::with_capacity(self.threshold.min(DEFAULT_THRESHOLD)));
    }

    /// Iterate over `(key, position)` pairs in no particular order.
    pub fn iter(&self) -> Iter<'_, K> {
        let inner: Box<dyn Iterator<Item = (&K, usize)> + '_> = match &self.repr {
            Repr::Compact(map) => Box::new(map.iter()),
            Repr::Hashed(map) => Box::new(map.iter()),
        };
        Iter { inner }
    }

    /// Iterate over the keys in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Apply `f` to every stored position.
    pub(crate) fn update_positions(&mut self, mut f: impl FnMut(&mut usize)) {
        match &mut self.repr {
            Repr::Compact(map) => map.positions_mut().for_each(&mut f),
            Repr::Hashed(map) => map.positions_mut().for_each(&mut f),
        }
    }

    fn promote(&mut self) {
        let placeholder = Repr::Compact(CompactMap::with_capacity(0));
        let Repr::Compact(map) = std::mem::replace(&mut self.repr, placeholder) else {
            unreachable!("promote is only called on a compact map");
        };
        let mut hashed = HashedMap::with_capacity(map.len() + 1);
        for (key, position) in map.into_entries() {
            hashed.insert(&self.comparer, key, position);
        }
        tracing::debug!(
            len = hashed.len(),
            threshold = self.threshold,
            "promoted key index map to hashed"
        );
        self.repr = Repr::Hashed(hashed);
    }

    fn demote(&mut self) {
        let placeholder = Repr::Compact(CompactMap::with_capacity(0));
        let Repr::Hashed(map) = std::mem::replace(&mut self.repr, placeholder) else {
            unreachable!("demote is only called on a hashed map");
        };
        let mut entries: Vec<(K, usize)> = map.into_entries().collect();
        entries.sort_by_key(|(_, position)| *position);
        tracing::debug!(
            len = entries.len(),
            threshold = self.threshold,
            "demoted key index map to compact"
        );
        self.repr = Repr::Compact(CompactMap::from_entries(entries));
    }
}

impl<K: fmt::Debug, S> fmt::Debug for KeyIndexMap<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        match &self.repr {
            Repr::Compact(inner) => map.entries(inner.iter()),
            Repr::Hashed(inner) => map.entries(inner.iter()),
        };
        map.finish()
    }
}

impl<'a, K, S: KeyComparer<K>> IntoIterator for &'a KeyIndexMap<K, S> {
    type Item = (&'a K, usize);
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`KeyIndexMap`].
pub struct Iter<'a, K> {
    inner: Box<dyn Iterator<Item = (&'a K, usize)> + 'a>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = (&'a K, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

pub(crate) fn check_threshold(threshold: usize) -> Result<(), Error> {
    if threshold == 0 {
        return Err(
            Error::new(ErrorKind::ConfigInvalid, "threshold must be greater than zero")
                .with_context("threshold", threshold),
        );
    }
    Ok(())
}
