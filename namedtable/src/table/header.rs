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
use crate::error::Error;
use crate::index::KeyIndexMap;
use crate::table::Axis;
use crate::table::Record;
use crate::table::RecordMut;
use crate::table::Records;
use crate::table::axis::AxisIndex;
use crate::table::grid::Grid;
use crate::table::structure;

/// Read access to the keys and records of one axis.
///
/// `N`/`NS` are the key type and comparer of this axis, `K`/`KS` those of the
/// opposite axis.
pub struct Header<'a, N, K, T, NS, KS> {
    index: &'a AxisIndex<N, NS>,
    opposite: &'a KeyIndexMap<K, KS>,
    cells: &'a Grid<T>,
}

impl<N, K, T, NS, KS> Clone for Header<'_, N, K, T, NS, KS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, K, T, NS, KS> Copy for Header<'_, N, K, T, NS, KS> {}

impl<'a, N, K, T, NS, KS> Header<'a, N, K, T, NS, KS>
where
    NS: KeyComparer<N>,
    KS: KeyComparer<K>,
{
    pub(crate) fn new(
        index: &'a AxisIndex<N, NS>,
        opposite: &'a KeyIndexMap<K, KS>,
        cells: &'a Grid<T>,
    ) -> Self {
        Self {
            index,
            opposite,
            cells,
        }
    }

    /// The axis this header describes.
    pub fn axis(&self) -> Axis {
        self.index.axis
    }

    /// Number of keys on this axis.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if this axis has no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `key` is present on this axis.
    pub fn contains(&self, key: &N) -> bool {
        self.index.map.contains_key(key)
    }

    /// Position of `key`, if present.
    pub fn index_of(&self, key: &N) -> Option<usize> {
        self.index.map.get(key)
    }

    /// Record bound to `key`, if present.
    pub fn get(&self, key: &N) -> Option<Record<'a, N, K, T, KS>> {
        self.index
            .find(key)
            .map(|state| Record::new(state, self.index.axis, self.opposite, self.cells))
    }

    /// Record bound to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::KeyNotFound`](crate::error::ErrorKind::KeyNotFound) naming
    /// this axis if the key is absent.
    pub fn record(&self, key: &N) -> Result<Record<'a, N, K, T, KS>, Error> {
        self.get(key)
            .ok_or_else(|| Error::key_not_found(self.index.axis.name()))
    }

    /// Record at `position`, if occupied.
    pub fn at(&self, position: usize) -> Option<Record<'a, N, K, T, KS>> {
        self.index
            .record(position)
            .map(|state| Record::new(state, self.index.axis, self.opposite, self.cells))
    }

    /// Keys in position order.
    pub fn keys(&self) -> impl Iterator<Item = &'a N> + use<'a, N, K, T, NS, KS> {
        self.index
            .live()
            .iter()
            .filter_map(|state| state.as_ref().map(|state| &state.name))
    }

    /// Records in position order.
    pub fn iter(&self) -> Records<'a, N, K, T, KS> {
        Records::new(
            self.index.live(),
            self.index.axis,
            self.opposite,
            self.cells,
        )
    }
}

impl<'a, N, K, T, NS, KS> IntoIterator for Header<'a, N, K, T, NS, KS>
where
    NS: KeyComparer<N>,
    KS: KeyComparer<K>,
{
    type Item = Record<'a, N, K, T, KS>;
    type IntoIter = Records<'a, N, K, T, KS>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Structural access to one axis: adding, inserting and removing keys.
pub struct HeaderMut<'a, N, K, T, NS, KS> {
    index: &'a mut AxisIndex<N, NS>,
    opposite: &'a KeyIndexMap<K, KS>,
    cells: &'a mut Grid<T>,
}

impl<'a, N, K, T, NS, KS> HeaderMut<'a, N, K, T, NS, KS>
where
    N: Clone,
    T: Default,
    NS: KeyComparer<N>,
    KS: KeyComparer<K>,
{
    pub(crate) fn new(
        index: &'a mut AxisIndex<N, NS>,
        opposite: &'a KeyIndexMap<K, KS>,
        cells: &'a mut Grid<T>,
    ) -> Self {
        Self {
            index,
            opposite,
            cells,
        }
    }

    /// Reborrow as a read-only header.
    pub fn as_header(&self) -> Header<'_, N, K, T, NS, KS> {
        Header::new(&*self.index, self.opposite, &*self.cells)
    }

    /// Number of keys on this axis.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if this axis has no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `key` is present on this axis.
    pub fn contains(&self, key: &N) -> bool {
        self.index.map.contains_key(key)
    }

    /// Position of `key`, if present.
    pub fn index_of(&self, key: &N) -> Option<usize> {
        self.index.map.get(key)
    }

    /// Record bound to `key`, if present.
    pub fn get(&self, key: &N) -> Option<Record<'_, N, K, T, KS>> {
        self.as_header().get(key)
    }

    /// See [`Header::record`].
    pub fn record(&self, key: &N) -> Result<Record<'_, N, K, T, KS>, Error> {
        self.as_header().record(key)
    }

    /// Record at `position`, if occupied.
    pub fn at(&self, position: usize) -> Option<Record<'_, N, K, T, KS>> {
        self.as_header().at(position)
    }

    /// Keys in position order.
    pub fn keys(&self) -> impl Iterator<Item = &N> {
        self.as_header().keys()
    }

    /// Records in position order.
    pub fn iter(&self) -> Records<'_, N, K, T, KS> {
        self.as_header().iter()
    }

    /// Append `key` after the last position.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateKey`](crate::error::ErrorKind::DuplicateKey) if
    /// the key is already present.
    pub fn add(&mut self, key: N) -> Result<(), Error> {
        let at = self.index.len();
        self.insert(at, key)
    }

    /// Insert `key` at `position`, moving the keys at `position..` up by one.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateKey`](crate::error::ErrorKind::DuplicateKey) if
    /// the key is already present, or
    /// [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange) if
    /// `position > len`. Nothing is changed on error.
    pub fn insert(&mut self, position: usize, key: N) -> Result<(), Error> {
        let other_len = self.opposite.len();
        structure::insert(self.index, self.cells, other_len, key, position)
    }

    /// Remove `key` and its cells. Returns whether the key was present.
    pub fn remove(&mut self, key: &N) -> bool {
        let other_len = self.opposite.len();
        structure::remove(self.index, self.cells, other_len, key)
    }

    /// Remove the key at `position` and its cells, returning the key.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if `position >= len`.
    pub fn remove_at(&mut self, position: usize) -> Result<N, Error> {
        let other_len = self.opposite.len();
        structure::remove_at(self.index, self.cells, other_len, position)
    }

    /// Remove every key of this axis. The opposite axis keeps its keys.
    pub fn clear(&mut self) {
        structure::clear(self.index, self.cells);
    }

    /// Writable record bound to `key`, if present.
    pub fn get_mut(&mut self, key: &N) -> Option<RecordMut<'_, N, K, T, KS>> {
        let position = self.index.map.get(key)?;
        self.at_mut(position)
    }

    /// Writable record at `position`, if occupied.
    pub fn at_mut(&mut self, position: usize) -> Option<RecordMut<'_, N, K, T, KS>> {
        let axis = self.index.axis;
        let state = self.index.record(position)?;
        Some(RecordMut::new(state, axis, self.opposite, self.cells))
    }
}
