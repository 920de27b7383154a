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
use crate::error::ErrorKind;
use crate::index::KeyIndexMap;
use crate::table::Axis;
use crate::table::RecordCells;
use crate::table::axis::RecordState;
use crate::table::grid::Grid;

/// Read view of one column or row.
///
/// `N` is the key type of the record's own axis, `K` and `S` the key type and
/// comparer of the opposite axis, which is what the record is indexed by.
#[derive(Debug)]
pub struct Record<'a, N, K, T, S> {
    state: &'a RecordState<N>,
    axis: Axis,
    opposite: &'a KeyIndexMap<K, S>,
    cells: &'a Grid<T>,
}

impl<N, K, T, S> Clone for Record<'_, N, K, T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, K, T, S> Copy for Record<'_, N, K, T, S> {}

impl<'a, N, K, T, S: KeyComparer<K>> Record<'a, N, K, T, S> {
    pub(crate) fn new(
        state: &'a RecordState<N>,
        axis: Axis,
        opposite: &'a KeyIndexMap<K, S>,
        cells: &'a Grid<T>,
    ) -> Self {
        Self {
            state,
            axis,
            opposite,
            cells,
        }
    }

    /// The key this record is bound to.
    pub fn name(&self) -> &'a N {
        &self.state.name
    }

    /// Current position of the record on its own axis.
    pub fn target_index(&self) -> usize {
        self.state.target_index
    }

    /// The axis this record lies on.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Number of cells, i.e. the count of the opposite axis.
    pub fn len(&self) -> usize {
        self.opposite.len()
    }

    /// Returns true if the opposite axis has no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the opposite axis has `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.opposite.contains_key(key)
    }

    /// Position of `key` on the opposite axis.
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.opposite.get(key)
    }

    /// Cell addressed by a key of the opposite axis.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::KeyNotFound`] if the opposite axis has no such key.
    pub fn get(&self, key: &K) -> Result<&'a T, Error> {
        self.try_get(key)
            .ok_or_else(|| Error::key_not_found(self.axis.opposite().name()))
    }

    /// Cell addressed by a key of the opposite axis, or `None` if the key is absent.
    pub fn try_get(&self, key: &K) -> Option<&'a T> {
        let other = self.opposite.get(key)?;
        self.cells.oriented(self.axis, self.state.target_index, other)
    }

    /// Cell at position `index` of the opposite axis.
    ///
    /// Like [`NamedTable::cell`](crate::table::NamedTable::cell), `index` is checked
    /// against the storage capacity of the opposite axis, not its count.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`] if `index` is beyond the capacity.
    pub fn at(&self, index: usize) -> Result<&'a T, Error> {
        self.cells
            .oriented(self.axis, self.state.target_index, index)
            .ok_or_else(|| {
                let opposite = self.axis.opposite();
                out_of_capacity(opposite, index, self.cells.capacity(opposite))
            })
    }

    /// Iterate over the record's cells in opposite-axis position order.
    pub fn iter(&self) -> RecordCells<'a, T> {
        RecordCells::new(self.cells, self.axis, self.state.target_index, self.len())
    }
}

impl<'a, N, K, T, S: KeyComparer<K>> IntoIterator for Record<'a, N, K, T, S> {
    type Item = &'a T;
    type IntoIter = RecordCells<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read-write view of one column or row.
pub struct RecordMut<'a, N, K, T, S> {
    state: &'a RecordState<N>,
    axis: Axis,
    opposite: &'a KeyIndexMap<K, S>,
    cells: &'a mut Grid<T>,
}

impl<'a, N, K, T, S: KeyComparer<K>> RecordMut<'a, N, K, T, S> {
    pub(crate) fn new(
        state: &'a RecordState<N>,
        axis: Axis,
        opposite: &'a KeyIndexMap<K, S>,
        cells: &'a mut Grid<T>,
    ) -> Self {
        Self {
            state,
            axis,
            opposite,
            cells,
        }
    }

    /// Reborrow as a read-only view.
    pub fn as_record(&self) -> Record<'_, N, K, T, S> {
        Record::new(self.state, self.axis, self.opposite, self.cells)
    }

    /// The key this record is bound to.
    pub fn name(&self) -> &'a N {
        &self.state.name
    }

    /// Current position of the record on its own axis.
    pub fn target_index(&self) -> usize {
        self.state.target_index
    }

    /// Number of cells, i.e. the count of the opposite axis.
    pub fn len(&self) -> usize {
        self.opposite.len()
    }

    /// Returns true if the opposite axis has no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the opposite axis has `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.opposite.contains_key(key)
    }

    /// Position of `key` on the opposite axis.
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.opposite.get(key)
    }

    /// See [`Record::get`].
    pub fn get(&self, key: &K) -> Result<&T, Error> {
        self.as_record().get(key)
    }

    /// See [`Record::try_get`].
    pub fn try_get(&self, key: &K) -> Option<&T> {
        self.as_record().try_get(key)
    }

    /// See [`Record::at`].
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.as_record().at(index)
    }

    /// Iterate over the record's cells in opposite-axis position order.
    pub fn iter(&self) -> RecordCells<'_, T> {
        self.as_record().iter()
    }

    /// Mutable cell addressed by a key of the opposite axis.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::KeyNotFound`] if the opposite axis has no such key.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut T, Error> {
        let axis = self.axis;
        let missing = move || Error::key_not_found(axis.opposite().name());
        let other = self.opposite.get(key).ok_or_else(missing)?;
        self.cells
            .oriented_mut(axis, self.state.target_index, other)
            .ok_or_else(missing)
    }

    /// Replace the cell addressed by a key of the opposite axis.
    pub fn set(&mut self, key: &K, value: T) -> Result<(), Error> {
        *self.get_mut(key)? = value;
        Ok(())
    }

    /// Mutable cell at position `index` of the opposite axis, checked against its
    /// capacity.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let axis = self.axis;
        let capacity = self.cells.capacity(axis.opposite());
        self.cells
            .oriented_mut(axis, self.state.target_index, index)
            .ok_or_else(|| out_of_capacity(axis.opposite(), index, capacity))
    }
}

pub(crate) fn out_of_capacity(axis: Axis, index: usize, capacity: usize) -> Error {
    Error::new(ErrorKind::IndexOutOfRange, "position is beyond the table capacity")
        .with_context("axis", axis)
        .with_context("index", index)
        .with_context("capacity", capacity)
}
