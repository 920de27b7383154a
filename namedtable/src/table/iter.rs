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

use std::iter::FusedIterator;

use crate::comparer::KeyComparer;
use crate::index::KeyIndexMap;
use crate::table::Axis;
use crate::table::Record;
use crate::table::axis::RecordState;
use crate::table::grid::Grid;

/// Column-major iterator over the live cells of a table.
pub struct Cells<'a, T> {
    cells: &'a Grid<T>,
    columns: usize,
    rows: usize,
    index: usize,
}

impl<'a, T> Cells<'a, T> {
    pub(crate) fn new(cells: &'a Grid<T>, columns: usize, rows: usize) -> Self {
        Self {
            cells,
            columns,
            rows,
            index: 0,
        }
    }

    fn total(&self) -> usize {
        self.columns * self.rows
    }
}

impl<'a, T> Iterator for Cells<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.total() {
            return None;
        }
        let column = self.index / self.rows;
        let row = self.index % self.rows;
        self.index += 1;
        self.cells.get(column, row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cells<'_, T> {}

impl<T> FusedIterator for Cells<'_, T> {}

/// Iterator over the cells of one column or row.
pub struct RecordCells<'a, T> {
    cells: &'a Grid<T>,
    axis: Axis,
    own: usize,
    len: usize,
    index: usize,
}

impl<'a, T> RecordCells<'a, T> {
    pub(crate) fn new(cells: &'a Grid<T>, axis: Axis, own: usize, len: usize) -> Self {
        Self {
            cells,
            axis,
            own,
            len,
            index: 0,
        }
    }
}

impl<'a, T> Iterator for RecordCells<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let other = self.index;
        self.index += 1;
        self.cells.oriented(self.axis, self.own, other)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for RecordCells<'_, T> {}

impl<T> FusedIterator for RecordCells<'_, T> {}

/// Iterator over the records of one axis in position order.
pub struct Records<'a, N, K, T, S> {
    records: std::slice::Iter<'a, Option<RecordState<N>>>,
    axis: Axis,
    opposite: &'a KeyIndexMap<K, S>,
    cells: &'a Grid<T>,
}

impl<'a, N, K, T, S> Records<'a, N, K, T, S> {
    pub(crate) fn new(
        records: &'a [Option<RecordState<N>>],
        axis: Axis,
        opposite: &'a KeyIndexMap<K, S>,
        cells: &'a Grid<T>,
    ) -> Self {
        Self {
            records: records.iter(),
            axis,
            opposite,
            cells,
        }
    }
}

impl<'a, N, K, T, S: KeyComparer<K>> Iterator for Records<'a, N, K, T, S> {
    type Item = Record<'a, N, K, T, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.records.next()?.as_ref()?;
        Some(Record::new(state, self.axis, self.opposite, self.cells))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl<N, K, T, S: KeyComparer<K>> ExactSizeIterator for Records<'_, N, K, T, S> {}
