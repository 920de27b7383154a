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

use crate::table::Axis;

/// Column-major backing store shared by both axes.
///
/// Cell `(column, row)` lives at `column * row_capacity + row`. Cells outside the
/// live rectangle always hold `T::default()`.
#[derive(Debug, Clone)]
pub(crate) struct Grid<T> {
    cells: Vec<T>,
    column_capacity: usize,
    row_capacity: usize,
}

impl<T> Grid<T> {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            column_capacity: 0,
            row_capacity: 0,
        }
    }

    pub fn capacity(&self, axis: Axis) -> usize {
        match axis {
            Axis::Column => self.column_capacity,
            Axis::Row => self.row_capacity,
        }
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&T> {
        self.offset(column, row).map(|offset| &self.cells[offset])
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut T> {
        self.offset(column, row).map(|offset| &mut self.cells[offset])
    }

    /// Cell at position `own` on `axis` and `other` on the opposite axis.
    pub fn oriented(&self, axis: Axis, own: usize, other: usize) -> Option<&T> {
        let (column, row) = axis.coords(own, other);
        self.get(column, row)
    }

    pub fn oriented_mut(&mut self, axis: Axis, own: usize, other: usize) -> Option<&mut T> {
        let (column, row) = axis.coords(own, other);
        self.get_mut(column, row)
    }

    fn offset(&self, column: usize, row: usize) -> Option<usize> {
        if column < self.column_capacity && row < self.row_capacity {
            Some(column * self.row_capacity + row)
        } else {
            None
        }
    }

    fn oriented_offset(&self, axis: Axis, own: usize, other: usize) -> usize {
        let (column, row) = axis.coords(own, other);
        column * self.row_capacity + row
    }
}

impl<T: Default> Grid<T> {
    /// Double the capacity along `axis` (zero grows to one), moving the live
    /// rectangle into a freshly allocated store. Returns the new capacity.
    pub fn grow(&mut self, axis: Axis, own_len: usize, other_len: usize) -> usize {
        let (column_capacity, row_capacity) = match axis {
            Axis::Column => (grown(self.column_capacity), self.row_capacity),
            Axis::Row => (self.column_capacity, grown(self.row_capacity)),
        };

        let mut cells = Vec::with_capacity(column_capacity * row_capacity);
        cells.resize_with(column_capacity * row_capacity, T::default);
        let mut previous = std::mem::replace(
            self,
            Self {
                cells,
                column_capacity,
                row_capacity,
            },
        );

        for own in 0..own_len {
            for other in 0..other_len {
                let from = previous.oriented_offset(axis, own, other);
                let to = self.oriented_offset(axis, own, other);
                self.cells[to] = std::mem::take(&mut previous.cells[from]);
            }
        }

        self.capacity(axis)
    }

    /// Move positions `at..len` on `axis` one slot toward the high end.
    pub fn shift_toward_end(&mut self, axis: Axis, at: usize, len: usize, other_len: usize) {
        for own in (at + 1..=len).rev() {
            for other in 0..other_len {
                self.move_cell(axis, own - 1, own, other);
            }
        }
    }

    /// Move positions `at + 1..len` on `axis` one slot toward the low end,
    /// overwriting position `at`.
    pub fn shift_toward_start(&mut self, axis: Axis, at: usize, len: usize, other_len: usize) {
        for own in at..len - 1 {
            for other in 0..other_len {
                self.move_cell(axis, own + 1, own, other);
            }
        }
    }

    /// Reset every cell of position `own` on `axis` to the default value.
    pub fn reset(&mut self, axis: Axis, own: usize, other_len: usize) {
        for other in 0..other_len {
            let offset = self.oriented_offset(axis, own, other);
            self.cells[offset] = T::default();
        }
    }

    pub fn reset_all(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = T::default());
    }

    fn move_cell(&mut self, axis: Axis, from: usize, to: usize, other: usize) {
        let from = self.oriented_offset(axis, from, other);
        let to = self.oriented_offset(axis, to, other);
        self.cells[to] = std::mem::take(&mut self.cells[from]);
    }
}

fn grown(capacity: usize) -> usize {
    if capacity == 0 { 1 } else { capacity * 2 }
}
