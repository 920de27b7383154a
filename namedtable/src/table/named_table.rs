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

use std::fmt;
use std::hash::Hash;
use std::ops::Index;
use std::ops::IndexMut;

use crate::comparer::KeyComparer;
use crate::comparer::NaturalComparer;
use crate::error::Error;
use crate::index::KeyIndexMap;
use crate::table::Axis;
use crate::table::Cells;
use crate::table::Header;
use crate::table::HeaderMut;
use crate::table::axis::AxisIndex;
use crate::table::grid::Grid;
use crate::table::record::out_of_capacity;
use crate::table::structure;

/// Dense table of `T` with column keys `C` and row keys `R`.
///
/// Cells created by growth, insertion or removal hold `T::default()`.
///
/// # Examples
///
/// ```
/// use namedtable::table::NamedTable;
///
/// let mut table = NamedTable::<String, u32, f64>::new();
/// table.insert_column("price".to_string(), 0).unwrap();
/// table.insert_row(7, 0).unwrap();
/// table.set(&"price".to_string(), &7, 9.5).unwrap();
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table[(0, 0)], 9.5);
/// ```
pub struct NamedTable<C, R, T, CS = NaturalComparer, RS = NaturalComparer> {
    columns: AxisIndex<C, CS>,
    rows: AxisIndex<R, RS>,
    cells: Grid<T>,
}

impl<C, R, T> NamedTable<C, R, T>
where
    C: Clone + Eq + Hash,
    R: Clone + Eq + Hash,
    T: Default,
{
    /// Create an empty table comparing keys by their own `Eq` and `Hash`.
    pub fn new() -> Self {
        Self::with_comparers(NaturalComparer, NaturalComparer)
    }
}

impl<C, R, T> Default for NamedTable<C, R, T>
where
    C: Clone + Eq + Hash,
    R: Clone + Eq + Hash,
    T: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, R, T, CS, RS> NamedTable<C, R, T, CS, RS>
where
    C: Clone,
    R: Clone,
    T: Default,
    CS: KeyComparer<C>,
    RS: KeyComparer<R>,
{
    /// Create an empty table with explicit key comparers and default thresholds.
    pub fn with_comparers(column_comparer: CS, row_comparer: RS) -> Self {
        Self::from_maps(
            KeyIndexMap::with_comparer(column_comparer),
            KeyIndexMap::with_comparer(row_comparer),
        )
    }

    pub(crate) fn from_maps(columns: KeyIndexMap<C, CS>, rows: KeyIndexMap<R, RS>) -> Self {
        Self {
            columns: AxisIndex::new(Axis::Column, columns),
            rows: AxisIndex::new(Axis::Row, rows),
            cells: Grid::new(),
        }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of live cells: `column_count * row_count`.
    pub fn len(&self) -> usize {
        self.column_count() * self.row_count()
    }

    /// Returns true if the table has no live cell, i.e. either axis is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage capacity as `(columns, rows)`.
    pub fn capacity(&self) -> (usize, usize) {
        (
            self.cells.capacity(Axis::Column),
            self.cells.capacity(Axis::Row),
        )
    }

    /// Cell at `(column, row)` positions.
    ///
    /// Positions are checked against the storage capacity only, so positions past
    /// the live count but inside the capacity yield the default value.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if either position is beyond the capacity of its axis.
    pub fn cell(&self, column: usize, row: usize) -> Result<&T, Error> {
        self.check_capacity(column, row)?;
        self.cells
            .get(column, row)
            .ok_or_else(|| out_of_capacity(Axis::Row, row, self.cells.capacity(Axis::Row)))
    }

    /// Mutable cell at `(column, row)` positions, checked like [`cell`](Self::cell).
    pub fn cell_mut(&mut self, column: usize, row: usize) -> Result<&mut T, Error> {
        self.check_capacity(column, row)?;
        let capacity = self.cells.capacity(Axis::Row);
        self.cells
            .get_mut(column, row)
            .ok_or_else(|| out_of_capacity(Axis::Row, row, capacity))
    }

    /// Cell at the `(column, row)` keys.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::KeyNotFound`](crate::error::ErrorKind::KeyNotFound) with the
    /// missing axis in its context if either key is absent.
    pub fn get(&self, column: &C, row: &R) -> Result<&T, Error> {
        let (column, row) = self.positions(column, row)?;
        self.cell(column, row)
    }

    /// Mutable cell at the `(column, row)` keys.
    pub fn get_mut(&mut self, column: &C, row: &R) -> Result<&mut T, Error> {
        let (column, row) = self.positions(column, row)?;
        self.cell_mut(column, row)
    }

    /// Cell at the `(column, row)` keys, or `None` if either key is absent.
    pub fn try_get(&self, column: &C, row: &R) -> Option<&T> {
        self.get(column, row).ok()
    }

    /// Replace the cell at the `(column, row)` keys.
    pub fn set(&mut self, column: &C, row: &R, value: T) -> Result<(), Error> {
        *self.get_mut(column, row)? = value;
        Ok(())
    }

    /// Insert a column keyed `key` at position `at`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateKey`](crate::error::ErrorKind::DuplicateKey) or
    /// [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange); the
    /// table is unchanged on error.
    pub fn insert_column(&mut self, key: C, at: usize) -> Result<(), Error> {
        let rows = self.rows.len();
        structure::insert(&mut self.columns, &mut self.cells, rows, key, at)
    }

    /// Insert a row keyed `key` at position `at`.
    pub fn insert_row(&mut self, key: R, at: usize) -> Result<(), Error> {
        let columns = self.columns.len();
        structure::insert(&mut self.rows, &mut self.cells, columns, key, at)
    }

    /// Remove the column at position `at`, returning its key.
    pub fn remove_column_at(&mut self, at: usize) -> Result<C, Error> {
        let rows = self.rows.len();
        structure::remove_at(&mut self.columns, &mut self.cells, rows, at)
    }

    /// Remove the row at position `at`, returning its key.
    pub fn remove_row_at(&mut self, at: usize) -> Result<R, Error> {
        let columns = self.columns.len();
        structure::remove_at(&mut self.rows, &mut self.cells, columns, at)
    }

    /// Remove the column keyed `key`. Returns whether it was present.
    pub fn remove_column(&mut self, key: &C) -> bool {
        let rows = self.rows.len();
        structure::remove(&mut self.columns, &mut self.cells, rows, key)
    }

    /// Remove the row keyed `key`. Returns whether it was present.
    pub fn remove_row(&mut self, key: &R) -> bool {
        let columns = self.columns.len();
        structure::remove(&mut self.rows, &mut self.cells, columns, key)
    }

    /// Remove every column. Rows keep their keys; every cell is reset.
    pub fn clear_columns(&mut self) {
        structure::clear(&mut self.columns, &mut self.cells);
    }

    /// Remove every row. Columns keep their keys; every cell is reset.
    pub fn clear_rows(&mut self) {
        structure::clear(&mut self.rows, &mut self.cells);
    }

    /// Read access to the column axis.
    pub fn columns(&self) -> Header<'_, C, R, T, CS, RS> {
        Header::new(&self.columns, &self.rows.map, &self.cells)
    }

    /// Read access to the row axis.
    pub fn rows(&self) -> Header<'_, R, C, T, RS, CS> {
        Header::new(&self.rows, &self.columns.map, &self.cells)
    }

    /// Structural access to the column axis.
    pub fn columns_mut(&mut self) -> HeaderMut<'_, C, R, T, CS, RS> {
        HeaderMut::new(&mut self.columns, &self.rows.map, &mut self.cells)
    }

    /// Structural access to the row axis.
    pub fn rows_mut(&mut self) -> HeaderMut<'_, R, C, T, RS, CS> {
        HeaderMut::new(&mut self.rows, &self.columns.map, &mut self.cells)
    }

    /// Iterate over live cells, column by column.
    pub fn iter(&self) -> Cells<'_, T> {
        Cells::new(&self.cells, self.column_count(), self.row_count())
    }

    fn positions(&self, column: &C, row: &R) -> Result<(usize, usize), Error> {
        let column = self
            .columns
            .map
            .get(column)
            .ok_or_else(|| Error::key_not_found(Axis::Column.name()))?;
        let row = self
            .rows
            .map
            .get(row)
            .ok_or_else(|| Error::key_not_found(Axis::Row.name()))?;
        Ok((column, row))
    }

    fn check_capacity(&self, column: usize, row: usize) -> Result<(), Error> {
        let (columns, rows) = self.capacity();
        if column >= columns {
            return Err(out_of_capacity(Axis::Column, column, columns));
        }
        if row >= rows {
            return Err(out_of_capacity(Axis::Row, row, rows));
        }
        Ok(())
    }
}

impl<C, R, T, CS, RS> Index<(usize, usize)> for NamedTable<C, R, T, CS, RS>
where
    C: Clone,
    R: Clone,
    T: Default,
    CS: KeyComparer<C>,
    RS: KeyComparer<R>,
{
    type Output = T;

    fn index(&self, (column, row): (usize, usize)) -> &T {
        match self.cell(column, row) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<C, R, T, CS, RS> IndexMut<(usize, usize)> for NamedTable<C, R, T, CS, RS>
where
    C: Clone,
    R: Clone,
    T: Default,
    CS: KeyComparer<C>,
    RS: KeyComparer<R>,
{
    fn index_mut(&mut self, (column, row): (usize, usize)) -> &mut T {
        match self.cell_mut(column, row) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, C, R, T, CS, RS> IntoIterator for &'a NamedTable<C, R, T, CS, RS>
where
    C: Clone,
    R: Clone,
    T: Default,
    CS: KeyComparer<C>,
    RS: KeyComparer<R>,
{
    type Item = &'a T;
    type IntoIter = Cells<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C, R, T, CS, RS> fmt::Debug for NamedTable<C, R, T, CS, RS>
where
    C: Clone + fmt::Debug,
    R: Clone + fmt::Debug,
    T: Default,
    CS: KeyComparer<C>,
    RS: KeyComparer<R>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedTable")
            .field("columns", &self.columns().keys().collect::<Vec<_>>())
            .field("rows", &self.rows().keys().collect::<Vec<_>>())
            .finish()
    }
}
