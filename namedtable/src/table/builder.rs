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
use crate::comparer::NaturalComparer;
use crate::error::Error;
use crate::index::DEFAULT_THRESHOLD;
use crate::index::KeyIndexMap;
use crate::table::NamedTable;

/// Builder for [`NamedTable`] with custom comparers or promotion thresholds.
///
/// # Examples
///
/// ```
/// use namedtable::table::NamedTableBuilder;
/// use namedtable::table::NamedTable;
///
/// let mut table: NamedTable<u32, u32, i32> = NamedTableBuilder::default()
///     .column_threshold(4)
///     .row_threshold(64)
///     .build()
///     .unwrap();
/// table.columns_mut().add(1).unwrap();
/// assert_eq!(table.column_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct NamedTableBuilder<CS = NaturalComparer, RS = NaturalComparer> {
    column_comparer: CS,
    row_comparer: RS,
    column_threshold: usize,
    row_threshold: usize,
}

impl Default for NamedTableBuilder {
    fn default() -> Self {
        Self {
            column_comparer: NaturalComparer,
            row_comparer: NaturalComparer,
            column_threshold: DEFAULT_THRESHOLD,
            row_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl<CS, RS> NamedTableBuilder<CS, RS> {
    /// Sets the comparer used for column keys.
    pub fn column_comparer<S>(self, comparer: S) -> NamedTableBuilder<S, RS> {
        NamedTableBuilder {
            column_comparer: comparer,
            row_comparer: self.row_comparer,
            column_threshold: self.column_threshold,
            row_threshold: self.row_threshold,
        }
    }

    /// Sets the comparer used for row keys.
    pub fn row_comparer<S>(self, comparer: S) -> NamedTableBuilder<CS, S> {
        NamedTableBuilder {
            column_comparer: self.column_comparer,
            row_comparer: comparer,
            column_threshold: self.column_threshold,
            row_threshold: self.row_threshold,
        }
    }

    /// Sets how many column keys are kept in the compact key representation.
    pub fn column_threshold(mut self, threshold: usize) -> Self {
        self.column_threshold = threshold;
        self
    }

    /// Sets how many row keys are kept in the compact key representation.
    pub fn row_threshold(mut self, threshold: usize) -> Self {
        self.row_threshold = threshold;
        self
    }

    /// Builds an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`](crate::error::ErrorKind::ConfigInvalid) if
    /// either threshold is zero.
    pub fn build<C, R, T>(self) -> Result<NamedTable<C, R, T, CS, RS>, Error>
    where
        C: Clone,
        R: Clone,
        T: Default,
        CS: KeyComparer<C>,
        RS: KeyComparer<R>,
    {
        let columns = KeyIndexMap::with_threshold_and_comparer(
            self.column_threshold,
            self.column_comparer,
        )
        .map_err(|err| err.with_context("axis", "column"))?;
        let rows = KeyIndexMap::with_threshold_and_comparer(self.row_threshold, self.row_comparer)
            .map_err(|err| err.with_context("axis", "row"))?;
        Ok(NamedTable::from_maps(columns, rows))
    }
}
