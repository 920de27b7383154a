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

//! A dense two-dimensional table addressed by position or by key.
//!
//! [`NamedTable`] stores one value per `(column, row)` pair. Both axes carry unique
//! keys; whole columns or rows can be inserted or removed at any position and the
//! remaining ones are renumbered so positions always form `0..count`.
//!
//! Each key owns a record whose [`target_index`](Record::target_index) follows the
//! key through every structural change. Records are read through [`Record`] and
//! [`RecordMut`] views obtained from the per-axis [`Header`] / [`HeaderMut`].
//!
//! # Usage
//!
//! ```rust
//! # use namedtable::table::NamedTable;
//! let mut table = NamedTable::<&str, u32, i64>::new();
//! table.columns_mut().add("A").unwrap();
//! table.columns_mut().add("C").unwrap();
//! table.rows_mut().add(1).unwrap();
//! table.set(&"C", &1, 30).unwrap();
//!
//! table.columns_mut().insert(1, "B").unwrap();
//! assert_eq!(table.columns().index_of(&"C"), Some(2));
//! assert_eq!(table.get(&"C", &1).unwrap(), &30);
//! assert_eq!(table.get(&"B", &1).unwrap(), &0);
//!
//! let column = table.columns().get(&"C").unwrap();
//! assert_eq!(column.target_index(), 2);
//! assert_eq!(column.iter().copied().collect::<Vec<_>>(), vec![30]);
//! ```

mod axis;
mod builder;
mod grid;
mod header;
mod iter;
mod named_table;
mod record;
mod structure;

use std::fmt;

pub use self::builder::NamedTableBuilder;
pub use self::header::Header;
pub use self::header::HeaderMut;
pub use self::iter::Cells;
pub use self::iter::RecordCells;
pub use self::iter::Records;
pub use self::named_table::NamedTable;
pub use self::record::Record;
pub use self::record::RecordMut;

/// One of the two dimensions of a [`NamedTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Column,
    Row,
}

impl Axis {
    /// Lowercase name used in error context.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::Column => "column",
            Axis::Row => "row",
        }
    }

    /// The other axis.
    pub const fn opposite(self) -> Axis {
        match self {
            Axis::Column => Axis::Row,
            Axis::Row => Axis::Column,
        }
    }

    /// Translate a position on this axis and one on the opposite axis into
    /// `(column, row)`.
    #[inline]
    pub(crate) const fn coords(self, own: usize, other: usize) -> (usize, usize) {
        match self {
            Axis::Column => (own, other),
            Axis::Row => (other, own),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
