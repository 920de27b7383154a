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

use std::fmt::Debug;
use std::hash::Hash;

use googletest::assert_that;
use googletest::prelude::eq;
use namedtable::comparer::KeyComparer;
use namedtable::comparer::NaturalComparer;
use namedtable::error::ErrorKind;
use namedtable::index::DEFAULT_THRESHOLD;
use namedtable::table::NamedTable;

/// Keeps all of the key's entropy above bit 40.
struct HighBitsHash;

impl KeyComparer<u32> for HighBitsHash {
    fn equals(&self, a: &u32, b: &u32) -> bool {
        a == b
    }

    fn hash(&self, key: &u32) -> u64 {
        u64::from(*key) << 40
    }
}

/// Checks dense positions and that every record tracks its key's position.
fn assert_consistent<C, R, T>(table: &NamedTable<C, R, T>)
where
    C: Clone + Eq + Hash + Debug,
    R: Clone + Eq + Hash + Debug,
    T: Default,
{
    let columns = table.columns();
    assert_that!(columns.iter().count(), eq(table.column_count()));
    for (position, record) in columns.iter().enumerate() {
        assert_that!(record.target_index(), eq(position), "column {:?}", record.name());
        assert_that!(columns.index_of(record.name()), eq(Some(position)));
    }

    let rows = table.rows();
    assert_that!(rows.iter().count(), eq(table.row_count()));
    for (position, record) in rows.iter().enumerate() {
        assert_that!(record.target_index(), eq(position), "row {:?}", record.name());
        assert_that!(rows.index_of(record.name()), eq(Some(position)));
    }
}

fn grid(columns: &[&'static str], rows: &[u32]) -> NamedTable<&'static str, u32, i32> {
    let mut table = NamedTable::new();
    for column in columns {
        table.columns_mut().add(*column).unwrap();
    }
    for row in rows {
        table.rows_mut().add(*row).unwrap();
    }
    for (c, column) in columns.iter().enumerate() {
        for (r, row) in rows.iter().enumerate() {
            table.set(column, row, (c as i32 + 1) * 100 + r as i32).unwrap();
        }
    }
    table
}

fn snapshot(table: &NamedTable<&'static str, u32, i32>) -> Vec<(&'static str, u32, i32)> {
    let mut cells = Vec::new();
    for column in table.columns() {
        for row in table.rows() {
            let value = *table.get(column.name(), row.name()).unwrap();
            cells.push((*column.name(), *row.name(), value));
        }
    }
    cells
}

#[test]
fn test_remove_middle_column() {
    let mut table = NamedTable::<&str, i32, i32>::new();
    for column in ["A", "B", "C"] {
        table.columns_mut().add(column).unwrap();
    }
    table.rows_mut().add(1).unwrap();
    table.rows_mut().add(2).unwrap();
    table.set(&"A", &1, 10).unwrap();
    table.set(&"B", &2, 20).unwrap();
    let c_before = *table.get(&"C", &1).unwrap();

    assert_that!(table.columns_mut().remove(&"B"), eq(true));

    assert_that!(table.columns().len(), eq(2));
    assert_that!(table.get(&"A", &1).unwrap(), eq(&10));
    let err = table.get(&"B", &2).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::KeyNotFound));
    assert_that!(err.context("axis"), eq(Some("column")));
    assert_that!(*table.get(&"C", &1).unwrap(), eq(c_before));
    assert_that!(c_before, eq(0));
    assert_consistent(&table);
}

#[test]
fn test_insert_column_at_front() {
    let mut table = NamedTable::<&str, u32, i32>::new();
    table.columns_mut().add("X").unwrap();
    table.columns_mut().add("Y").unwrap();
    for row in 0..3 {
        table.rows_mut().add(row).unwrap();
        table.set(&"X", &row, 10 + row as i32).unwrap();
        table.set(&"Y", &row, 20 + row as i32).unwrap();
    }

    table.columns_mut().insert(0, "Z").unwrap();

    let columns = table.columns();
    assert_that!(columns.index_of(&"Z"), eq(Some(0)));
    assert_that!(columns.index_of(&"X"), eq(Some(1)));
    assert_that!(columns.index_of(&"Y"), eq(Some(2)));
    for row in 0..3u32 {
        assert_that!(table.get(&"X", &row).unwrap(), eq(&(10 + row as i32)));
        assert_that!(table.get(&"Y", &row).unwrap(), eq(&(20 + row as i32)));
        assert_that!(table.cell(1, row as usize).unwrap(), eq(&(10 + row as i32)));
        assert_that!(table.cell(2, row as usize).unwrap(), eq(&(20 + row as i32)));
    }
    let z = columns.get(&"Z").unwrap();
    assert_that!(z.iter().all(|value| *value == 0), eq(true));
    assert_that!(z.len(), eq(3));
    assert_consistent(&table);
}

#[test]
fn test_clear_columns_keeps_rows() {
    let mut table = grid(&["a", "b", "c"], &[1, 2]);

    table.columns_mut().clear();

    assert_that!(table.columns().len(), eq(0));
    assert_that!(table.rows().len(), eq(2));
    assert_that!(table.is_empty(), eq(true));
    assert_that!(table.iter().count(), eq(0));

    table.columns_mut().add("b").unwrap();
    assert_that!(table.column_count(), eq(1));
    assert_that!(table.get(&"b", &2).unwrap(), eq(&0));
    assert_that!(table.columns().index_of(&"b"), eq(Some(0)));
    assert_consistent(&table);
}

#[test]
fn test_clear_rows_keeps_columns() {
    let mut table = grid(&["a", "b"], &[1, 2, 3]);

    table.clear_rows();

    assert_that!(table.row_count(), eq(0));
    assert_that!(table.column_count(), eq(2));
    assert_that!(table.columns().get(&"a").unwrap().is_empty(), eq(true));
    table.rows_mut().add(3).unwrap();
    assert_that!(table.get(&"a", &3).unwrap(), eq(&0));
    assert_consistent(&table);
}

#[test]
fn test_insert_then_remove_restores_table() {
    for at in 0..=3 {
        let mut table = grid(&["a", "b", "c"], &[1, 2, 3]);
        let before = snapshot(&table);

        table.columns_mut().insert(at, "k").unwrap();
        assert_consistent(&table);
        assert_that!(table.columns_mut().remove_at(at).unwrap(), eq("k"));

        assert_that!(snapshot(&table), eq(&before), "column round trip at {at}");
        assert_consistent(&table);

        table.rows_mut().insert(at, 99).unwrap();
        assert_consistent(&table);
        assert_that!(table.rows_mut().remove_at(at).unwrap(), eq(99));

        assert_that!(snapshot(&table), eq(&before), "row round trip at {at}");
        assert_consistent(&table);
    }
}

#[test]
fn test_insert_row_in_middle_shifts_rows_only() {
    let mut table = grid(&["a", "b"], &[1, 2, 3]);

    table.insert_row(7, 1).unwrap();

    assert_that!(table.rows().index_of(&7), eq(Some(1)));
    assert_that!(table.rows().index_of(&2), eq(Some(2)));
    assert_that!(table.rows().index_of(&3), eq(Some(3)));
    assert_that!(table.columns().index_of(&"a"), eq(Some(0)));
    assert_that!(table.columns().index_of(&"b"), eq(Some(1)));
    assert_that!(table.get(&"b", &2).unwrap(), eq(&201));
    assert_that!(table.get(&"b", &3).unwrap(), eq(&202));
    assert_that!(table.get(&"a", &7).unwrap(), eq(&0));
    assert_that!(table.cell(0, 3).unwrap(), eq(&102));
    assert_consistent(&table);
}

#[test]
fn test_remove_first_last_and_only() {
    let mut table = grid(&["a", "b", "c"], &[1]);

    assert_that!(table.remove_column_at(0).unwrap(), eq("a"));
    assert_that!(table.get(&"b", &1).unwrap(), eq(&200));
    assert_that!(table.get(&"c", &1).unwrap(), eq(&300));
    assert_consistent(&table);

    assert_that!(table.remove_column_at(1).unwrap(), eq("c"));
    assert_that!(table.get(&"b", &1).unwrap(), eq(&200));
    assert_that!(table.cell(1, 0).unwrap(), eq(&0));
    assert_consistent(&table);

    assert_that!(table.remove_column(&"b"), eq(true));
    assert_that!(table.remove_column(&"b"), eq(false));
    assert_that!(table.column_count(), eq(0));
    assert_that!(table.cell(0, 0).unwrap(), eq(&0));
    assert_consistent(&table);
}

#[test]
fn test_records_follow_structural_changes() {
    let mut table = grid(&["a", "b", "c", "d"], &[1, 2]);

    table.insert_column("x", 1).unwrap();
    let expected = [("a", 0), ("x", 1), ("b", 2), ("c", 3), ("d", 4)];
    for (name, position) in expected {
        assert_that!(table.columns().get(&name).unwrap().target_index(), eq(position));
    }

    table.remove_column(&"b");
    table.remove_column_at(0).unwrap();
    let expected = [("x", 0), ("c", 1), ("d", 2)];
    for (name, position) in expected {
        let record = table.columns().record(&name).unwrap();
        assert_that!(record.target_index(), eq(position));
        assert_that!(record.get(&2).unwrap(), eq(table.cell(position, 1).unwrap()));
    }
    assert_that!(table.columns().get(&"d").unwrap().get(&1).unwrap(), eq(&400));

    let rows: Vec<usize> = table.rows().iter().map(|row| row.target_index()).collect();
    assert_that!(rows, eq(&vec![0, 1]));
    assert_consistent(&table);
}

#[test]
fn test_duplicate_insert_leaves_table_unchanged() {
    let mut table = grid(&["a", "b"], &[1, 2]);
    let before = snapshot(&table);
    let capacity = table.capacity();

    let err = table.columns_mut().insert(0, "b").unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::DuplicateKey));
    assert_that!(err.context("axis"), eq(Some("column")));

    let err = table.rows_mut().add(2).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::DuplicateKey));
    assert_that!(err.context("axis"), eq(Some("row")));

    assert_that!(snapshot(&table), eq(&before));
    assert_that!(table.capacity(), eq(capacity));
    assert_consistent(&table);
}

#[test]
fn test_out_of_range_positions_are_rejected() {
    let mut table = grid(&["a", "b"], &[1, 2]);
    let before = snapshot(&table);
    let capacity = table.capacity();

    let err = table.columns_mut().insert(3, "c").unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::IndexOutOfRange));
    assert_that!(err.context("index"), eq(Some("3")));
    assert_that!(err.context("len"), eq(Some("2")));
    assert_that!(table.columns().contains(&"c"), eq(false));

    let err = table.rows_mut().remove_at(2).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::IndexOutOfRange));
    assert_that!(err.context("axis"), eq(Some("row")));

    assert_that!(snapshot(&table), eq(&before));
    assert_that!(table.capacity(), eq(capacity));
}

#[test]
fn test_capacity_doubles_per_axis() {
    let mut table = NamedTable::<u32, u32, u8>::new();
    assert_that!(table.capacity(), eq((0, 0)));

    let mut seen = Vec::new();
    for column in 0..9 {
        table.columns_mut().add(column).unwrap();
        seen.push(table.capacity().0);
    }
    assert_that!(seen, eq(&vec![1, 2, 4, 4, 8, 8, 8, 8, 16]));
    assert_that!(table.capacity().1, eq(0));

    table.rows_mut().add(0).unwrap();
    assert_that!(table.capacity(), eq((16, 1)));

    for column in 0..9 {
        table.remove_column(&column);
    }
    assert_that!(table.capacity(), eq((16, 1)));
}

#[test]
fn test_growth_preserves_values() {
    let mut table = NamedTable::<u32, u32, u64>::new();
    for row in 0..5 {
        table.rows_mut().add(row).unwrap();
    }
    for column in 0..20 {
        table.columns_mut().insert(0, column).unwrap();
        for row in 0..5 {
            table.set(&column, &row, (column * 10 + row) as u64).unwrap();
        }
    }

    for column in 0..20u32 {
        assert_that!(table.columns().index_of(&column), eq(Some(19 - column as usize)));
        for row in 0..5u32 {
            assert_that!(table.get(&column, &row).unwrap(), eq(&((column * 10 + row) as u64)));
        }
    }
    assert_consistent(&table);
}

#[test]
fn test_high_bits_column_hash_at_scale() {
    let mut table: NamedTable<u32, u32, u32, HighBitsHash> =
        NamedTable::with_comparers(HighBitsHash, NaturalComparer);
    table.rows_mut().add(0).unwrap();
    for column in 0..2000u32 {
        table.columns_mut().add(column).unwrap();
        table.set(&column, &0, column).unwrap();
    }
    assert_that!(table.column_count(), eq(2000));

    let mut remaining: Vec<u32> = (0..2000).collect();
    while remaining.len() > DEFAULT_THRESHOLD + 1 {
        let at = remaining.len() / 2;
        let key = remaining.remove(at);
        assert_that!(table.remove_column_at(at).unwrap(), eq(key));
        assert_that!(table.columns().contains(&key), eq(false));

        let columns = table.columns();
        for (position, column) in remaining.iter().enumerate() {
            assert_that!(columns.index_of(column), eq(Some(position)));
            let record = columns.record(column).unwrap();
            assert_that!(record.target_index(), eq(position));
            assert_that!(record.get(&0).unwrap(), eq(column));
        }
    }
    assert_that!(table.column_count(), eq(DEFAULT_THRESHOLD + 1));
}
