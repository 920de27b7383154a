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

//! Insertion and removal of whole columns or rows.
//!
//! Each algorithm works on one axis and leaves the opposite axis's keys, positions
//! and records untouched. All validation happens before the first mutation, so a
//! failed call leaves the table exactly as it was.

use crate::comparer::KeyComparer;
use crate::error::Error;
use crate::error::ErrorKind;
use crate::table::axis::AxisIndex;
use crate::table::axis::RecordState;
use crate::table::grid::Grid;

/// Insert `key` at position `at` of `index`, shifting later positions up by one.
pub(crate) fn insert<K, S, T>(
    index: &mut AxisIndex<K, S>,
    cells: &mut Grid<T>,
    other_len: usize,
    key: K,
    at: usize,
) -> Result<(), Error>
where
    K: Clone,
    S: KeyComparer<K>,
    T: Default,
{
    let axis = index.axis;
    let len = index.len();

    if index.map.contains_key(&key) {
        return Err(Error::duplicate_key(axis.name()));
    }
    if at > len {
        return Err(
            Error::new(ErrorKind::IndexOutOfRange, "insert position is out of range")
                .with_context("axis", axis)
                .with_context("index", at)
                .with_context("len", len),
        );
    }

    if len + 1 > index.capacity() {
        let capacity = cells.grow(axis, len, other_len);
        index.records.resize_with(capacity, || None);
        tracing::trace!(axis = axis.name(), capacity, "grew table storage");
    }

    if at != len {
        cells.shift_toward_end(axis, at, len, other_len);
        for position in (at + 1..=len).rev() {
            index.records[position] = index.records[position - 1].take();
        }
        for record in index.records[..=len].iter_mut().flatten() {
            if record.target_index >= at {
                record.target_index += 1;
            }
        }
        index.map.update_positions(|position| {
            if *position >= at {
                *position += 1;
            }
        });
    }

    cells.reset(axis, at, other_len);
    index.map.add(key.clone(), at)?;
    index.records[at] = Some(RecordState {
        name: key,
        target_index: at,
    });

    tracing::trace!(axis = axis.name(), index = at, "inserted");
    Ok(())
}

/// Remove the key at position `at` of `index`, shifting later positions down by one.
pub(crate) fn remove_at<K, S, T>(
    index: &mut AxisIndex<K, S>,
    cells: &mut Grid<T>,
    other_len: usize,
    at: usize,
) -> Result<K, Error>
where
    S: KeyComparer<K>,
    T: Default,
{
    let axis = index.axis;
    let len = index.len();

    if at >= len {
        return Err(
            Error::new(ErrorKind::IndexOutOfRange, "remove position is out of range")
                .with_context("axis", axis)
                .with_context("index", at)
                .with_context("len", len),
        );
    }

    let Some(removed) = index.records[at].take() else {
        unreachable!("every live position has a record");
    };
    let last = len - 1;

    if at != last {
        cells.shift_toward_start(axis, at, len, other_len);
        for position in at..last {
            index.records[position] = index.records[position + 1].take();
        }
        for record in index.records[..last].iter_mut().flatten() {
            if record.target_index > at {
                record.target_index -= 1;
            }
        }
        index.map.update_positions(|position| {
            if *position > at {
                *position -= 1;
            }
        });
    }

    cells.reset(axis, last, other_len);
    index.records[last] = None;
    index.map.remove(&removed.name);

    tracing::trace!(axis = axis.name(), index = at, "removed");
    Ok(removed.name)
}

/// Remove `key` if present. Returns whether anything was removed.
pub(crate) fn remove<K, S, T>(
    index: &mut AxisIndex<K, S>,
    cells: &mut Grid<T>,
    other_len: usize,
    key: &K,
) -> bool
where
    S: KeyComparer<K>,
    T: Default,
{
    match index.map.get(key) {
        Some(at) => remove_at(index, cells, other_len, at).is_ok(),
        None => false,
    }
}

/// Drop every key of `index`. Capacity is kept; every cell is reset because no cell
/// survives without a position on this axis.
pub(crate) fn clear<K, S, T>(index: &mut AxisIndex<K, S>, cells: &mut Grid<T>)
where
    S: KeyComparer<K>,
    T: Default,
{
    index.map.clear();
    index.records.iter_mut().for_each(|record| *record = None);
    cells.reset_all();
    tracing::trace!(axis = index.axis.name(), "cleared");
}
