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

//! A two-dimensional table addressable by position and by key.
//!
//! The main type is [`table::NamedTable`], a dense matrix whose columns and rows are
//! each identified by a unique key. Columns and rows can be inserted or removed at
//! any position; every key keeps a live record whose position is renumbered as the
//! table changes.
//!
//! Key lookup goes through [`index::KeyIndexMap`], which scans a small vector while
//! an axis has few keys and switches to a hash table once it grows past a threshold.
//! How keys are compared is decided per axis by a [`comparer::KeyComparer`].
//!
//! The table is not synchronized; callers serialize access to it.

pub mod comparer;
pub mod error;
pub mod index;
pub mod table;
