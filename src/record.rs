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

//! Field access for record-like types
//!
//! Sorting by a field named at runtime needs a way to get from a field-name
//! string to that field's value on a record. Each record type registers an
//! accessor per sortable field in a [`FieldTable`] built once for the type,
//! and hands the table out through the [`Sortable`] trait.

use std::collections::BTreeMap;

use crate::value::FieldValue;

/// Extracts one field's value from a record, `None` when the field is null
pub type FieldGetter<R> = fn(&R) -> Option<FieldValue>;

/// An immutable mapping from field name to accessor for records of type `R`
///
/// Tables are built with [`FieldTable::with_field`] and looked up by the
/// runtime field name:
///
/// ```
/// # use record_ord::{FieldTable, FieldValue};
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let table = FieldTable::new()
///     .with_field("x", |p: &Point| Some(FieldValue::Int32(p.x)))
///     .with_field("y", |p: &Point| Some(FieldValue::Int32(p.y)));
///
/// assert!(table.contains("x"));
/// assert!(!table.contains("z"));
/// ```
#[derive(Debug)]
pub struct FieldTable<R> {
    fields: BTreeMap<&'static str, FieldGetter<R>>,
}

impl<R> FieldTable<R> {
    /// Creates an empty table
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Registers an accessor under `name`, replacing any existing entry
    pub fn with_field(mut self, name: &'static str, getter: FieldGetter<R>) -> Self {
        self.fields.insert(name, getter);
        self
    }

    /// Looks up the accessor registered under `name`
    pub fn getter(&self, name: &str) -> Option<FieldGetter<R>> {
        self.fields.get(name).copied()
    }

    /// Whether an accessor is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Registered field names, in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// Number of registered fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the table has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<R> Default for FieldTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Implemented by record types that can be ordered by a field named at
/// runtime
///
/// The table must be constructed once per record type; backing it with a
/// [`std::sync::LazyLock`] static keeps construction out of the compare
/// path:
///
/// ```
/// # use std::sync::LazyLock;
/// # use record_ord::{FieldTable, FieldValue, Sortable};
/// struct Session {
///     id: Option<i32>,
///     name: Option<String>,
/// }
///
/// impl Sortable for Session {
///     fn field_table() -> &'static FieldTable<Self> {
///         static TABLE: LazyLock<FieldTable<Session>> = LazyLock::new(|| {
///             FieldTable::new()
///                 .with_field("id", |s: &Session| s.id.map(FieldValue::Int32))
///                 .with_field("name", |s: &Session| s.name.clone().map(FieldValue::Utf8))
///         });
///         &TABLE
///     }
/// }
///
/// let names: Vec<_> = Session::field_table().names().collect();
/// assert_eq!(names, vec!["id", "name"]);
/// ```
pub trait Sortable: Sized {
    /// The accessor table for this record type
    fn field_table() -> &'static FieldTable<Self>;
}
