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

//! Defines sort kernels driven by a [`FieldComparator`]
//!
//! The kernels are stable: records with equal keys, and the null records
//! among themselves, keep their input order.

use std::cmp::Ordering;

use crate::error::SortError;
use crate::ord::FieldComparator;
use crate::record::Sortable;
use crate::value::{FieldValue, ValueKind};
use crate::NullPlacement;

/// Returns the indices that would sort `rows` by the comparator's field.
///
/// The whole column is validated before anything is ordered, so a kind
/// mismatch or an unorderable kind anywhere in `rows` fails the entire sort.
/// If `limit` is specified, only the first `limit` indices in the sort order
/// are returned.
///
/// # Example
/// ```
/// # use std::sync::LazyLock;
/// # use record_ord::{FieldComparator, FieldTable, FieldValue, SortOptions, Sortable};
/// # use record_ord::sort::sort_to_indices;
/// #
/// struct Reading {
///     value: Option<i64>,
/// }
///
/// impl Sortable for Reading {
///     fn field_table() -> &'static FieldTable<Self> {
///         static TABLE: LazyLock<FieldTable<Reading>> = LazyLock::new(|| {
///             FieldTable::new().with_field("value", |r: &Reading| r.value.map(FieldValue::Int64))
///         });
///         &TABLE
///     }
/// }
///
/// let rows: Vec<Reading> = [Some(5), None, Some(3)]
///     .into_iter()
///     .map(|value| Reading { value })
///     .collect();
///
/// let comparator = FieldComparator::try_new("value", SortOptions::default()).unwrap();
/// let indices = sort_to_indices(&rows, &comparator, None).unwrap();
/// assert_eq!(indices, vec![2, 0, 1]); // 3, 5, null
/// ```
pub fn sort_to_indices<R: Sortable + 'static>(
    rows: &[R],
    comparator: &FieldComparator<R>,
    limit: Option<usize>,
) -> Result<Vec<usize>, SortError> {
    let values: Vec<Option<FieldValue>> = rows.iter().map(|r| comparator.value_of(r)).collect();

    // the whole column must agree on one orderable kind before anything moves
    let mut column_kind: Option<ValueKind> = None;
    for value in values.iter().flatten() {
        let kind = value.kind();
        if !kind.has_natural_order() {
            return Err(SortError::UnsupportedType(format!(
                "the value kind {kind} has no natural order"
            )));
        }
        match column_kind {
            None => column_kind = Some(kind),
            Some(expected) if expected != kind => {
                return Err(SortError::TypeMismatch(format!(
                    "field '{}' yielded values of kind {expected} and {kind}",
                    comparator.field()
                )))
            }
            Some(_) => {}
        }
    }

    let (mut valid, nulls) = partition_validity(&values);

    // descending is applied per pair rather than by reversing the sorted
    // run, so ties keep their input order
    let direction = comparator.options().direction;
    valid.sort_by(|&i, &j| match (&values[i], &values[j]) {
        (Some(a), Some(b)) => direction.apply(a.natural_cmp(b)),
        _ => Ordering::Equal,
    });

    let mut indices = Vec::with_capacity(values.len());
    match comparator.options().null_placement {
        NullPlacement::First => {
            indices.extend(nulls);
            indices.extend(valid);
        }
        NullPlacement::Last => {
            indices.extend(valid);
            indices.extend(nulls);
        }
    }
    if let Some(limit) = limit {
        indices.truncate(limit);
    }
    Ok(indices)
}

/// Sorts `rows` by the comparator's field.
///
/// Stable: rows with equal keys keep their input order.
///
/// # Example
/// ```
/// # use std::sync::LazyLock;
/// # use record_ord::{FieldComparator, FieldTable, FieldValue, SortOptions, Sortable};
/// # use record_ord::sort::sort;
/// #
/// struct Reading {
///     value: Option<i64>,
/// }
///
/// impl Sortable for Reading {
///     fn field_table() -> &'static FieldTable<Self> {
///         static TABLE: LazyLock<FieldTable<Reading>> = LazyLock::new(|| {
///             FieldTable::new().with_field("value", |r: &Reading| r.value.map(FieldValue::Int64))
///         });
///         &TABLE
///     }
/// }
///
/// let rows: Vec<Reading> = [Some(5), None, Some(3)]
///     .into_iter()
///     .map(|value| Reading { value })
///     .collect();
///
/// let comparator = FieldComparator::try_new("value", SortOptions::default().desc()).unwrap();
/// let sorted = sort(rows, &comparator).unwrap();
///
/// let sorted: Vec<_> = sorted.iter().map(|r| r.value).collect();
/// assert_eq!(sorted, vec![Some(5), Some(3), None]);
/// ```
pub fn sort<R: Sortable + 'static>(
    rows: Vec<R>,
    comparator: &FieldComparator<R>,
) -> Result<Vec<R>, SortError> {
    let indices = sort_to_indices(&rows, comparator, None)?;
    Ok(take(rows, &indices))
}

/// Sorts `rows` by the comparator's field, keeping only the first `limit`
/// rows in the sort order.
pub fn sort_limit<R: Sortable + 'static>(
    rows: Vec<R>,
    comparator: &FieldComparator<R>,
    limit: Option<usize>,
) -> Result<Vec<R>, SortError> {
    let indices = sort_to_indices(&rows, comparator, limit)?;
    Ok(take(rows, &indices))
}

// partition indices into valid and null indices
fn partition_validity(values: &[Option<FieldValue>]) -> (Vec<usize>, Vec<usize>) {
    (0..values.len()).partition(|&i| values[i].is_some())
}

/// Reorders `rows` by `indices`, which must be distinct and in range
fn take<R>(rows: Vec<R>, indices: &[usize]) -> Vec<R> {
    let mut slots: Vec<Option<R>> = rows.into_iter().map(Some).collect();
    let taken: Vec<R> = indices.iter().filter_map(|&i| slots[i].take()).collect();
    debug_assert_eq!(taken.len(), indices.len());
    taken
}
