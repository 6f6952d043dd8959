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

//! Contains the comparator that orders two records by a named field.

use std::cmp::Ordering;
use std::fmt;

use crate::error::SortError;
use crate::record::{FieldGetter, Sortable};
use crate::value::FieldValue;
use crate::{NullPlacement, SortOptions};

/// Compares two records of type `R` by one field, named at runtime.
///
/// The field accessor is resolved once at construction; an empty or unknown
/// field name fails [`FieldComparator::try_new`] with
/// [`SortError::FieldResolution`]. The comparator itself is immutable and
/// holds no per-call state, so a single instance can be shared freely across
/// threads.
///
/// Null placement decides where null field values sort relative to non-null
/// values, and is not affected by the direction: a descending sort reverses
/// the order of the non-null values only.
///
/// # Basic Usage
///
/// ```
/// # use std::cmp::Ordering;
/// # use std::sync::LazyLock;
/// # use record_ord::{FieldComparator, FieldTable, FieldValue, SortOptions, Sortable};
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
/// let comparator = FieldComparator::try_new("value", SortOptions::default()).unwrap();
///
/// let one = Reading { value: Some(1) };
/// let two = Reading { value: Some(2) };
/// let null = Reading { value: None };
///
/// assert_eq!(comparator.compare(&one, &two).unwrap(), Ordering::Less);
/// assert_eq!(comparator.compare(&two, &one).unwrap(), Ordering::Greater);
/// // nulls sort last by default
/// assert_eq!(comparator.compare(&null, &two).unwrap(), Ordering::Greater);
/// assert_eq!(comparator.compare(&null, &null).unwrap(), Ordering::Equal);
/// ```
pub struct FieldComparator<R> {
    field: String,
    getter: FieldGetter<R>,
    options: SortOptions,
}

impl<R: Sortable + 'static> FieldComparator<R> {
    /// Creates a comparator over `field` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::FieldResolution`] if `field` is empty or not
    /// registered in the record type's [`FieldTable`](crate::FieldTable).
    pub fn try_new(field: impl Into<String>, options: SortOptions) -> Result<Self, SortError> {
        let field = field.into();
        if field.is_empty() {
            return Err(SortError::FieldResolution(
                "sort field name must not be empty".to_string(),
            ));
        }
        let getter = R::field_table()
            .getter(&field)
            .ok_or_else(|| SortError::FieldResolution(format!("no field named '{field}'")))?;
        Ok(Self {
            field,
            getter,
            options,
        })
    }

    /// The field this comparator orders by
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The ordering configuration
    pub fn options(&self) -> SortOptions {
        self.options
    }

    /// Extracts the sort field's value from `record`
    pub(crate) fn value_of(&self, record: &R) -> Option<FieldValue> {
        (self.getter)(record)
    }

    /// Compares `a` and `b` by the configured field.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::TypeMismatch`] when the two values are of
    /// different kinds, and [`SortError::UnsupportedType`] when their kind
    /// has no natural order.
    pub fn compare(&self, a: &R, b: &R) -> Result<Ordering, SortError> {
        let (left_null, right_null) = match self.options.null_placement {
            NullPlacement::First => (Ordering::Less, Ordering::Greater),
            NullPlacement::Last => (Ordering::Greater, Ordering::Less),
        };

        match ((self.getter)(a), (self.getter)(b)) {
            (None, None) => Ok(Ordering::Equal),
            (None, Some(_)) => Ok(left_null),
            (Some(_), None) => Ok(right_null),
            (Some(left), Some(right)) => {
                check_kinds(&left, &right)?;
                Ok(self.options.direction.apply(left.natural_cmp(&right)))
            }
        }
    }
}

fn check_kinds(left: &FieldValue, right: &FieldValue) -> Result<(), SortError> {
    let (l, r) = (left.kind(), right.kind());
    if l != r {
        return Err(SortError::TypeMismatch(format!(
            "cannot compare values of kind {l} and {r}"
        )));
    }
    if !l.has_natural_order() {
        return Err(SortError::UnsupportedType(format!(
            "the value kind {l} has no natural order"
        )));
    }
    Ok(())
}

// derived impls would put bounds on `R`, which only appears behind a fn
// pointer here
impl<R> Clone for FieldComparator<R> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            getter: self.getter,
            options: self.options,
        }
    }
}

impl<R> fmt::Debug for FieldComparator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldComparator")
            .field("field", &self.field)
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldTable;
    use crate::SortDirection;
    use chrono::{DateTime, NaiveDate};
    use std::sync::LazyLock;

    /// A record exposing one field holding an arbitrary value, so tests can
    /// drive every kind through the same accessor
    struct Cell {
        value: Option<FieldValue>,
    }

    impl Sortable for Cell {
        fn field_table() -> &'static FieldTable<Self> {
            static TABLE: LazyLock<FieldTable<Cell>> = LazyLock::new(|| {
                FieldTable::new().with_field("value", |c: &Cell| c.value.clone())
            });
            &TABLE
        }
    }

    fn cell(value: impl Into<FieldValue>) -> Cell {
        Cell {
            value: Some(value.into()),
        }
    }

    fn null() -> Cell {
        Cell { value: None }
    }

    fn asc() -> FieldComparator<Cell> {
        FieldComparator::try_new("value", SortOptions::default()).unwrap()
    }

    fn desc() -> FieldComparator<Cell> {
        FieldComparator::try_new("value", SortOptions::default().desc()).unwrap()
    }

    #[test]
    fn test_compare_each_kind() {
        let comparator = asc();
        let pairs = [
            (cell(3i32), cell(5i32)),
            (cell(300i64), cell(2300i64)),
            (cell("five"), cell("three")),
            (cell(1.0f32), cell(67.6f32)),
            (cell(2.3f64), cell(8.9f64)),
            (
                cell(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
                cell(NaiveDate::from_ymd_opt(2020, 1, 5).unwrap()),
            ),
            (
                cell(DateTime::from_timestamp(100, 0).unwrap()),
                cell(DateTime::from_timestamp(100, 1).unwrap()),
            ),
        ];

        for (smaller, larger) in &pairs {
            assert_eq!(comparator.compare(smaller, larger).unwrap(), Ordering::Less);
            assert_eq!(
                comparator.compare(larger, smaller).unwrap(),
                Ordering::Greater
            );
            assert_eq!(
                comparator.compare(smaller, smaller).unwrap(),
                Ordering::Equal
            );
        }
    }

    #[test]
    fn test_direction_inversion_is_sign_exact() {
        let ascending = asc();
        let descending = desc();
        let values = [cell(1i64), cell(2i64), cell(2i64), cell(5i64)];

        for a in &values {
            for b in &values {
                assert_eq!(
                    ascending.compare(a, b).unwrap(),
                    descending.compare(a, b).unwrap().reverse()
                );
            }
        }
    }

    #[test]
    fn test_transitive() {
        let comparator = asc();
        let (x, y, z) = (cell("a"), cell("b"), cell("c"));
        assert_eq!(comparator.compare(&x, &y).unwrap(), Ordering::Less);
        assert_eq!(comparator.compare(&y, &z).unwrap(), Ordering::Less);
        assert_eq!(comparator.compare(&x, &z).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_both_null_equal_under_every_configuration() {
        for options in [
            SortOptions::default(),
            SortOptions::default().desc(),
            SortOptions::default().nulls_first(),
            SortOptions::default().desc().nulls_first(),
        ] {
            let comparator = FieldComparator::<Cell>::try_new("value", options).unwrap();
            assert_eq!(
                comparator.compare(&null(), &null()).unwrap(),
                Ordering::Equal
            );
        }
    }

    #[test]
    fn test_null_placement_ignores_direction() {
        // nulls last: null sorts after any value, ascending or descending
        for options in [SortOptions::default(), SortOptions::default().desc()] {
            let comparator = FieldComparator::<Cell>::try_new("value", options).unwrap();
            assert_eq!(
                comparator.compare(&null(), &cell(5i64)).unwrap(),
                Ordering::Greater
            );
            assert_eq!(
                comparator.compare(&cell(5i64), &null()).unwrap(),
                Ordering::Less
            );
        }

        // nulls first: null sorts before any value, ascending or descending
        for options in [
            SortOptions::default().nulls_first(),
            SortOptions::default().desc().nulls_first(),
        ] {
            let comparator = FieldComparator::<Cell>::try_new("value", options).unwrap();
            assert_eq!(
                comparator.compare(&null(), &cell(5i64)).unwrap(),
                Ordering::Less
            );
            assert_eq!(
                comparator.compare(&cell(5i64), &null()).unwrap(),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn test_unknown_field() {
        let err = FieldComparator::<Cell>::try_new("bogus", SortOptions::default()).unwrap_err();
        assert!(matches!(err, SortError::FieldResolution(_)));
        assert_eq!(
            err.to_string(),
            "Error resolving sort field: no field named 'bogus'"
        );
    }

    #[test]
    fn test_empty_field_name() {
        let err = FieldComparator::<Cell>::try_new("", SortOptions::default()).unwrap_err();
        assert!(matches!(err, SortError::FieldResolution(_)));
    }

    #[test]
    fn test_type_mismatch() {
        let comparator = asc();
        let err = comparator.compare(&cell(1i32), &cell("one")).unwrap_err();
        assert!(matches!(err, SortError::TypeMismatch(_)));
        // same width, different kind
        let err = comparator.compare(&cell(1i32), &cell(1i64)).unwrap_err();
        assert!(matches!(err, SortError::TypeMismatch(_)));
    }

    #[test]
    fn test_unsupported_kind() {
        let comparator = asc();
        let err = comparator.compare(&cell(true), &cell(false)).unwrap_err();
        assert!(matches!(err, SortError::UnsupportedType(_)));
        assert_eq!(
            err.to_string(),
            "Unsupported type error: the value kind Boolean has no natural order"
        );
    }

    #[test]
    fn test_accessors() {
        let comparator = FieldComparator::<Cell>::try_new(
            "value",
            SortOptions::new(SortDirection::Descending, NullPlacement::First),
        )
        .unwrap();
        assert_eq!(comparator.field(), "value");
        assert_eq!(comparator.options().to_string(), "DESC NULLS FIRST");
    }

    #[test]
    fn test_comparator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldComparator<Cell>>();
    }
}
