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

//! Ordering kernels for record-like types, keyed by a field name supplied at
//! runtime rather than compiled in.
//!
//! A record type registers an accessor per sortable field in a
//! [`FieldTable`] and implements [`Sortable`]. A [`FieldComparator`] is then
//! built from a field name and a set of [`SortOptions`], and either drives a
//! caller-supplied sort through [`FieldComparator::compare`] or one of the
//! kernels in [`sort`].
//!
//! # Sort records by field name
//!
//! ```
//! # use std::sync::LazyLock;
//! # use record_ord::{FieldComparator, FieldTable, FieldValue, SortOptions, Sortable};
//! #
//! struct Session {
//!     id: Option<i32>,
//!     name: Option<String>,
//! }
//!
//! impl Sortable for Session {
//!     fn field_table() -> &'static FieldTable<Self> {
//!         static TABLE: LazyLock<FieldTable<Session>> = LazyLock::new(|| {
//!             FieldTable::new()
//!                 .with_field("id", |s: &Session| s.id.map(FieldValue::Int32))
//!                 .with_field("name", |s: &Session| s.name.clone().map(FieldValue::Utf8))
//!         });
//!         &TABLE
//!     }
//! }
//!
//! let rows = vec![
//!     Session { id: Some(2), name: Some("two".to_string()) },
//!     Session { id: None, name: Some("seven".to_string()) },
//!     Session { id: Some(1), name: Some("one".to_string()) },
//! ];
//!
//! // Sort by "id", ascending, nulls last
//! let comparator = FieldComparator::try_new("id", SortOptions::default()).unwrap();
//! let sorted = record_ord::sort::sort(rows, &comparator).unwrap();
//!
//! let ids: Vec<_> = sorted.iter().map(|s| s.id).collect();
//! assert_eq!(ids, vec![Some(1), Some(2), None]);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod ord;
pub mod record;
pub mod sort;
pub mod value;

pub use error::SortError;
pub use ord::FieldComparator;
pub use record::{FieldGetter, FieldTable, Sortable};
pub use value::{FieldValue, ValueKind};

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops;

/// Direction in which a field orders its records
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    /// Lowest value first
    #[default]
    Ascending,
    /// Highest value first
    Descending,
}

impl SortDirection {
    /// Apply this direction to a natural (ascending) ordering
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Where null field values sort relative to non-null values
///
/// Null placement is applied as-is under both directions: a descending sort
/// reverses the order of non-null values only.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NullPlacement {
    /// Nulls sort before every non-null value
    First,
    /// Nulls sort after every non-null value
    #[default]
    Last,
}

/// Options that define the sort order of a given field
///
/// The default sorts equivalently to `ASC NULLS LAST` in SQL (ascending
/// order with nulls sorting after any other value). Note this differs from
/// arrow's `SortOptions`, which defaults to nulls first.
///
/// # Example creation
/// ```
/// # use record_ord::{NullPlacement, SortDirection, SortOptions};
/// // configure using explicit initialization
/// let options = SortOptions {
///     direction: SortDirection::Ascending,
///     null_placement: NullPlacement::Last,
/// };
/// // Default is ASC NULLS LAST
/// assert_eq!(options, SortOptions::default());
/// assert_eq!(options.to_string(), "ASC NULLS LAST");
///
/// // Configure using builder APIs
/// let options = SortOptions::default().desc().nulls_first();
/// assert_eq!(options.to_string(), "DESC NULLS FIRST");
///
/// // configure using explicit field values
/// let options = SortOptions::default()
///     .with_direction(SortDirection::Descending)
///     .with_null_placement(NullPlacement::Last);
/// assert_eq!(options.to_string(), "DESC NULLS LAST");
/// ```
///
/// # Example operations
/// It is also possible to negate the sort options using the `!` operator.
/// ```
/// use record_ord::SortOptions;
/// let options = !SortOptions::default();
/// assert_eq!(options.to_string(), "DESC NULLS FIRST");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortOptions {
    /// Whether to sort ascending or descending
    pub direction: SortDirection,
    /// Whether to sort nulls first or last
    pub null_placement: NullPlacement,
}

impl Display for SortOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "ASC")?,
            SortDirection::Descending => write!(f, "DESC")?,
        }
        match self.null_placement {
            NullPlacement::First => write!(f, " NULLS FIRST"),
            NullPlacement::Last => write!(f, " NULLS LAST"),
        }
    }
}

impl SortOptions {
    /// Create a new `SortOptions` struct
    pub fn new(direction: SortDirection, null_placement: NullPlacement) -> Self {
        Self {
            direction,
            null_placement,
        }
    }

    /// Set this sort options to sort in descending order
    ///
    /// See [Self::with_direction] to explicitly set the underlying field
    pub fn desc(mut self) -> Self {
        self.direction = SortDirection::Descending;
        self
    }

    /// Set this sort options to sort in ascending order
    ///
    /// See [Self::with_direction] to explicitly set the underlying field
    pub fn asc(mut self) -> Self {
        self.direction = SortDirection::Ascending;
        self
    }

    /// Set this sort options to sort nulls first
    ///
    /// See [Self::with_null_placement] to explicitly set the underlying field
    pub fn nulls_first(mut self) -> Self {
        self.null_placement = NullPlacement::First;
        self
    }

    /// Set this sort options to sort nulls last
    ///
    /// See [Self::with_null_placement] to explicitly set the underlying field
    pub fn nulls_last(mut self) -> Self {
        self.null_placement = NullPlacement::Last;
        self
    }

    /// Set the sort direction explicitly
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the null placement explicitly
    pub fn with_null_placement(mut self, null_placement: NullPlacement) -> Self {
        self.null_placement = null_placement;
        self
    }
}

/// `!` operator is overloaded for `SortOptions` to invert both
/// fields of the struct.
impl ops::Not for SortOptions {
    type Output = SortOptions;

    fn not(self) -> SortOptions {
        SortOptions {
            direction: match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            },
            null_placement: match self.null_placement {
                NullPlacement::First => NullPlacement::Last,
                NullPlacement::Last => NullPlacement::First,
            },
        }
    }
}

#[test]
fn test_default_sort_options() {
    let options = SortOptions::default();
    assert_eq!(options.direction, SortDirection::Ascending);
    assert_eq!(options.null_placement, NullPlacement::Last);
    assert_eq!(options.to_string(), "ASC NULLS LAST");
}

#[test]
fn test_sort_options_builders() {
    assert_eq!(
        SortOptions::default().desc().nulls_first().to_string(),
        "DESC NULLS FIRST"
    );
    assert_eq!(
        SortOptions::default().desc().asc().to_string(),
        "ASC NULLS LAST"
    );
    assert_eq!(
        SortOptions::new(SortDirection::Descending, NullPlacement::Last),
        SortOptions::default().desc()
    );
}

#[test]
fn test_overloaded_not_sort_options() {
    let sort_options_array = [
        SortOptions::default().asc().nulls_first(),
        SortOptions::default().asc().nulls_last(),
        SortOptions::default().desc().nulls_first(),
        SortOptions::default().desc().nulls_last(),
    ];

    assert_eq!(!sort_options_array[0], sort_options_array[3]);
    assert_eq!(!sort_options_array[1], sort_options_array[2]);
    assert_eq!(!sort_options_array[2], sort_options_array[1]);
    assert_eq!(!sort_options_array[3], sort_options_array[0]);
}

#[test]
fn test_sort_direction_apply() {
    assert_eq!(
        SortDirection::Ascending.apply(Ordering::Less),
        Ordering::Less
    );
    assert_eq!(
        SortDirection::Descending.apply(Ordering::Less),
        Ordering::Greater
    );
    assert_eq!(
        SortDirection::Descending.apply(Ordering::Equal),
        Ordering::Equal
    );
}
