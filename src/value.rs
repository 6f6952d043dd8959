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

//! The closed set of value kinds a sortable field may yield

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

/// A single field value drawn from the closed set of supported kinds.
///
/// Field accessors yield `Option<FieldValue>`, with `None` standing for a
/// null field. Two values take part in a comparison only when they share a
/// kind; cross-kind comparison is rejected with
/// [`SortError::TypeMismatch`](crate::SortError::TypeMismatch).
///
/// `Boolean` is representable so that accessor tables can expose flag
/// fields, but it carries no natural order and is rejected with
/// [`SortError::UnsupportedType`](crate::SortError::UnsupportedType)
/// wherever it reaches an ordering position.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// 32-bit signed integer
    Int32(i32),
    /// 64-bit signed integer
    Int64(i64),
    /// UTF-8 text, ordered byte-wise
    Utf8(String),
    /// Single precision float, ordered by IEEE 754 total order
    Float32(f32),
    /// Double precision float, ordered by IEEE 754 total order
    Float64(f64),
    /// Calendar date
    Date(NaiveDate),
    /// Instant with sub-second precision
    Timestamp(DateTime<Utc>),
    /// Boolean flag, not orderable
    Boolean(bool),
}

impl FieldValue {
    /// Returns the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Int32(_) => ValueKind::Int32,
            FieldValue::Int64(_) => ValueKind::Int64,
            FieldValue::Utf8(_) => ValueKind::Utf8,
            FieldValue::Float32(_) => ValueKind::Float32,
            FieldValue::Float64(_) => ValueKind::Float64,
            FieldValue::Date(_) => ValueKind::Date,
            FieldValue::Timestamp(_) => ValueKind::Timestamp,
            FieldValue::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Natural ascending order of two values sharing an orderable kind.
    ///
    /// Floats are ordered by IEEE 754 totalOrder, so `-0.0 < 0.0` and NaN
    /// sorts after every other value. Callers must have checked the operands
    /// with [`ValueKind::has_natural_order`] and kind equality first.
    pub(crate) fn natural_cmp(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Int32(a), FieldValue::Int32(b)) => a.cmp(b),
            (FieldValue::Int64(a), FieldValue::Int64(b)) => a.cmp(b),
            (FieldValue::Utf8(a), FieldValue::Utf8(b)) => a.cmp(b),
            (FieldValue::Float32(a), FieldValue::Float32(b)) => a.total_cmp(b),
            (FieldValue::Float64(a), FieldValue::Float64(b)) => a.total_cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a.cmp(b),
            _ => unreachable!("operands must share an orderable kind"),
        }
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int32(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int64(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Utf8(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Utf8(value.to_string())
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Float32(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float64(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

/// The kind of a [`FieldValue`], without its payload
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// UTF-8 text
    Utf8,
    /// Single precision float
    Float32,
    /// Double precision float
    Float64,
    /// Calendar date
    Date,
    /// Instant with sub-second precision
    Timestamp,
    /// Boolean flag
    Boolean,
}

impl ValueKind {
    /// Whether values of this kind carry a natural total order
    pub fn has_natural_order(self) -> bool {
        !matches!(self, ValueKind::Boolean)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int32 => "Int32",
            ValueKind::Int64 => "Int64",
            ValueKind::Utf8 => "Utf8",
            ValueKind::Float32 => "Float32",
            ValueKind::Float64 => "Float64",
            ValueKind::Date => "Date",
            ValueKind::Timestamp => "Timestamp",
            ValueKind::Boolean => "Boolean",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(FieldValue::Int32(1).kind(), ValueKind::Int32);
        assert_eq!(FieldValue::Int64(1).kind(), ValueKind::Int64);
        assert_eq!(FieldValue::from("a").kind(), ValueKind::Utf8);
        assert_eq!(FieldValue::Float32(1.0).kind(), ValueKind::Float32);
        assert_eq!(FieldValue::Float64(1.0).kind(), ValueKind::Float64);
        assert_eq!(FieldValue::Boolean(true).kind(), ValueKind::Boolean);
    }

    #[test]
    fn test_orderable_kinds() {
        assert!(ValueKind::Int32.has_natural_order());
        assert!(ValueKind::Utf8.has_natural_order());
        assert!(ValueKind::Timestamp.has_natural_order());
        assert!(!ValueKind::Boolean.has_natural_order());
    }

    #[test]
    fn test_integer_order() {
        let a = FieldValue::Int32(3);
        let b = FieldValue::Int32(5);
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
        assert_eq!(b.natural_cmp(&a), Ordering::Greater);
        assert_eq!(a.natural_cmp(&a), Ordering::Equal);

        let a = FieldValue::Int64(-1);
        let b = FieldValue::Int64(1);
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_text_order() {
        let a = FieldValue::from("five");
        let b = FieldValue::from("three");
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
        // byte-wise, not locale-aware: upper case sorts before lower case
        let a = FieldValue::from("Zebra");
        let b = FieldValue::from("apple");
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
        // the empty string sorts first
        let a = FieldValue::from("");
        let b = FieldValue::from("a");
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_float_total_order() {
        let a = FieldValue::Float64(1.0);
        let b = FieldValue::Float64(f64::NAN);
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
        assert_eq!(b.natural_cmp(&b), Ordering::Equal);

        let neg = FieldValue::Float64(-0.0);
        let pos = FieldValue::Float64(0.0);
        assert_eq!(neg.natural_cmp(&pos), Ordering::Less);
        assert_eq!(pos.natural_cmp(&neg), Ordering::Greater);

        let a = FieldValue::Float32(1.0);
        let b = FieldValue::Float32(f32::INFINITY);
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_temporal_order() {
        let d1 = FieldValue::Date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        let d2 = FieldValue::Date(NaiveDate::from_ymd_opt(2020, 1, 5).unwrap());
        assert_eq!(d1.natural_cmp(&d2), Ordering::Less);

        let t1 = FieldValue::Timestamp(DateTime::from_timestamp(100, 0).unwrap());
        let t2 = FieldValue::Timestamp(DateTime::from_timestamp(100, 500).unwrap());
        assert_eq!(t1.natural_cmp(&t2), Ordering::Less);
        assert_eq!(t2.natural_cmp(&t2), Ordering::Equal);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ValueKind::Int32.to_string(), "Int32");
        assert_eq!(ValueKind::Utf8.to_string(), "Utf8");
        assert_eq!(ValueKind::Boolean.to_string(), "Boolean");
    }
}
