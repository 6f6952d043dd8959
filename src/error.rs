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

//! Defines `SortError` for representing failures when ordering records

use std::error::Error;

/// Failure raised while resolving a sort field or comparing its values.
///
/// None of these are retryable: each indicates the caller asked for a field
/// that does not exist or supplied data that cannot carry a total order.
#[derive(Debug)]
pub enum SortError {
    /// The requested sort field is empty or not registered on the record type
    FieldResolution(String),
    /// The same field yielded values of two different kinds
    TypeMismatch(String),
    /// The field's value kind has no natural order
    UnsupportedType(String),
}

impl std::fmt::Display for SortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortError::FieldResolution(message) => {
                write!(f, "Error resolving sort field: {}", message)
            }
            SortError::TypeMismatch(message) => {
                write!(f, "Type mismatch error: {}", message)
            }
            SortError::UnsupportedType(message) => {
                write!(f, "Unsupported type error: {}", message)
            }
        }
    }
}

impl Error for SortError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SortError::FieldResolution("no field named 'bogus'".to_string());
        assert_eq!(
            err.to_string(),
            "Error resolving sort field: no field named 'bogus'"
        );

        let err = SortError::TypeMismatch("Int32 and Utf8".to_string());
        assert_eq!(err.to_string(), "Type mismatch error: Int32 and Utf8");

        let err = SortError::UnsupportedType("Boolean".to_string());
        assert_eq!(err.to_string(), "Unsupported type error: Boolean");
    }
}
