// Cachebench - Cache Eviction Benchmark Reporting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for loading, aggregating and rendering benchmark results.

use std::path::PathBuf;
use thiserror::Error;

/// Reporting pipeline error types.
///
/// Every stage of the pipeline returns these errors to its caller; only the
/// command-line boundary decides how they are shown and which exit code is used.
///
/// # Examples
///
/// ```
/// use cachebench::ReportError;
///
/// let err = ReportError::MalformedRow {
///     line: 4,
///     reason: "column 'HitRate': expected float, got 'abc'".to_string(),
/// };
///
/// assert_eq!(
///     err.to_string(),
///     "Malformed row at line 4: column 'HitRate': expected float, got 'abc'"
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReportError {
    /// The results table does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use cachebench::ReportError;
    ///
    /// let err = ReportError::NotFound { path: "results.csv".into() };
    /// assert_eq!(err.to_string(), "Results table not found: results.csv");
    /// ```
    #[error("Results table not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The results table or result set holds no data rows.
    #[error("Empty results: {reason}")]
    Empty {
        /// What was empty.
        reason: String,
    },

    /// The header row does not match the expected column layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use cachebench::ReportError;
    ///
    /// let err = ReportError::InvalidHeader {
    ///     expected: "a,b".to_string(),
    ///     found: "a,c".to_string(),
    /// };
    /// assert!(err.to_string().contains("expected 'a,b'"));
    /// ```
    #[error("Invalid header: expected '{expected}', found '{found}'")]
    InvalidHeader {
        /// The required header, comma-joined.
        expected: String,
        /// The header actually present, comma-joined.
        found: String,
    },

    /// A data row has the wrong field count or a field of the wrong type.
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow {
        /// Line number in the source table (1-based, header is line 1).
        line: u64,
        /// What is wrong with the row.
        reason: String,
    },

    /// Row count exceeded the configured limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use cachebench::ReportError;
    ///
    /// let err = ReportError::TooManyRows { limit: 10, actual: 11 };
    /// assert!(err.to_string().contains("exceeds maximum 10"));
    /// ```
    #[error("Row limit exceeded: row count {actual} exceeds maximum {limit}")]
    TooManyRows {
        /// Maximum allowed rows.
        limit: usize,
        /// Row count reached when the limit tripped.
        actual: usize,
    },

    /// No record exists for a (pattern, algorithm) pair a chart needs.
    #[error("Missing result for algorithm '{algorithm}' on pattern '{pattern}'")]
    MissingSeriesCombination {
        /// Access pattern (chart category).
        pattern: String,
        /// Algorithm (chart series).
        algorithm: String,
    },

    /// More than one record exists for a (pattern, algorithm) pair.
    #[error("Duplicate results for algorithm '{algorithm}' on pattern '{pattern}'")]
    DuplicateSeriesCombination {
        /// Access pattern (chart category).
        pattern: String,
        /// Algorithm (chart series).
        algorithm: String,
    },

    /// The chart backend failed to draw or persist an artifact.
    #[error("Failed to render '{artifact}': {message}")]
    Render {
        /// Artifact name, e.g. `hit_rate`.
        artifact: String,
        /// Backend error message.
        message: String,
    },

    /// Any other I/O failure.
    #[error("I/O error for '{}': {message}", path.display())]
    Io {
        /// Path (or sink description) involved.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// A configuration value could not be used.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name.
        parameter: String,
        /// Reason for invalidity.
        reason: String,
    },
}

/// Convenience type alias for `Result` with `ReportError`.
pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// Create an I/O error with path context.
    ///
    /// `NotFound` I/O errors are classified as [`ReportError::NotFound`].
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ReportError::NotFound { path }
        } else {
            ReportError::Io {
                path,
                message: source.to_string(),
            }
        }
    }

    /// Create a malformed-row error.
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        ReportError::MalformedRow {
            line,
            reason: reason.into(),
        }
    }

    /// Create a render error for the named artifact.
    pub fn render(artifact: impl Into<String>, message: impl std::fmt::Display) -> Self {
        ReportError::Render {
            artifact: artifact.into(),
            message: message.to_string(),
        }
    }

    /// Returns true for errors caused by the input table rather than by rendering.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ReportError::NotFound { .. }
                | ReportError::Empty { .. }
                | ReportError::InvalidHeader { .. }
                | ReportError::MalformedRow { .. }
                | ReportError::TooManyRows { .. }
        )
    }
}
