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

//! Error type for the command-line tools.

use cachebench::ReportError;
use std::io;
use thiserror::Error;

/// Printed after a missing-results error.
pub const SIMULATION_HINT: &str = "Run the simulation first to produce the results table";

/// Errors surfaced by `show-results` and `plot-results`.
///
/// # Examples
///
/// ```
/// use cachebench::ReportError;
/// use cachebench_cli::error::CliError;
///
/// let err = CliError::from(ReportError::NotFound { path: "results.csv".into() });
/// assert_eq!(err.to_string(), "Results table not found: results.csv");
/// assert!(err.hint().is_some());
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Loading, reporting or charting failed.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Writing progress messages to the terminal failed.
    #[error("Failed to write output: {message}")]
    Output {
        /// The underlying I/O error message.
        message: String,
    },
}

impl CliError {
    pub fn output(err: io::Error) -> Self {
        CliError::Output {
            message: err.to_string(),
        }
    }

    /// Follow-up advice shown under the error message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Report(ReportError::NotFound { .. }) => Some(SIMULATION_HINT),
            CliError::Report(ReportError::Empty { .. }) => Some(SIMULATION_HINT),
            _ => None,
        }
    }
}
