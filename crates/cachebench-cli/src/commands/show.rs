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

//! Show command - console comparison report

use crate::error::CliError;
use cachebench::reporters::{build_text_report, write_report, Annotations};
use cachebench::{group_by_pattern, load_results_with_config, summarize, ReportConfig};
use std::io::Write;
use tracing::debug;

/// Load the results table and write the comparison report to `out`.
///
/// # Errors
///
/// Returns `Err` if:
/// - The results table is missing, empty or malformed
/// - Writing to `out` fails
///
/// # Examples
///
/// ```no_run
/// use cachebench::ReportConfig;
/// use cachebench_cli::commands::show_results;
///
/// # fn main() -> Result<(), cachebench_cli::error::CliError> {
/// let config = ReportConfig::default().with_annotations(false);
/// show_results(&config, std::io::stdout().lock())?;
/// # Ok(())
/// # }
/// ```
pub fn show_results<W: Write>(config: &ReportConfig, out: W) -> Result<(), CliError> {
    let results = load_results_with_config(&config.results_path, &config.load)?;
    let groups = group_by_pattern(&results);
    let summary = summarize(&results)?;

    let annotations = if config.annotations {
        Annotations::builtin()
    } else {
        Annotations::empty()
    };
    let report = build_text_report(&groups, &summary, &annotations);
    debug!(lines = report.lines().len(), "built text report");

    write_report(&report, out)?;
    Ok(())
}
