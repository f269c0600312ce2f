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

//! CLI command implementations

mod plot;
mod show;

pub use plot::{plot_results, plot_results_with};
pub use show::show_results;

use crate::error::CliError;
use colored::Colorize;
use std::io::{self, Write};
use std::process::ExitCode;

/// Print `result`'s error and hint to stderr and turn it into an exit code.
///
/// # Examples
///
/// ```
/// use cachebench_cli::commands::finish;
/// use std::process::ExitCode;
///
/// assert_eq!(finish(Ok(())), ExitCode::SUCCESS);
/// ```
pub fn finish(result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let stderr = io::stderr();
            let mut err = stderr.lock();
            let _ = writeln!(err, "{} {}", "Error:".red().bold(), e);
            if let Some(hint) = e.hint() {
                let _ = writeln!(err, "{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}
