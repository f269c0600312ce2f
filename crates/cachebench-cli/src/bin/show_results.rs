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

//! Console report for cache benchmark results

use cachebench::ReportConfig;
use cachebench_cli::commands::{finish, show_results};
use cachebench_cli::error::CliError;
use clap::Parser;
use std::io;
use std::process::ExitCode;

/// Print a comparison of cache eviction algorithms per access pattern.
///
/// Reads `results.csv` from the working directory (override with
/// `CACHEBENCH_RESULTS`).
#[derive(Parser)]
#[command(name = "show-results")]
#[command(author, version, about = "Show cache benchmark results", long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    cachebench_cli::init_logging();

    finish(ReportConfig::from_env().map_err(CliError::from).and_then(|config| {
        let stdout = io::stdout();
        show_results(&config, stdout.lock())
    }))
}
