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

//! Comparison charts for cache benchmark results

use cachebench::ReportConfig;
use cachebench_cli::commands::{finish, plot_results};
use cachebench_cli::error::CliError;
use clap::Parser;
use std::io;
use std::process::ExitCode;

/// Draw hit-rate, response-time and summary charts as PNG files.
///
/// Reads `results.csv` and writes to `docs/graphs/` (override with
/// `CACHEBENCH_RESULTS` and `CACHEBENCH_OUTPUT_DIR`).
#[derive(Parser)]
#[command(name = "plot-results")]
#[command(author, version, about = "Plot cache benchmark results", long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    cachebench_cli::init_logging();

    finish(ReportConfig::from_env().map_err(CliError::from).and_then(|config| {
        let stdout = io::stdout();
        plot_results(&config, stdout.lock()).map(|_| ())
    }))
}
