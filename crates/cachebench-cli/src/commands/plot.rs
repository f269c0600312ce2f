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

//! Plot command - comparison charts

use crate::error::CliError;
use cachebench::charts::{build_chart_set, render_charts_with, PlottersBackend};
use cachebench::{group_by_pattern, load_results_with_config, Artifact, ChartBackend, ReportConfig};
use colored::Colorize;
use std::io::Write;

/// Render the charts as PNG files under `config.output_dir`.
///
/// Each file is announced on `out` as soon as it is written.
///
/// # Errors
///
/// Returns `Err` if the results table cannot be loaded, does not form a full
/// algorithm x pattern grid, or a chart cannot be written.
pub fn plot_results<W: Write>(config: &ReportConfig, out: W) -> Result<Vec<Artifact>, CliError> {
    let mut backend = PlottersBackend::new(&config.output_dir);
    plot_results_with(config, &mut backend, out)
}

/// Like [`plot_results`], drawing with `backend`.
pub fn plot_results_with<B, W>(
    config: &ReportConfig,
    backend: &mut B,
    mut out: W,
) -> Result<Vec<Artifact>, CliError>
where
    B: ChartBackend + ?Sized,
    W: Write,
{
    let results = load_results_with_config(&config.results_path, &config.load)?;
    let set = build_chart_set(&group_by_pattern(&results))?;
    let artifacts = render_charts_with(&set, backend, |artifact| {
        writeln!(out, "Generated: {}", artifact.path.display()).map_err(CliError::output)
    })?;

    writeln!(out).map_err(CliError::output)?;
    writeln!(out, "{}", "All graphs generated successfully!".green().bold())
        .map_err(CliError::output)?;
    writeln!(out, "Check {}/ directory", config.output_dir.display()).map_err(CliError::output)?;
    out.flush().map_err(CliError::output)?;

    Ok(artifacts)
}
