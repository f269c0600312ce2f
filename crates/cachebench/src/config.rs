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

//! Configuration for loading results and writing reports.
//!
//! Defaults match the layout the simulator produces: `results.csv` in the
//! working directory and charts under `docs/graphs`. Each default can be
//! overridden through environment variables, see [`ReportConfig::from_env`].

use crate::error::{ReportError, Result};
use std::path::PathBuf;

/// Default results table location.
pub const DEFAULT_RESULTS_PATH: &str = "results.csv";

/// Default chart output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "docs/graphs";

/// Default maximum number of data rows.
///
/// A simulator run produces one row per (algorithm, pattern) pair, so real
/// tables are tiny; the limit only bounds memory on corrupt input.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Overrides the results table path.
pub const ENV_RESULTS: &str = "CACHEBENCH_RESULTS";
/// Overrides the chart output directory.
pub const ENV_OUTPUT_DIR: &str = "CACHEBENCH_OUTPUT_DIR";
/// Overrides [`LoadConfig::max_rows`].
pub const ENV_MAX_ROWS: &str = "CACHEBENCH_MAX_ROWS";
/// `0`, `false`, `off` or `no` disables the known-pattern observations block.
pub const ENV_ANNOTATIONS: &str = "CACHEBENCH_ANNOTATIONS";

/// Configuration for parsing the results table.
///
/// # Examples
///
/// ```
/// use cachebench::LoadConfig;
///
/// let config = LoadConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// assert_eq!(config.max_rows, 1_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,
    /// Trim whitespace around fields (default: `true`).
    pub trim: bool,
    /// Maximum number of data rows (default: [`DEFAULT_MAX_ROWS`]).
    pub max_rows: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Top-level configuration shared by the report commands.
///
/// # Examples
///
/// ```
/// use cachebench::ReportConfig;
///
/// let config = ReportConfig::default()
///     .with_results_path("out/results.csv")
///     .with_output_dir("out/graphs");
/// assert_eq!(config.results_path.to_str(), Some("out/results.csv"));
/// assert!(config.annotations);
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Results table to read.
    pub results_path: PathBuf,
    /// Directory chart images are written to.
    pub output_dir: PathBuf,
    /// Table parsing options.
    pub load: LoadConfig,
    /// Whether the text report includes known-pattern observations.
    pub annotations: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            load: LoadConfig::default(),
            annotations: true,
        }
    }
}

impl ReportConfig {
    /// Defaults with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidConfig`] when an override cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides taken from `lookup`.
    ///
    /// `from_env` uses the process environment; tests pass a closure.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = non_empty(lookup(ENV_RESULTS)) {
            config.results_path = PathBuf::from(path);
        }
        if let Some(dir) = non_empty(lookup(ENV_OUTPUT_DIR)) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(raw) = non_empty(lookup(ENV_MAX_ROWS)) {
            let max_rows = raw
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| ReportError::InvalidConfig {
                    parameter: ENV_MAX_ROWS.to_string(),
                    reason: format!("expected a positive integer, got '{}'", raw),
                })?;
            config.load.max_rows = max_rows;
        }
        if let Some(raw) = non_empty(lookup(ENV_ANNOTATIONS)) {
            config.annotations = parse_switch(ENV_ANNOTATIONS, &raw)?;
        }

        Ok(config)
    }

    pub fn with_results_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_path = path.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_load_config(mut self, load: LoadConfig) -> Self {
        self.load = load;
        self
    }

    pub fn with_annotations(mut self, enabled: bool) -> Self {
        self.annotations = enabled;
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_switch(parameter: &str, raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ReportError::InvalidConfig {
            parameter: parameter.to_string(),
            reason: format!("expected on/off, got '{}'", raw),
        }),
    }
}
