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

//! Comparison charts.
//!
//! Chart generation is split in two:
//!
//! - **Data shaping** ([`build_chart_set`]): turns grouped results into fully
//!   specified chart descriptions. Pure and backend independent.
//! - **Drawing** ([`ChartBackend`]): draws and persists a description.
//!   [`PlottersBackend`] writes PNG files; tests use in-memory backends.
//!
//! ```text
//! PatternGroups ──build_chart_set──▶ ChartSet ──render_charts──▶ ChartBackend
//!                                    ├── hit_rate       (grouped bars)
//!                                    ├── response_time  (grouped bars)
//!                                    └── summary_table  (table)
//! ```

pub mod plotters_backend;

pub use plotters_backend::PlottersBackend;

use crate::error::{ReportError, Result};
use crate::grouping::{PatternGroup, PatternGroups};
use crate::record::ResultRecord;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Artifact name of the hit-rate chart.
pub const HIT_RATE_CHART: &str = "hit_rate";
/// Artifact name of the response-time chart.
pub const RESPONSE_TIME_CHART: &str = "response_time";
/// Artifact name of the summary table.
pub const SUMMARY_TABLE: &str = "summary_table";

/// Column headings of the summary table.
pub const TABLE_COLUMNS: [&str; 6] = ["Algorithm", "Pattern", "Hit Rate", "Avg Time", "Hits", "Misses"];

/// Width of one series slot when there are at most three series, as a
/// fraction of a category.
pub const SLOT_WIDTH: f64 = 1.0 / 3.0;

/// One named series: a value per category.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

/// A grouped bar chart: categories along x, one bar per series in each.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarChart {
    /// Artifact name, e.g. `hit_rate`.
    pub name: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl GroupedBarChart {
    /// Largest value across all series, 0 for an empty chart.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0_f64, f64::max)
    }
}

/// A table image.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    /// Artifact name, e.g. `summary_table`.
    pub name: String,
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Everything the chart tool draws.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub hit_rate: GroupedBarChart,
    pub response_time: GroupedBarChart,
    pub summary_table: TableSpec,
}

/// A drawn and persisted chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub path: PathBuf,
}

impl Artifact {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Drawing capability used by [`render_charts`].
pub trait ChartBackend {
    /// Draw and persist a grouped bar chart.
    fn render_grouped_bar_chart(&mut self, chart: &GroupedBarChart) -> Result<Artifact>;

    /// Draw and persist a table image.
    fn render_table(&mut self, table: &TableSpec) -> Result<Artifact>;
}

/// Horizontal placement of bars inside a category.
///
/// Category `i` spans `i - 0.5 ..= i + 0.5`. Up to three series each get a
/// slot of [`SLOT_WIDTH`]; three series sit left, center and right, fewer are
/// centered. More than three share the category evenly.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub slot_width: f64,
    /// Offset of each series' slot center from the category center.
    pub offsets: Vec<f64>,
}

impl BarLayout {
    pub fn for_series(count: usize) -> Self {
        let slot_width = if count <= 3 {
            SLOT_WIDTH
        } else {
            1.0 / count as f64
        };
        let center = (count as f64 - 1.0) / 2.0;
        let offsets = (0..count)
            .map(|i| (i as f64 - center) * slot_width)
            .collect();
        Self {
            slot_width,
            offsets,
        }
    }

    /// Left and right x of the bar for `series` in `category`.
    pub fn bar_span(&self, category: usize, series: usize) -> Option<(f64, f64)> {
        let offset = self.offsets.get(series)?;
        let center = category as f64 + offset;
        let half = self.slot_width / 2.0;
        Some((center - half, center + half))
    }
}

/// Shape grouped results into the two bar charts and the summary table.
///
/// Categories are the patterns in group order; series are the algorithms in
/// first-seen order.
///
/// # Errors
///
/// - [`ReportError::MissingSeriesCombination`] if some pattern lacks a
///   record for some algorithm
/// - [`ReportError::DuplicateSeriesCombination`] if some pattern has more
///   than one record for an algorithm
///
/// Summary table rows follow table order.
pub fn build_chart_set(groups: &PatternGroups<'_>) -> Result<ChartSet> {
    let categories: Vec<String> = groups.patterns().map(str::to_string).collect();
    let algorithms = groups.algorithms();

    let mut hit_rate = Vec::with_capacity(algorithms.len());
    let mut response_time = Vec::with_capacity(algorithms.len());
    for algorithm in &algorithms {
        let mut hits = Vec::with_capacity(categories.len());
        let mut times = Vec::with_capacity(categories.len());
        for group in groups {
            let record = single_record(group, algorithm)?;
            hits.push(record.hit_rate());
            times.push(record.avg_time_ms());
        }
        hit_rate.push(Series {
            label: algorithm.to_string(),
            values: hits,
        });
        response_time.push(Series {
            label: algorithm.to_string(),
            values: times,
        });
    }

    let rows = groups.source_records().iter().copied().map(table_row).collect();

    debug!(
        categories = categories.len(),
        series = algorithms.len(),
        "shaped chart data"
    );
    Ok(ChartSet {
        hit_rate: GroupedBarChart {
            name: HIT_RATE_CHART.to_string(),
            title: "Cache Hit Rate Comparison".to_string(),
            x_label: "Access Pattern".to_string(),
            y_label: "Hit Rate (%)".to_string(),
            categories: categories.clone(),
            series: hit_rate,
        },
        response_time: GroupedBarChart {
            name: RESPONSE_TIME_CHART.to_string(),
            title: "Average Response Time Comparison".to_string(),
            x_label: "Access Pattern".to_string(),
            y_label: "Average Response Time (ms)".to_string(),
            categories,
            series: response_time,
        },
        summary_table: TableSpec {
            name: SUMMARY_TABLE.to_string(),
            title: "Complete Results Summary".to_string(),
            columns: TABLE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        },
    })
}

/// Hand every chart in `set` to `backend`, in artifact order.
pub fn render_charts<B: ChartBackend + ?Sized>(set: &ChartSet, backend: &mut B) -> Result<Vec<Artifact>> {
    render_charts_with(set, backend, |_| Ok(()))
}

/// Like [`render_charts`], calling `on_rendered` after each artifact is
/// written and before the next one is drawn.
///
/// Stops at the first error from either the backend or `on_rendered`.
pub fn render_charts_with<B, F, E>(
    set: &ChartSet,
    backend: &mut B,
    mut on_rendered: F,
) -> std::result::Result<Vec<Artifact>, E>
where
    B: ChartBackend + ?Sized,
    F: FnMut(&Artifact) -> std::result::Result<(), E>,
    E: From<ReportError>,
{
    let charts = [
        ChartRef::Bars(&set.hit_rate),
        ChartRef::Bars(&set.response_time),
        ChartRef::Table(&set.summary_table),
    ];

    let mut artifacts = Vec::with_capacity(charts.len());
    for chart in charts {
        let artifact = logged(match chart {
            ChartRef::Bars(bars) => backend.render_grouped_bar_chart(bars),
            ChartRef::Table(table) => backend.render_table(table),
        })?;
        on_rendered(&artifact)?;
        artifacts.push(artifact);
    }
    Ok(artifacts)
}

enum ChartRef<'s> {
    Bars(&'s GroupedBarChart),
    Table(&'s TableSpec),
}

fn logged(result: Result<Artifact>) -> Result<Artifact> {
    match &result {
        Ok(artifact) => info!(name = %artifact.name, path = %artifact.path.display(), "rendered chart"),
        Err(err) => warn!(error = %err, "chart backend failed"),
    }
    result
}

fn single_record<'a>(group: &PatternGroup<'a>, algorithm: &str) -> Result<&'a ResultRecord> {
    let mut matches = group.by_algorithm(algorithm);
    let record = matches
        .next()
        .ok_or_else(|| ReportError::MissingSeriesCombination {
            pattern: group.pattern().to_string(),
            algorithm: algorithm.to_string(),
        })?;
    if matches.next().is_some() {
        return Err(ReportError::DuplicateSeriesCombination {
            pattern: group.pattern().to_string(),
            algorithm: algorithm.to_string(),
        });
    }
    Ok(record)
}

fn table_row(record: &ResultRecord) -> Vec<String> {
    vec![
        record.algorithm().to_string(),
        record.pattern().to_string(),
        record.hit_rate_display(),
        record.avg_time_display(),
        record.total_hits().to_string(),
        record.total_misses().to_string(),
    ]
}
