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

//! Console report builder.
//!
//! Builds the whole report as an immutable list of lines. Nothing here
//! prints; see [`super::sink`] for writing a report out.

use super::observations::Annotations;
use crate::grouping::PatternGroups;
use crate::record::ResultRecord;
use crate::summary::Summary;
use std::fmt;

/// Width of the `=` and `-` rules.
pub const REPORT_WIDTH: usize = 70;

/// Command suggested at the end of the report.
pub const PLOT_HINT: &str = "For graphs, run: plot-results";

/// A rendered text report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReport {
    lines: Vec<String>,
}

impl TextReport {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The report as one string, each line newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for TextReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Build the comparison report.
///
/// Sections, in order: banner, one table per pattern (group order), best
/// performers, observations for known patterns present in the data (omitted
/// when none match), and a pointer to the chart tool.
///
/// # Examples
///
/// ```
/// use cachebench::reporters::{build_text_report, Annotations};
/// use cachebench::{group_by_pattern, summarize, ResultRecord, ResultSet};
///
/// let results = ResultSet::new(vec![
///     ResultRecord::new("FIFO", "Random", 8.5, 1.23, 85, 915),
///     ResultRecord::new("LRU", "Random", 9.8, 1.05, 98, 902),
/// ]);
/// let groups = group_by_pattern(&results);
/// let summary = summarize(&results).unwrap();
/// let report = build_text_report(&groups, &summary, &Annotations::empty());
///
/// assert!(report.render().contains("Best Hit Rate: LRU on Random pattern (9.80%)"));
/// ```
pub fn build_text_report(
    groups: &PatternGroups<'_>,
    summary: &Summary<'_>,
    annotations: &Annotations,
) -> TextReport {
    let mut lines = Vec::new();
    let heavy = "=".repeat(REPORT_WIDTH);
    let light = "-".repeat(REPORT_WIDTH);

    lines.push(String::new());
    lines.push(heavy.clone());
    lines.push("CACHE ALGORITHM PERFORMANCE COMPARISON".to_string());
    lines.push(heavy.clone());

    for group in groups {
        lines.push(String::new());
        lines.push(format!("{} Access Pattern:", group.pattern()));
        lines.push(light.clone());
        lines.push(format_row("Algorithm", "Hit Rate", "Avg Time", "Hits", "Misses"));
        lines.push(light.clone());
        for record in group.records() {
            lines.push(record_row(record));
        }
    }

    lines.push(String::new());
    lines.push(heavy.clone());
    lines.push("BEST PERFORMERS".to_string());
    lines.push(heavy.clone());
    lines.push(format!(
        "Best Hit Rate: {} on {} pattern ({:.2}%)",
        summary.best_hit_rate.algorithm(),
        summary.best_hit_rate.pattern(),
        summary.best_hit_rate.hit_rate()
    ));
    lines.push(format!(
        "Fastest Avg Time: {} on {} pattern ({:.2}ms)",
        summary.fastest.algorithm(),
        summary.fastest.pattern(),
        summary.fastest.avg_time_ms()
    ));

    lines.push(String::new());
    lines.push(heavy.clone());

    let observations: Vec<String> = groups
        .patterns()
        .flat_map(move |pattern| {
            annotations
                .notes_for(pattern)
                .iter()
                .map(move |note| format!("- {} pattern: {}", pattern, note))
        })
        .collect();
    if !observations.is_empty() {
        lines.push(String::new());
        lines.push("Key Observations (known patterns):".to_string());
        lines.extend(observations);
    }

    lines.push(String::new());
    lines.push(PLOT_HINT.to_string());
    lines.push(heavy);
    lines.push(String::new());

    TextReport { lines }
}

/// One table row: algorithm, hit rate, avg time, hits, misses.
pub fn record_row(record: &ResultRecord) -> String {
    format_row(
        record.algorithm(),
        &record.hit_rate_display(),
        &record.avg_time_display(),
        &record.total_hits().to_string(),
        &record.total_misses().to_string(),
    )
}

fn format_row(algorithm: &str, hit_rate: &str, avg_time: &str, hits: &str, misses: &str) -> String {
    format!(
        "{:<12} {:<15} {:<15} {:<10} {:<10}",
        algorithm, hit_rate, avg_time, hits, misses
    )
}
