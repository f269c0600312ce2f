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

//! End-to-end tests: results file on disk through report and chart data.

use cachebench::charts::{build_chart_set, render_charts, GroupedBarChart, TableSpec};
use cachebench::reporters::{build_text_report, write_report, Annotations};
use cachebench::{
    group_by_pattern, load_results, load_results_with_config, summarize, Artifact, ChartBackend,
    LoadConfig, ReportError,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &str = "Algorithm,Pattern,HitRate,AvgTime(ms),TotalHits,TotalMisses";

/// Nine rows in the simulator's usual order: algorithm-major.
const FULL_RUN: &str = "\
Algorithm,Pattern,HitRate,AvgTime(ms),TotalHits,TotalMisses
FIFO,Random,8.50,1.23,85,915
FIFO,Poisson,35.20,0.88,352,648
FIFO,Weighted,20.40,1.02,204,796
LRU,Random,9.80,1.05,98,902
LRU,Poisson,41.00,0.75,410,590
LRU,Weighted,22.10,0.97,221,779
LFU,Random,8.10,1.30,81,919
LFU,Poisson,36.50,0.90,365,635
LFU,Weighted,24.30,0.91,243,757
";

fn write_results(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("results.csv");
    fs::write(&path, content).expect("Failed to write results file");
    path
}

#[derive(Default)]
struct MemoryBackend {
    drawn: Vec<String>,
}

impl ChartBackend for MemoryBackend {
    fn render_grouped_bar_chart(&mut self, chart: &GroupedBarChart) -> cachebench::Result<Artifact> {
        self.drawn.push(chart.name.clone());
        Ok(Artifact::new(&chart.name, format!("{}.png", chart.name)))
    }

    fn render_table(&mut self, table: &TableSpec) -> cachebench::Result<Artifact> {
        self.drawn.push(table.name.clone());
        Ok(Artifact::new(&table.name, format!("{}.png", table.name)))
    }
}

#[test]
fn test_full_run_report() {
    let dir = TempDir::new().unwrap();
    let results = load_results(write_results(&dir, FULL_RUN)).unwrap();
    assert_eq!(results.len(), 9);

    let groups = group_by_pattern(&results);
    let patterns: Vec<&str> = groups.patterns().collect();
    assert_eq!(patterns, vec!["Random", "Poisson", "Weighted"]);
    assert!(groups.iter().all(|g| g.len() == 3));

    let summary = summarize(&results).unwrap();
    let report = build_text_report(&groups, &summary, &Annotations::builtin());

    let mut out = Vec::new();
    write_report(&report, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("CACHE ALGORITHM PERFORMANCE COMPARISON"));
    assert!(text.contains("Best Hit Rate: LRU on Poisson pattern (41.00%)"));
    assert!(text.contains("Fastest Avg Time: LRU on Poisson pattern (0.75ms)"));
    assert!(text.contains("- Weighted pattern: LFU works well with weighted access (popular items)"));

    let random = text.find("Random Access Pattern:").unwrap();
    let poisson = text.find("Poisson Access Pattern:").unwrap();
    let weighted = text.find("Weighted Access Pattern:").unwrap();
    assert!(random < poisson && poisson < weighted);
}

#[test]
fn test_full_run_charts() {
    let dir = TempDir::new().unwrap();
    let results = load_results(write_results(&dir, FULL_RUN)).unwrap();
    let set = build_chart_set(&group_by_pattern(&results)).unwrap();

    assert_eq!(set.hit_rate.categories, vec!["Random", "Poisson", "Weighted"]);
    let lfu = &set.hit_rate.series[2];
    assert_eq!(lfu.label, "LFU");
    assert_eq!(lfu.values, vec![8.10, 36.50, 24.30]);
    assert_eq!(set.summary_table.rows.len(), 9);
    let first_two: Vec<&str> = set.summary_table.rows[..2].iter().map(|r| r[1].as_str()).collect();
    assert_eq!(first_two, vec!["Random", "Poisson"]);

    let mut backend = MemoryBackend::default();
    let artifacts = render_charts(&set, &mut backend).unwrap();
    assert_eq!(artifacts.len(), 3);
    assert_eq!(backend.drawn, vec!["hit_rate", "response_time", "summary_table"]);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");

    let err = load_results(&path).unwrap_err();
    assert_eq!(err, ReportError::NotFound { path });
    assert!(err.is_input_error());
}

#[test]
fn test_empty_file() {
    let dir = TempDir::new().unwrap();
    let err = load_results(write_results(&dir, "")).unwrap_err();
    assert!(matches!(err, ReportError::Empty { .. }), "got {:?}", err);
}

#[test]
fn test_header_only_file() {
    let dir = TempDir::new().unwrap();
    let err = load_results(write_results(&dir, &format!("{}\n", HEADER))).unwrap_err();
    match err {
        ReportError::Empty { reason } => assert!(reason.contains("results.csv")),
        other => panic!("Expected Empty error, got {:?}", other),
    }
}

#[test]
fn test_bad_row_names_line() {
    let dir = TempDir::new().unwrap();
    let content = format!("{}\nLRU,Random,9.80,1.05,98,902\nLFU,Random,fast,1.30,81,919\n", HEADER);
    let err = load_results(write_results(&dir, &content)).unwrap_err();
    match err {
        ReportError::MalformedRow { line, reason } => {
            assert_eq!(line, 3);
            assert!(reason.contains("HitRate"));
        }
        other => panic!("Expected MalformedRow error, got {:?}", other),
    }
}

#[test]
fn test_row_limit_from_config() {
    let dir = TempDir::new().unwrap();
    let path = write_results(&dir, FULL_RUN);
    let config = LoadConfig {
        max_rows: 4,
        ..Default::default()
    };

    let err = load_results_with_config(&path, &config).unwrap_err();
    assert!(matches!(err, ReportError::TooManyRows { limit: 4, .. }));
}

#[test]
fn test_single_row_is_both_best_performers() {
    let dir = TempDir::new().unwrap();
    let content = format!("{}\nARC,Scan,12.00,2.00,120,880\n", HEADER);
    let results = load_results(write_results(&dir, &content)).unwrap();
    let summary = summarize(&results).unwrap();

    assert_eq!(summary.best_hit_rate.algorithm(), "ARC");
    assert_eq!(summary.fastest.algorithm(), "ARC");
    assert_eq!(summary.best_hit_rate.line(), summary.fastest.line());
}

#[test]
fn test_incomplete_grid_reports_but_does_not_chart() {
    let dir = TempDir::new().unwrap();
    let content = format!(
        "{}\nFIFO,Random,8.50,1.23,85,915\nLRU,Random,9.80,1.05,98,902\nLRU,Poisson,41.00,0.75,410,590\n",
        HEADER
    );
    let results = load_results(write_results(&dir, &content)).unwrap();
    let groups = group_by_pattern(&results);

    let summary = summarize(&results).unwrap();
    let report = build_text_report(&groups, &summary, &Annotations::empty());
    assert!(report.render().contains("Poisson Access Pattern:"));

    let err = build_chart_set(&groups).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing result for algorithm 'FIFO' on pattern 'Poisson'"
    );
}
