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

//! Reporting for cache eviction benchmark results.
//!
//! The cache simulator writes one row per (algorithm, access pattern) pair to
//! a CSV table. This crate turns that table into a console comparison report
//! and a set of comparison charts.
//!
//! # Pipeline
//!
//! ```text
//! results.csv ──load_results──▶ ResultSet ──group_by_pattern──▶ PatternGroups
//!                                  │                                 │
//!                                  └──summarize──▶ Summary           │
//!                                                     │              │
//!                          reporters::build_text_report ◀────────────┤
//!                          charts::build_chart_set ◀─────────────────┘
//! ```
//!
//! Every stage after loading is pure. I/O happens only in [`load_results`],
//! the report sinks and the chart backends.
//!
//! # Features
//!
//! - **Strict loading**: header, field count and numeric ranges are checked
//!   and every failure names the offending line
//! - **Deterministic grouping**: patterns and algorithms keep first-seen order
//! - **Stable summaries**: ties go to the earliest row
//! - **Pluggable drawing**: charts are data first, drawn by a [`ChartBackend`]
//!
//! # Examples
//!
//! ```
//! use cachebench::reporters::{build_text_report, Annotations};
//! use cachebench::{group_by_pattern, parse_results, summarize};
//!
//! let csv = "\
//! Algorithm,Pattern,HitRate,AvgTime(ms),TotalHits,TotalMisses
//! FIFO,Random,8.50,1.23,85,915
//! LRU,Random,9.80,1.05,98,902
//! ";
//!
//! let results = parse_results(csv).unwrap();
//! let groups = group_by_pattern(&results);
//! let summary = summarize(&results).unwrap();
//!
//! assert_eq!(summary.best_hit_rate.algorithm(), "LRU");
//!
//! let report = build_text_report(&groups, &summary, &Annotations::builtin());
//! assert!(report.render().contains("Random Access Pattern:"));
//! ```
//!
//! ## Charts
//!
//! ```no_run
//! use cachebench::charts::{build_chart_set, render_charts, PlottersBackend};
//! use cachebench::{group_by_pattern, load_results};
//!
//! let results = load_results("results.csv").unwrap();
//! let set = build_chart_set(&group_by_pattern(&results)).unwrap();
//!
//! let mut backend = PlottersBackend::new("docs/graphs");
//! for artifact in render_charts(&set, &mut backend).unwrap() {
//!     println!("Generated: {}", artifact.path.display());
//! }
//! ```

pub mod charts;
pub mod config;
pub mod error;
pub mod grouping;
pub mod loader;
pub mod record;
pub mod reporters;
pub mod summary;

// Re-export public API
pub use charts::{build_chart_set, render_charts, render_charts_with, Artifact, ChartBackend, ChartSet};
pub use config::{LoadConfig, ReportConfig};
pub use error::{ReportError, Result};
pub use grouping::{group_by_pattern, PatternGroup, PatternGroups};
pub use loader::{load_results, load_results_with_config, parse_results, parse_results_reader};
pub use record::{ResultRecord, ResultSet, COLUMNS};
pub use summary::{summarize, Summary};
