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

//! Property-based tests for grouping, summaries and report rendering.
//!
//! Properties covered:
//! - Grouping partitions the rows and keeps first-seen order
//! - A full algorithm x pattern grid yields one group per pattern
//! - Summaries pick the earliest of tied records
//! - Report building is deterministic

use cachebench::charts::build_chart_set;
use cachebench::reporters::{build_text_report, Annotations};
use cachebench::{group_by_pattern, parse_results, summarize, ResultRecord, ResultSet, COLUMNS};
use proptest::prelude::*;

// ===== Generators =====

fn label() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-zA-Z0-9]{0,9}").expect("Failed to create label regex")
}

fn record() -> impl Strategy<Value = ResultRecord> {
    (
        prop::sample::select(vec!["FIFO", "LRU", "LFU", "ARC"]),
        prop::sample::select(vec!["Random", "Poisson", "Weighted", "Scan"]),
        0.0f64..=100.0,
        0.0f64..50.0,
        0u64..100_000,
        0u64..100_000,
    )
        .prop_map(|(alg, pat, hit_rate, avg, hits, misses)| {
            ResultRecord::new(alg, pat, hit_rate, avg, hits, misses)
        })
}

fn result_set() -> impl Strategy<Value = ResultSet> {
    prop::collection::vec(record(), 1..40).prop_map(ResultSet::new)
}

/// Distinct labels, so a grid built from them has no duplicate pairs.
fn distinct_labels(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(label(), 1..=max).prop_map(|set| set.into_iter().collect())
}

fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

// ===== Grouping =====

proptest! {
    #[test]
    fn prop_grouping_partitions_rows(results in result_set()) {
        let groups = group_by_pattern(&results);

        prop_assert_eq!(groups.total_records(), results.len());
        let expected = first_seen(results.iter().map(|r| r.pattern()));
        let actual: Vec<&str> = groups.patterns().collect();
        prop_assert_eq!(actual, expected);

        for group in &groups {
            prop_assert!(!group.is_empty());
            prop_assert!(group.records().iter().all(|r| r.pattern() == group.pattern()));
            // rows keep their file order inside a group
            let positions: Vec<usize> = group
                .records()
                .iter()
                .map(|r| results.iter().position(|x| std::ptr::eq(x, *r)).unwrap())
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            prop_assert_eq!(positions, sorted);
        }
    }

    #[test]
    fn prop_full_grid_groups(
        algorithms in distinct_labels(5),
        patterns in distinct_labels(5),
    ) {
        let mut csv = COLUMNS.join(",");
        csv.push('\n');
        for algorithm in &algorithms {
            for pattern in &patterns {
                csv.push_str(&format!("{},{},10.00,1.00,10,90\n", algorithm, pattern));
            }
        }

        let results = parse_results(&csv).unwrap();
        let groups = group_by_pattern(&results);
        prop_assert_eq!(groups.len(), patterns.len());
        prop_assert!(groups.iter().all(|g| g.len() == algorithms.len()));

        let set = build_chart_set(&groups).unwrap();
        prop_assert_eq!(set.hit_rate.series.len(), algorithms.len());
        prop_assert!(set.hit_rate.series.iter().all(|s| s.values.len() == patterns.len()));
    }
}

// ===== Summary =====

proptest! {
    #[test]
    fn prop_summary_picks_first_extreme(results in result_set()) {
        let summary = summarize(&results).unwrap();
        let records = results.records();

        let max = records.iter().map(|r| r.hit_rate()).fold(f64::MIN, f64::max);
        let min = records.iter().map(|r| r.avg_time_ms()).fold(f64::MAX, f64::min);
        let first_max = records.iter().position(|r| r.hit_rate() == max).unwrap();
        let first_min = records.iter().position(|r| r.avg_time_ms() == min).unwrap();

        prop_assert!(std::ptr::eq(summary.best_hit_rate, &records[first_max]));
        prop_assert!(std::ptr::eq(summary.fastest, &records[first_min]));
    }

    #[test]
    fn prop_all_tied_picks_first_row(n in 1usize..20, hit_rate in 0.0f64..=100.0) {
        let results: ResultSet = (0..n)
            .map(|i| ResultRecord::new(format!("A{}", i), "Random", hit_rate, 1.0, 1, 1))
            .collect();
        let summary = summarize(&results).unwrap();
        prop_assert_eq!(summary.best_hit_rate.algorithm(), "A0");
        prop_assert_eq!(summary.fastest.algorithm(), "A0");
    }
}

// ===== Reporting =====

proptest! {
    #[test]
    fn prop_report_is_deterministic(results in result_set()) {
        let groups = group_by_pattern(&results);
        let summary = summarize(&results).unwrap();

        let first = build_text_report(&groups, &summary, &Annotations::builtin());
        let second = build_text_report(&groups, &summary, &Annotations::builtin());
        prop_assert_eq!(first.render(), second.render());
    }

    #[test]
    fn prop_report_has_one_section_per_pattern(results in result_set()) {
        let groups = group_by_pattern(&results);
        let summary = summarize(&results).unwrap();
        let report = build_text_report(&groups, &summary, &Annotations::empty());

        let headings = report
            .lines()
            .iter()
            .filter(|l| l.ends_with(" Access Pattern:"))
            .count();
        prop_assert_eq!(headings, groups.len());
    }
}
