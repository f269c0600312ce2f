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

//! Typed rows of the results table.

use serde::Serialize;

/// Column names of the results table, in the required order.
pub const COLUMNS: [&str; 6] = [
    "Algorithm",
    "Pattern",
    "HitRate",
    "AvgTime(ms)",
    "TotalHits",
    "TotalMisses",
];

/// One row of the results table.
///
/// Fields are private; a record cannot change after the loader builds it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    algorithm: String,
    pattern: String,
    hit_rate: f64,
    avg_time_ms: f64,
    total_hits: u64,
    total_misses: u64,
    #[serde(skip)]
    line: u64,
}

impl ResultRecord {
    /// Creates a record. `line` is the source line number, or 0 when the
    /// record did not come from a table.
    pub fn new(
        algorithm: impl Into<String>,
        pattern: impl Into<String>,
        hit_rate: f64,
        avg_time_ms: f64,
        total_hits: u64,
        total_misses: u64,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            pattern: pattern.into(),
            hit_rate,
            avg_time_ms,
            total_hits,
            total_misses,
            line: 0,
        }
    }

    pub(crate) fn at_line(mut self, line: u64) -> Self {
        self.line = line;
        self
    }

    /// Eviction algorithm label, e.g. `LRU`.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Access pattern label, e.g. `Poisson`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Hit rate in percent.
    pub fn hit_rate(&self) -> f64 {
        self.hit_rate
    }

    /// Average request time in milliseconds.
    pub fn avg_time_ms(&self) -> f64 {
        self.avg_time_ms
    }

    /// Requests served from the cache.
    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    /// Requests that missed the cache.
    pub fn total_misses(&self) -> u64 {
        self.total_misses
    }

    /// Source line number (header is line 1), 0 if unknown.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Hit rate as shown in reports: two decimals and a `%` suffix.
    pub fn hit_rate_display(&self) -> String {
        format!("{:.2}%", self.hit_rate)
    }

    /// Average time as shown in reports: two decimals and an `ms` suffix.
    pub fn avg_time_display(&self) -> String {
        format!("{:.2}ms", self.avg_time_ms)
    }
}

/// All records of one results table, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<ResultRecord>,
}

impl ResultSet {
    /// Wrap `records`, keeping their order.
    pub fn new(records: Vec<ResultRecord>) -> Self {
        Self { records }
    }

    /// Records in source order.
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Iterate records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResultRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultRecord;
    type IntoIter = std::slice::Iter<'a, ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<ResultRecord> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ResultRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formatting() {
        let record = ResultRecord::new("LRU", "Random", 9.8, 1.05, 98, 902);
        assert_eq!(record.hit_rate_display(), "9.80%");
        assert_eq!(record.avg_time_display(), "1.05ms");
    }

    #[test]
    fn test_display_rounds_to_two_places() {
        let record = ResultRecord::new("LFU", "Weighted", 23.456, 0.004, 1, 2);
        assert_eq!(record.hit_rate_display(), "23.46%");
        assert_eq!(record.avg_time_display(), "0.00ms");
    }

    #[test]
    fn test_result_set_preserves_order() {
        let set: ResultSet = vec![
            ResultRecord::new("FIFO", "Random", 8.5, 1.23, 85, 915),
            ResultRecord::new("LRU", "Random", 9.8, 1.05, 98, 902),
        ]
        .into_iter()
        .collect();

        let algorithms: Vec<&str> = set.iter().map(|r| r.algorithm()).collect();
        assert_eq!(algorithms, vec!["FIFO", "LRU"]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_new_record_has_no_line() {
        let record = ResultRecord::new("FIFO", "Random", 8.5, 1.23, 85, 915);
        assert_eq!(record.line(), 0);
        assert_eq!(record.at_line(3).line(), 3);
    }
}
