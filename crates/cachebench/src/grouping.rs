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

//! Partition results by access pattern.
//!
//! Groups keep the order in which each pattern first appears in the table,
//! and records inside a group keep table order.

use crate::record::{ResultRecord, ResultSet};
use std::collections::HashMap;
use tracing::debug;

/// Records sharing one access pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternGroup<'a> {
    pattern: &'a str,
    records: Vec<&'a ResultRecord>,
}

impl<'a> PatternGroup<'a> {
    /// Access pattern shared by every record in the group.
    pub fn pattern(&self) -> &'a str {
        self.pattern
    }

    /// Records in table order.
    pub fn records(&self) -> &[&'a ResultRecord] {
        &self.records
    }

    /// Number of records in the group.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in this group produced by `algorithm`.
    pub fn by_algorithm<'s>(
        &'s self,
        algorithm: &'s str,
    ) -> impl Iterator<Item = &'a ResultRecord> + 's {
        self.records
            .iter()
            .copied()
            .filter(move |r| r.algorithm() == algorithm)
    }
}

/// Pattern → records, ordered by first occurrence of each pattern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternGroups<'a> {
    groups: Vec<PatternGroup<'a>>,
    index: HashMap<&'a str, usize>,
    source: Vec<&'a ResultRecord>,
}

impl<'a> PatternGroups<'a> {
    /// Pattern names in group order.
    pub fn patterns(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.iter().map(|g| g.pattern)
    }

    /// Group for `pattern`, if it occurs in the table.
    pub fn get(&self, pattern: &str) -> Option<&PatternGroup<'a>> {
        self.index.get(pattern).map(|&i| &self.groups[i])
    }

    /// Groups in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, PatternGroup<'a>> {
        self.groups.iter()
    }

    /// Number of distinct patterns.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all groups.
    pub fn total_records(&self) -> usize {
        self.groups.iter().map(PatternGroup::len).sum()
    }

    /// All records, group by group.
    pub fn records(&self) -> impl Iterator<Item = &'a ResultRecord> + '_ {
        self.groups.iter().flat_map(|g| g.records.iter().copied())
    }

    /// All records in table order, ignoring grouping.
    pub fn source_records(&self) -> &[&'a ResultRecord] {
        &self.source
    }

    /// Algorithm labels in first-seen order, walking groups in order.
    pub fn algorithms(&self) -> Vec<&'a str> {
        let mut seen: Vec<&'a str> = Vec::new();
        for record in self.records() {
            if !seen.contains(&record.algorithm()) {
                seen.push(record.algorithm());
            }
        }
        seen
    }
}

impl<'g, 'a> IntoIterator for &'g PatternGroups<'a> {
    type Item = &'g PatternGroup<'a>;
    type IntoIter = std::slice::Iter<'g, PatternGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group `results` by access pattern in a single pass.
///
/// # Examples
///
/// ```
/// use cachebench::{group_by_pattern, ResultRecord, ResultSet};
///
/// let results = ResultSet::new(vec![
///     ResultRecord::new("FIFO", "Poisson", 35.2, 0.88, 352, 648),
///     ResultRecord::new("FIFO", "Random", 8.5, 1.23, 85, 915),
///     ResultRecord::new("LRU", "Poisson", 41.0, 0.75, 410, 590),
/// ]);
/// let groups = group_by_pattern(&results);
/// assert_eq!(groups.patterns().collect::<Vec<_>>(), vec!["Poisson", "Random"]);
/// assert_eq!(groups.get("Poisson").unwrap().len(), 2);
/// ```
pub fn group_by_pattern(results: &ResultSet) -> PatternGroups<'_> {
    let mut groups: Vec<PatternGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut source = Vec::with_capacity(results.len());

    for record in results {
        source.push(record);
        let slot = *index.entry(record.pattern()).or_insert_with(|| {
            groups.push(PatternGroup {
                pattern: record.pattern(),
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].records.push(record);
    }

    debug!(patterns = groups.len(), records = results.len(), "grouped results");
    PatternGroups {
        groups,
        index,
        source,
    }
}
