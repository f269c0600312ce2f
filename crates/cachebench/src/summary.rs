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

//! Best performers across the whole result set.

use crate::error::{ReportError, Result};
use crate::record::{ResultRecord, ResultSet};
use serde::Serialize;
use tracing::debug;

/// The overall winners of a benchmark run.
///
/// Both extrema are taken over every record, not per pattern. When several
/// records share the extreme value the earliest one in table order is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary<'a> {
    /// Record with the highest hit rate.
    pub best_hit_rate: &'a ResultRecord,
    /// Record with the lowest average time.
    pub fastest: &'a ResultRecord,
}

/// Find the best hit rate and the fastest average time.
///
/// # Errors
///
/// Returns [`ReportError::Empty`] when `results` has no records.
///
/// # Examples
///
/// ```
/// use cachebench::{summarize, ResultRecord, ResultSet};
///
/// let results = ResultSet::new(vec![
///     ResultRecord::new("FIFO", "Random", 8.5, 1.23, 85, 915),
///     ResultRecord::new("LRU", "Random", 9.8, 1.05, 98, 902),
/// ]);
/// let summary = summarize(&results).unwrap();
/// assert_eq!(summary.best_hit_rate.algorithm(), "LRU");
/// assert_eq!(summary.fastest.avg_time_display(), "1.05ms");
/// ```
pub fn summarize(results: &ResultSet) -> Result<Summary<'_>> {
    let best_hit_rate = first_extreme(results, |candidate, best| {
        candidate.hit_rate() > best.hit_rate()
    })?;
    let fastest = first_extreme(results, |candidate, best| {
        candidate.avg_time_ms() < best.avg_time_ms()
    })?;

    debug!(
        best_hit_rate = best_hit_rate.line(),
        fastest = fastest.line(),
        "selected best performers"
    );
    Ok(Summary {
        best_hit_rate,
        fastest,
    })
}

/// Linear scan that replaces the current pick only on a strict improvement,
/// so the first of several equal records wins.
fn first_extreme<F>(results: &ResultSet, beats: F) -> Result<&ResultRecord>
where
    F: Fn(&ResultRecord, &ResultRecord) -> bool,
{
    results
        .iter()
        .reduce(|best, candidate| if beats(candidate, best) { candidate } else { best })
        .ok_or_else(|| ReportError::Empty {
            reason: "no records to summarize".to_string(),
        })
}
