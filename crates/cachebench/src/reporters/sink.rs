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

//! Report sinks.
//!
//! The only place the text reporter touches I/O.

use super::text::TextReport;
use crate::error::{ReportError, Result};
use std::io::{self, Write};

/// Write `report` to `out`.
///
/// # Examples
///
/// ```
/// use cachebench::reporters::{build_text_report, write_report, Annotations};
/// use cachebench::{group_by_pattern, summarize, ResultRecord, ResultSet};
///
/// let results = ResultSet::new(vec![ResultRecord::new("LRU", "Random", 9.8, 1.05, 98, 902)]);
/// let groups = group_by_pattern(&results);
/// let summary = summarize(&results).unwrap();
/// let report = build_text_report(&groups, &summary, &Annotations::empty());
///
/// let mut buffer = Vec::new();
/// write_report(&report, &mut buffer).unwrap();
/// assert_eq!(String::from_utf8(buffer).unwrap(), report.render());
/// ```
pub fn write_report<W: Write>(report: &TextReport, out: W) -> Result<()> {
    write_to(report, out).map_err(|e| sink_error("<report sink>", e))
}

/// Write `report` to standard output.
pub fn print_report(report: &TextReport) -> Result<()> {
    let stdout = io::stdout();
    write_to(report, stdout.lock()).map_err(|e| sink_error("<stdout>", e))
}

fn write_to<W: Write>(report: &TextReport, mut out: W) -> io::Result<()> {
    out.write_all(report.render().as_bytes())?;
    out.flush()
}

fn sink_error(sink: &str, err: io::Error) -> ReportError {
    ReportError::Io {
        path: sink.into(),
        message: err.to_string(),
    }
}
