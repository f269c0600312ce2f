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

//! Load the simulator's results table into a [`ResultSet`].
//!
//! The table is plain CSV with a fixed header:
//!
//! ```text
//! Algorithm,Pattern,HitRate,AvgTime(ms),TotalHits,TotalMisses
//! FIFO,Random,8.50,1.23,85,915
//! ```
//!
//! Every row goes through a validating parse step, so a bad row is reported
//! as [`ReportError::MalformedRow`] with its line number instead of surfacing
//! later as an opaque failure.

use crate::config::LoadConfig;
use crate::error::{ReportError, Result};
use crate::record::{ResultRecord, ResultSet, COLUMNS};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Row shape as written by the simulator, before validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Algorithm")]
    algorithm: String,
    #[serde(rename = "Pattern")]
    pattern: String,
    #[serde(rename = "HitRate")]
    hit_rate: f64,
    #[serde(rename = "AvgTime(ms)")]
    avg_time_ms: f64,
    #[serde(rename = "TotalHits")]
    total_hits: u64,
    #[serde(rename = "TotalMisses")]
    total_misses: u64,
}

/// Load a results table from `path` with default options.
///
/// # Errors
///
/// - [`ReportError::NotFound`] if the file does not exist
/// - [`ReportError::Empty`] if it has no header or no data rows
/// - [`ReportError::InvalidHeader`] / [`ReportError::MalformedRow`] on bad content
///
/// # Examples
///
/// ```no_run
/// use cachebench::load_results;
///
/// let results = load_results("results.csv").unwrap();
/// println!("{} rows", results.len());
/// ```
pub fn load_results(path: impl AsRef<Path>) -> Result<ResultSet> {
    load_results_with_config(path, &LoadConfig::default())
}

/// Load a results table from `path`.
pub fn load_results_with_config(path: impl AsRef<Path>, config: &LoadConfig) -> Result<ResultSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ReportError::io_error(path, e))?;
    info!(path = %path.display(), "loading results table");

    parse_results_reader(file, config).map_err(|err| match err {
        ReportError::Empty { reason } => ReportError::Empty {
            reason: format!("'{}': {}", path.display(), reason),
        },
        ReportError::Io { message, .. } => ReportError::Io {
            path: path.to_path_buf(),
            message,
        },
        other => other,
    })
}

/// Parse a results table held in memory.
///
/// # Examples
///
/// ```
/// use cachebench::parse_results;
///
/// let csv = "Algorithm,Pattern,HitRate,AvgTime(ms),TotalHits,TotalMisses\n\
///            LRU,Random,9.80,1.05,98,902\n";
/// let results = parse_results(csv).unwrap();
/// assert_eq!(results.len(), 1);
/// assert_eq!(results.records()[0].algorithm(), "LRU");
/// ```
pub fn parse_results(csv: &str) -> Result<ResultSet> {
    parse_results_reader(csv.as_bytes(), &LoadConfig::default())
}

/// Parse a results table from any reader.
pub fn parse_results_reader<R: Read>(reader: R, config: &LoadConfig) -> Result<ResultSet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(from_csv_error)?.clone();
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(ReportError::Empty {
            reason: "missing header row".to_string(),
        });
    }

    let mut rows = csv_reader.records().peekable();
    if rows.peek().is_none() {
        return Err(ReportError::Empty {
            reason: "no data rows after header".to_string(),
        });
    }
    check_header(&headers)?;

    let mut records = Vec::new();
    for result in rows {
        let row = result.map_err(from_csv_error)?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if records.len() >= config.max_rows {
            return Err(ReportError::TooManyRows {
                limit: config.max_rows,
                actual: records.len() + 1,
            });
        }

        records.push(parse_row(&row, &headers, line)?);
    }

    debug!(rows = records.len(), "parsed results table");
    Ok(ResultSet::new(records))
}

fn check_header(headers: &csv::StringRecord) -> Result<()> {
    if headers.iter().eq(COLUMNS.iter().copied()) {
        return Ok(());
    }
    Err(ReportError::InvalidHeader {
        expected: COLUMNS.join(","),
        found: headers.iter().collect::<Vec<_>>().join(","),
    })
}

fn parse_row(row: &csv::StringRecord, headers: &csv::StringRecord, line: u64) -> Result<ResultRecord> {
    if row.len() != headers.len() {
        return Err(ReportError::malformed(
            line,
            format!("expected {} fields, got {}", headers.len(), row.len()),
        ));
    }

    let raw: RawRow = row.deserialize(Some(headers)).map_err(|err| {
        let reason = match err.kind() {
            csv::ErrorKind::Deserialize { err, .. } => match err.field() {
                Some(idx) => format!(
                    "column '{}': {} (got '{}')",
                    headers.get(idx as usize).unwrap_or("?"),
                    err.kind(),
                    row.get(idx as usize).unwrap_or("")
                ),
                None => err.kind().to_string(),
            },
            other => format!("{:?}", other),
        };
        ReportError::malformed(line, reason)
    })?;

    validate(raw, line)
}

/// Range checks serde cannot express.
fn validate(raw: RawRow, line: u64) -> Result<ResultRecord> {
    if raw.algorithm.is_empty() {
        return Err(ReportError::malformed(line, "column 'Algorithm' is empty"));
    }
    if raw.pattern.is_empty() {
        return Err(ReportError::malformed(line, "column 'Pattern' is empty"));
    }
    if !raw.hit_rate.is_finite() || !(0.0..=100.0).contains(&raw.hit_rate) {
        return Err(ReportError::malformed(
            line,
            format!(
                "column 'HitRate': {} is outside 0..=100",
                raw.hit_rate
            ),
        ));
    }
    if !raw.avg_time_ms.is_finite() || raw.avg_time_ms < 0.0 {
        return Err(ReportError::malformed(
            line,
            format!(
                "column 'AvgTime(ms)': {} is not a non-negative time",
                raw.avg_time_ms
            ),
        ));
    }

    Ok(ResultRecord::new(
        raw.algorithm,
        raw.pattern,
        raw.hit_rate,
        raw.avg_time_ms,
        raw.total_hits,
        raw.total_misses,
    )
    .at_line(line))
}

fn from_csv_error(err: csv::Error) -> ReportError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(io) => ReportError::Io {
            path: "<results table>".into(),
            message: io.to_string(),
        },
        csv::ErrorKind::Utf8 { err, .. } => ReportError::malformed(line, err.to_string()),
        other => ReportError::malformed(line, format!("{:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Algorithm,Pattern,HitRate,AvgTime(ms),TotalHits,TotalMisses";

    fn table(rows: &[&str]) -> String {
        let mut csv = String::from(HEADER);
        csv.push('\n');
        for row in rows {
            csv.push_str(row);
            csv.push('\n');
        }
        csv
    }

    #[test]
    fn test_parse_basic() {
        let csv = table(&[
            "FIFO,Random,8.50,1.23,85,915",
            "LRU,Random,9.80,1.05,98,902",
        ]);
        let results = parse_results(&csv).unwrap();

        assert_eq!(results.len(), 2);
        let first = &results.records()[0];
        assert_eq!(first.algorithm(), "FIFO");
        assert_eq!(first.pattern(), "Random");
        assert_eq!(first.hit_rate(), 8.5);
        assert_eq!(first.avg_time_ms(), 1.23);
        assert_eq!(first.total_hits(), 85);
        assert_eq!(first.total_misses(), 915);
        assert_eq!(first.line(), 2);
        assert_eq!(results.records()[1].line(), 3);
    }

    #[test]
    fn test_empty_input() {
        let err = parse_results("").unwrap_err();
        assert!(matches!(err, ReportError::Empty { .. }));
    }

    #[test]
    fn test_header_only() {
        let err = parse_results(&table(&[])).unwrap_err();
        assert!(matches!(err, ReportError::Empty { .. }));
    }

    #[test]
    fn test_single_unknown_line_is_empty() {
        let err = parse_results("garbage\n").unwrap_err();
        assert!(matches!(err, ReportError::Empty { .. }), "got {:?}", err);
    }

    #[test]
    fn test_header_without_newline() {
        let err = parse_results(HEADER).unwrap_err();
        assert!(matches!(err, ReportError::Empty { .. }));
    }

    #[test]
    fn test_header_is_case_sensitive() {
        let csv = "algorithm,pattern,hitrate,avgtime(ms),totalhits,totalmisses\n\
                   FIFO,Random,8.50,1.23,85,915\n";
        let err = parse_results(csv).unwrap_err();
        assert!(matches!(err, ReportError::InvalidHeader { .. }));
    }

    #[test]
    fn test_header_order_is_fixed() {
        let csv = "Pattern,Algorithm,HitRate,AvgTime(ms),TotalHits,TotalMisses\n\
                   Random,FIFO,8.50,1.23,85,915\n";
        let err = parse_results(csv).unwrap_err();
        assert!(matches!(err, ReportError::InvalidHeader { .. }));
    }

    #[test]
    fn test_short_row_is_malformed() {
        let csv = table(&["FIFO,Random,8.50,1.23,85,915", "LRU,Random,9.80"]);
        let err = parse_results(&csv).unwrap_err();
        match err {
            ReportError::MalformedRow { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("expected 6 fields, got 3"));
            }
            other => panic!("Expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_long_row_is_malformed() {
        let csv = table(&["FIFO,Random,8.50,1.23,85,915,extra"]);
        let err = parse_results(&csv).unwrap_err();
        assert!(matches!(err, ReportError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_bad_float_names_column() {
        let csv = table(&["FIFO,Random,abc,1.23,85,915"]);
        let err = parse_results(&csv).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 2"), "{}", msg);
        assert!(msg.contains("HitRate"), "{}", msg);
        assert!(msg.contains("abc"), "{}", msg);
    }

    #[test]
    fn test_negative_total_is_malformed() {
        let csv = table(&["FIFO,Random,8.50,1.23,-85,915"]);
        let err = parse_results(&csv).unwrap_err();
        assert!(err.to_string().contains("TotalHits"));
    }

    #[test]
    fn test_hit_rate_out_of_range() {
        for row in [
            "FIFO,Random,100.5,1.23,85,915",
            "FIFO,Random,-1,1.23,85,915",
            "FIFO,Random,NaN,1.23,85,915",
        ] {
            let err = parse_results(&table(&[row])).unwrap_err();
            assert!(matches!(err, ReportError::MalformedRow { .. }), "{}", row);
        }
    }

    #[test]
    fn test_negative_time_is_malformed() {
        let err = parse_results(&table(&["FIFO,Random,8.5,-0.1,85,915"])).unwrap_err();
        assert!(err.to_string().contains("AvgTime(ms)"));
    }

    #[test]
    fn test_empty_label_is_malformed() {
        let err = parse_results(&table(&[",Random,8.5,0.1,85,915"])).unwrap_err();
        assert!(err.to_string().contains("Algorithm"));
    }

    #[test]
    fn test_whitespace_trimmed() {
        let csv = table(&[" LRU , Poisson , 41.00 , 0.75 , 410 , 590 "]);
        let results = parse_results(&csv).unwrap();
        let record = &results.records()[0];
        assert_eq!(record.algorithm(), "LRU");
        assert_eq!(record.pattern(), "Poisson");
        assert_eq!(record.total_misses(), 590);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let csv = format!("{}\nFIFO,Random,8.50,1.23,85,915\n\n\n", HEADER);
        let results = parse_results(&csv).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let csv = format!("{}\r\nFIFO,Random,8.50,1.23,85,915\r\n", HEADER);
        let results = parse_results(&csv).unwrap();
        assert_eq!(results.records()[0].total_misses(), 915);
    }

    #[test]
    fn test_max_rows_limit() {
        let csv = table(&[
            "FIFO,Random,8.50,1.23,85,915",
            "LRU,Random,9.80,1.05,98,902",
            "LFU,Random,8.10,1.30,81,919",
        ]);
        let config = LoadConfig {
            max_rows: 2,
            ..Default::default()
        };
        let err = parse_results_reader(csv.as_bytes(), &config).unwrap_err();
        assert_eq!(err, ReportError::TooManyRows { limit: 2, actual: 3 });
    }

    #[test]
    fn test_custom_delimiter() {
        let csv = "Algorithm;Pattern;HitRate;AvgTime(ms);TotalHits;TotalMisses\n\
                   LFU;Weighted;23.10;0.95;231;769\n";
        let config = LoadConfig {
            delimiter: b';',
            ..Default::default()
        };
        let results = parse_results_reader(csv.as_bytes(), &config).unwrap();
        assert_eq!(results.records()[0].pattern(), "Weighted");
    }
}
