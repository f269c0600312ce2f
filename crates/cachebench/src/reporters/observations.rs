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

//! Known-pattern annotations.
//!
//! Background notes about the simulator's standard access patterns. They are
//! prior knowledge, not measurements, so the report prints them under a
//! separate heading and only for patterns that actually occur in the data.

/// Notes keyed by access-pattern name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    entries: Vec<(String, Vec<String>)>,
}

impl Annotations {
    /// No annotations; the report omits the observations block.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Notes for the simulator's built-in patterns.
    pub fn builtin() -> Self {
        Self::empty()
            .with_note("Random", "Low hit rates (~8-10%) - hardest for all algorithms")
            .with_note("Poisson", "High hit rates (~35-41%) - benefits from locality")
            .with_note(
                "Poisson",
                "LRU generally performs best with temporal locality",
            )
            .with_note("Weighted", "Medium hit rates (~20-24%) - hot set helps")
            .with_note(
                "Weighted",
                "LFU works well with weighted access (popular items)",
            )
    }

    /// Adds a note for `pattern`. Names match case-sensitively.
    pub fn with_note(mut self, pattern: impl Into<String>, note: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let note = note.into();
        match self.entries.iter_mut().find(|(p, _)| *p == pattern) {
            Some((_, notes)) => notes.push(note),
            None => self.entries.push((pattern, vec![note])),
        }
        self
    }

    /// Notes for `pattern`; empty for unknown patterns.
    pub fn notes_for(&self, pattern: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(p, _)| p == pattern)
            .map(|(_, notes)| notes.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
