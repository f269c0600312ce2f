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

//! PNG chart backend built on plotters.

use super::{Artifact, BarLayout, ChartBackend, GroupedBarChart, TableSpec};
use crate::error::{ReportError, Result};
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Pixel size of the bar charts.
pub const BAR_CHART_SIZE: (u32, u32) = (1000, 600);

/// Minimum pixel size of the summary table; it grows taller with the row count.
pub const TABLE_SIZE: (u32, u32) = (1200, 400);

const SERIES_COLORS: [RGBColor; 3] = [
    RGBColor(135, 206, 235),
    RGBColor(255, 165, 0),
    RGBColor(0, 128, 0),
];
const FALLBACK_COLOR: RGBColor = RGBColor(128, 128, 128);
const HEADER_FILL: RGBColor = RGBColor(220, 220, 220);

const FONT: &str = "sans-serif";
const TABLE_MARGIN: i32 = 40;
const TABLE_TOP: i32 = 70;
const ROW_HEIGHT: i32 = 30;

type DrawResult = std::result::Result<(), Box<dyn Error>>;

/// Writes each chart to `<output_dir>/<name>.png`, creating the directory
/// when needed.
#[derive(Debug, Clone)]
pub struct PlottersBackend {
    output_dir: PathBuf,
}

impl PlottersBackend {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path the artifact `name` is written to.
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.png", name))
    }

    fn prepare(&self, name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| ReportError::io_error(&self.output_dir, e))?;
        Ok(self.artifact_path(name))
    }
}

impl ChartBackend for PlottersBackend {
    fn render_grouped_bar_chart(&mut self, chart: &GroupedBarChart) -> Result<Artifact> {
        let path = self.prepare(&chart.name)?;
        draw_bar_chart(chart, &path).map_err(|e| ReportError::render(&chart.name, e))?;
        Ok(Artifact::new(&chart.name, path))
    }

    fn render_table(&mut self, table: &TableSpec) -> Result<Artifact> {
        let path = self.prepare(&table.name)?;
        draw_table(table, &path).map_err(|e| ReportError::render(&table.name, e))?;
        Ok(Artifact::new(&table.name, path))
    }
}

/// Color of the `index`-th series.
pub fn series_color(index: usize) -> RGBColor {
    SERIES_COLORS.get(index).copied().unwrap_or(FALLBACK_COLOR)
}

fn draw_bar_chart(chart: &GroupedBarChart, path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, BAR_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let slots = chart.categories.len().max(1);
    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, (FONT, 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..(slots as f64 - 0.5), 0.0..y_axis_top(chart.max_value()))?;

    let categories = &chart.categories;
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&|x| category_label(categories, *x))
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()?;

    let layout = BarLayout::for_series(chart.series.len());
    for (index, series) in chart.series.iter().enumerate() {
        let color = series_color(index);
        let bars: Vec<_> = series
            .values
            .iter()
            .enumerate()
            .filter_map(|(category, &value)| {
                let (left, right) = layout.bar_span(category, index)?;
                Some(Rectangle::new([(left, 0.0), (right, value)], color.filled()))
            })
            .collect();
        ctx.draw_series(bars)?
            .label(series.label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
    }

    if !chart.series.is_empty() {
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

fn draw_table(table: &TableSpec, path: &Path) -> DrawResult {
    let size = table_size(table.rows.len());
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let width = size.0 as i32;
    let title_style = (FONT, 24)
        .into_font()
        .style(FontStyle::Bold)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(table.title.clone(), (width / 2, TABLE_TOP / 2), title_style))?;

    let columns = table.columns.len() as i32;
    if columns == 0 {
        root.present()?;
        return Ok(());
    }

    let cell_width = (width - 2 * TABLE_MARGIN) / columns;
    let header_style = (FONT, 18)
        .into_font()
        .style(FontStyle::Bold)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let cell_style = (FONT, 16)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    let header = std::iter::once((&table.columns, &header_style, true));
    let body = table.rows.iter().map(|row| (row, &cell_style, false));
    for (row_index, (cells, style, is_header)) in header.chain(body).enumerate() {
        let top = TABLE_TOP + row_index as i32 * ROW_HEIGHT;
        for (col_index, cell) in cells.iter().enumerate().take(columns as usize) {
            let left = TABLE_MARGIN + col_index as i32 * cell_width;
            let corners = [(left, top), (left + cell_width, top + ROW_HEIGHT)];
            if is_header {
                root.draw(&Rectangle::new(corners, HEADER_FILL.filled()))?;
            }
            root.draw(&Rectangle::new(corners, BLACK.stroke_width(1)))?;
            root.draw(&Text::new(
                cell.clone(),
                (left + cell_width / 2, top + ROW_HEIGHT / 2),
                style.clone(),
            ))?;
        }
    }

    root.present()?;
    Ok(())
}

fn table_size(rows: usize) -> (u32, u32) {
    let needed = TABLE_TOP as u32 + (rows as u32 + 1) * ROW_HEIGHT as u32 + TABLE_MARGIN as u32;
    (TABLE_SIZE.0, TABLE_SIZE.1.max(needed))
}

fn y_axis_top(max: f64) -> f64 {
    if max.is_finite() && max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

/// Label under tick `x`: the category whose center it is, blank otherwise.
fn category_label(categories: &[String], x: f64) -> String {
    let nearest = x.round();
    if nearest < 0.0 || (x - nearest).abs() > 0.25 {
        return String::new();
    }
    categories.get(nearest as usize).cloned().unwrap_or_default()
}
