//! Comparison chart
//!
//! One numeric series per field, laid out as inline SVG. The y axis always
//! starts at zero.

use crate::models::{ComparedObject, Field};
use crate::table_sort::{extract, Cell};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "line" => ChartKind::Line,
            _ => ChartKind::Bar,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(String, f64)>,
}

/// Values of `field` across objects; missing or non-numeric become 0
pub fn series(field: &Field, objects: &[ComparedObject]) -> Series {
    let points = objects
        .iter()
        .map(|obj| {
            let cell = Cell::render(field.field_type, obj.value(field.id));
            let value = extract(&cell, field.field_type).as_number();
            (obj.object_name.clone(), value)
        })
        .collect();
    Series { label: field.field_name.clone(), points }
}

/// Smallest 1/2/5 x 10^n at or above `max`
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10.0 * magnitude)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self { width: 640.0, height: 320.0, padding: 40.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub value: f64,
}

impl ChartLayout {
    fn plot_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    fn plot_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    /// y coordinate of the axis baseline
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    fn y_for(&self, value: f64, top: f64) -> f64 {
        let clamped = value.max(0.0).min(top);
        self.baseline() - clamped / top * self.plot_height()
    }

    /// One slot per point, bars at 60% of the slot
    pub fn bars(&self, series: &Series) -> Vec<Bar> {
        let n = series.points.len();
        if n == 0 {
            return Vec::new();
        }
        let top = nice_max(series.points.iter().map(|(_, v)| *v).fold(0.0, f64::max));
        let slot = self.plot_width() / n as f64;
        series
            .points
            .iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let y = self.y_for(*value, top);
                Bar {
                    x: self.padding + slot * i as f64 + slot * 0.2,
                    y,
                    width: slot * 0.6,
                    height: self.baseline() - y,
                    label: label.clone(),
                    value: *value,
                }
            })
            .collect()
    }

    /// SVG `points` attribute for the line variant
    pub fn polyline(&self, series: &Series) -> String {
        self.bars(series)
            .iter()
            .map(|b| format!("{:.1},{:.1}", b.x + b.width / 2.0, b.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Gridline values from 0 to the rounded max, with their y coordinates
    pub fn ticks(&self, series: &Series, count: usize) -> Vec<(f64, f64)> {
        let top = nice_max(series.points.iter().map(|(_, v)| *v).fold(0.0, f64::max));
        let count = count.max(1);
        (0..=count)
            .map(|i| {
                let value = top * i as f64 / count as f64;
                (value, self.y_for(value, top))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldType;
    use std::collections::HashMap;

    fn object(id: u32, name: &str, value: Option<&str>) -> ComparedObject {
        let mut values = HashMap::new();
        if let Some(v) = value {
            values.insert(1, v.to_string());
        }
        ComparedObject { id, object_name: name.to_string(), brand: None, image_url: None, values }
    }

    fn price_field() -> Field {
        Field {
            id: 1,
            field_name: "Price".to_string(),
            field_type: FieldType::Price,
            field_unit: Some("$".to_string()),
            is_required: false,
            display_order: 0,
        }
    }

    #[test]
    fn test_series_zero_for_missing() {
        let objects = vec![object(1, "A", Some("$1,299")), object(2, "B", None), object(3, "C", Some("n/a"))];
        let s = series(&price_field(), &objects);
        assert_eq!(s.label, "Price");
        assert_eq!(
            s.points,
            vec![("A".to_string(), 1299.0), ("B".to_string(), 0.0), ("C".to_string(), 0.0)]
        );
    }

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(7.0), 10.0);
        assert_eq!(nice_max(499.0), 500.0);
        assert_eq!(nice_max(5.0), 5.0);
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(f64::NAN), 1.0);
    }

    #[test]
    fn test_bars_start_at_zero() {
        let layout = ChartLayout { width: 240.0, height: 140.0, padding: 20.0 };
        let s = Series {
            label: "x".to_string(),
            points: vec![("a".to_string(), 5.0), ("b".to_string(), 0.0)],
        };
        let bars = layout.bars(&s);
        assert_eq!(bars.len(), 2);
        // 5 is the rounded top: full height
        assert_eq!(bars[0].height, 100.0);
        assert_eq!(bars[0].y, 20.0);
        assert_eq!(bars[1].height, 0.0);
        assert_eq!(bars[0].x, 20.0 + 100.0 * 0.2);
        assert_eq!(layout.polyline(&s), "70.0,20.0 170.0,120.0");

        let ticks = layout.ticks(&s, 5);
        assert_eq!(ticks.first(), Some(&(0.0, 120.0)));
        assert_eq!(ticks.last(), Some(&(5.0, 20.0)));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(ChartKind::parse("line"), ChartKind::Line);
        assert_eq!(ChartKind::parse("pie"), ChartKind::Bar);
    }
}
