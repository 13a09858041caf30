//! Chart Geometry
//!
//! SVG coordinates for the dashboard charts. Components only turn these
//! into elements.

use std::f64::consts::PI;

use crate::models::TrendPoint;
use crate::view_model::point_tooltip;

/// Series colors, assigned by position
pub const PALETTE: [&str; 7] = [
    "#3b82f6", // Blue
    "#10b981", // Green
    "#f59e0b", // Amber
    "#ef4444", // Red
    "#8b5cf6", // Violet
    "#ec4899", // Pink
    "#06b6d4", // Cyan
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub path: String,
    pub color: &'static str,
    /// Anchor for the slice label, just outside the arc
    pub label_x: f64,
    pub label_y: f64,
    pub label: String,
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// Pie slices starting at twelve o'clock, clockwise.
///
/// `items` are `(label, value, color)`; zero values produce no slice.
pub fn pie_slices(items: &[(String, u64, &'static str)], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let sum: u64 = items.iter().map(|(_, v, _)| *v).sum();
    if sum == 0 {
        return Vec::new();
    }

    let mut slices = Vec::new();
    let mut start = 0.0;
    for (label, value, color) in items.iter().filter(|(_, v, _)| *v > 0) {
        let sweep = *value as f64 / sum as f64 * 2.0 * PI;
        let end = start + sweep;
        let (lx, ly) = polar(cx, cy, r * 1.18, start + sweep / 2.0);

        let path = if *value == sum {
            // A lone slice is a full circle, which one arc command cannot draw
            format!(
                "M {cx:.2} {top:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {bottom:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {top:.2} Z",
                top = cy - r,
                bottom = cy + r,
            )
        } else {
            let (x1, y1) = polar(cx, cy, r, start);
            let (x2, y2) = polar(cx, cy, r, end);
            let large_arc = if sweep > PI { 1 } else { 0 };
            format!(
                "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
            )
        };

        slices.push(PieSlice {
            path,
            color: *color,
            label_x: lx,
            label_y: ly,
            label: label.clone(),
        });
        start = end;
    }
    slices
}

/// Rounds an axis maximum up to 1, 2 or 5 times a power of ten.
pub fn nice_max(max: u64) -> u64 {
    if max == 0 {
        return 1;
    }
    let magnitude = 10u64.pow((max as f64).log10().floor() as u32);
    for step in [1, 2, 5, 10] {
        if step * magnitude >= max {
            return step * magnitude;
        }
    }
    10 * magnitude
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

/// Columns filling `width` x `height`, scaled against `nice_max`.
pub fn vertical_bars(items: &[(String, u64, &'static str)], width: f64, height: f64) -> Vec<Bar> {
    if items.is_empty() {
        return Vec::new();
    }
    let scale = nice_max(items.iter().map(|(_, v, _)| *v).max().unwrap_or(0)) as f64;
    let slot = width / items.len() as f64;
    let bar_width = slot * 0.7;

    items
        .iter()
        .enumerate()
        .map(|(i, (label, value, color))| {
            let h = *value as f64 / scale * height;
            Bar {
                label: label.clone(),
                value: *value,
                x: i as f64 * slot + (slot - bar_width) / 2.0,
                y: height - h,
                width: bar_width,
                height: h,
                color: *color,
            }
        })
        .collect()
}

/// Rows filling `width` x `height`, longest row spans the full width.
pub fn horizontal_bars(items: &[(String, u64, &'static str)], width: f64, height: f64) -> Vec<Bar> {
    if items.is_empty() {
        return Vec::new();
    }
    let max = items.iter().map(|(_, v, _)| *v).max().unwrap_or(0).max(1) as f64;
    let slot = height / items.len() as f64;
    let bar_height = slot * 0.7;

    items
        .iter()
        .enumerate()
        .map(|(i, (label, value, color))| Bar {
            label: label.clone(),
            value: *value,
            x: 0.0,
            y: i as f64 * slot + (slot - bar_height) / 2.0,
            width: *value as f64 / max * width,
            height: bar_height,
            color: *color,
        })
        .collect()
}

/// Horizontal position of the `index`-th of `count` weeks.
pub fn week_x(index: usize, count: usize, width: f64) -> f64 {
    if count <= 1 {
        width / 2.0
    } else {
        index as f64 / (count - 1) as f64 * width
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    /// Hover text for the dot
    pub title: String,
}

/// One marker per point of `series` on the `weeks` axis; weeks off the axis are skipped.
pub fn series_markers(weeks: &[String], series: &[TrendPoint], width: f64, height: f64, max: u64) -> Vec<Marker> {
    let scale = max.max(1) as f64;
    series
        .iter()
        .filter_map(|point| {
            let index = weeks.iter().position(|w| *w == point.week)?;
            Some(Marker {
                x: week_x(index, weeks.len(), width),
                y: height - point.count as f64 / scale * height,
                title: point_tooltip(point),
            })
        })
        .collect()
}

/// Chart points of `series` on the `weeks` axis
pub fn series_points(weeks: &[String], series: &[TrendPoint], width: f64, height: f64, max: u64) -> Vec<(f64, f64)> {
    series_markers(weeks, series, width, height, max)
        .into_iter()
        .map(|m| (m.x, m.y))
        .collect()
}

/// `points` attribute of an SVG polyline
pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[u64]) -> Vec<(String, u64, &'static str)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("c{}", i), *v, palette_color(i)))
            .collect()
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), palette_color(7));
        assert_ne!(palette_color(0), palette_color(1));
    }

    #[test]
    fn test_pie_skips_zero_values() {
        let slices = pie_slices(&items(&[2, 0, 2]), 100.0, 100.0, 50.0);
        assert_eq!(slices.len(), 2);
        // First half ends at six o'clock
        assert!(slices[0].path.ends_with("100.00 150.00 Z"), "{}", slices[0].path);
        assert!(pie_slices(&items(&[0, 0]), 100.0, 100.0, 50.0).is_empty());
    }

    #[test]
    fn test_pie_single_slice_is_full_circle() {
        let slices = pie_slices(&items(&[0, 5]), 100.0, 100.0, 50.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].path.matches(" A ").count(), 2);
        assert_eq!(slices[0].color, palette_color(1));
    }

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(0), 1);
        assert_eq!(nice_max(7), 10);
        assert_eq!(nice_max(12), 20);
        assert_eq!(nice_max(450), 500);
        assert_eq!(nice_max(1000), 1000);
    }

    #[test]
    fn test_vertical_bars_scale() {
        let bars = vertical_bars(&items(&[5, 10]), 200.0, 100.0);
        assert_eq!(bars[1].height, 100.0);
        assert_eq!(bars[0].height, 50.0);
        assert_eq!(bars[0].y, 50.0);
        assert!(bars[1].x > bars[0].x);
    }

    #[test]
    fn test_horizontal_bars_longest_full_width() {
        let bars = horizontal_bars(&items(&[3, 12, 6]), 300.0, 90.0);
        assert_eq!(bars[1].width, 300.0);
        assert_eq!(bars[2].width, 150.0);
    }

    #[test]
    fn test_series_points_align_on_total_weeks() {
        let weeks = vec!["W1".to_string(), "W2".to_string(), "W3".to_string()];
        let series = vec![
            TrendPoint { week: "W2".into(), count: 5, change: None },
            TrendPoint { week: "W9".into(), count: 1, change: None },
            TrendPoint { week: "W3".into(), count: 10, change: None },
        ];
        let points = series_points(&weeks, &series, 100.0, 50.0, 10);
        assert_eq!(points, vec![(50.0, 25.0), (100.0, 0.0)]);
        assert_eq!(polyline(&points), "50.00,25.00 100.00,0.00");
    }

    #[test]
    fn test_series_markers_carry_week_tooltips() {
        let weeks = vec!["W1".to_string(), "W2".to_string()];
        let series = vec![
            TrendPoint { week: "W1".to_string(), count: 4, change: None },
            TrendPoint { week: "W2".to_string(), count: 5, change: Some(50.0) },
        ];

        let markers = series_markers(&weeks, &series, 100.0, 50.0, 10);

        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].title, "W1: 4");
        assert_eq!(markers[1].title, "W2: 5 (Change: +50%)");
        assert_eq!((markers[1].x, markers[1].y), (100.0, 25.0));
    }
}
