//! Chart Geometry
//!
//! Pre-aggregated statistics turned into SVG-ready numbers. Doughnut arcs use
//! a circle whose circumference is 100 so dash lengths read as percentages.

use crate::models::{field_label, FieldStat};

/// Radius giving a circumference of 100
pub const DOUGHNUT_RADIUS: f64 = 15.915_494_309_189_533;

pub const CORRECT_COLOR: &str = "rgba(75, 192, 192, 0.7)";
pub const INCORRECT_COLOR: &str = "rgba(255, 99, 132, 0.7)";
pub const ACCURACY_COLOR: &str = "rgba(54, 162, 235, 0.7)";

#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub label: &'static str,
    pub value: u32,
    pub color: &'static str,
    /// Arc length, 0..=100
    pub length: f64,
    /// Start position along the circle, 0..100
    pub offset: f64,
    /// `12問 (60.0%)`
    pub caption: String,
}

impl ArcSegment {
    pub fn dash_array(&self) -> String {
        format!("{:.3} {:.3}", self.length, 100.0 - self.length)
    }

    /// SVG strokes start at 3 o'clock; shift so the first arc starts at 12
    pub fn dash_offset(&self) -> String {
        format!("{:.3}", 25.0 - self.offset)
    }
}

fn percent_of(value: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(value) / f64::from(total) * 100.0
    }
}

/// Correct / incorrect split of all attempts
pub fn overall_doughnut(correct: u32, total: u32) -> Vec<ArcSegment> {
    let incorrect = total.saturating_sub(correct);
    let mut offset = 0.0;
    [("正解", correct, CORRECT_COLOR), ("不正解", incorrect, INCORRECT_COLOR)]
        .into_iter()
        .map(|(label, value, color)| {
            let length = percent_of(value, total);
            let segment = ArcSegment {
                label,
                value,
                color,
                length,
                offset,
                caption: format!("{}問 ({:.1}%)", value, length),
            };
            offset += length;
            segment
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Bar height relative to the chart's scale, 0..=100
    pub height: f64,
}

/// One bar per field, accuracy on a fixed 0–100 scale
pub fn accuracy_bars(stats: &[FieldStat]) -> Vec<Bar> {
    stats
        .iter()
        .map(|stat| Bar {
            label: field_label(&stat.field).to_string(),
            value: stat.accuracy,
            height: stat.accuracy.clamp(0.0, 100.0),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackedBar {
    pub label: String,
    pub correct: u32,
    pub incorrect: u32,
    pub correct_height: f64,
    pub incorrect_height: f64,
}

/// Correct and incorrect attempts stacked per field, scaled to the busiest field
pub fn attempt_bars(stats: &[FieldStat]) -> Vec<StackedBar> {
    let max_total = stats.iter().map(|s| s.total).max().unwrap_or(0);
    stats
        .iter()
        .map(|stat| {
            let incorrect = stat.total.saturating_sub(stat.correct);
            StackedBar {
                label: field_label(&stat.field).to_string(),
                correct: stat.correct,
                incorrect,
                correct_height: percent_of(stat.correct.min(stat.total), max_total),
                incorrect_height: percent_of(incorrect, max_total),
            }
        })
        .collect()
}

/// Horizontal placement of bar `index` of `count` in a 0..100 wide chart:
/// `(x, width)`, with a fifth of each slot as padding on either side
pub fn bar_slot(index: usize, count: usize) -> (f64, f64) {
    let slot = 100.0 / count.max(1) as f64;
    (index as f64 * slot + slot * 0.2, slot * 0.6)
}

/// `66.7%`, `100%`, `0%`
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_stat(field: &str, correct: u32, total: u32) -> FieldStat {
        FieldStat {
            field: field.to_string(),
            accuracy: (percent_of(correct, total) * 10.0).round() / 10.0,
            total,
            correct,
        }
    }

    #[test]
    fn test_doughnut_splits_attempts() {
        let arcs = overall_doughnut(3, 4);
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[0].label, "正解");
        assert!((arcs[0].length - 75.0).abs() < 1e-9);
        assert!((arcs[1].length - 25.0).abs() < 1e-9);
        assert!((arcs[1].offset - 75.0).abs() < 1e-9);
        assert_eq!(arcs[0].caption, "3問 (75.0%)");
        assert_eq!(arcs[1].caption, "1問 (25.0%)");
    }

    #[test]
    fn test_doughnut_without_attempts() {
        let arcs = overall_doughnut(0, 0);
        assert!(arcs.iter().all(|a| a.length == 0.0));
        assert_eq!(arcs[0].caption, "0問 (0.0%)");
    }

    #[test]
    fn test_accuracy_bars_use_field_labels() {
        let bars = accuracy_bars(&[make_stat("author", 1, 2), make_stat("image", 2, 2)]);
        assert_eq!(bars[0].label, "作者");
        assert!((bars[0].height - 50.0).abs() < 1e-9);
        assert_eq!(bars[1].label, "画像");
        assert!((bars[1].height - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_attempt_bars_scale_to_busiest_field() {
        let bars = attempt_bars(&[make_stat("title", 2, 8), make_stat("style", 1, 4)]);
        assert_eq!(bars[0].incorrect, 6);
        assert!((bars[0].correct_height + bars[0].incorrect_height - 100.0).abs() < 1e-9);
        assert!((bars[1].correct_height + bars[1].incorrect_height - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_bar_slots_divide_width() {
        let (x0, w0) = bar_slot(0, 4);
        let (x3, w3) = bar_slot(3, 4);
        assert!((x0 - 5.0).abs() < 1e-9);
        assert!((w0 - 15.0).abs() < 1e-9);
        assert!((x3 + w3 - 95.0).abs() < 1e-9);
        assert_eq!(bar_slot(0, 0), (20.0, 60.0));
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(66.7), "66.7%");
        assert_eq!(format_percent(100.0), "100%");
        assert_eq!(format_percent(0.0), "0%");
    }
}
