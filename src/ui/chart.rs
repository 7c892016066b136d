// Duration bar chart.
// Renders per-level durations with an average reference line overlaid.

use ratatui::{prelude::*, widgets::*};

use crate::stats::ChartData;

/// Y-axis ceiling in days. Levels taking longer than this still draw, clipped
/// to the top of the chart.
const Y_MAX_DAYS: f64 = 50.0;

/// Average line color, matching the highlight red used on the site.
const AVERAGE_COLOR: Color = Color::Rgb(0xF9, 0x6D, 0x6D);

/// Render the duration chart into the given area.
pub fn draw_chart(frame: &mut Frame, chart: &ChartData, area: Rect) {
    let x_max = (chart.max_level() + 1) as f64;

    let completed: Vec<(f64, f64)> = chart
        .durations
        .iter()
        .filter(|d| d.completed)
        .map(|d| (d.level as f64, d.days))
        .collect();

    let in_progress: Vec<(f64, f64)> = chart
        .durations
        .iter()
        .filter(|d| !d.completed)
        .map(|d| (d.level as f64, d.days))
        .collect();

    let average = [(0.0, chart.average_days), (x_max, chart.average_days)];

    let mut datasets = vec![
        Dataset::default()
            .name("Duration")
            .marker(symbols::Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(Color::Cyan))
            .data(&completed),
    ];

    if !in_progress.is_empty() {
        datasets.push(
            Dataset::default()
                .name("In progress")
                .marker(symbols::Marker::HalfBlock)
                .graph_type(GraphType::Bar)
                .style(Style::default().fg(Color::Yellow))
                .data(&in_progress),
        );
    }

    datasets.push(
        Dataset::default()
            .name(format!("Average ({:.2} days)", chart.average_days))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(AVERAGE_COLOR))
            .data(&average),
    );

    let x_labels = vec![
        Span::from("0"),
        Span::from(format!("{}", midpoint(x_max))),
        Span::from(format!("{}", x_max as u32)),
    ];
    let y_labels = vec![
        Span::from("0"),
        Span::from(format!("{}", midpoint(Y_MAX_DAYS))),
        Span::from(format!("{}", Y_MAX_DAYS as u32)),
    ];

    let widget = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Duration in days from start to completion of a WaniKani level "),
        )
        .x_axis(
            Axis::default()
                .title("Level")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Duration (days)")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, Y_MAX_DAYS])
                .labels(y_labels),
        );

    frame.render_widget(widget, area);
}

/// Nearest whole number to the axis midpoint, for the middle tick label.
fn midpoint(max: f64) -> u32 {
    (max / 2.0).round() as u32
}
