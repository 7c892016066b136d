// UI module for rendering the TUI.
// Lays out the duration chart and a status bar.

mod chart;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Chart
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    if app.chart.durations.is_empty() {
        draw_empty_state(frame, chunks[0]);
    } else {
        chart::draw_chart(frame, &app.chart, chunks[0]);
    }

    draw_status_bar(frame, app, chunks[1]);
}

/// Placeholder when no level has been started yet.
fn draw_empty_state(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Level durations ");
    let text = Paragraph::new("No started levels in the data")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    frame.render_widget(text, area);
}

/// Draw the status bar with the data source and key hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} levels ", app.chart.durations.len()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("| {} ", app.source.display()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| q: quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
