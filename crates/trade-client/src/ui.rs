// crates/trade-client/src/ui.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, Screen};
use crate::components::{
    analysis::draw_analysis, detail::draw_detail, help::draw_help,
    search_form::draw_search_form, status_bar::draw_status_bar, trade_table::draw_trade_table,
};

pub const APP_TITLE: &str = "부동산 실거래가 검색";

pub fn draw(f: &mut Frame, app: &App) {
    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);

    match app.screen {
        Screen::Search => draw_search_screen(f, chunks[1], app),
        Screen::Analysis => draw_analysis(f, chunks[1]),
    }

    draw_status_bar(f, chunks[2], app);

    if let Some(detail) = &app.detail {
        draw_detail(f, centered_rect(80, 70, f.size()), detail);
    }
    if app.show_help {
        draw_help(f, centered_rect(60, 70, f.size()));
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left: title and screen tabs
    let titles: Vec<Line> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(i, screen)| Line::from(format!("[{}] {}", i + 1, screen.title())))
        .collect();
    let selected = Screen::ALL
        .iter()
        .position(|s| *s == app.screen)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(format!(" {} ", APP_TITLE))
                .borders(Borders::ALL),
        );
    f.render_widget(tabs, header_chunks[0]);

    // Right: backend and freshness
    let loaded = app
        .last_loaded
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    let right_text = Line::from(vec![
        Span::styled(app.api_url.as_str(), Style::default().fg(Color::Yellow)),
        Span::raw(" | 최근 조회 "),
        Span::styled(loaded, Style::default().fg(Color::Green)),
    ]);
    let right_paragraph = Paragraph::new(right_text)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(right_paragraph, header_chunks[1]);
}

fn draw_search_screen(f: &mut Frame, area: Rect, app: &App) {
    let error_height = if app.session.error().is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),            // Form
            Constraint::Length(error_height), // Error
            Constraint::Min(5),               // Results
        ])
        .split(area);

    draw_search_form(f, chunks[0], app);

    if let Some(error) = app.session.error() {
        let alert = Paragraph::new(error)
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            );
        f.render_widget(alert, chunks[1]);
    }

    draw_trade_table(f, chunks[2], app);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
