// crates/trade-client/src/components/analysis.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const ANALYSIS_PLACEHOLDER: &str = "분석 페이지 (준비중)";

/// Static screen; nothing here calls the backend.
pub fn draw_analysis(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(ANALYSIS_PLACEHOLDER)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().title(" 분석 ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
