// crates/trade-client/src/components/status_bar.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode, Screen};

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (msg, style) = if let Some(notice) = &app.notice {
        (
            Line::from(Span::styled(notice.as_str(), Style::default().fg(Color::Yellow))),
            Style::default().fg(Color::Yellow),
        )
    } else {
        match app.input_mode {
            InputMode::Normal => (Line::from(normal_hints(app.screen)), Style::default()),
            InputMode::Editing => {
                let input = vec![
                    Span::styled("[Tab/↑↓]", Style::default().fg(Color::Cyan)),
                    Span::raw(" 항목 이동 "),
                    Span::styled("[Enter]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                    Span::raw(" 검색 "),
                    Span::styled("[Ctrl+R]", Style::default().fg(Color::Magenta)),
                    Span::raw(" 초기화 "),
                    Span::styled("[Esc]", Style::default().fg(Color::Gray)),
                    Span::raw(" 완료"),
                ];
                (Line::from(input), Style::default().fg(Color::Yellow))
            }
        }
    };

    let status_block = Block::default()
        .borders(Borders::ALL)
        .border_style(style);

    let paragraph = Paragraph::new(msg)
        .block(status_block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn normal_hints(screen: Screen) -> Vec<Span<'static>> {
    let mut hints = vec![
        Span::styled("[1/2]", Style::default().fg(Color::Blue)),
        Span::raw(" 화면 "),
    ];
    if screen == Screen::Search {
        hints.extend([
            Span::styled("[/]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(" 검색조건 "),
            Span::styled("[←→]", Style::default().fg(Color::Cyan)),
            Span::raw(" 페이지 "),
            Span::styled("[+/-]", Style::default().fg(Color::Cyan)),
            Span::raw(" 행 수 "),
            Span::styled("[H]", Style::default().fg(Color::Green)),
            Span::raw(" 이력 "),
            Span::styled("[F]", Style::default().fg(Color::Magenta)),
            Span::raw(" 빈번 거래 "),
        ]);
    }
    hints.extend([
        Span::styled("[F1]", Style::default().fg(Color::Gray)),
        Span::raw(" 도움말 "),
        Span::styled("[Q]", Style::default().fg(Color::Gray)),
        Span::raw(" 종료"),
    ]);
    hints
}
