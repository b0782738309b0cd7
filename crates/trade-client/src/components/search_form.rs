// crates/trade-client/src/components/search_form.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use trade_core::FormField;

use crate::app::{App, InputMode, Panel};

pub fn draw_search_form(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" 아파트 실거래가 검색 ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.current_panel == Panel::Form {
            Color::Yellow
        } else {
            Color::White
        }));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FormField::ALL.len() as u16), // Fields
            Constraint::Min(1),                              // Actions
        ])
        .split(inner);

    let editing = app.input_mode == InputMode::Editing;
    let lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| field_line(app, field, editing && app.form.focused() == field))
        .collect();
    f.render_widget(Paragraph::new(lines), chunks[0]);

    let actions = if app.form.is_disabled() {
        Line::from(Span::styled("검색 중...", Style::default().fg(Color::Yellow)))
    } else if editing {
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" 검색  "),
            Span::styled("[Ctrl+R]", Style::default().fg(Color::Cyan)),
            Span::raw(" 초기화  "),
            Span::styled("[Esc]", Style::default().fg(Color::Gray)),
            Span::raw(" 완료"),
        ])
    } else {
        Line::from(vec![
            Span::styled("[/]", Style::default().fg(Color::Yellow)),
            Span::raw(" 조건 입력"),
        ])
    };
    f.render_widget(
        Paragraph::new(actions).style(Style::default().fg(Color::Gray)),
        chunks[1],
    );
}

fn field_line(app: &App, field: FormField, focused: bool) -> Line<'static> {
    let value = app.form.value(field);
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(field.label(), label_style),
        Span::raw(": "),
    ];
    if value.is_empty() && !focused {
        spans.push(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(Color::Cyan)));
    }
    if field == FormField::RegionCode {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    if focused {
        spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }
    Line::from(spans)
}
