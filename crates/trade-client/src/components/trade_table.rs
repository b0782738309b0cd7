// crates/trade-client/src/components/trade_table.rs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use trade_core::{Phase, TableView, TradeRow, EMPTY_NOTICE, PAGE_SIZE_OPTIONS};

use crate::app::{App, Panel};

pub const IDLE_HINT: &str = "지역 코드를 입력하고 검색하세요.";
pub const LOADING_TEXT: &str = "불러오는 중...";

pub fn draw_trade_table(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" 실거래 내역 ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.current_panel == Panel::Table {
            Color::Yellow
        } else {
            Color::White
        }));

    match app.session.phase() {
        Phase::Idle => {
            let hint = Paragraph::new(IDLE_HINT)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(hint, area);
            return;
        }
        Phase::Loading => {
            let loading = Paragraph::new(LOADING_TEXT)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(loading, area);
            return;
        }
        Phase::Success | Phase::Error => {}
    }

    let view = app.session.table_view();
    if view.is_empty() {
        let empty = Paragraph::new(EMPTY_NOTICE)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Rows
            Constraint::Length(1), // Pagination
        ])
        .split(inner);

    let header = Row::new(vec![
        "아파트명", "동", "거래금액", "전용면적", "층", "건축년도", "거래일", "지번",
    ])
    .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view
        .rows()
        .into_iter()
        .map(|row: TradeRow| {
            Row::new(vec![
                Cell::from(row.apartment).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(row.dong).style(Style::default().fg(Color::Gray)),
                Cell::from(row.amount).style(Style::default().fg(Color::Cyan)),
                Cell::from(row.area),
                Cell::from(row.floor),
                Cell::from(row.building_year),
                Cell::from(row.date),
                Cell::from(row.jibun).style(Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(16),    // Apartment
        Constraint::Length(10), // Dong
        Constraint::Length(10), // Amount
        Constraint::Length(10), // Area
        Constraint::Length(4),  // Floor
        Constraint::Length(8),  // Building year
        Constraint::Length(10), // Date
        Constraint::Length(8),  // Jibun
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select((app.current_panel == Panel::Table).then_some(app.selected_row));
    f.render_stateful_widget(table, chunks[0], &mut state);

    f.render_widget(pagination_line(&view), chunks[1]);
}

fn pagination_line(view: &TableView<'_>) -> Paragraph<'static> {
    let sizes: Vec<Span> = PAGE_SIZE_OPTIONS
        .iter()
        .flat_map(|&size| {
            let style = if size == view.page_size {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled(size.to_string(), style), Span::raw(" ")]
        })
        .collect();

    let mut spans = vec![Span::raw("페이지당 행 수: ")];
    spans.extend(sizes);
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        view.displayed_rows_label(),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::styled(
        format!(
            "  [{}/{}]",
            view.page_index + 1,
            view.total_page_count.max(1)
        ),
        Style::default().fg(Color::Gray),
    ));

    Paragraph::new(Line::from(spans)).alignment(Alignment::Right)
}
