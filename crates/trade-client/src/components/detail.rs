// crates/trade-client/src/components/detail.rs

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{
        block::{Position, Title},
        Block, Borders, Cell, Clear, Paragraph, Row, Table,
    },
    Frame,
};
use trade_core::{TradeRow, EMPTY_NOTICE};

use crate::app::{DetailState, DetailView};
use crate::components::trade_table::LOADING_TEXT;

/// Overlay for history / frequent-trade lookups.
pub fn draw_detail(f: &mut Frame, area: Rect, detail: &DetailView) {
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", detail.title))
        .title(Title::from(" [Esc] 닫기 ").position(Position::Bottom))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let trades = match &detail.state {
        DetailState::Loading => {
            let loading = Paragraph::new(LOADING_TEXT)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(loading, area);
            return;
        }
        DetailState::Failed(message) => {
            let failed = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(failed, area);
            return;
        }
        DetailState::Loaded(trades) if trades.is_empty() => {
            let empty = Paragraph::new(EMPTY_NOTICE)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
            return;
        }
        DetailState::Loaded(trades) => trades,
    };

    let header = Row::new(vec!["거래일", "아파트명", "동", "거래금액", "전용면적", "층"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = trades
        .iter()
        .map(TradeRow::from)
        .map(|row| {
            Row::new(vec![
                Cell::from(row.date),
                Cell::from(row.apartment),
                Cell::from(row.dong),
                Cell::from(row.amount).style(Style::default().fg(Color::Cyan)),
                Cell::from(row.area),
                Cell::from(row.floor),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10), // Date
        Constraint::Min(14),    // Apartment
        Constraint::Length(10), // Dong
        Constraint::Length(10), // Amount
        Constraint::Length(10), // Area
        Constraint::Length(4),  // Floor
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title(format!(" {}건 ", trades.len())));

    f.render_widget(table, area);
}
