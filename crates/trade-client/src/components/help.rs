// crates/trade-client/src/components/help.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const SHORTCUTS: &[(&str, Color, &str)] = &[
    ("/ or e", Color::Yellow, "Edit search conditions"),
    ("Enter", Color::Green, "Run search (while editing)"),
    ("Tab / ↑↓", Color::Cyan, "Next / previous field (while editing)"),
    ("Ctrl+R", Color::Magenta, "Reset search form"),
    ("Esc", Color::Gray, "Stop editing / close overlay"),
    ("Tab", Color::Blue, "Switch form / table panel"),
    ("↑/k ↓/j", Color::White, "Select row"),
    ("←/[ →/]", Color::Cyan, "Previous / next page"),
    ("Home End", Color::Cyan, "First / last page"),
    ("+ / -", Color::Cyan, "More / fewer rows per page"),
    ("h", Color::Green, "Trade history of selected apartment"),
    ("f", Color::Magenta, "Frequently traded apartments in region"),
    ("1 / 2", Color::Blue, "Search / analysis screen"),
    ("F1", Color::Gray, "Toggle help"),
    ("q", Color::Red, "Quit"),
];

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let help_items: Vec<ListItem> = SHORTCUTS
        .iter()
        .map(|(keys, color, action)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", keys),
                    Style::default().fg(*color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" - {}", action)),
            ]))
        })
        .collect();

    let help_list = List::new(help_items).block(
        Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(help_list, area);

    if area.height < 3 {
        return;
    }
    let footer = Paragraph::new("Press F1 or ESC to close help")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let footer_area = Rect {
        x: area.x + 1,
        y: area.y + area.height - 2,
        width: area.width.saturating_sub(2),
        height: 1,
    };

    f.render_widget(footer, footer_area);
}
