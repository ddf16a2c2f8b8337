//! Filterable product table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::{
    products::{ProductRow, table_rows},
    ui::app::App,
};

impl App {
    pub(in crate::ui) fn draw_products(&self, f: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(4)])
            .split(area);

        self.draw_search_bar(f, layout[0]);

        let rows: Vec<Row> = table_rows(&self.catalog, &self.filter)
            .into_iter()
            .map(|row| match row {
                ProductRow::Category(category) => Row::new(vec![category, String::new()])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                ProductRow::Item(product) => {
                    // Out-of-stock names are shown in red.
                    let style = if product.stocked {
                        Style::default()
                    } else {
                        Style::default().fg(Color::Red)
                    };
                    let price = product.price_label();
                    Row::new(vec![format!("  {}", product.name), price]).style(style)
                }
            })
            .collect();

        if rows.is_empty() {
            f.render_widget(
                Paragraph::new(Span::styled(
                    "No products match",
                    Style::default().fg(Color::Yellow),
                ))
                .block(Block::default().borders(Borders::ALL).title("Products")),
                layout[1],
            );
            return;
        }

        let table = Table::new(rows, [Constraint::Length(20), Constraint::Length(8)])
            .header(
                Row::new(vec!["Name", "Price"])
                    .style(Style::default().add_modifier(Modifier::BOLD))
                    .bottom_margin(1),
            )
            .block(Block::default().borders(Borders::ALL).title("Products"));

        f.render_widget(table, layout[1]);
    }

    fn draw_search_bar(&self, f: &mut Frame, area: Rect) {
        let checkbox = if self.filter.in_stock_only { "[x]" } else { "[ ]" };
        let lines = vec![
            Line::from(format!("Search: {}▌", self.filter.text)),
            Line::from(format!("{checkbox} Only show products in stock")),
        ];

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Filter | type to search | Esc: clear | Ctrl+S: in stock"),
            ),
            area,
        );
    }
}
