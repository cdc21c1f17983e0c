//! Main region drawing, one function per section view

use ratatui::{
    layout::{Constraint, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::transaction::{Column, SummaryMetric, TransactionRow};
use crate::ui::layout::CardGrid;
use crate::ui::theme::Theme;
use crate::view::{SectionView, TransactionsTable, EXPORT_LABEL};

/// Summary card size, borders included
const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 4;
const CARD_GAP: u16 = 2;

/// Dispatch on the view variant
pub(crate) fn draw_content(f: &mut Frame, view: &SectionView<'_>, config: &Config, area: Rect, theme: &Theme) {
    let area = area.inner(Margin::new(2, 1));
    if area.width == 0 || area.height == 0 {
        return;
    }

    match view {
        SectionView::Dashboard { cards } => draw_summary_cards(f, cards, area, theme),
        SectionView::Transactions(table) => {
            draw_transactions(f, table, config.appearance.striped_rows, area, theme)
        }
        SectionView::Placeholder { section, body } => {
            draw_placeholder(f, section.title(), body, area, theme)
        }
    }
}

/// Summary metrics as a wrapping row of cards
fn draw_summary_cards(f: &mut Frame, cards: &[SummaryMetric], area: Rect, theme: &Theme) {
    if cards.is_empty() {
        let empty = Paragraph::new("No metrics to show").style(Style::default().fg(theme.dimmed));
        f.render_widget(empty, area);
        return;
    }

    let grid = CardGrid::new(area.width, CARD_WIDTH, CARD_HEIGHT, CARD_GAP);
    for (index, metric) in cards.iter().enumerate() {
        // Everything after the first clipped card is clipped too
        let Some(card_area) = grid.card_area(area, index) else {
            break;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(theme.surface));
        let text_width = block.inner(card_area).width as usize;

        let lines = vec![
            Line::from(Span::styled(
                truncate(&metric.label, text_width),
                Style::default().fg(theme.dimmed),
            )),
            Line::from(Span::styled(
                truncate(&metric.value, text_width),
                Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD),
            )),
        ];
        f.render_widget(Paragraph::new(lines).block(block), card_area);
    }
}

/// Column widths, indexed like `Column::ALL`
fn column_width(column: Column) -> Constraint {
    match column {
        Column::Id => Constraint::Length(16),
        Column::Customer => Constraint::Min(14),
        Column::Amount => Constraint::Length(10),
        Column::Status => Constraint::Length(12),
        Column::Date => Constraint::Length(12),
    }
}

/// The transactions card: titled block with the export hint, then the table
fn draw_transactions(f: &mut Frame, table: &TransactionsTable<'_>, striped: bool, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {} ", table.title),
            Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD),
        ))
        .title_top(
            Line::from(Span::styled(
                format!(" ⭳ {} ", EXPORT_LABEL),
                Style::default().fg(theme.dimmed),
            ))
            .right_aligned(),
        )
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.surface));

    let header = Row::new(table.columns.map(|column| Cell::from(column.header())))
        .style(Style::default().fg(theme.dimmed).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows = table.rows.iter().enumerate().map(|(index, row)| {
        let bg = if striped && index % 2 == 1 { theme.stripe } else { theme.surface };
        table_row(row, theme).style(Style::default().bg(bg))
    });

    let widths = table.columns.map(column_width);
    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(block);
    f.render_widget(widget, area);
}

/// One table row, cells in `Column::ALL` order
fn table_row<'a>(row: &TransactionRow<'a>, theme: &Theme) -> Row<'a> {
    let cells = row.cells().map(|(column, text)| match column {
        Column::Status => Cell::from(Line::from(vec![
            Span::styled("● ", Style::default().fg(theme.status_color(row.category))),
            Span::styled(
                text,
                Style::default()
                    .fg(theme.status_color(row.category))
                    .add_modifier(Modifier::BOLD),
            ),
        ])),
        _ => Cell::from(text),
    });
    Row::new(cells)
}

/// Static card for sections without data
fn draw_placeholder(f: &mut Frame, title: &str, body: &str, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .padding(Padding::uniform(1))
        .style(Style::default().bg(theme.surface));

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(body, Style::default().fg(theme.foreground))),
    ];

    let height = (lines.len() as u16 + 4).min(area.height);
    let card_area = Rect { height, ..area };
    f.render_widget(Paragraph::new(lines).block(block), card_area);
}

/// Truncate string to fit within max_width, adding ellipsis if needed
fn truncate(s: &str, max_width: usize) -> String {
    let width = s.width();
    if width <= max_width {
        s.to_string()
    } else if max_width <= 1 {
        "…".to_string()
    } else {
        let mut result = String::new();
        let mut current_width = 0;

        for c in s.chars() {
            let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if current_width + char_width + 1 > max_width {
                result.push('…');
                break;
            }
            result.push(c);
            current_width += char_width;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Total Revenue", 20), "Total Revenue");
        assert_eq!(truncate("Total Revenue", 8), "Total R…");
        assert_eq!(truncate("₹12,450", 7), "₹12,450");
        assert_eq!(truncate("Refunds", 1), "…");
    }

    #[test]
    fn test_column_widths_cover_every_column() {
        let widths = Column::ALL.map(column_width);
        assert_eq!(widths.len(), Column::ALL.len());
        assert_eq!(widths[0], Constraint::Length(16));
    }
}
