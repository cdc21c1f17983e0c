//! Shell chrome: sidebar, top bar and status bar

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::section::SectionId;
use crate::ui::layout::ShellLayout;
use crate::ui::theme::Theme;

/// Marker in front of the active sidebar entry
const ACTIVE_MARKER: &str = "▌ ";
const INACTIVE_MARKER: &str = "  ";

/// Draw the sidebar: brand heading plus one entry per section
pub(crate) fn draw_sidebar(f: &mut Frame, app: &App, layout: &ShellLayout, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface));
    f.render_widget(block, layout.sidebar);

    let brand = Paragraph::new(Line::from(Span::styled(
        format!(" {}", app.config().appearance.brand),
        Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().padding(Padding::top(1)));
    f.render_widget(brand, layout.brand);

    let active = app.current_section();
    let cursor = app.cursor();

    for (section, area) in SectionId::ALL.into_iter().zip(layout.entries) {
        if area.width == 0 {
            continue;
        }
        f.render_widget(sidebar_entry(section, section == active, section == cursor, theme), area);
    }
}

fn sidebar_entry(section: SectionId, active: bool, under_cursor: bool, theme: &Theme) -> Paragraph<'static> {
    let bg = if under_cursor { theme.selection_bg } else { theme.surface };
    let (marker, style) = if active {
        (
            ACTIVE_MARKER,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )
    } else {
        (INACTIVE_MARKER, Style::default().fg(theme.foreground))
    };

    let line = Line::from(vec![
        Span::styled(marker, style),
        Span::styled(section.title(), style),
        Span::styled(
            format!("  {}", section.index() + 1),
            Style::default().fg(theme.dimmed),
        ),
    ]);
    Paragraph::new(line).style(Style::default().bg(bg))
}

/// Draw the top bar: title on the left, account on the right
pub(crate) fn draw_top_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let appearance = &app.config().appearance;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let account = account_line(&appearance.account_name, theme);
    let account_width = account.width() as u16;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(account_width + 1)])
        .split(Rect {
            y: inner.y + inner.height / 2,
            height: 1,
            ..inner
        });

    let title = Paragraph::new(Span::styled(
        format!(" {}", appearance.title),
        Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(title, columns[0]);
    f.render_widget(Paragraph::new(account).alignment(Alignment::Right), columns[1]);
}

/// Avatar initials, name and the account chevron
fn account_line<'a>(name: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!(" {} ", initials(name)),
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(name, Style::default().fg(theme.foreground)),
        Span::styled(" ▾", Style::default().fg(theme.dimmed)),
    ])
}

/// Up to two initials, uppercased: "Manish Reddy" -> "MR"
pub(crate) fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Draw the status bar with key hints
pub(crate) fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let hints = " 1-4: section | ↑↓: move | Enter: open | Tab: next | q: quit";
    let section = format!("{} ", app.current_section());

    let style = Style::default().fg(theme.dimmed).bg(theme.background);
    let gap = (area.width as usize).saturating_sub(hints.width() + section.width());
    let line = Line::from(vec![
        Span::raw(hints),
        Span::raw(" ".repeat(gap)),
        Span::styled(section, Style::default().fg(theme.accent)),
    ]);

    f.render_widget(Paragraph::new(line).style(style), area);
}
