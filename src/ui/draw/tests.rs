//! Rendering tests against an in-memory backend

use super::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use crate::config::Config;
use crate::data::Snapshot;
use crate::section::SectionId;
use crate::transaction::Transaction;

fn render(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// One string per buffer row
fn rows_of(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.bottom())
        .map(|y| {
            (area.x..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn screen(buffer: &Buffer) -> String {
    rows_of(buffer).join("\n")
}

fn app_with(snapshot: Snapshot) -> App {
    App::new(snapshot, Config::default())
}

#[test]
fn test_starts_with_dashboard_cards() {
    let app = app_with(Snapshot::default());
    let text = screen(&render(&app, 120, 30));

    assert!(text.contains("Merchant Dashboard"));
    assert!(text.contains("Razorpay"));
    assert!(text.contains("Manish Reddy"));
    assert!(text.contains("Total Revenue"));
    assert!(text.contains("₹12,450"));
    assert!(text.contains("Refunds"));
    assert!(!text.contains("Recent Transactions"));
}

#[test]
fn test_transactions_table() {
    let mut app = app_with(Snapshot::default());
    app.select(SectionId::Transactions);
    let buffer = render(&app, 120, 30);
    let text = screen(&buffer);

    assert!(text.contains("Recent Transactions"));
    assert!(text.contains("Export"));
    assert!(!text.contains("Total Revenue"));

    // Header order
    let rows = rows_of(&buffer);
    let header = rows
        .iter()
        .find(|r| r.contains("Transaction ID"))
        .expect("header row");
    let positions: Vec<usize> = ["Transaction ID", "Customer", "Amount", "Status", "Date"]
        .iter()
        .map(|h| header.find(h).expect("column header"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    // Row order follows the data
    let row_positions: Vec<usize> = ["TXN001", "TXN002", "TXN003", "TXN004"]
        .iter()
        .map(|id| rows.iter().position(|r| r.contains(id)).expect("row"))
        .collect();
    assert!(row_positions.windows(2).all(|w| w[0] < w[1]));

    let first = &rows[row_positions[0]];
    assert!(first.contains("John Doe"));
    assert!(first.contains("₹2,500"));
    assert!(first.contains("Success"));
    assert!(first.contains("2024-06-01"));
}

#[test]
fn test_status_badges_use_category_colors() {
    let mut app = app_with(Snapshot {
        transactions: vec![
            Transaction::new("T1", "A", "1", "Success", "d"),
            Transaction::new("T2", "B", "2", "Failed", "d"),
            Transaction::new("T3", "C", "3", "Refunded", "d"),
            Transaction::new("T4", "D", "4", "Pending", "d"),
        ],
        summary: vec![],
    });
    app.select(SectionId::Transactions);
    let buffer = render(&app, 120, 30);
    let rows = rows_of(&buffer);
    let theme = app.theme().clone();

    for (status, color) in [
        ("Success", theme.positive),
        ("Failed", theme.negative),
        ("Refunded", theme.notice),
        ("Pending", theme.neutral),
    ] {
        let y = rows.iter().position(|r| r.contains(status)).expect("status row");
        let x = rows[y]
            .chars()
            .collect::<Vec<_>>()
            .windows(status.len())
            .position(|w| w.iter().collect::<String>() == status)
            .expect("status cell");
        let cell = &buffer[(x as u16, y as u16)];
        assert_eq!(cell.fg, color, "badge color for {}", status);
    }
}

#[test]
fn test_placeholders() {
    let mut app = app_with(Snapshot::default());

    app.select(SectionId::Settlements);
    let text = screen(&render(&app, 120, 30));
    assert!(text.contains("Dummy settlements data goes here."));

    app.select(SectionId::Settings);
    let text = screen(&render(&app, 120, 30));
    assert!(text.contains("Dummy settings data goes here."));
    assert!(!text.contains("Dummy settlements data goes here."));
    assert!(!text.contains("Recent Transactions"));
}

#[test]
fn test_keyboard_walkthrough() {
    let mut app = app_with(Snapshot::default());
    assert!(screen(&render(&app, 120, 30)).contains("Total Revenue"));

    app.handle_key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE));
    let text = screen(&render(&app, 120, 30));
    assert!(text.contains("TXN004"));
    assert!(!text.contains("Total Revenue"));

    app.handle_key(KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE));
    let text = screen(&render(&app, 120, 30));
    assert!(text.contains("Dummy settings data goes here."));
    assert!(!text.contains("TXN004"));
}

#[test]
fn test_every_section_draws_something() {
    let mut app = app_with(Snapshot::default());
    for section in SectionId::ALL {
        app.select(section);
        let buffer = render(&app, 120, 30);
        let layout = ShellLayout::compute(buffer.area);
        let content: String = (layout.content.y..layout.content.bottom())
            .flat_map(|y| (layout.content.x..layout.content.right()).map(move |x| (x, y)))
            .map(|pos| buffer[pos].symbol().to_string())
            .collect();
        assert!(
            content.chars().any(|c| !c.is_whitespace()),
            "{} rendered an empty content region",
            section
        );
    }
}

#[test]
fn test_active_section_marked_in_sidebar() {
    let mut app = app_with(Snapshot::default());
    app.select(SectionId::Settlements);
    let rows = rows_of(&render(&app, 120, 30));
    let marked: Vec<_> = rows.iter().filter(|r| r.contains("▌ ")).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("Settlements"));
}

#[test]
fn test_narrow_terminal_hides_sidebar() {
    let app = app_with(Snapshot::default());
    let text = screen(&render(&app, 50, 20));
    assert!(!text.contains("Razorpay"));
    assert!(text.contains("Total Revenue"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = app_with(Snapshot::default());
    for section in SectionId::ALL {
        app.select(section);
        render(&app, 10, 3);
        render(&app, 1, 1);
    }
}

#[test]
fn test_many_summary_cards_stay_in_place() {
    use crate::transaction::SummaryMetric;

    let summary = (0..20_000)
        .map(|i| SummaryMetric::new(&format!("M{}", i), "1"))
        .collect();
    let app = app_with(Snapshot {
        transactions: vec![],
        summary,
    });

    let text = screen(&render(&app, 50, 20));
    assert!(text.contains("M0"));
    // Off-screen cards never wrap back over the visible ones
    assert!(!text.contains("M13108"));
    assert!(!text.contains("M19999"));
}
