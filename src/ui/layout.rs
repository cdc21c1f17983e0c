//! Shell layout
//!
//! Provides:
//! - Region split (sidebar | top bar / content / status bar)
//! - Sidebar entry geometry and mouse hit-testing
//! - Card grid for the dashboard (row-major, wrapping)

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::section::SectionId;

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 24;
/// Below this terminal width the sidebar is hidden
pub const SIDEBAR_MIN_TERMINAL_WIDTH: u16 = 60;
/// Brand heading block at the top of the sidebar
const BRAND_HEIGHT: u16 = 3;
/// Rows per sidebar entry (label + gap)
const ENTRY_SPACING: u16 = 2;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub sidebar: Rect,
    pub brand: Rect,
    /// One rect per section, in sidebar order. Empty when hidden or clipped.
    pub entries: [Rect; 4],
    pub top_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

impl ShellLayout {
    pub fn compute(area: Rect) -> Self {
        let sidebar_width = if area.width >= SIDEBAR_MIN_TERMINAL_WIDTH {
            SIDEBAR_WIDTH
        } else {
            0
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(1)])
            .split(area);
        let sidebar = columns[0];

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Top bar
                Constraint::Min(1),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(columns[1]);

        let brand = Rect {
            height: BRAND_HEIGHT.min(sidebar.height),
            ..sidebar
        };

        // Inside the right border, below the brand
        let entries = SectionId::ALL.map(|section| {
            let entry = Rect {
                x: sidebar.x + 1,
                y: sidebar.y + BRAND_HEIGHT + section.index() as u16 * ENTRY_SPACING,
                width: sidebar.width.saturating_sub(2),
                height: 1,
            };
            if sidebar.width == 0 || entry.bottom() > sidebar.bottom() {
                Rect::default()
            } else {
                entry
            }
        });

        Self {
            sidebar,
            brand,
            entries,
            top_bar: main[0],
            content: main[1],
            status_bar: main[2],
        }
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar.width > 0
    }

    /// Section whose sidebar entry covers the given cell
    pub fn sidebar_entry_at(&self, column: u16, row: u16) -> Option<SectionId> {
        self.entries
            .iter()
            .position(|rect| contains(*rect, column, row))
            .and_then(SectionId::from_index)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Row-major wrapping grid of fixed-size cards
#[derive(Debug, Clone, Copy)]
pub struct CardGrid {
    pub card_width: u16,
    pub card_height: u16,
    pub gap: u16,
    /// Cards per row, at least 1
    pub columns: u16,
}

impl CardGrid {
    pub fn new(available_width: u16, card_width: u16, card_height: u16, gap: u16) -> Self {
        let stride = u32::from(card_width) + u32::from(gap);
        let columns = ((u32::from(available_width) + u32::from(gap)) / stride.max(1)).clamp(1, u32::from(u16::MAX));
        Self {
            card_width,
            card_height,
            gap,
            columns: columns as u16,
        }
    }

    /// Convert flat index to (row, col) position
    pub fn index_to_position(&self, index: usize) -> (usize, usize) {
        let cols = self.columns as usize;
        (index / cols, index % cols)
    }

    /// Area of the card at `index`, or `None` if it falls outside `area`.
    ///
    /// Cards fill rows top to bottom, so once one is `None` every later index
    /// is too.
    pub fn card_area(&self, area: Rect, index: usize) -> Option<Rect> {
        let (row, col) = self.index_to_position(index);
        let x = col
            .checked_mul(usize::from(self.card_width) + usize::from(self.gap))?
            .checked_add(usize::from(area.x))?;
        let y = row
            .checked_mul(usize::from(self.card_height) + usize::from(self.gap / 2))?
            .checked_add(usize::from(area.y))?;

        let bottom = y.checked_add(usize::from(self.card_height))?;
        if bottom > usize::from(area.bottom()) || x >= usize::from(area.right()) {
            return None;
        }

        // Both fit inside `area` now
        let (x, y) = (x as u16, y as u16);
        let width = self.card_width.min(area.right() - x);
        (width > 0).then_some(Rect {
            x,
            y,
            width,
            height: self.card_height,
        })
    }
}
