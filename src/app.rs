use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::config::Config;
use crate::data::Snapshot;
use crate::navigation::NavigationState;
use crate::section::SectionId;
use crate::ui::layout::ShellLayout;
use crate::ui::theme::Theme;
use crate::view::SectionView;

/// What the event loop should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Continue,
    Quit,
}

/// Application state
///
/// Owns the navigation state and the data snapshot. Drawing code gets `&App`
/// and can only read; every transition goes through `&mut self` here.
pub struct App {
    /// Active section
    navigation: NavigationState,
    /// Sidebar keyboard cursor, independent of the active section
    cursor: SectionId,
    /// Data every view renders from
    snapshot: Snapshot,
    /// Configuration
    config: Config,
    /// Resolved once from config
    theme: Theme,
}

impl App {
    pub fn new(snapshot: Snapshot, config: Config) -> Self {
        let theme = config.resolve_theme();
        let navigation = NavigationState::new();
        Self {
            cursor: navigation.current_section(),
            navigation,
            snapshot,
            config,
            theme,
        }
    }

    pub fn current_section(&self) -> SectionId {
        self.navigation.current_section()
    }

    /// Activate a section and move the sidebar cursor onto it
    pub fn select(&mut self, section: SectionId) {
        self.cursor = section;
        self.navigation.select(section);
    }

    /// Sidebar entry under the keyboard cursor
    pub fn cursor(&self) -> SectionId {
        self.cursor
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.previous();
    }

    pub fn cursor_down(&mut self) {
        self.cursor = self.cursor.next();
    }

    /// Select whatever the cursor is on
    pub fn activate_cursor(&mut self) {
        self.select(self.cursor);
    }

    /// Content for the main region, built fresh from the snapshot
    pub fn view(&self) -> SectionView<'_> {
        SectionView::build(self.current_section(), &self.snapshot)
    }

    #[allow(dead_code)] // Used in tests
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Handle one key event
    pub fn handle_key(&mut self, key: KeyEvent) -> AppEvent {
        if key.kind != KeyEventKind::Press {
            return AppEvent::Continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return AppEvent::Quit;
            }
            KeyCode::Esc | KeyCode::Char('q') => return AppEvent::Quit,
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(section) = SectionId::from_hotkey(c) {
                    self.select(section);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.cursor_down(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_cursor(),
            KeyCode::Tab => self.select(self.current_section().next()),
            KeyCode::BackTab => self.select(self.current_section().previous()),
            _ => {}
        }
        AppEvent::Continue
    }

    /// Handle one mouse event; `area` is the full terminal area
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> AppEvent {
        // Button-down only, so one click is one activation
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let layout = ShellLayout::compute(area);
            if let Some(section) = layout.sidebar_entry_at(mouse.column, mouse.row) {
                self.select(section);
            }
        }
        AppEvent::Continue
    }
}
