//! The one piece of mutable state in the console: which section is active.
//!
//! `NavigationState` is owned by [`crate::app::App`]. Views only ever see a
//! `SectionId` copy, so the sole writer is whoever holds `&mut App`.

use crate::section::SectionId;

#[derive(Debug, Default)]
pub struct NavigationState {
    current: SectionId,
}

impl NavigationState {
    /// Starts on the dashboard
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_section(&self) -> SectionId {
        self.current
    }

    /// Activate a section.
    ///
    /// Returns `true` if the active section changed. Selecting the section
    /// that is already active leaves the state untouched.
    pub fn select(&mut self, section: SectionId) -> bool {
        if self.current == section {
            return false;
        }
        tracing::debug!("Section {} -> {}", self.current, section);
        self.current = section;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_dashboard() {
        assert_eq!(NavigationState::new().current_section(), SectionId::Dashboard);
    }

    #[test]
    fn test_select_then_read() {
        let mut nav = NavigationState::new();
        for section in SectionId::ALL {
            nav.select(section);
            assert_eq!(nav.current_section(), section);
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut nav = NavigationState::new();
        assert!(!nav.select(SectionId::Dashboard));
        assert!(!nav.select(SectionId::Dashboard));
        assert_eq!(nav.current_section(), SectionId::Dashboard);

        assert!(nav.select(SectionId::Settings));
        assert!(!nav.select(SectionId::Settings));
        assert_eq!(nav.current_section(), SectionId::Settings);
    }

    #[test]
    fn test_every_section_reachable_from_every_other() {
        for from in SectionId::ALL {
            for to in SectionId::ALL {
                let mut nav = NavigationState::new();
                nav.select(from);
                nav.select(to);
                assert_eq!(nav.current_section(), to);
            }
        }
    }
}
