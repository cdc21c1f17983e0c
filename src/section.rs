//! Navigable sections of the console.
//!
//! The set is closed: anything that names a section by string or number goes
//! through a conversion returning `Option`, so an unknown section can never
//! reach the navigation state.

/// One entry of the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Dashboard,
    Transactions,
    Settlements,
    Settings,
}

impl SectionId {
    /// Sidebar order
    pub const ALL: [SectionId; 4] = [
        SectionId::Dashboard,
        SectionId::Transactions,
        SectionId::Settlements,
        SectionId::Settings,
    ];

    /// Display title, used by the sidebar and placeholder headings
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Dashboard => "Dashboard",
            SectionId::Transactions => "Transactions",
            SectionId::Settlements => "Settlements",
            SectionId::Settings => "Settings",
        }
    }

    /// Position in the sidebar
    pub fn index(self) -> usize {
        match self {
            SectionId::Dashboard => 0,
            SectionId::Transactions => 1,
            SectionId::Settlements => 2,
            SectionId::Settings => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Number keys `1`..`4` jump straight to a section
    pub fn from_hotkey(c: char) -> Option<Self> {
        let digit = c.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(Self::from_index)
    }

    /// Next section in sidebar order, wrapping
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section in sidebar order, wrapping
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
