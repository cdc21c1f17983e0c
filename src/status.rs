//! Transaction status classification.
//!
//! Status labels come from the data feed as free text. Known labels map to a
//! visual emphasis category; anything else lands in [`StatusCategory::Unmapped`]
//! and is rendered neutrally.

/// Visual emphasis for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Positive,
    Negative,
    Notice,
    /// Label outside the known set
    Unmapped,
}

/// Map a status label to its category. Matching is exact.
pub fn classify(status: &str) -> StatusCategory {
    match status {
        "Success" => StatusCategory::Positive,
        "Failed" => StatusCategory::Negative,
        "Refunded" => StatusCategory::Notice,
        _ => StatusCategory::Unmapped,
    }
}

impl StatusCategory {
    pub fn is_mapped(self) -> bool {
        self != StatusCategory::Unmapped
    }
}
