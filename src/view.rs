//! Section content.
//!
//! Each section builds a fresh [`SectionView`] from the current snapshot on
//! every frame. Building is pure: the same section and snapshot always give
//! the same view, and nothing is kept between transitions.

use crate::data::Snapshot;
use crate::section::SectionId;
use crate::transaction::{rows, Column, SummaryMetric, TransactionRow};

pub const TRANSACTIONS_TITLE: &str = "Recent Transactions";
pub const EXPORT_LABEL: &str = "Export";

/// Content tree for the main region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionView<'a> {
    /// Summary cards
    Dashboard { cards: &'a [SummaryMetric] },
    Transactions(TransactionsTable<'a>),
    Placeholder {
        section: SectionId,
        body: &'static str,
    },
}

/// The transactions card: title, fixed columns, one row per transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionsTable<'a> {
    pub title: &'static str,
    pub columns: [Column; 5],
    pub rows: Vec<TransactionRow<'a>>,
}

impl<'a> SectionView<'a> {
    pub fn build(section: SectionId, snapshot: &'a Snapshot) -> Self {
        match section {
            SectionId::Dashboard => SectionView::Dashboard {
                cards: &snapshot.summary,
            },
            SectionId::Transactions => SectionView::Transactions(TransactionsTable {
                title: TRANSACTIONS_TITLE,
                columns: Column::ALL,
                rows: rows(&snapshot.transactions).collect(),
            }),
            SectionId::Settlements => SectionView::Placeholder {
                section,
                body: "Dummy settlements data goes here.",
            },
            SectionId::Settings => SectionView::Placeholder {
                section,
                body: "Dummy settings data goes here.",
            },
        }
    }

    /// The section this view belongs to
    pub fn section(&self) -> SectionId {
        match self {
            SectionView::Dashboard { .. } => SectionId::Dashboard,
            SectionView::Transactions(_) => SectionId::Transactions,
            SectionView::Placeholder { section, .. } => *section,
        }
    }
}
