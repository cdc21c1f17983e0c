//! Transaction records and their display projection.
//!
//! # Data Model
//!
//! ```text
//! Transaction (source record, immutable)
//!        │  rows()  (pure map, input order preserved)
//!        ▼
//! TransactionRow (borrowed view + StatusCategory)
//!        │
//!        ▼
//!   ui table (keyed by id, columns in Column::ALL order)
//! ```

use serde::{Deserialize, Serialize};

use crate::status::{classify, StatusCategory};

/// A transaction as supplied by the data source.
///
/// All display fields are pre-formatted by the source; `id` is unique within
/// a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub customer: String,
    pub amount: String,
    pub status: String,
    pub date: String,
}

impl Transaction {
    pub fn new(id: &str, customer: &str, amount: &str, status: &str, date: &str) -> Self {
        Self {
            id: id.to_string(),
            customer: customer.to_string(),
            amount: amount.to_string(),
            status: status.to_string(),
            date: date.to_string(),
        }
    }
}

/// A labelled headline number shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetric {
    pub label: String,
    pub value: String,
}

impl SummaryMetric {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Table columns, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Customer,
    Amount,
    Status,
    Date,
}

impl Column {
    /// Fixed column order. Consumers (table, any export) rely on it.
    pub const ALL: [Column; 5] = [
        Column::Id,
        Column::Customer,
        Column::Amount,
        Column::Status,
        Column::Date,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "Transaction ID",
            Column::Customer => "Customer",
            Column::Amount => "Amount",
            Column::Status => "Status",
            Column::Date => "Date",
        }
    }
}

/// Display-ready view of one transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionRow<'a> {
    /// Stable row key
    pub id: &'a str,
    pub customer: &'a str,
    pub amount: &'a str,
    pub status: &'a str,
    pub category: StatusCategory,
    pub date: &'a str,
}

impl<'a> TransactionRow<'a> {
    pub fn from_transaction(txn: &'a Transaction) -> Self {
        Self {
            id: &txn.id,
            customer: &txn.customer,
            amount: &txn.amount,
            status: &txn.status,
            category: classify(&txn.status),
            date: &txn.date,
        }
    }

    /// Text of a single cell
    pub fn cell(&self, column: Column) -> &'a str {
        match column {
            Column::Id => self.id,
            Column::Customer => self.customer,
            Column::Amount => self.amount,
            Column::Status => self.status,
            Column::Date => self.date,
        }
    }

    /// All cells in column order
    pub fn cells(&self) -> [(Column, &'a str); 5] {
        Column::ALL.map(|column| (column, self.cell(column)))
    }
}

/// Project transactions into rows, preserving input order.
///
/// The iterator borrows the slice and can be recreated at will; nothing is
/// copied or mutated.
pub fn rows(transactions: &[Transaction]) -> impl Iterator<Item = TransactionRow<'_>> + Clone {
    transactions.iter().map(TransactionRow::from_transaction)
}

/// Look up a row by its key
#[allow(dead_code)] // Used in tests
pub fn row_by_id<'a>(transactions: &'a [Transaction], id: &str) -> Option<TransactionRow<'a>> {
    rows(transactions).find(|row| row.id == id)
}

/// Built-in transaction list
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("TXN001", "John Doe", "₹2,500", "Success", "2024-06-01"),
        Transaction::new("TXN002", "Jane Smith", "₹1,200", "Failed", "2024-06-02"),
        Transaction::new("TXN003", "Acme Corp", "₹5,000", "Refunded", "2024-06-03"),
        Transaction::new("TXN004", "Ravi Kumar", "₹3,750", "Success", "2024-06-04"),
    ]
}

/// Built-in dashboard metrics.
///
/// These are supplied values, not derived from [`sample_transactions`].
pub fn sample_summary() -> Vec<SummaryMetric> {
    vec![
        SummaryMetric::new("Total Revenue", "₹12,450"),
        SummaryMetric::new("Transactions", "4"),
        SummaryMetric::new("Refunds", "1"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(transactions: &[Transaction]) -> Vec<&str> {
        rows(transactions).map(|row| row.id).collect()
    }

    #[test]
    fn test_rows_follow_input_order() {
        let txns = sample_transactions();
        assert_eq!(ids(&txns), ["TXN001", "TXN002", "TXN003", "TXN004"]);

        let categories: Vec<_> = rows(&txns).map(|row| row.category).collect();
        assert_eq!(
            categories,
            [
                StatusCategory::Positive,
                StatusCategory::Negative,
                StatusCategory::Notice,
                StatusCategory::Positive,
            ]
        );
    }

    #[test]
    fn test_rows_follow_every_permutation() {
        let base = sample_transactions();
        let mut order = [0usize, 1, 2, 3];

        // Heap's algorithm, iterative
        let mut c = [0usize; 4];
        let check = |order: &[usize; 4]| {
            let txns: Vec<Transaction> = order.iter().map(|&i| base[i].clone()).collect();
            let expected: Vec<&str> = txns.iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids(&txns), expected);
            for (row, txn) in rows(&txns).zip(&txns) {
                assert_eq!(row.id, txn.id);
                assert_eq!(row.status, txn.status);
            }
        };
        check(&order);
        let mut i = 0;
        let mut seen = 1;
        while i < 4 {
            if c[i] < i {
                if i % 2 == 0 {
                    order.swap(0, i);
                } else {
                    order.swap(c[i], i);
                }
                check(&order);
                seen += 1;
                c[i] += 1;
                i = 0;
            } else {
                c[i] = 0;
                i += 1;
            }
        }
        assert_eq!(seen, 24);
    }

    #[test]
    fn test_columns_fixed() {
        assert_eq!(
            Column::ALL.map(Column::header),
            ["Transaction ID", "Customer", "Amount", "Status", "Date"]
        );

        let txns = sample_transactions();
        let row = rows(&txns).next().unwrap();
        let cells = row.cells();
        assert_eq!(cells.len(), 5);
        assert_eq!(
            cells.map(|(_, text)| text),
            ["TXN001", "John Doe", "₹2,500", "Success", "2024-06-01"]
        );
        assert_eq!(cells.map(|(column, _)| column), Column::ALL);
    }

    #[test]
    fn test_projection_does_not_touch_source() {
        let txns = sample_transactions();
        let before = txns.clone();
        let _: Vec<_> = rows(&txns).collect();
        let _: Vec<_> = rows(&txns).collect();
        assert_eq!(txns, before);
    }

    #[test]
    fn test_row_by_id() {
        let txns = sample_transactions();
        let row = row_by_id(&txns, "TXN003").unwrap();
        assert_eq!(row.customer, "Acme Corp");
        assert_eq!(row.category, StatusCategory::Notice);
        assert!(row_by_id(&txns, "TXN999").is_none());
    }

    #[test]
    fn test_unknown_status_row() {
        let txns = vec![Transaction::new("TXN005", "Meera", "₹90", "Pending", "2024-06-05")];
        let row = rows(&txns).next().unwrap();
        assert_eq!(row.status, "Pending");
        assert_eq!(row.category, StatusCategory::Unmapped);
    }

    #[test]
    fn test_summary_is_static() {
        let summary = sample_summary();
        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0], SummaryMetric::new("Total Revenue", "₹12,450"));
        assert_eq!(summary[1], SummaryMetric::new("Transactions", "4"));
        assert_eq!(summary[2], SummaryMetric::new("Refunds", "1"));
    }
}
