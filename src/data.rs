//! Where the console's data comes from.
//!
//! Everything the views show is a [`Snapshot`]: the ordered transaction list
//! plus the dashboard metrics. Sources produce one snapshot at startup; the
//! console never writes back.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

use crate::status::classify;
use crate::transaction::{sample_summary, sample_transactions, SummaryMetric, Transaction};

/// Data the views render from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Display order
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub summary: Vec<SummaryMetric>,
}

impl Snapshot {
    /// Check the snapshot invariants: transaction ids are unique
    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen = HashSet::new();
        for txn in &self.transactions {
            if !seen.insert(txn.id.as_str()) {
                return Err(DataError::DuplicateId(txn.id.clone()));
            }
        }
        Ok(())
    }

    /// Transactions whose status has no visual category
    pub fn unmapped_statuses(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(|txn| !classify(&txn.status).is_mapped())
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            transactions: sample_transactions(),
            summary: sample_summary(),
        }
    }
}

/// Failure to produce a snapshot
#[derive(Debug, Error)]
pub enum DataError {
    #[error("data source unavailable: {path}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate transaction id {0}")]
    DuplicateId(String),
}

/// Something that can hand the console a snapshot
pub trait TransactionSource {
    fn load(&self) -> Result<Snapshot, DataError>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// The built-in data set
#[derive(Debug, Default)]
pub struct StaticSource;

impl TransactionSource for StaticSource {
    fn load(&self) -> Result<Snapshot, DataError> {
        Ok(Snapshot::default())
    }

    fn describe(&self) -> String {
        "built-in sample data".to_string()
    }
}

/// A JSON snapshot on local disk
///
/// ```json
/// {
///   "transactions": [
///     { "id": "TXN001", "customer": "John Doe", "amount": "₹2,500",
///       "status": "Success", "date": "2024-06-01" }
///   ],
///   "summary": [ { "label": "Total Revenue", "value": "₹12,450" } ]
/// }
/// ```
#[derive(Debug)]
pub struct SnapshotFileSource {
    path: PathBuf,
}

impl SnapshotFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TransactionSource for SnapshotFileSource {
    fn load(&self) -> Result<Snapshot, DataError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            DataError::Unavailable {
                path: self.path.clone(),
                source,
            }
        })?;

        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(|source| DataError::Parse {
                path: self.path.clone(),
                source,
            })?;

        snapshot.validate()?;
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        format!("snapshot {}", self.path.display())
    }
}

/// Load from a source and log what came back
pub fn load_snapshot(source: &dyn TransactionSource) -> Result<Snapshot, DataError> {
    let snapshot = source.load()?;
    tracing::info!(
        "Loaded {} transactions and {} metrics from {}",
        snapshot.transactions.len(),
        snapshot.summary.len(),
        source.describe()
    );
    for txn in snapshot.unmapped_statuses() {
        tracing::warn!("Transaction {} has unmapped status {:?}", txn.id, txn.status);
    }
    Ok(snapshot)
}
