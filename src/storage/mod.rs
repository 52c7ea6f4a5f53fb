//! Storage layer for Mini Ledger
//!
//! The ledger lives in a single CSV file. [`LedgerStore`] is the persistence
//! seam: callers append validated transactions and query them back in
//! insertion order.

pub mod file_io;
pub mod init;
pub mod ledger;

pub use file_io::{read_bytes, strip_bom, write_bytes_atomic};
pub use init::{initialize_storage, needs_initialization};
pub use ledger::CsvLedger;

use chrono::NaiveDate;

use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::models::{MonthPeriod, Transaction};

/// Persistence for transaction records
///
/// Implementors provide [`append`](LedgerStore::append) and
/// [`find_all`](LedgerStore::find_all); the query methods filter the full
/// record list and keep its order.
pub trait LedgerStore {
    /// Durably append one record
    fn append(&self, txn: &Transaction) -> LedgerResult<()>;

    /// All records, in insertion order
    fn find_all(&self) -> LedgerResult<Vec<Transaction>>;

    /// Records dated exactly `date`
    fn find_by_date(&self, date: NaiveDate) -> LedgerResult<Vec<Transaction>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|t| t.date() == date)
            .collect())
    }

    /// Records dated within `start..=end`; empty when `start > end`
    fn find_by_range(&self, start: NaiveDate, end: NaiveDate) -> LedgerResult<Vec<Transaction>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|t| t.is_in_date_range(start, end))
            .collect())
    }

    /// Records dated within one calendar month
    fn find_by_month(&self, year: i32, month: u32) -> LedgerResult<Vec<Transaction>> {
        let period = MonthPeriod::new(year, month)?;
        self.find_by_range(period.start_date(), period.end_date())
    }

    fn count(&self) -> LedgerResult<usize> {
        Ok(self.find_all()?.len())
    }
}

/// Main storage coordinator
pub struct Storage {
    paths: LedgerPaths,
    pub ledger: CsvLedger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: CsvLedger::new(paths.ledger_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.ledger.path(), storage.paths().ledger_file());
        assert_eq!(storage.ledger.count().unwrap(), 0);
    }
}
