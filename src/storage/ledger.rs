//! CSV-backed ledger store
//!
//! Persists transactions to a flat CSV file with the header
//! `date,type,category,amount,description`. Appends rewrite the file through
//! a temp file and rename, so a failed append never leaves a partial row.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TransactionInput, DATE_FORMAT};

use super::file_io::{read_bytes, strip_bom, write_bytes_atomic, UTF8_BOM};
use super::LedgerStore;

/// Column order of the ledger file
pub const HEADER: [&str; 5] = ["date", "type", "category", "amount", "description"];

/// One row of the ledger file, as text
#[derive(Debug, Serialize, Deserialize)]
struct LedgerRow {
    date: String,
    #[serde(rename = "type")]
    kind: String,
    category: String,
    amount: String,
    #[serde(default)]
    description: String,
}

impl From<&Transaction> for LedgerRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date().format(DATE_FORMAT).to_string(),
            kind: txn.kind().as_str().to_string(),
            category: txn.category().as_str().to_string(),
            amount: txn.amount().to_decimal_string(),
            description: txn.description().unwrap_or_default().to_string(),
        }
    }
}

impl TryFrom<LedgerRow> for Transaction {
    type Error = LedgerError;

    fn try_from(row: LedgerRow) -> Result<Self, Self::Error> {
        Transaction::from_input(&TransactionInput {
            date: row.date,
            kind: row.kind,
            category: row.category,
            amount: row.amount,
            description: Some(row.description),
        })
    }
}

/// Ledger store backed by a single CSV file
pub struct CsvLedger {
    path: PathBuf,
    /// Serializes file writes within this process
    write_lock: Mutex<()>,
}

impl CsvLedger {
    /// Create a ledger handle; the file is created lazily on first use
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a ledger handle and make sure the file exists
    pub fn open(path: PathBuf) -> LedgerResult<Self> {
        let ledger = Self::new(path);
        ledger.ensure_initialized()?;
        Ok(ledger)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with a BOM and header row if it is missing or blank
    ///
    /// Returns `true` if the header was written.
    pub fn ensure_initialized(&self) -> LedgerResult<bool> {
        let _guard = self.lock()?;

        if read_bytes(&self.path)?.is_some_and(|bytes| !is_blank(&bytes)) {
            return Ok(false);
        }

        write_bytes_atomic(&self.path, &empty_ledger()?)?;
        info!(path = %self.path.display(), "created ledger file");
        Ok(true)
    }

    fn lock(&self) -> LedgerResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Current file contents, or a fresh header if the file is missing or blank
    fn load_contents(&self) -> LedgerResult<Vec<u8>> {
        match read_bytes(&self.path)? {
            Some(bytes) if !is_blank(&bytes) => Ok(bytes),
            _ => empty_ledger(),
        }
    }
}

impl LedgerStore for CsvLedger {
    fn append(&self, txn: &Transaction) -> LedgerResult<()> {
        let _guard = self.lock()?;

        let mut contents = self.load_contents()?;
        if !contents.is_empty() && !contents.ends_with(b"\n") {
            contents.push(b'\n');
        }
        contents.extend_from_slice(&encode_row(txn)?);

        write_bytes_atomic(&self.path, &contents)?;

        info!(
            date = %txn.date(),
            kind = %txn.kind(),
            category = %txn.category(),
            amount = %txn.amount(),
            "appended transaction"
        );
        Ok(())
    }

    fn find_all(&self) -> LedgerResult<Vec<Transaction>> {
        self.ensure_initialized()?;
        let bytes = read_bytes(&self.path)?.unwrap_or_default();

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(strip_bom(&bytes));

        let headers = reader.headers()?.clone();
        let mut record = StringRecord::new();
        let mut transactions = Vec::new();

        loop {
            match reader.read_record(&mut record) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "skipping unreadable ledger row");
                    continue;
                }
            }

            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let parsed = record
                .deserialize::<LedgerRow>(Some(&headers))
                .map_err(LedgerError::from)
                .and_then(Transaction::try_from);

            match parsed {
                Ok(txn) => transactions.push(txn),
                Err(e) => warn!(
                    path = %self.path.display(),
                    line,
                    error = %e,
                    "skipping invalid ledger row"
                ),
            }
        }

        debug!(count = transactions.len(), "loaded ledger");
        Ok(transactions)
    }
}

/// A file with nothing but an optional BOM and whitespace has no header
fn is_blank(bytes: &[u8]) -> bool {
    strip_bom(bytes).iter().all(u8::is_ascii_whitespace)
}

/// BOM plus header row
fn empty_ledger() -> LedgerResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(UTF8_BOM.to_vec());
    writer.write_record(HEADER)?;
    writer
        .into_inner()
        .map_err(|e| LedgerError::Storage(format!("Failed to encode header: {}", e)))
}

/// Encode one transaction as a CSV line (with trailing newline)
fn encode_row(txn: &Transaction) -> LedgerResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.serialize(LedgerRow::from(txn))?;
    writer
        .into_inner()
        .map_err(|e| LedgerError::Storage(format!("Failed to encode row: {}", e)))
}
