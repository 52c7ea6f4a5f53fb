//! Storage initialization
//!
//! Handles first-run setup: directories, default settings and an empty ledger

use tracing::info;

use crate::config::paths::LedgerPaths;
use crate::config::settings::Settings;
use crate::error::LedgerResult;

use super::ledger::CsvLedger;

/// Initialize storage for a fresh installation
///
/// Existing settings and ledger files are left untouched.
pub fn initialize_storage(paths: &LedgerPaths) -> LedgerResult<()> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
        info!(path = %paths.settings_file().display(), "wrote default settings");
    }

    CsvLedger::new(paths.ledger_file()).ensure_initialized()?;

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &LedgerPaths) -> bool {
    !paths.settings_file().exists() || !paths.ledger_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::file_io::{strip_bom, UTF8_BOM};
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));

        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.settings_file().exists());
        assert!(paths.data_dir().exists());

        let bytes = std::fs::read(paths.ledger_file()).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        assert_eq!(strip_bom(&bytes), b"date,type,category,amount,description\n");
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        let custom = "date,type,category,amount,description\n2024-01-15,expense,food,1.00,x\n";
        std::fs::write(paths.ledger_file(), custom).unwrap();

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.save(&paths).unwrap();

        initialize_storage(&paths).unwrap();

        assert_eq!(std::fs::read_to_string(paths.ledger_file()).unwrap(), custom);
        assert_eq!(Settings::load_or_create(&paths).unwrap().currency_symbol, "$");
    }
}
