//! Transaction types and their fixed category sets
//!
//! Categories are not user-extensible: each [`TransactionType`] owns a fixed,
//! ordered list of allowed [`Category`] values. `Other` is valid for both.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Whether a transaction brings money in or sends it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    /// The literal used in the ledger file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Categories allowed for this type, in display order
    pub fn categories(&self) -> &'static [Category] {
        match self {
            Self::Income => &[
                Category::Salary,
                Category::Bonus,
                Category::Allowance,
                Category::Other,
            ],
            Self::Expense => &[
                Category::Food,
                Category::Transport,
                Category::Culture,
                Category::Shopping,
                Category::Utilities,
                Category::Other,
            ],
        }
    }

    /// Check whether `category` may be used with this type
    pub fn allows(&self, category: Category) -> bool {
        self.categories().contains(&category)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::Validation(format!(
                "Invalid transaction type '{}': expected 'income' or 'expense'",
                other
            ))),
        }
    }
}

/// A ledger category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Salary,
    Bonus,
    Allowance,
    Food,
    Transport,
    Culture,
    Shopping,
    Utilities,
    Other,
}

impl Category {
    pub fn all() -> &'static [Self] {
        &[
            Self::Salary,
            Self::Bonus,
            Self::Allowance,
            Self::Food,
            Self::Transport,
            Self::Culture,
            Self::Shopping,
            Self::Utilities,
            Self::Other,
        ]
    }

    /// The literal used in the ledger file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Bonus => "bonus",
            Self::Allowance => "allowance",
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Culture => "culture",
            Self::Shopping => "shopping",
            Self::Utilities => "utilities",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| LedgerError::Validation(format!("Unknown category '{}'", s.trim())))
    }
}
