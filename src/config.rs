use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

pub const DEFAULT_DATA_DIR: &str = "data";

pub const CHECKING_FILE: &str = "CAccounts.txt";
pub const SAVINGS_FILE: &str = "SAccounts.txt";
pub const CUSTOMERS_FILE: &str = "Customers.txt";
pub const RECEIPT_FILE: &str = "BankReceipts.txt";

/// Where the input files live and where the receipt is written.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    data_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Config {
        Config {
            data_dir: data_dir.into(),
        }
    }

    /// Accepts the program name followed by an optional data directory.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Config> {
        let args: Vec<String> = args.into_iter().skip(1).collect();

        match args.as_slice() {
            [] => Ok(Config::new(DEFAULT_DATA_DIR)),
            [dir] if !dir.starts_with('-') => Ok(Config::new(dir)),
            _ => bail!("Usage: branchbook [data_dir]"),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn checking_path(&self) -> PathBuf {
        self.data_dir.join(CHECKING_FILE)
    }

    pub fn savings_path(&self) -> PathBuf {
        self.data_dir.join(SAVINGS_FILE)
    }

    pub fn customers_path(&self) -> PathBuf {
        self.data_dir.join(CUSTOMERS_FILE)
    }

    pub fn receipt_path(&self) -> PathBuf {
        self.data_dir.join(RECEIPT_FILE)
    }
}
