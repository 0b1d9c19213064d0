use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::banking::accounts::Account;
use crate::banking::bank::Bank;
use crate::banking::customer::Customer;
use crate::banking::{AccountKind, BankAccount};
use crate::config::Config;
use crate::report;

const ACCOUNT_FIELDS: RangeInclusive<usize> = 3..=4;
const CUSTOMER_FIELDS: RangeInclusive<usize> = 4..=4;

#[derive(Debug, PartialEq, Error)]
pub enum LoadError {
    #[error("customer {customer_number} on record {record} has no matching account")]
    MissingAccount { customer_number: u32, record: usize },
    #[error("line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}

/// `accNo;accType;bal[;limit]`
#[derive(Debug, Deserialize)]
pub struct AccountRecord {
    pub number: String,
    pub account_type: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub limit: Option<Decimal>,
}

/// `custNo;name;age;city`
#[derive(Debug, Deserialize)]
pub struct CustomerRecord {
    pub number: u32,
    pub name: String,
    pub age: u32,
    pub city: String,
}

impl AccountRecord {
    pub fn into_account(self, kind: AccountKind) -> Account {
        Account::open(kind, self.number, self.account_type, self.balance, self.limit)
    }
}

fn read_records<R: Read, T: DeserializeOwned>(reader: R, fields: RangeInclusive<usize>) -> Result<Vec<T>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let fallback_line = index as u64 + 1;
        let record = result.map_err(|err| LoadError::MalformedRecord {
            line: err.position().map_or(fallback_line, |pos| pos.line()),
            reason: err.to_string(),
        })?;
        let line = record.position().map_or(fallback_line, |pos| pos.line());

        // whitespace-only line
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        if !fields.contains(&record.len()) {
            return Err(LoadError::MalformedRecord {
                line,
                reason: format!(
                    "expected {} to {} fields, found {}",
                    fields.start(),
                    fields.end(),
                    record.len()
                ),
            });
        }

        let parsed = record.deserialize::<T>(None).map_err(|err| LoadError::MalformedRecord {
            line,
            reason: err.to_string(),
        })?;
        records.push(parsed);
    }

    Ok(records)
}

/// Accounts are built in file order; a missing fourth field selects the
/// default limit for `kind`.
pub fn read_accounts<R: Read>(reader: R, kind: AccountKind) -> Result<Vec<Account>, LoadError> {
    let accounts: Vec<Account> = read_records::<R, AccountRecord>(reader, ACCOUNT_FIELDS)?
        .into_iter()
        .map(|record| record.into_account(kind))
        .collect();

    for account in &accounts {
        debug!(
            "loaded account, number={}, kind={:?}, balance={}, limit={}",
            account.number(),
            account.kind(),
            account.balance(),
            account.limit()
        );
    }

    Ok(accounts)
}

pub fn read_customers<R: Read>(reader: R) -> Result<Vec<CustomerRecord>, LoadError> {
    read_records(reader, CUSTOMER_FIELDS)
}

/// Pairs the Nth customer record with the Nth account. Surplus accounts stay
/// unassigned; a surplus customer is an error.
pub fn link_customers(accounts: &[Account], records: Vec<CustomerRecord>) -> Result<Vec<Customer>, LoadError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| -> Result<Customer, LoadError> {
            let account = accounts.get(index).ok_or(LoadError::MissingAccount {
                customer_number: record.number,
                record: index + 1,
            })?;
            debug!("linked customer, number={}, account={}", record.number, account.number());

            Ok(Customer::new(
                record.number,
                record.name,
                record.age,
                record.city,
                account.number().to_string(),
            ))
        })
        .collect()
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("failed to open {}", path.display()))
}

pub fn load_bank(config: &Config) -> Result<Bank> {
    info!("loading bank, dir={}", config.data_dir().display());

    let checking_path = config.checking_path();
    let mut accounts = read_accounts(open(&checking_path)?, AccountKind::Checking)
        .with_context(|| format!("failed to read {}", checking_path.display()))?;

    let savings_path = config.savings_path();
    accounts.extend(
        read_accounts(open(&savings_path)?, AccountKind::Savings)
            .with_context(|| format!("failed to read {}", savings_path.display()))?,
    );

    let customers_path = config.customers_path();
    let records =
        read_customers(open(&customers_path)?).with_context(|| format!("failed to read {}", customers_path.display()))?;
    let customers =
        link_customers(&accounts, records).with_context(|| format!("failed to link {}", customers_path.display()))?;

    info!("loaded bank, accounts={}, customers={}", accounts.len(), customers.len());

    Ok(Bank::new(accounts, customers))
}

pub fn export_receipt(config: &Config, accounts: &[&Account]) -> Result<()> {
    let path = config.receipt_path();
    let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    report::write_receipt(&mut writer, accounts)?;
    writer.flush()?;

    info!("receipt written, path={}", path.display());

    Ok(())
}
