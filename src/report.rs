use std::io::Write;

use anyhow::Result;

use crate::banking::accounts::Account;
use crate::banking::bank::Bank;
use crate::banking::{AccountKind, BankAccount};

const SEPARATOR: &str = "---------------------------------------";
const RECEIPT_SEPARATOR: &str = "--------";

pub fn write_customers<W: Write>(out: &mut W, bank: &Bank) -> Result<()> {
    for (position, customer) in bank.customers().iter().enumerate() {
        writeln!(out, "Customer {}", position + 1)?;
        writeln!(out, "Customer number: {}", customer.number())?;
        writeln!(out, "Customer name: {}", customer.name())?;
        writeln!(out, "Customer age: {}", customer.age())?;
        writeln!(out, "Customer city: {}", customer.city())?;
        match bank.customer_account(customer) {
            Some(account) => writeln!(out, "{}", account)?,
            None => writeln!(out, "No account on record for {}", customer.account_number())?,
        }
        writeln!(out, "{}", SEPARATOR)?;
    }

    Ok(())
}

pub fn write_account_details<W: Write>(out: &mut W, bank: &Bank) -> Result<()> {
    for account in bank.accounts() {
        writeln!(out, "The account number for this account is: {}", account.number())?;
        writeln!(out, "This account type is: {}", account.account_type())?;
        writeln!(out, "The current balance of this account is: {}", account.balance())?;
        match account.kind() {
            AccountKind::Checking => writeln!(out, "The minimum deposit amount is: {}", account.limit())?,
            AccountKind::Savings => writeln!(out, "The maximum deposit amount is: {}", account.limit())?,
        }
        writeln!(out, "{}", SEPARATOR)?;
    }

    Ok(())
}

/// One block per account, each closed by a short rule.
pub fn write_receipt<W: Write>(out: &mut W, accounts: &[&Account]) -> Result<()> {
    for (position, account) in accounts.iter().enumerate() {
        if position > 0 {
            writeln!(out)?;
        }
        writeln!(out, "Account Number: {}", account.number())?;
        writeln!(out, "Account Type: {}", account.account_type())?;
        writeln!(out, "Account Balance: ${}", account.balance())?;
        write!(out, "\n{}\n", RECEIPT_SEPARATOR)?;
    }

    Ok(())
}
